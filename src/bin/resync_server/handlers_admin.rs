use std::cmp::Ordering;

use super::*;

pub(super) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"ok": true}))
}

pub(super) async fn require_token(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.token.as_deref() else {
        return next.run(req).await;
    };
    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    if presented != Some(expected) {
        return unauthorized();
    }
    next.run(req).await
}

pub(super) async fn list_withdrawn_members(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<WithdrawnMember>> {
    let data = state.data.read().await;
    Json(
        data.members
            .iter()
            .filter(|m| m.withdrawn)
            .map(MemberRow::to_withdrawn)
            .collect(),
    )
}

pub(super) async fn restore_member(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RestoreMemberRequest>,
) -> Result<Json<serde_json::Value>, Response> {
    let mut data = state.data.write().await;
    let member = data
        .members
        .iter_mut()
        .find(|m| m.member_no == payload.member_no && m.withdrawn)
        .ok_or_else(not_found)?;
    member.withdrawn = false;
    tracing::info!(member_no = payload.member_no, "member restored");
    Ok(Json(serde_json::json!({"ok": true})))
}

pub(super) async fn list_deleted_boards(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<DeletedBoard>> {
    let data = state.data.read().await;
    Json(
        data.boards
            .iter()
            .filter(|b| b.deleted)
            .map(BoardRow::to_deleted)
            .collect(),
    )
}

pub(super) async fn restore_board(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RestoreBoardRequest>,
) -> Result<Json<serde_json::Value>, Response> {
    let mut data = state.data.write().await;
    let board = data
        .boards
        .iter_mut()
        .find(|b| b.board_no == payload.board_no && b.deleted)
        .ok_or_else(not_found)?;
    board.deleted = false;
    tracing::info!(board_no = payload.board_no, "board restored");
    Ok(Json(serde_json::json!({"ok": true})))
}

/// Live board with the highest `key`; ties go to the lowest board number.
fn top_board(boards: &[BoardRow], key: impl Fn(&BoardRow) -> i64) -> Option<&BoardRow> {
    boards.iter().filter(|b| !b.deleted).max_by(|a, b| {
        match key(a).cmp(&key(b)) {
            Ordering::Equal => b.board_no.cmp(&a.board_no),
            other => other,
        }
    })
}

pub(super) async fn max_read_count(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReadCountRecord>, Response> {
    let data = state.data.read().await;
    let top = top_board(&data.boards, |b| b.read_count).ok_or_else(not_found)?;
    Ok(Json(top.to_read_record()))
}

pub(super) async fn max_like_count(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LikeCountRecord>, Response> {
    let data = state.data.read().await;
    let top = top_board(&data.boards, |b| b.like_count).ok_or_else(not_found)?;
    Ok(Json(top.to_like_record()))
}

pub(super) async fn max_comment_count(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CommentCountRecord>, Response> {
    let data = state.data.read().await;
    let top = top_board(&data.boards, |b| b.comment_count).ok_or_else(not_found)?;
    Ok(Json(top.to_comment_record()))
}

#[cfg(test)]
#[path = "../../tests/bin/resync_server/handlers_admin_tests.rs"]
mod tests;
