use super::*;

pub(super) fn build_router(state: Arc<AppState>) -> Router {
    let admin = Router::new()
        .route("/admin/", get(list_withdrawn_members))
        .route("/admin/restoreMember", put(restore_member))
        .route("/admin/deletedBoardList", get(list_deleted_boards))
        .route("/admin/restoreBoard", put(restore_board))
        .route("/admin/maxReadCount", get(max_read_count))
        .route("/admin/maxLikeCount", get(max_like_count))
        .route("/admin/maxCommentCount", get(max_comment_count))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        .route("/healthz", get(healthz))
        .merge(admin)
        .with_state(state)
}
