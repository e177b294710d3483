use std::sync::Arc;

use anyhow::Result;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::model::{
    CommentCountRecord, DeletedBoard, LikeCountRecord, ReadCountRecord, WithdrawnMember,
};
use crate::sync::{
    CollectionState, Confirm, FetchController, Items, MutationController, Notify, Transition,
    Transport,
};

use super::HttpTransport;

pub const WITHDRAWN_MEMBERS: &str = "/admin/";
pub const RESTORE_MEMBER: &str = "/admin/restoreMember";
pub const DELETED_BOARDS: &str = "/admin/deletedBoardList";
pub const RESTORE_BOARD: &str = "/admin/restoreBoard";
pub const MAX_READ_COUNT: &str = "/admin/maxReadCount";
pub const MAX_LIKE_COUNT: &str = "/admin/maxLikeCount";
pub const MAX_COMMENT_COUNT: &str = "/admin/maxCommentCount";

/// Builds controllers for the admin endpoints. Each call to a collection method
/// creates fresh, `Unset` state for a newly activated component.
#[derive(Clone)]
pub struct AdminClient {
    transport: Arc<dyn Transport>,
}

impl AdminClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport)))
    }

    fn collection<V>(&self, endpoint: &str) -> FetchController<V>
    where
        V: DeserializeOwned + Send + Sync + 'static,
    {
        FetchController::new(
            Arc::clone(&self.transport),
            endpoint,
            CollectionState::new(),
        )
    }

    pub fn withdrawn_members(&self) -> FetchController<Items<WithdrawnMember>> {
        self.collection(WITHDRAWN_MEMBERS)
    }

    pub fn deleted_boards(&self) -> FetchController<Items<DeletedBoard>> {
        self.collection(DELETED_BOARDS)
    }

    pub fn max_read_count(&self) -> FetchController<ReadCountRecord> {
        self.collection(MAX_READ_COUNT)
    }

    pub fn max_like_count(&self) -> FetchController<LikeCountRecord> {
        self.collection(MAX_LIKE_COUNT)
    }

    pub fn max_comment_count(&self) -> FetchController<CommentCountRecord> {
        self.collection(MAX_COMMENT_COUNT)
    }
}

/// Attaches mutation capabilities to a collection's fetch controller.
pub fn mutations<V>(
    fetch: &FetchController<V>,
    confirm: Arc<dyn Confirm>,
    notify: Arc<dyn Notify>,
) -> MutationController<V>
where
    V: DeserializeOwned + Send + Sync + 'static,
{
    MutationController::new(fetch.clone(), confirm, notify)
}

#[derive(Clone, Debug)]
pub struct RestoreMember {
    pub member_no: i64,
    pub member_nickname: String,
}

impl From<&WithdrawnMember> for RestoreMember {
    fn from(m: &WithdrawnMember) -> Self {
        Self {
            member_no: m.member_no,
            member_nickname: m.member_nickname.clone(),
        }
    }
}

impl Transition for RestoreMember {
    fn describe(&self) -> String {
        format!(
            "Restore withdrawn member {} (#{})?",
            self.member_nickname, self.member_no
        )
    }

    fn path(&self) -> &str {
        RESTORE_MEMBER
    }

    fn body(&self) -> serde_json::Value {
        serde_json::json!({ "memberNo": self.member_no })
    }

    fn acknowledgement(&self) -> String {
        format!("restored member {}", self.member_nickname)
    }
}

#[derive(Clone, Debug)]
pub struct RestoreBoard {
    pub board_no: i64,
    pub board_title: String,
}

impl From<&DeletedBoard> for RestoreBoard {
    fn from(b: &DeletedBoard) -> Self {
        Self {
            board_no: b.board_no,
            board_title: b.board_title.clone(),
        }
    }
}

impl Transition for RestoreBoard {
    fn describe(&self) -> String {
        format!("Restore deleted board No.{} \"{}\"?", self.board_no, self.board_title)
    }

    fn path(&self) -> &str {
        RESTORE_BOARD
    }

    fn body(&self) -> serde_json::Value {
        serde_json::json!({ "boardNo": self.board_no })
    }

    fn acknowledgement(&self) -> String {
        format!("restored board No.{}", self.board_no)
    }
}

#[cfg(test)]
#[path = "../tests/remote/admin_tests.rs"]
mod tests;
