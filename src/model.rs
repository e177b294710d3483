use serde::{Deserialize, Serialize};

use crate::sync::{Presence, Toggle};

/// A member who left the board and can be restored by an admin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawnMember {
    pub member_no: i64,
    pub member_nickname: String,
}

/// A soft-deleted board post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedBoard {
    pub board_no: i64,
    #[serde(default)]
    pub board_code: i64,
    pub board_name: String,
    pub board_title: String,
    pub member_nickname: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadCountRecord {
    pub board_name: String,
    pub board_no: i64,
    pub board_title: String,
    pub read_count: i64,
    pub member_nickname: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCountRecord {
    pub board_name: String,
    pub board_no: i64,
    pub board_title: String,
    pub like_count: i64,
    pub member_nickname: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCountRecord {
    pub board_name: String,
    pub board_no: i64,
    pub board_title: String,
    pub comment_count: i64,
    pub member_nickname: String,
}

// Single-record snapshots always have something to show once loaded.
impl Presence for ReadCountRecord {
    fn is_empty(&self) -> bool {
        false
    }
}

impl Presence for LikeCountRecord {
    fn is_empty(&self) -> bool {
        false
    }
}

impl Presence for CommentCountRecord {
    fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub title: String,
    pub is_done: bool,
}

impl TodoItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_done: false,
        }
    }
}

impl Toggle for TodoItem {
    fn toggled(&self) -> Self {
        Self {
            is_done: !self.is_done,
            ..self.clone()
        }
    }
}

/// Starting contents of the console's to-do list.
pub fn starter_todos() -> Vec<TodoItem> {
    vec![TodoItem::new("123"), TodoItem::new("44444")]
}
