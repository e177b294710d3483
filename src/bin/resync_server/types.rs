use super::*;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MemberRow {
    pub(super) member_no: i64,
    pub(super) member_nickname: String,
    #[serde(default)]
    pub(super) withdrawn: bool,
}

impl MemberRow {
    pub(super) fn to_withdrawn(&self) -> WithdrawnMember {
        WithdrawnMember {
            member_no: self.member_no,
            member_nickname: self.member_nickname.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BoardRow {
    pub(super) board_no: i64,
    #[serde(default)]
    pub(super) board_code: i64,
    pub(super) board_name: String,
    pub(super) board_title: String,
    pub(super) member_nickname: String,
    #[serde(default)]
    pub(super) read_count: i64,
    #[serde(default)]
    pub(super) like_count: i64,
    #[serde(default)]
    pub(super) comment_count: i64,
    #[serde(default)]
    pub(super) deleted: bool,
}

impl BoardRow {
    pub(super) fn to_deleted(&self) -> DeletedBoard {
        DeletedBoard {
            board_no: self.board_no,
            board_code: self.board_code,
            board_name: self.board_name.clone(),
            board_title: self.board_title.clone(),
            member_nickname: self.member_nickname.clone(),
        }
    }

    pub(super) fn to_read_record(&self) -> ReadCountRecord {
        ReadCountRecord {
            board_name: self.board_name.clone(),
            board_no: self.board_no,
            board_title: self.board_title.clone(),
            read_count: self.read_count,
            member_nickname: self.member_nickname.clone(),
        }
    }

    pub(super) fn to_like_record(&self) -> LikeCountRecord {
        LikeCountRecord {
            board_name: self.board_name.clone(),
            board_no: self.board_no,
            board_title: self.board_title.clone(),
            like_count: self.like_count,
            member_nickname: self.member_nickname.clone(),
        }
    }

    pub(super) fn to_comment_record(&self) -> CommentCountRecord {
        CommentCountRecord {
            board_name: self.board_name.clone(),
            board_no: self.board_no,
            board_title: self.board_title.clone(),
            comment_count: self.comment_count,
            member_nickname: self.member_nickname.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(super) struct Seed {
    #[serde(default)]
    pub(super) members: Vec<MemberRow>,
    #[serde(default)]
    pub(super) boards: Vec<BoardRow>,
}

pub(super) struct AppState {
    pub(super) token: Option<String>,
    pub(super) data: RwLock<Seed>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RestoreMemberRequest {
    pub(super) member_no: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RestoreBoardRequest {
    pub(super) board_no: i64,
}
