use super::*;

fn member(no: i64, nick: &str, withdrawn: bool) -> MemberRow {
    MemberRow {
        member_no: no,
        member_nickname: nick.to_string(),
        withdrawn,
    }
}

fn board(no: i64, name: &str, title: &str, by: &str, counts: (i64, i64, i64)) -> BoardRow {
    BoardRow {
        board_no: no,
        board_code: 1,
        board_name: name.to_string(),
        board_title: title.to_string(),
        member_nickname: by.to_string(),
        read_count: counts.0,
        like_count: counts.1,
        comment_count: counts.2,
        deleted: false,
    }
}

/// Data served when no `--seed` file is given.
pub(super) fn default_seed() -> Seed {
    let mut deleted = board(4, "free", "old draft", "carol", (3, 0, 0));
    deleted.deleted = true;
    Seed {
        members: vec![
            member(1, "admin", false),
            member(2, "alice", true),
            member(3, "bob", true),
            member(4, "carol", false),
        ],
        boards: vec![
            board(1, "notice", "welcome", "admin", (120, 4, 2)),
            board(2, "free", "hello world", "carol", (45, 11, 7)),
            board(3, "qna", "how do I restore?", "carol", (60, 2, 15)),
            deleted,
        ],
    }
}

pub(super) fn load_seed(path: Option<&Path>) -> Result<Seed> {
    let Some(path) = path else {
        return Ok(default_seed());
    };
    let bytes = std::fs::read(path).with_context(|| format!("read seed {}", path.display()))?;
    let seed: Seed = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse seed {}", path.display()))?;
    Ok(seed)
}
