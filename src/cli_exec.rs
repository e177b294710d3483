use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use resync::config::ClientConfig;
use resync::remote::{self, AdminClient, RestoreBoard, RestoreMember};
use resync::sync::{Confirm, FetchController, MutationOutcome, Notify};

use crate::Commands;

/// Asks on the terminal; `--yes` answers for the user.
struct StdinConfirm {
    assume_yes: bool,
}

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", prompt);
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}

struct StdoutNotify;

impl Notify for StdoutNotify {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

pub(super) async fn handle_command(config: &ClientConfig, command: Commands) -> Result<()> {
    let admin = AdminClient::connect(config)?;

    match command {
        Commands::Members { json } => {
            let members = admin
                .withdrawn_members()
                .fetch()
                .await
                .context("list withdrawn members")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&*members).context("serialize members json")?
                );
            } else if members.is_empty() {
                println!("No withdrawn members");
            } else {
                for m in members.iter() {
                    println!("{}\t{}", m.member_no, m.member_nickname);
                }
            }
        }

        Commands::Restore { member_no, yes } => {
            let fetch = admin.withdrawn_members();
            let members = fetch.fetch().await.context("list withdrawn members")?;
            let member = members
                .iter()
                .find(|m| m.member_no == member_no)
                .with_context(|| format!("member {} is not withdrawn", member_no))?;
            let transition = RestoreMember::from(&**member);
            let outcome = remote::mutations(&fetch, confirm(yes), Arc::new(StdoutNotify))
                .mutate(&transition)
                .await
                .with_context(|| format!("restore member {}", member_no))?;
            report_outcome(outcome, &fetch);
        }

        Commands::Boards { json } => {
            let boards = admin
                .deleted_boards()
                .fetch()
                .await
                .context("list deleted boards")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&*boards).context("serialize boards json")?
                );
            } else if boards.is_empty() {
                println!("No deleted boards");
            } else {
                for b in boards.iter() {
                    println!(
                        "{}\t{}\t{}\t{}",
                        b.board_no, b.board_name, b.board_title, b.member_nickname
                    );
                }
            }
        }

        Commands::RestoreBoard { board_no, yes } => {
            let fetch = admin.deleted_boards();
            let boards = fetch.fetch().await.context("list deleted boards")?;
            let board = boards
                .iter()
                .find(|b| b.board_no == board_no)
                .with_context(|| format!("board {} is not deleted", board_no))?;
            let transition = RestoreBoard::from(&**board);
            let outcome = remote::mutations(&fetch, confirm(yes), Arc::new(StdoutNotify))
                .mutate(&transition)
                .await
                .with_context(|| format!("restore board {}", board_no))?;
            report_outcome(outcome, &fetch);
        }

        Commands::Stats { json } => {
            let (read, like, comment) = (
                admin.max_read_count(),
                admin.max_like_count(),
                admin.max_comment_count(),
            );
            let (read, like, comment) = tokio::join!(read.fetch(), like.fetch(), comment.fetch());
            let read = read.context("fetch most read board")?;
            let like = like.context("fetch most liked board")?;
            let comment = comment.context("fetch most commented board")?;
            if json {
                let out = serde_json::json!({
                    "maxReadCount": &*read,
                    "maxLikeCount": &*like,
                    "maxCommentCount": &*comment,
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&out).context("serialize stats json")?
                );
            } else {
                println!(
                    "most read:      No.{} {} ({} reads, by {})",
                    read.board_no, read.board_title, read.read_count, read.member_nickname
                );
                println!(
                    "most liked:     No.{} {} ({} likes, by {})",
                    like.board_no, like.board_title, like.like_count, like.member_nickname
                );
                println!(
                    "most commented: No.{} {} ({} comments, by {})",
                    comment.board_no,
                    comment.board_title,
                    comment.comment_count,
                    comment.member_nickname
                );
            }
        }
    }

    Ok(())
}

fn confirm(assume_yes: bool) -> Arc<dyn Confirm> {
    Arc::new(StdinConfirm { assume_yes })
}

fn report_outcome<V>(outcome: MutationOutcome, fetch: &FetchController<V>)
where
    V: DeserializeOwned + Send + Sync + 'static,
{
    match outcome {
        MutationOutcome::Declined => println!("Cancelled"),
        MutationOutcome::Applied { resynced: true } => {
            tracing::debug!(revision = fetch.state().revision(), "resynced after restore");
        }
        MutationOutcome::Applied { resynced: false } => {
            eprintln!("warning: restore applied but refreshing {} failed", fetch.endpoint());
        }
    }
}
