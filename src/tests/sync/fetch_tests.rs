use std::time::Duration;

use serde_json::json;

use super::*;
use crate::model::WithdrawnMember;
use crate::sync::testing::{CapturedLogs, Scripted, ScriptedTransport};
use crate::sync::{Items, LoadingGate};

fn controller(transport: &Arc<ScriptedTransport>) -> FetchController<Items<WithdrawnMember>> {
    FetchController::new(transport.clone(), "/admin/", CollectionState::new())
}

fn member_names(c: &FetchController<Items<WithdrawnMember>>) -> Vec<String> {
    c.state()
        .snapshot()
        .get()
        .map(|items| items.iter().map(|m| m.member_nickname.clone()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn success_commits_snapshot_and_readies_gate() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_get("/admin/", Scripted::json(json!([
        {"memberNo": 1, "memberNickname": "A"},
        {"memberNo": 2, "memberNickname": "B"}
    ])));
    let c = controller(&transport);

    let fetched = c.fetch().await.expect("fetch");
    assert_eq!(fetched.len(), 2);
    assert_eq!(c.state().gate(), LoadingGate::Ready);
    assert_eq!(member_names(&c), vec!["A", "B"]);
    assert_eq!(transport.log(), vec!["GET /admin/"]);
}

#[tokio::test]
async fn failures_keep_the_previous_snapshot() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_get("/admin/", Scripted::json(json!([{"memberNo": 1, "memberNickname": "A"}])));
    transport.push_get("/admin/", Scripted::status(500));
    transport.push_get("/admin/", Scripted::network_error());
    transport.push_get("/admin/", Scripted::json(json!({"not": "a list"})));
    let c = controller(&transport);

    c.fetch().await.expect("initial fetch");
    let good = c.state().snapshot();

    assert!(matches!(c.fetch().await, Err(FetchError::Status(500))));
    assert!(matches!(c.fetch().await, Err(FetchError::Transport(_))));
    assert!(matches!(c.fetch().await, Err(FetchError::Decode(_))));

    assert!(c.state().snapshot().same_identity(&good));
    assert_eq!(c.state().gate(), LoadingGate::Ready);
    assert_eq!(c.state().revision(), 1);
}

#[tokio::test]
async fn failed_first_fetch_stays_uninitialized() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_get("/admin/", Scripted::status(404));
    let c = controller(&transport);

    assert!(c.fetch().await.is_err());
    assert!(!c.state().snapshot().is_set());
    assert_eq!(c.state().gate(), LoadingGate::Uninitialized);
}

#[tokio::test]
async fn refetch_replaces_even_identical_contents() {
    let transport = Arc::new(ScriptedTransport::new());
    let body = json!([{"memberNo": 1, "memberNickname": "A"}]);
    transport.push_get("/admin/", Scripted::json(body.clone()));
    transport.push_get("/admin/", Scripted::json(body));
    let c = controller(&transport);

    c.fetch().await.expect("first");
    let first = c.state().snapshot();
    c.fetch().await.expect("second");
    assert!(!c.state().snapshot().same_identity(&first));
}

#[tokio::test]
async fn overlapping_fetches_last_to_finish_wins() {
    let transport = Arc::new(ScriptedTransport::new());
    // First call is slow and finishes after the second.
    transport.push_get(
        "/admin/",
        Scripted::json(json!([{"memberNo": 1, "memberNickname": "slow"}]))
            .delayed(Duration::from_millis(50)),
    );
    transport.push_get("/admin/", Scripted::json(json!([{"memberNo": 2, "memberNickname": "fast"}])));
    let c = controller(&transport);

    let (slow, fast) = tokio::join!(c.fetch(), c.fetch());
    assert!(slow.is_ok() && fast.is_ok());
    assert_eq!(member_names(&c), vec!["slow"]);
    assert_eq!(c.state().revision(), 2);
}

#[tokio::test]
async fn fetch_after_deactivation_does_not_commit() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_get("/admin/", Scripted::json(json!([])));
    let c = controller(&transport);
    c.state().deactivate();

    let fetched = c.fetch().await.expect("fetch still decodes");
    assert!(fetched.is_empty());
    assert!(!c.state().snapshot().is_set());
}

#[tokio::test]
async fn spawned_fetch_lands_in_state() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_get("/admin/", Scripted::json(json!([{"memberNo": 3, "memberNickname": "C"}])));
    let c = controller(&transport);

    c.spawn().await.expect("join");
    assert_eq!(member_names(&c), vec!["C"]);
}

#[tokio::test]
async fn every_failure_kind_is_logged_as_a_warning() {
    let (logs, _guard) = CapturedLogs::install();
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_get("/admin/", Scripted::status(500));
    transport.push_get("/admin/", Scripted::network_error());
    transport.push_get("/admin/", Scripted::json(json!({"not": "a list"})));
    let c = controller(&transport);

    for _ in 0..3 {
        assert!(c.fetch().await.is_err());
    }

    let warnings = logs.warnings();
    assert_eq!(warnings.len(), 3, "{}", logs.text());
    assert!(warnings.iter().all(|l| l.contains("fetch failed; keeping previous snapshot")));
    assert!(warnings[0].contains("unexpected status 500"));
    assert!(warnings[1].contains("connection refused"));
}

#[tokio::test]
async fn successful_fetch_logs_no_warning() {
    let (logs, _guard) = CapturedLogs::install();
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_get("/admin/", Scripted::json(json!([])));
    let c = controller(&transport);

    c.fetch().await.expect("fetch");
    assert!(logs.warnings().is_empty(), "{}", logs.text());
}
