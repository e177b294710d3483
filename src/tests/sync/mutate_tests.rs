use serde_json::json;

use super::*;
use crate::model::WithdrawnMember;
use crate::remote::RestoreMember;
use crate::sync::testing::{
    CapturedLogs, RecordingConfirm, RecordingNotify, Scripted, ScriptedTransport,
};
use crate::sync::{CollectionState, Items, LoadingGate};

struct Fixture {
    transport: Arc<ScriptedTransport>,
    confirm: Arc<RecordingConfirm>,
    notify: Arc<RecordingNotify>,
    controller: MutationController<Items<WithdrawnMember>>,
}

fn fixture(answer: bool) -> Fixture {
    let transport = Arc::new(ScriptedTransport::new());
    let confirm = Arc::new(RecordingConfirm::answering(answer));
    let notify = Arc::new(RecordingNotify::default());
    let fetch = FetchController::new(transport.clone(), "/admin/", CollectionState::new());
    let controller = MutationController::new(fetch, confirm.clone(), notify.clone());
    Fixture {
        transport,
        confirm,
        notify,
        controller,
    }
}

fn member(no: i64, nick: &str) -> WithdrawnMember {
    WithdrawnMember {
        member_no: no,
        member_nickname: nick.to_string(),
    }
}

#[tokio::test]
async fn declined_confirmation_has_no_side_effects() {
    let f = fixture(false);
    f.transport
        .push_get("/admin/", Scripted::json(json!([{"memberNo": 1, "memberNickname": "A"}])));
    f.controller.fetch_controller().fetch().await.expect("load");
    let before = f.controller.fetch_controller().state().snapshot();

    let outcome = f
        .controller
        .mutate(&RestoreMember::from(&member(1, "A")))
        .await
        .expect("declined is not an error");

    assert_eq!(outcome, MutationOutcome::Declined);
    assert_eq!(f.confirm.prompts(), vec!["Restore withdrawn member A (#1)?"]);
    assert!(f.notify.messages().is_empty());
    assert_eq!(f.transport.log(), vec!["GET /admin/"]);
    assert!(f.controller.fetch_controller().state().snapshot().same_identity(&before));
}

#[tokio::test]
async fn successful_write_notifies_then_resyncs() {
    let f = fixture(true);
    f.transport
        .push_get("/admin/", Scripted::json(json!([{"memberNo": 1, "memberNickname": "A"}])));
    f.transport.push_put("/admin/restoreMember", Scripted::status(200));
    f.transport.push_get("/admin/", Scripted::json(json!([])));

    let state = f.controller.fetch_controller().state().clone();
    f.controller.fetch_controller().fetch().await.expect("load");
    assert_eq!(state.gate(), LoadingGate::Ready);

    let outcome = f
        .controller
        .mutate(&RestoreMember::from(&member(1, "A")))
        .await
        .expect("mutate");

    assert_eq!(outcome, MutationOutcome::Applied { resynced: true });
    assert_eq!(f.notify.messages(), vec!["restored member A"]);
    assert_eq!(
        f.transport.log(),
        vec![
            "GET /admin/".to_string(),
            format!("PUT /admin/restoreMember {}", json!({"memberNo": 1})),
            "GET /admin/".to_string(),
        ]
    );
    assert_eq!(state.snapshot().get().map(|v| v.len()), Some(0));
    assert_eq!(state.gate(), LoadingGate::Ready);
}

#[tokio::test]
async fn post_state_is_whatever_the_resync_returns() {
    // The server still lists the member after the write; the client does not patch it
    // away on its own.
    let f = fixture(true);
    f.transport
        .push_get("/admin/", Scripted::json(json!([{"memberNo": 1, "memberNickname": "A"}])));
    f.transport.push_put("/admin/restoreMember", Scripted::status(200));
    f.transport.push_get("/admin/", Scripted::json(json!([
        {"memberNo": 1, "memberNickname": "A"},
        {"memberNo": 9, "memberNickname": "Z"}
    ])));

    let fetch = f.controller.fetch_controller().clone();
    fetch.fetch().await.expect("load");
    let pre = fetch.state().snapshot();
    let pre_items = pre.get().cloned().expect("set");

    f.controller
        .mutate(&RestoreMember::from(&member(1, "A")))
        .await
        .expect("mutate");

    assert_eq!(pre_items.len(), 1, "pre-write snapshot is untouched");
    let post = fetch.state().snapshot();
    assert!(!post.same_identity(&pre));
    let nos: Vec<i64> = post
        .get()
        .map(|v| v.iter().map(|m| m.member_no).collect())
        .unwrap_or_default();
    assert_eq!(nos, vec![1, 9]);
}

#[tokio::test]
async fn failed_write_is_silent_and_keeps_snapshot() {
    let f = fixture(true);
    f.transport
        .push_get("/admin/", Scripted::json(json!([{"memberNo": 1, "memberNickname": "A"}])));
    f.transport.push_put("/admin/restoreMember", Scripted::status(500));
    f.controller.fetch_controller().fetch().await.expect("load");
    let before = f.controller.fetch_controller().state().snapshot();

    let err = f
        .controller
        .mutate(&RestoreMember::from(&member(1, "A")))
        .await
        .expect_err("write fails");

    assert!(matches!(err, MutationError::Status(500)));
    assert!(f.notify.messages().is_empty());
    assert_eq!(f.transport.log().len(), 2, "no resync after a failed write");
    assert!(f.controller.fetch_controller().state().snapshot().same_identity(&before));
}

#[tokio::test]
async fn transport_failure_on_write_maps_to_transport_error() {
    let f = fixture(true);
    f.transport.push_put("/admin/restoreMember", Scripted::network_error());

    let err = f
        .controller
        .mutate(&RestoreMember::from(&member(4, "D")))
        .await
        .expect_err("write fails");
    assert!(matches!(err, MutationError::Transport(_)));
    assert!(!f.controller.fetch_controller().state().snapshot().is_set());
}

#[tokio::test]
async fn failed_resync_still_reports_applied() {
    let f = fixture(true);
    f.transport
        .push_get("/admin/", Scripted::json(json!([{"memberNo": 1, "memberNickname": "A"}])));
    f.transport.push_put("/admin/restoreMember", Scripted::status(200));
    f.transport.push_get("/admin/", Scripted::status(503));
    f.controller.fetch_controller().fetch().await.expect("load");
    let before = f.controller.fetch_controller().state().snapshot();

    let outcome = f
        .controller
        .mutate(&RestoreMember::from(&member(1, "A")))
        .await
        .expect("mutate");

    assert_eq!(outcome, MutationOutcome::Applied { resynced: false });
    assert_eq!(f.notify.messages().len(), 1);
    assert!(f.controller.fetch_controller().state().snapshot().same_identity(&before));
}

#[tokio::test]
async fn declined_confirmation_is_logged_below_warn() {
    let (logs, _guard) = CapturedLogs::install();
    let f = fixture(false);

    let outcome = f
        .controller
        .mutate(&RestoreMember::from(&member(1, "A")))
        .await
        .expect("declined is not an error");

    assert_eq!(outcome, MutationOutcome::Declined);
    assert!(logs.warnings().is_empty(), "{}", logs.text());
    assert!(logs.text().contains("mutation declined"));
}

#[tokio::test]
async fn failed_write_is_logged_as_a_warning() {
    let (logs, _guard) = CapturedLogs::install();
    let f = fixture(true);
    f.transport.push_put("/admin/restoreMember", Scripted::status(500));

    f.controller
        .mutate(&RestoreMember::from(&member(1, "A")))
        .await
        .expect_err("write fails");

    let warnings = logs.warnings();
    assert_eq!(warnings.len(), 1, "{}", logs.text());
    assert!(warnings[0].contains("mutation failed"));
    assert!(warnings[0].contains("/admin/restoreMember"));
}
