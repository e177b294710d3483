use super::*;
use crate::model::ReadCountRecord;

#[test]
fn uninitialized_gate_selects_loading() {
    let s: Snapshot<Vec<u8>> = Snapshot::Unset;
    assert!(select(&s, LoadingGate::Uninitialized).is_loading());

    // A set snapshot the gate has not seen yet still renders the placeholder.
    let s = Snapshot::set(vec![1u8]);
    assert!(select(&s, LoadingGate::Uninitialized).is_loading());
}

#[test]
fn ready_and_empty_is_not_loading() {
    let s: Snapshot<Vec<u8>> = Snapshot::set(Vec::new());
    assert!(matches!(select(&s, LoadingGate::Ready), Selection::Empty));
}

#[test]
fn ready_with_items_selects_content() {
    let s = Snapshot::set(vec![1u8, 2]);
    match select(&s, LoadingGate::Ready) {
        Selection::Content(v) => assert_eq!(v, &vec![1u8, 2]),
        other => panic!("unexpected selection {:?}", other),
    }
}

#[test]
fn single_record_is_never_empty() {
    let s = Snapshot::set(ReadCountRecord {
        board_name: "free".to_string(),
        board_no: 3,
        board_title: "hello".to_string(),
        read_count: 42,
        member_nickname: "A".to_string(),
    });
    match select(&s, LoadingGate::Ready) {
        Selection::Content(r) => assert_eq!(r.read_count, 42),
        other => panic!("unexpected selection {:?}", other),
    }
}
