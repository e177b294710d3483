use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[test]
fn commit_replaces_snapshot_and_readies_gate() {
    let state: CollectionState<Vec<u32>> = CollectionState::new();
    assert_eq!(state.gate(), LoadingGate::Uninitialized);
    assert_eq!(state.revision(), 0);

    assert!(state.commit(Arc::new(vec![1])));
    assert_eq!(state.gate(), LoadingGate::Ready);
    assert_eq!(state.snapshot().get().map(|v| v.len()), Some(1));
    assert_eq!(state.revision(), 1);
}

#[test]
fn every_commit_yields_a_new_identity() {
    let state: CollectionState<Vec<u32>> = CollectionState::new();
    state.commit(Arc::new(vec![7]));
    let before = state.snapshot();
    state.commit(Arc::new(vec![7]));
    let after = state.snapshot();
    assert!(!before.same_identity(&after));
}

#[test]
fn with_initial_starts_ready() {
    let state = CollectionState::with_initial(vec![1u32, 2]);
    assert!(state.gate().is_ready());
    assert!(state.snapshot().is_set());
}

#[test]
fn update_is_a_no_op_while_unset() {
    let state: CollectionState<Vec<u32>> = CollectionState::new();
    assert!(!state.update(|v| Arc::new(v.as_ref().clone())));
    assert!(!state.snapshot().is_set());
    assert_eq!(state.revision(), 0);
}

#[test]
fn deactivated_state_ignores_commits() {
    let state: CollectionState<Vec<u32>> = CollectionState::new();
    state.deactivate();
    assert!(!state.is_active());
    assert!(!state.commit(Arc::new(vec![1])));
    assert!(!state.snapshot().is_set());
    assert_eq!(state.gate(), LoadingGate::Uninitialized);
}

#[test]
fn continuation_runs_after_each_commit() {
    let state: CollectionState<Vec<u32>> = CollectionState::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    state.on_change(move |snapshot, gate| {
        assert!(snapshot.is_set());
        assert!(gate.is_ready());
        seen.fetch_add(1, Ordering::SeqCst);
    });

    state.commit(Arc::new(vec![1]));
    state.commit(Arc::new(vec![]));
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    state.deactivate();
    state.commit(Arc::new(vec![2]));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn continuation_may_read_the_state() {
    let state: CollectionState<Vec<u32>> = CollectionState::new();
    let reader = state.clone();
    let revisions = Arc::new(AtomicUsize::new(0));
    let out = Arc::clone(&revisions);
    state.on_change(move |_, _| {
        out.store(reader.revision() as usize, Ordering::SeqCst);
    });
    state.commit(Arc::new(vec![1]));
    assert_eq!(revisions.load(Ordering::SeqCst), 1);
}

#[test]
fn overlapping_commits_each_signal_and_reads_see_the_latest() {
    let state: CollectionState<Vec<u32>> = CollectionState::new();
    let reader = state.clone();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    state.on_change(move |_, _| {
        assert!(reader.snapshot().is_set());
        seen.fetch_add(1, Ordering::SeqCst);
    });

    let handles = (0..8u32)
        .map(|i| {
            let state = state.clone();
            std::thread::spawn(move || {
                state.commit(Arc::new(vec![i]));
            })
        })
        .collect::<Vec<_>>();
    for h in handles {
        h.join().expect("commit thread");
    }

    assert_eq!(calls.load(Ordering::SeqCst), 8);
    assert_eq!(state.revision(), 8);
    assert_eq!(state.snapshot().get().map(|v| v.len()), Some(1));
}
