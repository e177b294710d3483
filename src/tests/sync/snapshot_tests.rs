use super::*;

#[test]
fn unset_is_default_and_not_set() {
    let s: Snapshot<Vec<u32>> = Snapshot::default();
    assert!(!s.is_set());
    assert!(s.get().is_none());
}

#[test]
fn clones_share_identity() {
    let s = Snapshot::set(vec![1, 2, 3]);
    let c = s.clone();
    assert!(s.same_identity(&c));
}

#[test]
fn equal_contents_are_not_the_same_snapshot() {
    let a = Snapshot::set(vec![1, 2, 3]);
    let b = Snapshot::set(vec![1, 2, 3]);
    assert_eq!(a.get().map(|v| v.as_slice()), b.get().map(|v| v.as_slice()));
    assert!(!a.same_identity(&b));
    assert!(!a.same_identity(&Snapshot::Unset));
}
