use std::sync::Arc;

/// Ordered list collection. Elements are shared between successive snapshots so an
/// edit only allocates the elements it touches.
pub type Items<T> = Vec<Arc<T>>;

/// The collection as currently known.
///
/// Change detection is by identity: two `Set` snapshots are "the same" only when they
/// point at the same allocation, never by comparing contents.
#[derive(Debug)]
pub enum Snapshot<V> {
    Unset,
    Set(Arc<V>),
}

impl<V> Snapshot<V> {
    pub fn set(value: V) -> Self {
        Snapshot::Set(Arc::new(value))
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Snapshot::Set(_))
    }

    pub fn get(&self) -> Option<&Arc<V>> {
        match self {
            Snapshot::Unset => None,
            Snapshot::Set(v) => Some(v),
        }
    }

    pub fn same_identity(&self, other: &Snapshot<V>) -> bool {
        match (self, other) {
            (Snapshot::Unset, Snapshot::Unset) => true,
            (Snapshot::Set(a), Snapshot::Set(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<V> Clone for Snapshot<V> {
    fn clone(&self) -> Self {
        match self {
            Snapshot::Unset => Snapshot::Unset,
            Snapshot::Set(v) => Snapshot::Set(Arc::clone(v)),
        }
    }
}

impl<V> Default for Snapshot<V> {
    fn default() -> Self {
        Snapshot::Unset
    }
}

#[cfg(test)]
#[path = "../tests/sync/snapshot_tests.rs"]
mod tests;
