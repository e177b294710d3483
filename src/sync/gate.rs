use super::Snapshot;

/// Which view a collection renders: the loading placeholder or its content.
///
/// The gate flips to `Ready` the first time it sees a `Set` snapshot and never goes
/// back. A resync in flight keeps the content view mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingGate {
    #[default]
    Uninitialized,
    Ready,
}

impl LoadingGate {
    /// Returns true only on the `Uninitialized -> Ready` transition.
    pub fn observe<V>(&mut self, snapshot: &Snapshot<V>) -> bool {
        if *self == LoadingGate::Uninitialized && snapshot.is_set() {
            *self = LoadingGate::Ready;
            return true;
        }
        false
    }

    pub fn is_ready(self) -> bool {
        self == LoadingGate::Ready
    }
}

#[cfg(test)]
#[path = "../tests/sync/gate_tests.rs"]
mod tests;
