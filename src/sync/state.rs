use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{LoadingGate, Snapshot};

type Continuation<V> = Arc<dyn Fn(&Snapshot<V>, LoadingGate) + Send + Sync>;

struct Cell<V> {
    snapshot: Snapshot<V>,
    gate: LoadingGate,
    active: bool,
    revision: u64,
}

struct Shared<V> {
    cell: Mutex<Cell<V>>,
    on_change: Mutex<Option<Continuation<V>>>,
}

/// Snapshot and loading gate owned by one component.
///
/// Cloning shares the same state. Every replacement goes through `commit`/`update`,
/// which hold the lock for the swap so a reader never sees a half-replaced snapshot.
pub struct CollectionState<V> {
    shared: Arc<Shared<V>>,
}

impl<V> Clone for CollectionState<V> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<V> Default for CollectionState<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CollectionState<V> {
    pub fn new() -> Self {
        Self::from_cell(Cell {
            snapshot: Snapshot::Unset,
            gate: LoadingGate::Uninitialized,
            active: true,
            revision: 0,
        })
    }

    /// State for a collection that exists before any fetch (the local list case).
    pub fn with_initial(value: V) -> Self {
        let snapshot = Snapshot::set(value);
        let mut gate = LoadingGate::Uninitialized;
        gate.observe(&snapshot);
        Self::from_cell(Cell {
            snapshot,
            gate,
            active: true,
            revision: 0,
        })
    }

    fn from_cell(cell: Cell<V>) -> Self {
        Self {
            shared: Arc::new(Shared {
                cell: Mutex::new(cell),
                on_change: Mutex::new(None),
            }),
        }
    }

    fn cell(&self) -> MutexGuard<'_, Cell<V>> {
        self.shared
            .cell
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Snapshot<V> {
        self.cell().snapshot.clone()
    }

    pub fn gate(&self) -> LoadingGate {
        self.cell().gate
    }

    /// Number of commits applied so far.
    pub fn revision(&self) -> u64 {
        self.cell().revision
    }

    pub fn is_active(&self) -> bool {
        self.cell().active
    }

    /// Marks the owning component as gone; later commits are dropped.
    pub fn deactivate(&self) {
        self.cell().active = false;
    }

    /// Registers the continuation run after each successful commit, replacing any
    /// previous one.
    ///
    /// It runs after the lock is released, on the committing thread. Two overlapping
    /// commits may therefore invoke it out of order, and the snapshot it receives can
    /// already be superseded; treat the call as a "changed" signal and read
    /// `snapshot()` for the current value. Reading back from inside it does not
    /// deadlock.
    pub fn on_change(&self, f: impl Fn(&Snapshot<V>, LoadingGate) + Send + Sync + 'static) {
        *self
            .shared
            .on_change
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(f));
    }

    /// Installs `value` as the new snapshot. Returns false when the component has been
    /// deactivated.
    pub fn commit(&self, value: Arc<V>) -> bool {
        self.apply(|_| Some(value))
    }

    /// Replaces a `Set` snapshot with `f(current)` under the lock. No-op while `Unset`.
    pub fn update(&self, f: impl FnOnce(&Arc<V>) -> Arc<V>) -> bool {
        self.apply(|current| current.get().map(f))
    }

    fn apply(&self, f: impl FnOnce(&Snapshot<V>) -> Option<Arc<V>>) -> bool {
        let (snapshot, gate) = {
            let mut cell = self.cell();
            if !cell.active {
                return false;
            }
            let Some(next) = f(&cell.snapshot) else {
                return false;
            };
            cell.snapshot = Snapshot::Set(next);
            let snapshot = cell.snapshot.clone();
            cell.gate.observe(&snapshot);
            cell.revision += 1;
            (snapshot, cell.gate)
        };

        let continuation = self
            .shared
            .on_change
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(f) = continuation {
            f(&snapshot, gate);
        }
        true
    }
}

#[cfg(test)]
#[path = "../tests/sync/state_tests.rs"]
mod tests;
