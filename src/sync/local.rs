use std::sync::Arc;

use super::{CollectionState, Items};

/// Items carrying a boolean flag that `toggle` inverts.
pub trait Toggle {
    /// Shallow copy with the flag inverted.
    fn toggled(&self) -> Self;
}

// Every edit returns a new top-level sequence, even when nothing changed, because
// observers compare snapshots by identity. Untouched elements are shared.

pub fn append<T>(seq: &[Arc<T>], item: T) -> Arc<Items<T>> {
    let mut next = Vec::with_capacity(seq.len() + 1);
    next.extend(seq.iter().cloned());
    next.push(Arc::new(item));
    Arc::new(next)
}

/// An out-of-range index leaves every element in place.
pub fn toggle<T: Toggle>(seq: &[Arc<T>], index: usize) -> Arc<Items<T>> {
    let next = seq
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == index {
                Arc::new(item.toggled())
            } else {
                Arc::clone(item)
            }
        })
        .collect();
    Arc::new(next)
}

/// Drops the element at `index`; everything after it shifts down by one.
pub fn remove<T>(seq: &[Arc<T>], index: usize) -> Arc<Items<T>> {
    let next = seq
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| Arc::clone(item))
        .collect();
    Arc::new(next)
}

/// A list with no remote backing. Edits replace the snapshot directly.
///
/// Items are addressed by position, so callers must take indices from the snapshot
/// they are rendering, not from an earlier one.
pub struct LocalList<T> {
    state: CollectionState<Items<T>>,
}

impl<T> Clone for LocalList<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T> LocalList<T> {
    pub fn new(initial: impl IntoIterator<Item = T>) -> Self {
        let items = initial.into_iter().map(Arc::new).collect::<Items<T>>();
        Self {
            state: CollectionState::with_initial(items),
        }
    }

    pub fn state(&self) -> &CollectionState<Items<T>> {
        &self.state
    }

    pub fn items(&self) -> Arc<Items<T>> {
        self.state
            .snapshot()
            .get()
            .cloned()
            .unwrap_or_else(|| Arc::new(Vec::new()))
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn append(&self, item: T) -> bool {
        self.state.update(|seq| append(seq, item))
    }

    pub fn remove(&self, index: usize) -> bool {
        self.state.update(|seq| remove(seq, index))
    }
}

impl<T: Toggle> LocalList<T> {
    pub fn toggle(&self, index: usize) -> bool {
        self.state.update(|seq| toggle(seq, index))
    }
}

#[cfg(test)]
#[path = "../tests/sync/local_tests.rs"]
mod tests;
