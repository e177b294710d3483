use super::{LoadingGate, Snapshot};

/// Whether a ready collection has anything to show.
pub trait Presence {
    fn is_empty(&self) -> bool;
}

impl<T> Presence for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

#[derive(Debug)]
pub enum Selection<'a, V> {
    Loading,
    Empty,
    Content(&'a V),
}

impl<V> Selection<'_, V> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Selection::Loading)
    }
}

/// Picks the view for a collection. "Ready but empty" is distinct from "not loaded".
pub fn select<V: Presence>(snapshot: &Snapshot<V>, gate: LoadingGate) -> Selection<'_, V> {
    if !gate.is_ready() {
        return Selection::Loading;
    }
    match snapshot.get() {
        None => Selection::Loading,
        Some(v) if v.is_empty() => Selection::Empty,
        Some(v) => Selection::Content(v.as_ref()),
    }
}

#[cfg(test)]
#[path = "../tests/sync/render_tests.rs"]
mod tests;
