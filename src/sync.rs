//! Client-held collection snapshots and the fetch/mutate/resync protocol.
//!
//! A `CollectionState` owns one `Snapshot` and the `LoadingGate` derived from it.
//! Remote collections are populated by a `FetchController` and changed through a
//! `MutationController` (confirm, write, resync). The to-do list never talks to a
//! server; it is edited in place by `LocalList` using copy-on-write sequences.

mod fetch;
mod gate;
mod local;
mod mutate;
mod render;
mod snapshot;
mod state;
mod transport;


pub use self::fetch::{FetchController, FetchError};
pub use self::gate::LoadingGate;
pub use self::local::{LocalList, Toggle, append, remove, toggle};
pub use self::mutate::{Confirm, MutationController, MutationError, MutationOutcome, Notify, Transition};
pub use self::render::{Presence, Selection, select};
pub use self::snapshot::{Items, Snapshot};
pub use self::state::CollectionState;
pub use self::transport::{RawResponse, Transport};
