//! Snapshot persistence.
//!
//! State is persisted wholesale: after every mutation the full roster and
//! holiday calendar are serialized into a [`StoreSnapshot`] and written
//! through a [`SyncedStore`], which keeps a local JSON file authoritative
//! and treats any remote mirror as best-effort.

pub mod local;
pub mod snapshot;
pub mod synced;

pub use local::LocalStore;
pub use snapshot::StoreSnapshot;
pub use synced::{AttendanceStore, SaveOutcome, SyncedStore};
