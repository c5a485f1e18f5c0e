//! Persistence boundary and local/remote fallback.
//!
//! The engine always keeps a local JSON snapshot and can optionally mirror
//! it to a remote store. Remote failures never lose data: the snapshot is
//! written locally first, and a failed remote save degrades to a soft
//! success that callers can surface to the user.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineResult;

use super::snapshot::StoreSnapshot;

/// Anything that can persist and restore a [`StoreSnapshot`].
pub trait AttendanceStore: Send + Sync {
    /// Persists the snapshot, replacing whatever was stored before.
    fn save(&self, snapshot: &StoreSnapshot) -> EngineResult<()>;

    /// Restores the most recent snapshot, or an empty one on first run.
    fn load(&self) -> EngineResult<StoreSnapshot>;
}

/// How far a save propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    /// The snapshot reached both the local file and the remote store.
    Synced,
    /// The snapshot is safe in the local file only.
    LocalOnly,
}

/// A store that writes locally first and mirrors to an optional remote.
///
/// Save order is local, then remote. A remote failure is logged and reported
/// as [`SaveOutcome::LocalOnly`] rather than an error, because the data is
/// already durable on disk. Load prefers the remote copy when one is
/// configured and reachable, falling back to the local file.
pub struct SyncedStore {
    local: Box<dyn AttendanceStore>,
    remote: Option<Box<dyn AttendanceStore>>,
}

impl SyncedStore {
    /// Creates a store with no remote mirror.
    pub fn local_only(local: Box<dyn AttendanceStore>) -> Self {
        Self {
            local,
            remote: None,
        }
    }

    /// Creates a store that mirrors every save to a remote.
    pub fn with_remote(local: Box<dyn AttendanceStore>, remote: Box<dyn AttendanceStore>) -> Self {
        Self {
            local,
            remote: Some(remote),
        }
    }

    /// Persists the snapshot locally, then mirrors it to the remote.
    ///
    /// # Returns
    ///
    /// [`SaveOutcome::Synced`] when the remote accepted the snapshot,
    /// [`SaveOutcome::LocalOnly`] when no remote is configured or the remote
    /// save failed. A local write failure is a hard error.
    pub fn save(&self, snapshot: &StoreSnapshot) -> EngineResult<SaveOutcome> {
        self.local.save(snapshot)?;

        let Some(remote) = &self.remote else {
            return Ok(SaveOutcome::LocalOnly);
        };

        match remote.save(snapshot) {
            Ok(()) => Ok(SaveOutcome::Synced),
            Err(e) => {
                warn!(error = %e, "remote save failed, snapshot kept locally");
                Ok(SaveOutcome::LocalOnly)
            }
        }
    }

    /// Restores the most recent snapshot.
    ///
    /// Prefers the remote copy when configured; a remote load failure is
    /// logged and the local file is used instead.
    pub fn load(&self) -> EngineResult<StoreSnapshot> {
        if let Some(remote) = &self.remote {
            match remote.load() {
                Ok(snapshot) => return Ok(snapshot),
                Err(e) => {
                    warn!(error = %e, "remote load failed, falling back to local snapshot");
                }
            }
        }

        self.local.load()
    }
}
