//! Local JSON-file persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::snapshot::StoreSnapshot;
use super::synced::AttendanceStore;

/// Stores snapshots as pretty-printed JSON in a single file.
///
/// The file and its parent directories are created on the first save. A
/// missing file on load is not an error: it means the engine has never run
/// before, and the store returns an empty snapshot.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Creates a store backed by the given file path.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::store::LocalStore;
    ///
    /// let store = LocalStore::new("data/attendance.json");
    /// ```
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }
}

impl AttendanceStore for LocalStore {
    fn save(&self, snapshot: &StoreSnapshot) -> EngineResult<()> {
        let json =
            serde_json::to_string_pretty(snapshot).map_err(|e| EngineError::StoreWrite {
                path: self.path_str(),
                message: e.to_string(),
            })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| EngineError::StoreWrite {
                    path: self.path_str(),
                    message: e.to_string(),
                })?;
            }
        }

        fs::write(&self.path, json).map_err(|e| EngineError::StoreWrite {
            path: self.path_str(),
            message: e.to_string(),
        })
    }

    fn load(&self) -> EngineResult<StoreSnapshot> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // First run: nothing persisted yet.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreSnapshot::default()),
            Err(e) => {
                return Err(EngineError::StoreRead {
                    path: self.path_str(),
                    message: e.to_string(),
                });
            }
        };

        serde_json::from_str(&content).map_err(|e| EngineError::StoreRead {
            path: self.path_str(),
            message: e.to_string(),
        })
    }
}
