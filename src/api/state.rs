//! Application state for the attendance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{HolidaySet, Roster};
use crate::store::{LocalStore, SaveOutcome, StoreSnapshot, SyncedStore};

/// Shared application state.
///
/// Holds the in-memory roster and holiday calendar behind mutexes, plus
/// the store used to persist them. Handlers follow one pattern: lock,
/// mutate, [`persist`](AppState::persist), unlock. The engine is a single
/// logical writer; overlapping imports are last-write-wins.
#[derive(Clone)]
pub struct AppState {
    roster: Arc<Mutex<Roster>>,
    holidays: Arc<Mutex<HolidaySet>>,
    store: Arc<SyncedStore>,
    config: Arc<EngineConfig>,
}

impl AppState {
    /// Creates the state for a configuration, restoring any saved snapshot.
    ///
    /// Builds a local-only store at `config.data_file`. A missing snapshot
    /// file means a first run and yields empty state.
    pub fn load(config: EngineConfig) -> EngineResult<Self> {
        let local = LocalStore::new(config.data_file.clone());
        Self::with_store(config, SyncedStore::local_only(Box::new(local)))
    }

    /// Creates the state over an already-built store.
    ///
    /// Used when a remote mirror is configured, and by tests that want
    /// full control over persistence.
    pub fn with_store(config: EngineConfig, store: SyncedStore) -> EngineResult<Self> {
        let snapshot = store.load()?;
        Ok(Self {
            roster: Arc::new(Mutex::new(snapshot.roster)),
            holidays: Arc::new(Mutex::new(snapshot.holidays)),
            store: Arc::new(store),
            config: Arc::new(config),
        })
    }

    /// The employee roster.
    pub fn roster(&self) -> &Mutex<Roster> {
        &self.roster
    }

    /// The holiday calendar.
    pub fn holidays(&self) -> &Mutex<HolidaySet> {
        &self.holidays
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Snapshots the current state and writes it through the store.
    pub async fn persist(&self) -> EngineResult<SaveOutcome> {
        let snapshot = {
            let roster = self.roster.lock().await;
            let holidays = self.holidays.lock().await;
            StoreSnapshot::new(roster.clone(), holidays.clone())
        };
        self.store.save(&snapshot)
    }
}
