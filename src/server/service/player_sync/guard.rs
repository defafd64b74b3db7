//! Single-flight guard for sync runs.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::server::error::AppError;

/// Process-wide guard ensuring at most one sync run is active.
///
/// Clones share the same lock, so the guard can live in the application state and in the
/// scheduler at the same time.
#[derive(Clone, Default)]
pub struct SyncGuard {
    lock: Arc<Mutex<()>>,
}

/// Held for the duration of a sync run; dropping it lets the next run start.
pub struct SyncPermit {
    _guard: OwnedMutexGuard<()>,
}

impl SyncGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the guard without waiting.
    ///
    /// # Returns
    /// - `Ok(SyncPermit)` - No other run is active
    /// - `Err(AppError::Conflict)` - A run is already in progress
    pub fn try_acquire(&self) -> Result<SyncPermit, AppError> {
        self.lock
            .clone()
            .try_lock_owned()
            .map(|guard| SyncPermit { _guard: guard })
            .map_err(|_| AppError::Conflict("A player sync is already running".to_string()))
    }
}
