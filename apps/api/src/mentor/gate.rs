//! Per-profile mutual exclusion for analysis generation.
//!
//! Two concurrent analysis requests for the same profile would both miss the
//! existence check and both call the LLM. Holding the profile's gate across
//! the check-then-generate-then-store sequence guarantees at most one
//! generation per profile.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// A registry of per-profile locks. Entries are kept for the process
/// lifetime, matching the store's no-deletion model.
pub struct AnalysisGate {
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl AnalysisGate {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Acquires the lock for one profile, waiting if another request holds it.
    pub async fn acquire(&self, profile_id: Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(profile_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

impl Default for AnalysisGate {
    fn default() -> Self {
        Self::new()
    }
}
