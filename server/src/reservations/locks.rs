//! Per-seat booking locks
//!
//! The conflict check and the insert are not atomic at the database
//! level, so every write that claims seat time runs under the locks of
//! the seats it touches.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-seat async mutexes
#[derive(Debug, Default)]
pub struct SeatLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SeatLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    fn lock_for(&self, seat_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(seat_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Acquire the locks for a set of seats.
    ///
    /// Ids are sorted and deduplicated before acquisition so two
    /// requests touching overlapping seat sets always lock in the same
    /// order and cannot deadlock.
    pub async fn lock_many(&self, seat_ids: &[String]) -> Vec<OwnedMutexGuard<()>> {
        let mut ids: Vec<&String> = seat_ids.iter().collect();
        ids.sort();
        ids.dedup();

        let mut guards = Vec::with_capacity(ids.len());
        for id in ids {
            let lock = self.lock_for(id);
            guards.push(lock.lock_owned().await);
        }
        guards
    }
}
