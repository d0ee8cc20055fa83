//! Per-file access counting
//!
//! A shared map from relative file path to access count. The safe mode keeps
//! the whole read-modify-write under one lock; the unsafe mode deliberately
//! splits it to make lost updates observable under concurrency. The unsafe
//! mode is a diagnostic teaching hook, not a bug to fix.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::Mutex;

/// Extra gap inserted between the unsafe read and write when the race
/// demonstration is requested, widening the window for lost updates.
const RACE_DEMO_GAP: Duration = Duration::from_millis(5);

/// Update discipline for [`HitCounter::record`], fixed for the process
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMode {
    /// Read-modify-write as one critical section; no update is ever lost.
    Safe,
    /// Read and write are separate critical sections with a scheduling gap
    /// in between; concurrent increments of the same key can race.
    Unsafe,
}

pub struct HitCounter {
    counts: Mutex<HashMap<String, u64>>,
    mode: CounterMode,
    race_demo: bool,
}

impl HitCounter {
    pub fn new(mode: CounterMode, race_demo: bool) -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
            mode,
            race_demo,
        }
    }

    /// Record one access for a served file.
    ///
    /// Only called for file responses, never for directory listings or
    /// rejected requests.
    pub async fn record(&self, path: &str) {
        match self.mode {
            CounterMode::Safe => {
                let mut counts = self.counts.lock().await;
                *counts.entry(path.to_string()).or_insert(0) += 1;
            }
            CounterMode::Unsafe => {
                // Two separate critical sections. Concurrent tasks can read
                // the same base value and overwrite each other's increment.
                let current = self.counts.lock().await.get(path).copied().unwrap_or(0);

                if self.race_demo {
                    tokio::time::sleep(RACE_DEMO_GAP).await;
                } else {
                    tokio::task::yield_now().await;
                }

                self.counts.lock().await.insert(path.to_string(), current + 1);
            }
        }
    }

    /// Current count for a path, 0 if never accessed.
    ///
    /// Always reads under the lock regardless of mode, so reported values are
    /// consistent with whatever updates have landed.
    pub async fn get(&self, path: &str) -> u64 {
        self.counts.lock().await.get(path).copied().unwrap_or(0)
    }
}
