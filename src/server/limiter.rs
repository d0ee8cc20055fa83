//! Sliding-window rate limiting
//!
//! Tracks, per client IP, the timestamps of admitted requests within the
//! trailing window. The window is exact, not bucketed, and entries are pruned
//! lazily on each check - no background sweep is needed.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Requests admitted per client within one window.
pub const MAX_REQUESTS_PER_WINDOW: usize = 5;

/// Length of the sliding window.
pub const WINDOW: Duration = Duration::from_millis(1000);

pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    clients: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MAX_REQUESTS_PER_WINDOW, WINDOW)
    }
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Decide whether a request from `client` may proceed.
    ///
    /// Prunes timestamps that have aged out of the window, then either
    /// records the attempt and admits it, or rejects it without recording -
    /// a rejected attempt never consumes a slot. The lock is only held around
    /// the in-memory table, never across I/O.
    pub async fn admit(&self, client: &str) -> bool {
        let now = Instant::now();
        let mut clients = self.clients.lock().await;
        let stamps = clients.entry(client.to_string()).or_default();

        while stamps
            .front()
            .is_some_and(|t| now.duration_since(*t) >= self.window)
        {
            stamps.pop_front();
        }

        if stamps.len() >= self.max_requests {
            return false;
        }

        stamps.push_back(now);
        true
    }

    /// Retry hint for rejected clients: one full window.
    pub fn retry_after_secs(&self) -> u64 {
        self.window.as_secs().max(1)
    }
}
