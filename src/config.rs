use std::path::PathBuf;
use std::time::Duration;

use crate::files::hits::CounterMode;

/// How accepted connections are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// One task per connection, no pool, no cap.
    Threaded,
    /// Each connection is handled to completion before the next accept.
    Sequential,
}

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub root_dir: PathBuf,
    pub run_mode: RunMode,
    /// Fixed delay injected before path resolution, to make concurrency
    /// effects observable under load.
    pub handling_delay: Option<Duration>,
    pub counter_mode: CounterMode,
    /// Widens the unsafe counter's read/write gap with a fixed sleep.
    pub race_demo: bool,
}

impl Config {
    pub fn load() -> Self {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let root_dir = std::env::var("SERVE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("www"));

        let run_mode = match std::env::var("RUN_MODE").as_deref() {
            Ok("sequential") => RunMode::Sequential,
            _ => RunMode::Threaded,
        };

        let handling_delay = std::env::var("HANDLING_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        let counter_mode = if flag_set("UNSAFE_COUNTER") {
            CounterMode::Unsafe
        } else {
            CounterMode::Safe
        };

        Self {
            listen_addr,
            root_dir,
            run_mode,
            handling_delay,
            counter_mode,
            race_demo: flag_set("RACE_DEMO"),
        }
    }
}

fn flag_set(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
