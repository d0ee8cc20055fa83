use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::{Config, RunMode};
use crate::files::handler::FileHandler;
use crate::files::hits::HitCounter;
use crate::http::connection::Connection;
use crate::server::limiter::RateLimiter;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let root = tokio::fs::canonicalize(&cfg.root_dir)
        .await
        .with_context(|| format!("Cannot serve from {}", cfg.root_dir.display()))?;

    let hits = Arc::new(HitCounter::new(cfg.counter_mode, cfg.race_demo));
    let handler = Arc::new(FileHandler::new(root.clone(), hits, cfg.handling_delay));
    let limiter = Arc::new(RateLimiter::default());

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Serving {} on {}", root.display(), cfg.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let handler = handler.clone();
        let limiter = limiter.clone();
        let mut conn = Connection::new(socket, peer.ip().to_string(), handler, limiter);

        match cfg.run_mode {
            RunMode::Threaded => {
                tokio::spawn(async move {
                    if let Err(e) = conn.run().await {
                        error!("Connection error from {}: {}", peer, e);
                    }
                });
            }
            RunMode::Sequential => {
                // Deliberate head-of-line blocking: the next accept waits for
                // this connection to finish.
                if let Err(e) = conn.run().await {
                    error!("Connection error from {}: {}", peer, e);
                }
            }
        }
    }
}
