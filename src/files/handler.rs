use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::files::hits::HitCounter;
use crate::files::resolve::{self, Target};
use crate::files::{listing, mime};
use crate::http::request::Request;
use crate::http::response::Response;

/// Routes a parsed request to a file, a directory listing, or a 404.
///
/// Holds the canonical serve root and the shared hit counter; one handler is
/// shared by all connections.
pub struct FileHandler {
    root: PathBuf,
    hits: Arc<HitCounter>,
    handling_delay: Option<Duration>,
}

impl FileHandler {
    /// `root` must already be canonical; the listener canonicalizes it once
    /// at startup.
    pub fn new(root: PathBuf, hits: Arc<HitCounter>, handling_delay: Option<Duration>) -> Self {
        Self {
            root,
            hits,
            handling_delay,
        }
    }

    pub async fn handle(&self, request: &Request) -> Response {
        if let Some(delay) = self.handling_delay {
            tokio::time::sleep(delay).await;
        }

        match resolve::resolve(&self.root, &request.path).await {
            None => {
                debug!(path = %request.path, "Target missing or outside root");
                Response::not_found()
            }

            Some(Target::Directory { abs, rel }) => {
                match listing::render(&abs, &rel, &self.hits).await {
                    Ok(page) => Response::html(page),
                    Err(e) => {
                        debug!("Failed to list {}: {}", abs.display(), e);
                        Response::not_found()
                    }
                }
            }

            Some(Target::File { abs, rel }) => {
                let Some(mime) = mime::allowed_type(&abs) else {
                    return Response::not_found();
                };

                self.hits.record(&rel).await;

                match tokio::fs::read(&abs).await {
                    Ok(body) => Response::file(mime.essence_str(), body),
                    Err(e) => {
                        debug!("Failed to read {}: {}", abs.display(), e);
                        Response::not_found()
                    }
                }
            }
        }
    }
}
