//! Request path resolution
//!
//! Maps a URL-encoded request path to a location inside the serve root,
//! rejecting everything that resolves outside of it.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// A request target that resolved to a real location inside the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A regular file. `rel` is the canonical path relative to the root,
    /// forward-slash separated, no leading slash - the hit counter key.
    File { abs: PathBuf, rel: String },
    /// A directory to be listed. The root itself has `rel == ""`.
    Directory { abs: PathBuf, rel: String },
}

/// Resolve a raw request path against the canonical serve root.
///
/// The path is percent-decoded, stripped of leading separators, joined onto
/// the root and canonicalized, which resolves `.`, `..` and symlinks. The
/// result is accepted only if it still lies under the root.
///
/// Returns `None` for everything that must look absent to the client:
/// escapes, unresolvable paths and missing files. Callers never learn whether
/// a path was forbidden or simply absent.
pub async fn resolve(root: &Path, raw_path: &str) -> Option<Target> {
    let decoded = percent_decode_str(raw_path).decode_utf8_lossy();
    let rel = decoded.trim_start_matches('/');

    let canonical = tokio::fs::canonicalize(root.join(rel)).await.ok()?;
    if !canonical.starts_with(root) {
        return None;
    }

    let rel = canonical
        .strip_prefix(root)
        .ok()?
        .to_string_lossy()
        .replace('\\', "/");

    let meta = tokio::fs::metadata(&canonical).await.ok()?;
    if meta.is_dir() {
        Some(Target::Directory { abs: canonical, rel })
    } else {
        Some(Target::File { abs: canonical, rel })
    }
}
