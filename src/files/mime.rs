use std::path::Path;

use mime_guess::Mime;

/// Content types the server will hand out. Files of any other type are
/// reported as missing, so their existence cannot be probed.
const ALLOWED_TYPES: [&str; 3] = ["text/html", "image/png", "application/pdf"];

/// Classify a file by extension against the allow-list.
///
/// Returns the MIME type to serve with, or `None` when the type is unknown
/// or not allowed.
pub fn allowed_type(path: &Path) -> Option<Mime> {
    let mime = mime_guess::from_path(path).first()?;
    if ALLOWED_TYPES.contains(&mime.essence_str()) {
        Some(mime)
    } else {
        None
    }
}
