/// Represents a parsed HTTP request line from a client.
///
/// Only the request line is ever parsed; headers and any body are read off the
/// socket but ignored. The method is recorded for logging and never routed on,
/// so a non-GET request serves its target exactly like a GET would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token as sent (e.g., "GET")
    pub method: String,
    /// The raw, still percent-encoded target path (e.g., "/index.html")
    pub path: String,
    /// HTTP version tag (typically "HTTP/1.1")
    pub version: String,
}
