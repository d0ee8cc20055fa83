use crate::http::request::Request;

/// Try to parse a complete request line out of the buffer.
///
/// Returns `None` while the terminating CRLF has not arrived yet. Anything
/// after the first line is deliberately ignored.
pub fn parse_request_line(buf: &[u8]) -> Option<Request> {
    let line_end = find_line_end(buf)?;
    let line = String::from_utf8_lossy(&buf[..line_end]);
    Some(request_from_line(&line))
}

/// Build a request from a (possibly truncated) request line.
///
/// Missing tokens fall back to defaults rather than failing the connection:
/// a malformed line targets `/`.
pub fn request_from_line(line: &str) -> Request {
    let mut parts = line.split_whitespace();

    let method = parts.next().unwrap_or("GET").to_string();
    let path = parts.next().unwrap_or("/").to_string();
    let version = parts.next().unwrap_or("HTTP/1.1").to_string();

    Request { method, path, version }
}

fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.windows(2)
        .position(|w| w == b"\r\n")
}
