use curator::http::response::{Response, ResponseBuilder, StatusCode};
use curator::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::TooManyRequests.as_u16(), 429);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::TooManyRequests.reason_phrase(),
        "Too Many Requests"
    );
}

#[test]
fn test_response_builder_auto_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html")
        .body(b"This is the body".to_vec())
        .build();

    assert_eq!(response.header("Content-Length").unwrap(), "16");
}

#[test]
fn test_response_builder_keeps_explicit_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "3")
        .body(b"abcdef".to_vec())
        .build();

    assert_eq!(response.header("Content-Length").unwrap(), "3");
}

#[test]
fn test_not_found_is_well_formed() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.header("Content-Type").unwrap(), "text/html");
    assert_eq!(
        response.body,
        b"<html><body><h1>404 Not Found</h1></body></html>".to_vec()
    );
    assert_eq!(
        response.header("Content-Length").unwrap(),
        response.body.len().to_string()
    );
}

#[test]
fn test_too_many_requests_carries_retry_hint() {
    let response = Response::too_many_requests(1);

    assert_eq!(response.status, StatusCode::TooManyRequests);
    assert_eq!(response.header("Retry-After").unwrap(), "1");
    assert_eq!(
        response.header("Content-Length").unwrap(),
        response.body.len().to_string()
    );
}

#[test]
fn test_serialized_wire_format() {
    let response = Response::file("image/png", vec![1, 2, 3]);
    let bytes = serialize_response(&response);
    let text = String::from_utf8_lossy(&bytes);

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Content-Type: image/png\r\n"));
    assert!(text.contains("Content-Length: 3\r\n"));
    assert!(bytes.ends_with(&[b'\r', b'\n', 1, 2, 3]));
}

#[test]
fn test_headers_serialize_in_insertion_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html")
        .header("Retry-After", "1")
        .build();
    let text = String::from_utf8_lossy(&serialize_response(&response)).into_owned();

    let ct = text.find("Content-Type").unwrap();
    let ra = text.find("Retry-After").unwrap();
    let cl = text.find("Content-Length").unwrap();
    assert!(ct < ra && ra < cl);
}
