use rawhttp::http::response::{Response, ResponseBuilder, StatusCode};
use serde_json::json;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::OK.as_u16(), 200);
    assert_eq!(StatusCode::CREATED.as_u16(), 201);
    assert_eq!(StatusCode::NO_CONTENT.as_u16(), 204);
    assert_eq!(StatusCode::BAD_REQUEST.as_u16(), 400);
    assert_eq!(StatusCode::NOT_FOUND.as_u16(), 404);
    assert_eq!(StatusCode::METHOD_NOT_ALLOWED.as_u16(), 405);
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::OK.reason_phrase(), "OK");
    assert_eq!(StatusCode::FOUND.reason_phrase(), "Found");
    assert_eq!(StatusCode::BAD_REQUEST.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NOT_FOUND.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::INTERNAL_SERVER_ERROR.reason_phrase(),
        "Internal Server Error"
    );
    assert_eq!(
        StatusCode::SERVICE_UNAVAILABLE.reason_phrase(),
        "Service Unavailable"
    );
}

#[test]
fn test_status_code_unknown_reason() {
    assert_eq!(StatusCode::from_u16(418).reason_phrase(), "Unknown");
    assert_eq!(StatusCode::from_u16(299).to_string(), "299 Unknown");
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::OK)
        .body("Hello, World!")
        .build();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body()[..], b"Hello, World!");
}

#[test]
fn test_response_builder_with_headers() {
    let response = ResponseBuilder::new(StatusCode::OK)
        .header("Content-Type", "text/plain")
        .header("X-Custom", "value")
        .body("test")
        .build();

    assert_eq!(response.headers().get("content-type"), Some("text/plain"));
    assert_eq!(response.header("X-Custom").as_deref(), Some("value"));
}

#[test]
fn test_response_content_length_follows_body() {
    let mut response = Response::ok("four");
    assert_eq!(response.header("Content-Length").as_deref(), Some("4"));

    response.set_body("a longer body");
    assert_eq!(response.content_length(), 13);
    assert_eq!(response.header("content-length").as_deref(), Some("13"));
}

#[test]
fn test_response_content_length_cannot_be_set() {
    let mut response = ResponseBuilder::new(StatusCode::OK)
        .header("Content-Length", "999")
        .body("test")
        .build();
    response.set_header("content-length", "1");

    assert!(!response.headers().contains("Content-Length"));
    assert_eq!(response.header("Content-Length").as_deref(), Some("4"));
}

#[test]
fn test_response_string_body_is_utf8() {
    let response = Response::text(String::from("héllo"));

    assert_eq!(response.content_length(), 6);
    assert_eq!(&response.body()[..], "héllo".as_bytes());
}

#[test]
fn test_response_text_and_html_content_types() {
    assert_eq!(
        Response::text("x").header("Content-Type").as_deref(),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(
        Response::html("<p>x</p>").header("Content-Type").as_deref(),
        Some("text/html; charset=utf-8")
    );
}

#[test]
fn test_response_json() {
    let response = Response::json(StatusCode::CREATED, &json!({"id": 7})).unwrap();

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.header("Content-Type").as_deref(),
        Some("application/json")
    );
    assert_eq!(&response.body()[..], br#"{"id":7}"#);
}

#[test]
fn test_response_redirect() {
    let response = Response::redirect("/login");

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.header("Location").as_deref(), Some("/login"));
    assert_eq!(response.content_length(), 0);
}

#[test]
fn test_response_file_content_type() {
    let response = Response::file("logo.PNG", vec![0x89, b'P', b'N', b'G']);

    assert_eq!(response.header("Content-Type").as_deref(), Some("image/png"));
    assert_eq!(response.content_length(), 4);

    let response = Response::file("blob.bin", vec![1u8, 2, 3]);
    assert_eq!(
        response.header("Content-Type").as_deref(),
        Some("application/octet-stream")
    );
}

#[test]
fn test_error_responses() {
    let cases = [
        (Response::bad_request(), 400, "Bad Request"),
        (Response::not_found(), 404, "Not Found"),
        (Response::internal_error(), 500, "Internal Server Error"),
    ];

    for (response, code, body) in cases {
        assert_eq!(response.status.as_u16(), code);
        assert_eq!(&response.body()[..], body.as_bytes());
    }
}
