use rawhttp::http::parser::{ParseError, parse_http_request};
use rawhttp::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert!(parsed.params.is_empty());
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /api HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.path, "/api");
    assert_eq!(&parsed.body[..], b"hello");
}

#[test]
fn test_parse_ignores_declared_content_length() {
    // The whole remainder is the body, regardless of what the header claims
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 2\r\n\r\nhello world";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(&parsed.body[..], b"hello world");

    let req = b"POST /api HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(&parsed.body[..], b"hello");
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 3);
    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("User-Agent"), Some("test-client"));
    assert_eq!(parsed.header("Accept"), Some("*/*"));
}

#[test]
fn test_parse_header_split_on_first_colon_and_trimmed() {
    let req = b"GET / HTTP/1.1\r\nHost:   localhost:8080  \r\nX-Empty:\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("host"), Some("localhost:8080"));
    assert_eq!(parsed.header("x-empty"), Some(""));
}

#[test]
fn test_parse_duplicate_header_last_wins() {
    let req = b"GET / HTTP/1.1\r\nX-Token: first\r\nX-Token: second\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.header("X-Token"), Some("second"));
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /search?q=cats&page=2 HTTP/1.1\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/search");
    assert_eq!(parsed.query_params.len(), 2);
    assert_eq!(parsed.query("q"), Some("cats"));
    assert_eq!(parsed.query("page"), Some("2"));
}

#[test]
fn test_parse_missing_blank_line_has_empty_body() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_request_line_only() {
    let parsed = parse_http_request(b"GET /ping HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/ping");
    assert!(parsed.headers.is_empty());
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_request_line_wrong_token_count() {
    for raw in [
        &b"GET /\r\n\r\n"[..],
        b"GET / HTTP/1.1 extra\r\n\r\n",
        b"GET  / HTTP/1.1\r\n\r\n",
        b"\r\n\r\n",
    ] {
        let result = parse_http_request(raw);
        assert!(
            matches!(result, Err(ParseError::InvalidRequestLine(_))),
            "expected request line error for {:?}",
            String::from_utf8_lossy(raw)
        );
    }
}

#[test]
fn test_parse_invalid_utf8() {
    let req = b"GET /\xff\xfe HTTP/1.1\r\n\r\n";
    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::InvalidEncoding);
}

#[test]
fn test_parse_header_line_without_colon_is_skipped() {
    let req = b"GET /s HTTP/1.1\r\nNoColon\r\nHost: example.com\r\n\r\nbody";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/s");
    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("NoColon"), None);
    assert_eq!(&parsed.body[..], b"body");
}

#[test]
fn test_parse_unknown_method_is_not_an_error() {
    let parsed = parse_http_request(b"purge /cache HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, Method::Other("PURGE".to_string()));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let parsed = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_parse_request_with_cookies() {
    let req = b"GET / HTTP/1.1\r\ncookie: session=abc; theme=dark\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.cookie("session"), Some("abc"));
    assert_eq!(parsed.cookie("theme"), Some("dark"));
}

#[test]
fn test_parse_header_case_preservation() {
    let req = b"GET / HTTP/1.1\r\nContent-Type: application/json\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    let names: Vec<&str> = parsed.headers.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["Content-Type"]);
}
