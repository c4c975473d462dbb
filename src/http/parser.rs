use thiserror::Error;

use crate::http::headers::Headers;
use crate::http::request::Request;

/// Why a request could not be decoded. Every variant is answered with 400.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("request is not valid UTF-8")]
    InvalidEncoding,
    #[error("request is empty")]
    EmptyRequest,
    #[error("malformed request line: {0:?}")]
    InvalidRequestLine(String),
}

/// Decodes one complete request from `buf`.
///
/// The whole buffer is taken as the request: everything after the blank line
/// that ends the header block is the body, whatever `Content-Length` says.
/// Without a blank line the header scan runs to the end and the body is empty.
/// Header lines without a `:` are skipped.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidEncoding)?;
    if text.is_empty() {
        return Err(ParseError::EmptyRequest);
    }

    let lines: Vec<&str> = text.split("\r\n").collect();

    // Request line: exactly three tokens separated by single spaces
    let request_line = lines[0];
    let parts: Vec<&str> = request_line.split(' ').collect();
    let [method, target, version] = parts[..] else {
        return Err(ParseError::InvalidRequestLine(request_line.to_string()));
    };

    // Headers
    let mut headers = Headers::new();
    let mut idx = 1;

    while idx < lines.len() && !lines[idx].is_empty() {
        if let Some((key, value)) = lines[idx].split_once(':') {
            headers.insert(key.trim(), value.trim());
        }
        idx += 1;
    }

    // Body: all remaining lines after the blank terminator
    let body_start = idx + 1;
    let body = if body_start < lines.len() {
        lines[body_start..].join("\r\n").into_bytes()
    } else {
        Vec::new()
    };

    Ok(Request::new(method, target, version, headers, body))
}
