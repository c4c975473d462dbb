use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::http::headers::Headers;
use crate::http::query::{parse_cookies, parse_query_string};

/// HTTP request methods.
///
/// The common verbs get their own variant. Any other token is kept verbatim
/// (upper-cased) in `Other`, so an unusual method reaches the router and
/// simply misses instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other method token
    Other(String),
}

impl Method {
    /// Parses a method token, normalizing it to upper case.
    ///
    /// # Example
    ///
    /// ```
    /// # use rawhttp::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::GET);
    /// assert_eq!(Method::parse("purge"), Method::Other("PURGE".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        let upper = s.to_ascii_uppercase();
        match upper.as_str() {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            _ => Method::Other(upper),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(s) => s,
        }
    }
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        Method::parse(s)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Built once by the parser (or [`RequestBuilder`]) through [`Request::new`],
/// which splits the query string off the path and derives the cookie map.
/// `params` starts empty and is filled in by the connection handler after a
/// route matched, right before the handler is called.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path without query string (e.g., "/users/42")
    pub path: String,
    /// HTTP version token as sent by the client (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, looked up case-insensitively
    pub headers: Headers,
    /// Decoded query string parameters
    pub query_params: HashMap<String, String>,
    /// Cookies from the `Cookie` header
    pub cookies: HashMap<String, String>,
    /// Raw request body, possibly empty
    pub body: Bytes,
    /// Route placeholder values, still percent-encoded as they appeared in the path
    pub params: HashMap<String, String>,
}

impl Request {
    /// Constructs a request from its wire components.
    ///
    /// `target` is the request-target as sent, including any `?query`.
    pub fn new(
        method: &str,
        target: &str,
        version: &str,
        headers: Headers,
        body: impl Into<Bytes>,
    ) -> Self {
        let (path, query_params) = match target.split_once('?') {
            Some((path, query)) => (path.to_string(), parse_query_string(query)),
            None => (target.to_string(), HashMap::new()),
        };

        let cookies = headers
            .get("Cookie")
            .map(parse_cookies)
            .unwrap_or_default();

        Self {
            method: Method::parse(method),
            path,
            version: version.to_string(),
            headers,
            query_params,
            cookies,
            body: body.into(),
            params: HashMap::new(),
        }
    }

    /// Retrieves a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Retrieves a header value, falling back to `default` when absent.
    pub fn header_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.header(name).unwrap_or(default)
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(String::as_str)
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Retrieves a route placeholder value captured for this request.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns the body as UTF-8 text, or `None` if it is not valid UTF-8.
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Builder for constructing Request objects.
///
/// Goes through [`Request::new`], so path/query splitting and cookie parsing
/// behave exactly as for parsed requests.
pub struct RequestBuilder {
    method: Option<String>,
    target: Option<String>,
    version: Option<String>,
    headers: Headers,
    body: Bytes,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            version: None,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Sets the request-target (path with optional query string).
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        let method = self.method.ok_or("method missing")?;
        let target = self.target.ok_or("target missing")?;
        let version = self.version.unwrap_or_else(|| "HTTP/1.1".to_string());

        Ok(Request::new(&method, &target, &version, self.headers, self.body))
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
