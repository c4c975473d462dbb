//! Path-pattern routing
//!
//! Routes are `(method, pattern, handler)` triples kept in registration order
//! per method. A pattern is a `/`-separated template in which a segment
//! starting with `:` captures exactly one non-empty path segment under that
//! name; every other segment must match literally (case-sensitive).
//!
//! Lookup returns the *first registered* pattern that matches. There is no
//! specificity ranking, so overlapping routes are resolved purely by the
//! order in which they were added.

use std::collections::HashMap;
use std::sync::Arc;

use crate::handler::{BoxedHandler, Handler};
use crate::http::request::Method;

const PARAM_SIGIL: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.strip_prefix(PARAM_SIGIL) {
            Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
            _ => Segment::Literal(raw.to_string()),
        }
    }
}

/// A single registered route.
pub struct Route {
    pattern: String,
    segments: Vec<Segment>,
    handler: BoxedHandler,
}

impl Route {
    fn new(pattern: &str, handler: BoxedHandler) -> Self {
        Self {
            pattern: pattern.to_string(),
            segments: pattern.split('/').map(Segment::parse).collect(),
            handler,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Structurally matches `path`, returning the captured placeholders.
    fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Param(name) if !part.is_empty() => {
                    params.insert(name.clone(), part.to_string());
                }
                _ => return None,
            }
        }

        Some(params)
    }
}

/// Result of a successful lookup.
pub struct RouteMatch<'a> {
    /// Pattern of the route that matched
    pub pattern: &'a str,
    /// Handler registered for the route
    pub handler: &'a dyn Handler,
    /// Placeholder name → raw path segment
    pub params: HashMap<String, String>,
}

/// The route table.
///
/// Built once at startup, then shared read-only (typically as `Arc<Router>`)
/// by every connection.
#[derive(Default)]
pub struct Router {
    routes: HashMap<Method, Vec<Route>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route for `method`. Duplicate patterns are allowed; the
    /// earlier registration wins at lookup time.
    pub fn add(&mut self, method: impl Into<Method>, pattern: &str, handler: impl Handler) {
        let route = Route::new(pattern, Arc::new(handler));
        self.routes.entry(method.into()).or_default().push(route);
    }

    /// Fluent form of [`Router::add`].
    pub fn route(mut self, method: impl Into<Method>, pattern: &str, handler: impl Handler) -> Self {
        self.add(method, pattern, handler);
        self
    }

    pub fn get(self, pattern: &str, handler: impl Handler) -> Self {
        self.route(Method::GET, pattern, handler)
    }

    pub fn post(self, pattern: &str, handler: impl Handler) -> Self {
        self.route(Method::POST, pattern, handler)
    }

    pub fn put(self, pattern: &str, handler: impl Handler) -> Self {
        self.route(Method::PUT, pattern, handler)
    }

    pub fn delete(self, pattern: &str, handler: impl Handler) -> Self {
        self.route(Method::DELETE, pattern, handler)
    }

    pub fn patch(self, pattern: &str, handler: impl Handler) -> Self {
        self.route(Method::PATCH, pattern, handler)
    }

    /// Finds the first route registered for `method` whose pattern matches `path`.
    pub fn find(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        self.routes
            .get(method)?
            .iter()
            .find_map(|route| {
                route.matches(path).map(|params| RouteMatch {
                    pattern: &route.pattern,
                    handler: route.handler.as_ref(),
                    params,
                })
            })
    }

    /// Number of registered routes across all methods.
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
