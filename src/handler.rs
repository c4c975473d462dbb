//! Request handlers
//!
//! A handler turns one [`Request`] into one [`Response`] or fails. Any
//! `Fn(&Request) -> anyhow::Result<Response>` that is `Send + Sync` is a
//! handler, so plain functions and closures can be registered directly.

use std::sync::Arc;

use crate::http::request::Request;
use crate::http::response::Response;

pub trait Handler: Send + Sync + 'static {
    fn call(&self, request: &Request) -> anyhow::Result<Response>;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> anyhow::Result<Response> + Send + Sync + 'static,
{
    fn call(&self, request: &Request) -> anyhow::Result<Response> {
        self(request)
    }
}

/// Shared, type-erased handler reference stored in the route table.
pub type BoxedHandler = Arc<dyn Handler>;
