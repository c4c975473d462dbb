//! HTTP protocol implementation.
//!
//! This module implements a deliberately small HTTP/1.1 server: every connection
//! carries exactly one request and one response, then closes.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler implementing the request-response state machine
//! - **`parser`**: Decodes raw request bytes into a [`Request`](request::Request)
//! - **`request`**: HTTP request representation and accessors
//! - **`response`**: HTTP response representation with builder pattern and status table
//! - **`headers`**: Ordered header map with case-insensitive lookup
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`query`**: Query string and cookie splitting
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a strictly linear state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Single read of the request bytes
//!        └──────┬──────┘
//!               │ decode failure → 400
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Route lookup and handler invocation
//!        └──────┬───────────┘
//!               │ no route → 404, handler failure → 500
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close
//! ```
//!
//! An empty read skips straight to `Close` without writing anything.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use rawhttp::http::connection::Connection;
//! use rawhttp::router::Router;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let router = Arc::new(Router::new());
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         let router = Arc::clone(&router);
//!         tokio::spawn(Connection::new(socket, peer, router).run());
//!     }
//! }
//! ```

pub mod connection;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod query;
pub mod request;
pub mod response;
pub mod writer;
