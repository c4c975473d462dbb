//! rawhttp - HTTP/1.1 over raw sockets
//!
//! Parses requests straight off a TCP stream, routes them by path pattern and
//! writes the serialized response back. One request per connection.

pub mod app;
pub mod config;
pub mod handler;
pub mod http;
pub mod router;
pub mod server;
