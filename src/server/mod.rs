//! Network entry point: binding the listening socket and the accept loop.

pub mod listener;
