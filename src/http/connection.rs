use std::any::Any;
use std::net::SocketAddr;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// Upper bound for the single read of a request. Anything beyond is not read.
pub const READ_BUFFER_SIZE: usize = 4096;

/// Handles exactly one request/response exchange on an accepted stream.
pub struct Connection<S> {
    stream: S,
    peer: SocketAddr,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Dispatching(Request),
    Writing(ResponseWriter),
    Closed,
}

/// Outcome of routing and invoking a handler for one request.
#[derive(Debug)]
pub enum Dispatch {
    Handled(Response),
    NotFound,
    Failed(anyhow::Error),
}

impl Dispatch {
    pub fn into_response(self) -> Response {
        match self {
            Dispatch::Handled(response) => response,
            Dispatch::NotFound => Response::not_found(),
            Dispatch::Failed(_) => Response::internal_error(),
        }
    }
}

/// Routes `request` and runs the matching handler.
///
/// On a match the captured placeholders are stored in `request.params`
/// before the handler sees the request. Handler errors and panics both end
/// up as [`Dispatch::Failed`].
pub fn dispatch(router: &Router, request: &mut Request) -> Dispatch {
    let Some(found) = router.find(&request.method, &request.path) else {
        return Dispatch::NotFound;
    };

    request.params = found.params;
    let handler = found.handler;
    let request = &*request;

    match panic::catch_unwind(AssertUnwindSafe(|| handler.call(request))) {
        Ok(Ok(response)) => Dispatch::Handled(response),
        Ok(Err(e)) => Dispatch::Failed(e.context(format!("handler for {} failed", found.pattern))),
        Err(payload) => Dispatch::Failed(anyhow::anyhow!(
            "handler for {} panicked: {}",
            found.pattern,
            panic_message(payload.as_ref())
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, router: Arc<Router>) -> Self {
        Self {
            stream,
            peer,
            router,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection to completion and closes it.
    ///
    /// Never returns an error: transport failures are logged and the
    /// connection is dropped.
    pub async fn run(mut self) {
        if let Err(e) = self.drive().await {
            warn!(peer = %self.peer, "connection error: {:#}", e);
        }

        if let Err(e) = self.stream.shutdown().await {
            debug!(peer = %self.peer, "shutdown failed: {}", e);
        }
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = self.read_request().await?;
                }

                ConnectionState::Dispatching(mut req) => {
                    let outcome = dispatch(&self.router, &mut req);
                    self.log_outcome(&req, &outcome);

                    let response = outcome.into_response();
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("failed to write response")?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<ConnectionState> {
        let mut buf = [0u8; READ_BUFFER_SIZE];
        let n = self
            .stream
            .read(&mut buf)
            .await
            .context("failed to read request")?;

        if n == 0 {
            // Client closed connection
            debug!(peer = %self.peer, "client disconnected before sending a request");
            return Ok(ConnectionState::Closed);
        }

        match parse_http_request(&buf[..n]) {
            Ok(req) => Ok(ConnectionState::Dispatching(req)),
            Err(e) => {
                warn!(peer = %self.peer, "bad request: {}", e);
                Ok(ConnectionState::Writing(ResponseWriter::new(
                    &Response::bad_request(),
                )))
            }
        }
    }

    fn log_outcome(&self, req: &Request, outcome: &Dispatch) {
        match outcome {
            Dispatch::Handled(response) => info!(
                peer = %self.peer,
                method = %req.method,
                path = %req.path,
                status = response.status.as_u16(),
                "request handled"
            ),
            Dispatch::NotFound => info!(
                peer = %self.peer,
                method = %req.method,
                path = %req.path,
                status = 404,
                "no route matched"
            ),
            Dispatch::Failed(e) => error!(
                peer = %self.peer,
                method = %req.method,
                path = %req.path,
                status = 500,
                "{:#}",
                e
            ),
        }
    }
}
