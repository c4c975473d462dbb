use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket, lookup_host};
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;

/// Pending-connection queue length passed to `listen(2)`.
pub const BACKLOG: u32 = 5;

/// Pause after a failed `accept` so a persistent error (e.g. EMFILE) does not spin.
pub const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_secs(1);

/// Binds a listening socket on `addr` with `SO_REUSEADDR` enabled.
pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let sock_addr = lookup_host(addr)
        .await
        .with_context(|| format!("failed to resolve {}", addr))?
        .next()
        .with_context(|| format!("no address found for {}", addr))?;

    let socket = if sock_addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(sock_addr)
        .with_context(|| format!("failed to bind {}", sock_addr))?;

    Ok(socket.listen(BACKLOG)?)
}

/// Accepts connections until `shutdown` resolves.
///
/// Every connection is handed to its own task; the loop never waits for a
/// handler to finish. Connection tasks still running at shutdown are left to
/// complete on their own. The listener is closed when this returns.
pub async fn serve<F>(listener: TcpListener, router: Arc<Router>, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((socket, peer)) => {
                        info!("Accepted connection from {}", peer);

                        let router = Arc::clone(&router);
                        tokio::spawn(Connection::new(socket, peer, router).run());
                    }
                    Err(e) => {
                        error!("accept failed: {}", e);
                        if accept_backoff(shutdown.as_mut()).await {
                            info!("Shutdown signal received");
                            break;
                        }
                    }
                }
            }

            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}

/// Waits out [`ACCEPT_ERROR_BACKOFF`]. Returns `true` if `shutdown` fired meanwhile.
async fn accept_backoff<F>(shutdown: Pin<&mut F>) -> bool
where
    F: Future<Output = ()>,
{
    tokio::select! {
        _ = tokio::time::sleep(ACCEPT_ERROR_BACKOFF) => false,
        _ = shutdown => true,
    }
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run(cfg: &Config, router: Router) -> anyhow::Result<()> {
    let addr = cfg.listen_addr();
    let listener = bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    };

    serve(listener, Arc::new(router), shutdown).await?;
    info!("Server stopped");
    Ok(())
}
