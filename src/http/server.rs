//! HTTP server and graceful shutdown.
//!
//! The serve loop reacts to SIGTERM / Ctrl-C by:
//! 1. Immediately stopping `listener.accept()`. No new connections.
//! 2. Letting every in-flight connection task run to completion.
//! 3. Returning from [`Server::serve`], which lets `main` exit cleanly.

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::error::Error;
use crate::http::cors;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router::Router;

/// The HTTP server.
pub struct Server {
    listen: Listen,
}

enum Listen {
    Addr(SocketAddr),
    Bound(TcpListener),
}

impl Server {
    /// Configures the server to bind to `addr` when
    /// [`serve`](Server::serve) is called.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is not a valid `host:port` string.
    pub fn bind(addr: &str) -> Self {
        let addr: SocketAddr = addr.parse().expect("invalid socket address");
        Self { listen: Listen::Addr(addr) }
    }

    /// Serves on an already-bound listener.
    ///
    /// Lets a test harness bind port 0, read `local_addr()`, and hand the
    /// listener over.
    pub fn from_listener(listener: TcpListener) -> Self {
        Self { listen: Listen::Bound(listener) }
    }

    /// Accepts connections and dispatches them through `router` until a
    /// full graceful shutdown (signal received, in-flight requests
    /// drained).
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        let listener = match self.listen {
            Listen::Addr(addr) => TcpListener::bind(addr).await?,
            Listen::Bound(listener) => listener,
        };
        let addr = listener.local_addr()?;

        // Shared across concurrent connection tasks without copying the
        // routing table.
        let router = Arc::new(router);

        info!(addr = %addr, "libreria listening");

        // Tracks every spawned connection task so shutdown can wait for
        // them all.
        let mut tasks = tokio::task::JoinSet::new();

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // Check shutdown first so a signal stops accepting even if
                // more connections are queued.
                biased;

                () = &mut shutdown => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let router = Arc::clone(&router);
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // Called once per request on the connection, not
                        // once per connection.
                        let svc = service_fn(move |req| {
                            let router = Arc::clone(&router);
                            async move { dispatch(router, req, remote_addr).await }
                        });

                        // Serves whichever of HTTP/1.1 or HTTP/2 the client
                        // negotiates.
                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished connection tasks so the JoinSet does not
                // grow without bound.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        while tasks.join_next().await.is_some() {}

        info!("libreria stopped");
        Ok(())
    }
}

// ── Request dispatch ─────────────────────────────────────────────────────────

/// Routes one request and produces one response.
///
/// The error type is [`Infallible`](std::convert::Infallible): all failures
/// are expressed as HTTP responses (404 for unknown routes), so hyper never
/// sees an error. Cross-origin headers are stamped here so no handler can
/// forget them.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<hyper::body::Incoming>,
    remote_addr: SocketAddr,
) -> Result<http::Response<http_body_util::Full<bytes::Bytes>>, std::convert::Infallible> {
    let (parts, _body) = req.into_parts();

    if parts.method == http::Method::OPTIONS {
        return Ok(cors::preflight().into_inner());
    }

    let response = match router.lookup(&parts.method, parts.uri.path()) {
        Some((handler, params)) => handler.call(Request::new(&parts, params)).await,
        None => Response::status(http::StatusCode::NOT_FOUND),
    };

    debug!(
        peer = %remote_addr,
        method = %parts.method,
        path = %parts.uri.path(),
        status = %response.status_code(),
        "request"
    );

    Ok(cors::apply(response).into_inner())
}

// ── Shutdown signal ──────────────────────────────────────────────────────────

/// Resolves on the first shutdown signal the process receives: SIGTERM or
/// SIGINT (Ctrl-C) on Unix, Ctrl-C only elsewhere.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    // Never resolves, which disables the SIGTERM arm off Unix.
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}
