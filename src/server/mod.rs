//! HTTP boundary around the compositor.
//!
//! The server exposes a single route, `POST /create`, taking `{"text": "..."}` and answering
//! `201 Created` with a JPEG body. Failures are reported by status code only; details go to the
//! log.

use std::{future::Future, future::IntoFuture, net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context as _;
use tokio::net::TcpListener;

use crate::{foundation::error::TextcardResult, service::ImageService};

/// Request routing and the `/create` handler.
pub mod handler;

pub use handler::{AppState, CreateImageRequest, router};

/// Listener and timeout settings, fixed at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub listen: SocketAddr,
    /// Budget for reading a request body.
    pub read_timeout: Duration,
    /// Budget for rendering and encoding one response.
    pub write_timeout: Duration,
    /// How long in-flight requests may keep running after a shutdown signal.
    pub shutdown_grace: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            read_timeout: Duration::from_secs(5),
            write_timeout: Duration::from_secs(5),
            shutdown_grace: Duration::from_secs(2),
        }
    }
}

/// Bind `config.listen` and serve until `shutdown` resolves.
pub async fn serve<S>(
    config: ServerConfig,
    service: Arc<dyn ImageService>,
    shutdown: S,
) -> TextcardResult<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("bind {}", config.listen))?;
    serve_listener(listener, config, service, shutdown).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// After the signal, new connections are refused and in-flight requests get
/// `config.shutdown_grace` to finish before the server is dropped.
pub async fn serve_listener<S>(
    listener: TcpListener,
    config: ServerConfig,
    service: Arc<dyn ImageService>,
    shutdown: S,
) -> TextcardResult<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("read listener address")?;
    let app = router(AppState {
        service,
        read_timeout: config.read_timeout,
        write_timeout: config.write_timeout,
    });

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = stop_rx.await;
    });

    tracing::info!(%addr, "listening");
    let mut server = tokio::spawn(server.into_future());

    tokio::select! {
        joined = &mut server => {
            let res = joined.context("join HTTP server task")?;
            if let Err(e) = &res {
                tracing::error!(error = %e, "HTTP server got shut down");
            }
            return Ok(res.context("run HTTP server")?);
        }
        () = shutdown => {
            tracing::info!("shutting down HTTP server...");
        }
    }

    let _ = stop_tx.send(());
    match tokio::time::timeout(config.shutdown_grace, &mut server).await {
        Ok(joined) => joined
            .context("join HTTP server task")?
            .context("drain HTTP server")?,
        Err(_) => {
            tracing::warn!(grace = ?config.shutdown_grace, "grace period elapsed, dropping in-flight requests");
            server.abort();
        }
    }
    Ok(())
}

/// Resolve on SIGINT or SIGTERM (Ctrl-C only on non-Unix targets).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "could not install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "could not install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
