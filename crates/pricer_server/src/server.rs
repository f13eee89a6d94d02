//! Server startup and binding
//!
//! Provides functionality to start the Axum server with configurable host/port
//! and graceful shutdown on Ctrl-C.

use std::future::Future;
use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes::{self, AppState};

/// Server instance that can be started
pub struct Server {
    /// Server configuration
    config: Arc<ServerConfig>,
    /// The built router
    router: Router,
}

impl Server {
    /// Create a new server instance with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        let config = Arc::new(config);
        let router = routes::build_router(config.clone());

        Self { config, router }
    }

    /// Create a server over a prepared application state
    pub fn with_state(state: AppState) -> Self {
        let config = state.config.clone();
        let router = routes::router_with_state(state);

        Self { config, router }
    }

    /// Get the socket address the server will bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.config.socket_addr().parse()
    }

    /// Get the configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server until Ctrl-C
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self
            .socket_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let listener = TcpListener::bind(addr).await?;
        self.run_with_listener(listener, shutdown_signal()).await
    }

    /// Run the server on `listener` until `shutdown` completes
    ///
    /// Tests bind port 0 and pass their own shutdown future.
    pub async fn run_with_listener<F>(
        self,
        listener: TcpListener,
        shutdown: F,
    ) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
