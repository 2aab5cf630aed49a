//! Server setup and lifecycle management

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::create_router;
use crate::state::AppState;
use mergelab_engine::MergePolicy;
use tokio::net::TcpListener;

/// Mergelab HTTP server
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new server with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Run the server until shutdown
    pub async fn run(self) -> ServerResult<()> {
        let addr = self.config.listen_addr;
        let state = AppState::new(&self.config)?;
        let app = create_router(state);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!(policy = %self.config.policy, "mergelabd listening on {addr}");
        if self.config.policy == MergePolicy::Unguarded {
            tracing::warn!(
                "unguarded merge policy active: shared defaults are writable through update payloads"
            );
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Server(e.to_string()))?;

        tracing::info!("mergelabd shutting down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
