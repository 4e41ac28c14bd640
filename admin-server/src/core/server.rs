//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::time::Duration;

use tokio::net::TcpListener;

use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state (shared with the caller for tests/tools)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let addr = self.config.listen_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        let app = crate::routes::build_app(self.state.clone());
        tracing::info!("📡 WiFi admin server listening on http://{}", addr);

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let serve = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = stop_rx.await;
        });
        let mut handle = tokio::spawn(async move { serve.await });

        tokio::select! {
            res = &mut handle => {
                return match res {
                    Ok(inner) => inner.map_err(|e| ServerError::Internal(e.into())),
                    Err(e) => Err(ServerError::Internal(e.into())),
                };
            }
            _ = shutdown_signal() => {}
        }
        let _ = stop_tx.send(());

        // In-flight requests get `shutdown_timeout_ms` to finish
        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);
        match tokio::time::timeout(grace, handle).await {
            Ok(Ok(res)) => res.map_err(|e| ServerError::Internal(e.into()))?,
            Ok(Err(e)) => return Err(ServerError::Internal(e.into())),
            Err(_) => tracing::warn!(
                timeout_ms = self.config.shutdown_timeout_ms,
                "Graceful shutdown timed out, dropping open connections"
            ),
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
