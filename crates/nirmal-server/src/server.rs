//! Server startup.

use crate::routes;
use crate::state::AppState;
use nirmal_core::AppConfig;
use tokio::net::TcpListener;

/// The HTTP server.
pub struct Server {
    config: AppConfig,
}

impl Server {
    /// Create a new server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Bind and serve until Ctrl-C.
    pub async fn run(&self) -> anyhow::Result<()> {
        let addr = self.config.server.bind_addr();
        let app = routes::create_router(AppState::new(&self.config));

        let listener = TcpListener::bind(&addr).await?;

        tracing::info!(
            address = %addr,
            users_file = %self.config.storage.users_file.display(),
            complaints_file = %self.config.storage.complaints_file.display(),
            "Nirmal server listening"
        );
        if self.config.auth.has_officer_secret() {
            tracing::info!("Officer secret configured");
        } else {
            tracing::warn!(
                env = %self.config.auth.officer_secret_env,
                "No officer secret configured; officer signup and login are disabled"
            );
        }
        tracing::info!("Open: http://localhost:{}/login.html", self.config.server.port);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Nirmal server stopped");
        Ok(())
    }

    /// Get the configured listen port.
    pub fn listen_port(&self) -> u16 {
        self.config.server.port
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
