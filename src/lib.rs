pub mod api;
pub mod catalog;
pub mod config;
pub mod middleware;
pub mod server;

use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Server error: {0}")]
    Server(String),
}

pub async fn run(config_path: Option<&str>) -> Result<(), ServerError> {
    let config = match config_path {
        Some(path) => {
            info!("Using config file: {}", path);
            config::Config::from_file(path)?
        }
        None => {
            info!("No config file given, using defaults");
            config::Config::default()
        }
    };

    let addr = config.listen_addr();
    let state = server::AppState::new(config);
    state.seed().await;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ServerError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Serving HTTP on {}", addr);
    serve(listener, state).await
}

/// Serve on an already bound listener until ctrl-c.
pub async fn serve(listener: TcpListener, state: server::AppState) -> Result<(), ServerError> {
    let app = server::build_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
