use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{
    services::{get_showcase, health, list_showcases},
    state::AppState,
};
use crate::config::{Config, StoreBackend, StoreConfig};
use crate::content::{ContentSeed, ContentStore, FjallContentStore, MemoryContentStore};

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the application router over an already constructed state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/showcase", get(get_showcase))
        .route("/showcases", get(list_showcases))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Open the configured content store backend
pub fn open_store(config: &StoreConfig) -> Result<Arc<dyn ContentStore>, AnyError> {
    match config.backend {
        StoreBackend::Fjall => {
            info!(path = %config.path.display(), "Opening Fjall content store");
            let store = FjallContentStore::open(&config.path)
                .map_err(|e| format!("Failed to open content store: {}", e))?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            let store = match &config.seed {
                Some(path) => {
                    info!(path = %path.display(), "Seeding in-memory content store");
                    ContentSeed::from_path(path)
                        .and_then(ContentSeed::into_memory_store)
                        .map_err(|e| format!("Failed to seed content store: {}", e))?
                }
                None => {
                    info!("Using empty in-memory content store");
                    MemoryContentStore::new()
                }
            };
            Ok(Arc::new(store))
        }
    }
}

pub async fn run(config: Config, address: SocketAddr) -> Result<(), AnyError> {
    let store = open_store(&config.store)?;
    let state = AppState::new(config, store)
        .map_err(|e| format!("Failed to build application state: {}", e))?;

    let app = router(state);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "Showcase API listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
