pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{Catalog, Speech};

use crate::config::Config;
use crate::error::ApiError;
use crate::services::sessions::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<Mutex<SessionStore>>,
    pub speech: Arc<dyn Speech>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, sessions: SessionStore, speech: Arc<dyn Speech>) -> Self {
        Self {
            catalog,
            sessions: Arc::new(Mutex::new(sessions)),
            speech,
        }
    }

    /// Lock the session store.
    pub fn sessions(&self) -> error::Result<MutexGuard<'_, SessionStore>> {
        self.sessions
            .lock()
            .map_err(|_| ApiError::Internal("session store lock poisoned".to_string()))
    }
}

/// Build the API router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Dictionary routes
        .route("/api/words", get(routes::words::list))
        .route("/api/words/:id", get(routes::words::detail))
        .route("/api/words/:id/speak", post(routes::words::speak))
        // Speech routes
        .route("/api/speak", post(routes::speech::speak))
        // Practice routes
        .route("/api/practice", post(routes::practice::open))
        .route(
            "/api/practice/:id",
            get(routes::practice::show).delete(routes::practice::close),
        )
        .route("/api/practice/:id/flip", post(routes::practice::flip))
        .route("/api/practice/:id/next", post(routes::practice::next))
        .route("/api/practice/:id/speak", post(routes::practice::speak))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn load_catalog(config: &Config) -> anyhow::Result<Arc<Catalog>> {
    let Some(path) = &config.words_file else {
        return Ok(Catalog::load());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    let catalog = Catalog::from_word_list(&content)
        .with_context(|| format!("failed to parse word list {}", path.display()))?;
    Ok(Arc::new(catalog))
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading catalog...");
    let catalog = load_catalog(&config)?;
    if catalog.is_empty() {
        tracing::warn!("catalog is empty, practice cards will stay blank");
    }
    tracing::info!(count = catalog.count(), "catalog loaded");

    let speech = services::speech::build(&config.speech);
    let sessions = SessionStore::new(config.practice_seed, config.session_idle);
    let state = AppState::new(catalog, sessions, speech);

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_words_file(path: Option<&str>) -> Config {
        Config::from_lookup(|key| match key {
            "VOCAB_WORDS_FILE" => path.map(str::to_string),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn loads_builtin_catalog_by_default() {
        let catalog = load_catalog(&config_with_words_file(None)).unwrap();
        assert!(Arc::ptr_eq(&catalog, &Catalog::load()));
    }

    #[test]
    fn loads_custom_word_list() {
        let path = std::env::temp_dir().join(format!("vocab-words-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "W: Zen\nD: Calm.\n\nW: Solace\nD: Comfort.\n").unwrap();

        let catalog = load_catalog(&config_with_words_file(path.to_str())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.count(), 2);
        assert_eq!(catalog.entries()[0].word(), "Zen");
    }

    #[test]
    fn missing_word_list_is_an_error() {
        let err = load_catalog(&config_with_words_file(Some("/nonexistent/vocab-words.txt"))).unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }

    #[test]
    fn malformed_word_list_is_an_error() {
        let path = std::env::temp_dir().join(format!("vocab-words-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "D: no word\n").unwrap();

        let result = load_catalog(&config_with_words_file(path.to_str()));
        std::fs::remove_file(&path).ok();

        assert!(result.unwrap_err().to_string().contains("failed to parse word list"));
    }
}
