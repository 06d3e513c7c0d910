use axum::{routing::get_service, Router};
use std::sync::Arc;
use tera::Tera;
use time::Duration;
use tower_http::services::ServeDir;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

pub mod config;
pub mod data;
pub mod features;
pub mod handlers;
pub mod store;
pub mod utils;

use config::AppConfig;
use store::JsonStore;

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(store: JsonStore, templates: Tera) -> Self {
        Self {
            store: Arc::new(store),
            templates: Arc::new(templates),
        }
    }
}

pub fn build_app(state: AppState, config: &AppConfig) -> Router {
    // Sessions configuration
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(config.session_idle_days)))
        .with_secure(false);

    Router::new()
        .merge(handlers::pages::router())
        .merge(handlers::learn::router())
        .merge(handlers::exam::router())
        .nest("/admin", handlers::admin::router())
        // Static files
        .nest_service("/static", get_service(ServeDir::new(&config.static_dir)))
        .layer(session_layer)
        .with_state(state)
}
