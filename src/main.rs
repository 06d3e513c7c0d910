use tera::Tera;
use tokio::net::TcpListener;

use vocab_quiz::{build_app, config::AppConfig, store::JsonStore, AppState};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    // Data files
    let store = JsonStore::new(&config.data_dir);
    if let Err(e) = store.bootstrap() {
        log::error!("Failed to prepare data directory {}: {}", config.data_dir.display(), e);
        std::process::exit(1);
    }

    // Templates configuration
    let templates = match Tera::new(&config.templates_glob) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };

    let app = build_app(AppState::new(store, templates), &config);

    // Start server
    let listener = match TcpListener::bind(&config.bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind to {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };

    log::info!("Server running on http://{}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
