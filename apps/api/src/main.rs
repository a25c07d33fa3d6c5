use resthelper_api::app::{self, AppState};
use resthelper_api::config::AppConfig;
use resthelper_api::logging;

#[tokio::main]
async fn main() {
    // Load configuration (including .env)
    let config = AppConfig::from_env().expect("Invalid configuration");

    // Initialize logging
    logging::init(&config.logger).expect("Failed to initialize logging");

    // Build router
    let app = app::router(AppState::in_memory(), &config.logger.logger);

    // Start server
    let addr = config.addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
