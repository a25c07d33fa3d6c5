// Router assembly and shared state

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, things};
use crate::domain::repositories::ThingRepository;
use crate::infrastructure::repositories::InMemoryThingRepository;
use crate::services::ThingService;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub things: ThingService,
}

impl AppState {
    pub fn new(repo: Arc<dyn ThingRepository>) -> Self {
        Self {
            things: ThingService::new(repo),
        }
    }

    /// State backed by an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryThingRepository::new()))
    }
}

/// Builds the application router
///
/// `logger` is recorded on the span opened for every request.
pub fn router(state: AppState, logger: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let logger = logger.to_string();
    let trace = TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
        tracing::info_span!(
            "request",
            logger = %logger,
            method = %request.method(),
            uri = %request.uri(),
        )
    });

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Thing routes
        .route("/api/things", post(things::create_thing))
        .route("/api/things/filter", post(things::filter_things))
        .route(
            "/api/things/:id",
            get(things::get_thing)
                .put(things::update_thing)
                .delete(things::delete_thing),
        )
        // Middleware
        .layer(trace)
        .layer(cors)
        // Shared state
        .with_state(state)
}
