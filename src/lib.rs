pub mod booking;
pub mod catalog;
pub mod config;
pub mod controllers;
pub mod models;
pub mod services;
pub mod table;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::InMemoryCatalog;
use crate::config::Config;
use crate::services::orders::MockOrderGateway;

// Shared state for the whole application.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: InMemoryCatalog,
    pub orders: MockOrderGateway,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let catalog = InMemoryCatalog::with_sample_data();
        let orders = MockOrderGateway::from_config(&config.orders);
        Arc::new(Self {
            config,
            catalog,
            orders,
        })
    }
}

/// The full application router. Shared between `main` and tests.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Cinema API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
