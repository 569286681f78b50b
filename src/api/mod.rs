mod graphql;
mod health;

pub use graphql::{graphql_get, graphql_post, GraphQlParams, GRAPHQL_PATH};
pub use health::health_check;

use crate::config::Config;
use crate::graphql::{build_schema, GradebookSchema};
use crate::store::Store;
use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
pub struct AppState {
    pub schema: GradebookSchema,
    pub store: Arc<Store>,
    pub graphiql: bool,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<Store>, config: &Config) -> Self {
        Self {
            schema: build_schema(store.clone()),
            store,
            graphiql: config.graphiql,
            start_time: Instant::now(),
        }
    }
}

pub fn router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = origins.iter().filter_map(|s| s.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
