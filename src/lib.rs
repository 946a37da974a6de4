//! Sea Kids: REST backend for the Sea Kids educational app.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::{apply_migrations, ensure_database_exists, MIGRATOR};
pub use routes::{api_doc, common_routes, docs_routes, entity_routes};
pub use service::CrudService;
pub use state::AppState;

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router: common, docs and resource routes with tracing and body limits.
pub fn app(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .merge(entity_routes(state))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
