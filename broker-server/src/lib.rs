//! HTTP API for the service broker.

pub mod bootstrap;
pub mod config;

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use broker_catalog::{osb::Catalog, Controller};
use std::sync::Arc;
use tracing::{error, info};

pub use bootstrap::{bootstrap, config_files, load_dir, load_file};
pub use config::ServerConfig;

async fn catalog_handler(
    State(controller): State<Arc<Controller>>,
) -> Result<Json<Catalog>, StatusCode> {
    info!("Get service broker catalog");
    controller.catalog().map(Json).map_err(|e| {
        error!("Failed to build catalog: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Build the broker API router around a catalog controller.
pub fn build_router(controller: Arc<Controller>) -> Router {
    Router::new()
        .route("/v2/catalog", get(catalog_handler))
        .with_state(controller)
}
