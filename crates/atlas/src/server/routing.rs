//! Axum router configuration for all endpoints

use axum::{
  routing::{get, post},
  Router,
};

use crate::server::handlers::{directory, logs, pois, predict, status};
use crate::server::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    // Status and version endpoints
    .route("/status", get(status::status))
    .route("/version", get(status::version))
    .route("/api", get(status::api_info))
    // Logs endpoint
    .route("/logs", get(logs::get_logs))
    // Dashboard endpoints
    .route("/pois", get(pois::list_pois))
    .route("/pois/stats", get(pois::dashboard_stats))
    .route("/pois/categories", get(pois::list_categories))
    .route("/layers", get(pois::layer_catalog))
    .route("/catalog", get(pois::business_catalog))
    // Directory endpoints
    .route("/malls", get(directory::list_malls))
    .route("/banks", get(directory::list_banks))
    .route("/locations", get(directory::find_locations))
    .route("/search", get(directory::search))
    // Prediction endpoint
    .route("/predict", post(predict::predict))
    .with_state(state)
}
