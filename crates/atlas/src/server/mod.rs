//! REST API module for the Atlas service
//!
//! Provides the HTTP endpoints behind the dashboard, directory, and
//! prediction views. Uses axum for routing and schemars annotations on
//! the API types for OpenAPI documentation generation.

pub mod handlers;
pub mod middleware;
pub mod routing;
pub mod startup;
pub mod types;

use std::sync::Arc;

use crate::store::StoreClient;
use quill::service_logs::ServiceLogs;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
  /// Table-store client, constructed once at startup
  pub store: Arc<StoreClient>,
  /// Structured service logs backing the /logs endpoint
  pub logs: Arc<ServiceLogs>,
}
