//! REST server startup and configuration

use anyhow::Result;
use axum::serve;
use quill::service_logs::ServiceLogs;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{middleware, routing::create_router, AppState};
use crate::store::StoreClient;

/// Start the REST server
pub async fn start_server(addr: SocketAddr, store: StoreClient) -> Result<()> {
  let logs_path = server_logs_path();
  let logs = Arc::new(ServiceLogs::new(&logs_path)?);

  // Re-initialization only happens in tests that restart the server
  let _ = middleware::init_global_logs(logs.clone());

  logs.info(&format!("Starting atlas REST server on {addr}"), "atlas-server").await;

  let state = AppState { store: Arc::new(store), logs: logs.clone() };

  let app = create_router(state).layer(
    ServiceBuilder::new()
      .layer(TraceLayer::new_for_http())
      .layer(CorsLayer::permissive()) // TODO: Configure CORS properly for production
      .layer(axum::middleware::from_fn(middleware::request_context_middleware)),
  );

  let listener = TcpListener::bind(addr).await?;
  logs.info(&format!("Server listening on {addr}"), "atlas-server").await;

  match serve(listener, app).await {
    Ok(_) => {
      logs.info("Server shutdown gracefully", "atlas-server").await;
      Ok(())
    }
    Err(e) => {
      logs.error(&format!("Server error: {e}"), "atlas-server").await;
      Err(anyhow::anyhow!("Server error: {e}"))
    }
  }
}

/// Get the path for server logs
fn server_logs_path() -> std::path::PathBuf {
  dirs::home_dir()
    .unwrap_or_else(|| std::path::Path::new("/tmp").to_path_buf())
    .join(".atlas")
    .join("rest_server.logs.jsonl")
}
