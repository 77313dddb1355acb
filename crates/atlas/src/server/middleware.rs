//! Request context and middleware for the Atlas REST API
//!
//! Provides a unified request context carrying the service logger and
//! request metadata, injected into all endpoints via middleware.

use axum::{
  extract::Request,
  http::{HeaderMap, Method, Uri},
  middleware::Next,
  response::Response,
};
use quill::service_logs::{LogContext, ServiceLogs};
use std::sync::Arc;
use uuid::Uuid;

/// Request context containing the logger and request metadata
#[derive(Clone)]
pub struct RequestContext {
  /// Unique ID for this request
  pub request_id: Uuid,
  /// HTTP method
  pub method: Method,
  /// Request URI
  pub uri: Uri,
  /// User agent, when the client sent one
  pub user_agent: Option<String>,
  /// Shared logger instance
  pub logs: Arc<ServiceLogs>,
}

impl RequestContext {
  /// Create a new request context
  pub fn new(method: Method, uri: Uri, headers: &HeaderMap, logs: Arc<ServiceLogs>) -> Self {
    let user_agent = headers
      .get("user-agent")
      .and_then(|value| value.to_str().ok())
      .map(|value| value.to_string());

    Self { request_id: Uuid::new_v4(), method, uri, user_agent, logs }
  }

  fn context(&self, status_code: Option<u16>, duration_ms: Option<f64>) -> LogContext {
    LogContext {
      request_id: Some(self.request_id.to_string()),
      method: Some(self.method.to_string()),
      path: Some(self.uri.path().to_string()),
      user_agent: self.user_agent.clone(),
      duration_ms,
      status_code,
    }
  }

  /// Log an info message with request context
  pub async fn log_info(&self, message: &str, origin: &str) {
    self.logs.record_with_context("info", message, origin, self.context(None, None)).await;
  }

  /// Log a success message with request context
  pub async fn log_success(&self, message: &str, origin: &str) {
    self.logs.record_with_context("success", message, origin, self.context(None, None)).await;
  }

  /// Log a warning message with request context
  pub async fn log_warn(&self, message: &str, origin: &str) {
    self.logs.record_with_context("warn", message, origin, self.context(None, None)).await;
  }

  /// Log an error message with request context
  pub async fn log_error(&self, message: &str, origin: &str) {
    self.logs.record_with_context("error", message, origin, self.context(None, None)).await;
  }

  /// Log request start
  pub async fn log_request_start(&self) {
    self.logs.record_with_context("info", "Request started", "http", self.context(None, None)).await;
  }

  /// Log request completion with status and duration
  pub async fn log_request_complete(&self, status_code: u16, duration_ms: f64) {
    self
      .logs
      .record_with_context(
        "info",
        "Request completed",
        "http",
        self.context(Some(status_code), Some(duration_ms)),
      )
      .await;
  }
}

/// Global logger instance shared with the middleware layer
static GLOBAL_LOGS: once_cell::sync::OnceCell<Arc<ServiceLogs>> = once_cell::sync::OnceCell::new();

/// Initialize the global logger
pub fn init_global_logs(logs: Arc<ServiceLogs>) -> Result<(), Arc<ServiceLogs>> {
  GLOBAL_LOGS.set(logs)
}

/// Get the global logger instance
pub fn global_logs() -> &'static Arc<ServiceLogs> {
  GLOBAL_LOGS.get().expect("Global logger should be initialized before use")
}

/// Middleware injecting a [`RequestContext`] into every request
pub async fn request_context_middleware(request: Request, next: Next) -> Response {
  let logs = global_logs().clone();

  let method = request.method().clone();
  let uri = request.uri().clone();
  let context = RequestContext::new(method, uri, request.headers(), logs);

  let start_time = std::time::Instant::now();
  context.log_request_start().await;

  let mut request = request;
  request.extensions_mut().insert(context.clone());

  let response = next.run(request).await;

  let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
  context.log_request_complete(response.status().as_u16(), duration_ms).await;

  response
}
