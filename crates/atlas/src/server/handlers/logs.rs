//! Logs endpoint handler

use axum::{extract::State, http::StatusCode, response::Json};
use uuid::Uuid;

use crate::server::types::{ApiError, BaseResponse, LogsResponse};
use crate::server::AppState;

/// GET /logs - Return the most recent service log entries
pub async fn get_logs(
  State(state): State<AppState>,
) -> Result<Json<BaseResponse<LogsResponse>>, (StatusCode, Json<BaseResponse<()>>)> {
  let transaction_id = Uuid::new_v4();

  match state.logs.get_logs(Some(100), None).await {
    Ok(logs) => {
      let response = LogsResponse { logs };
      Ok(Json(BaseResponse::success(response, transaction_id)))
    }
    Err(e) => {
      let error = ApiError::new("logs_read_failed", &format!("Failed to read logs: {e}"));
      Err((
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(BaseResponse::<()>::error(vec![error], transaction_id)),
      ))
    }
  }
}
