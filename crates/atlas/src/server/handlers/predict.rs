//! Prediction endpoint handler

use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::predict::{self, Prediction, PredictionRequest};
use crate::server::types::{ApiError, BaseResponse};

/// POST /predict - Deterministic location suitability stub
pub async fn predict(
  Json(request): Json<PredictionRequest>,
) -> Result<Json<BaseResponse<Prediction>>, (StatusCode, Json<BaseResponse<()>>)> {
  let transaction_id = Uuid::new_v4();

  if let Err(invalid) = predict::validate(&request) {
    let error = ApiError::new("invalid_prediction_request", &invalid.to_string());
    return Err((
      StatusCode::BAD_REQUEST,
      Json(BaseResponse::<()>::error(vec![error], transaction_id)),
    ));
  }

  let prediction = predict::predict(&request);
  Ok(Json(BaseResponse::success(prediction, transaction_id)))
}
