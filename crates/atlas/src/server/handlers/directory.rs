//! Directory endpoint handlers: venue listings, address lookup, search

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::server::types::{
  ApiError, BaseResponse, LocationsQuery, LocationsResponse, SearchQuery, SearchResponse,
  VenueListResponse,
};
use crate::server::AppState;
use crate::store::StoreError;

type HandlerError = (StatusCode, Json<BaseResponse<()>>);

fn store_failure(key: &str, err: StoreError, transaction_id: Uuid) -> HandlerError {
  let error = ApiError::new(key, &err.to_string());
  (StatusCode::INTERNAL_SERVER_ERROR, Json(BaseResponse::<()>::error(vec![error], transaction_id)))
}

/// GET /malls - Column-selected mall listing
pub async fn list_malls(
  State(state): State<AppState>,
) -> Result<Json<BaseResponse<VenueListResponse>>, HandlerError> {
  let transaction_id = Uuid::new_v4();

  let venues = state
    .store
    .list_malls()
    .await
    .map_err(|err| store_failure("malls_query_failed", err, transaction_id))?;

  let count = venues.len();
  Ok(Json(BaseResponse::success(VenueListResponse { venues, count }, transaction_id)))
}

/// GET /banks - Column-selected bank listing
pub async fn list_banks(
  State(state): State<AppState>,
) -> Result<Json<BaseResponse<VenueListResponse>>, HandlerError> {
  let transaction_id = Uuid::new_v4();

  let venues = state
    .store
    .list_banks()
    .await
    .map_err(|err| store_failure("banks_query_failed", err, transaction_id))?;

  let count = venues.len();
  Ok(Json(BaseResponse::success(VenueListResponse { venues, count }, transaction_id)))
}

/// GET /locations?business_name= - Address lookup by business name
///
/// An absent or empty name yields an empty list, not an error.
pub async fn find_locations(
  State(state): State<AppState>,
  Query(query): Query<LocationsQuery>,
) -> Result<Json<BaseResponse<LocationsResponse>>, HandlerError> {
  let transaction_id = Uuid::new_v4();

  let business_name = query.business_name.unwrap_or_default();
  let locations = state
    .store
    .find_locations(&business_name)
    .await
    .map_err(|err| store_failure("locations_query_failed", err, transaction_id))?;

  let count = locations.len();
  Ok(Json(BaseResponse::success(LocationsResponse { locations, count }, transaction_id)))
}

/// GET /search?query= - Title search across the directory tables
pub async fn search(
  State(state): State<AppState>,
  Query(query): Query<SearchQuery>,
) -> Result<Json<BaseResponse<SearchResponse>>, HandlerError> {
  let transaction_id = Uuid::new_v4();

  let text = query.query.unwrap_or_default();
  let results = state
    .store
    .search_directory(&text)
    .await
    .map_err(|err| store_failure("search_failed", err, transaction_id))?;

  let total = results.len();
  Ok(Json(BaseResponse::success(SearchResponse { results, total }, transaction_id)))
}
