//! Dashboard endpoint handlers
//!
//! The stats and listing endpoints run the full harvest against the
//! store on every request: the dataset is read-mostly and each
//! dashboard load owns its own snapshot, so there is no cross-request
//! cache to invalidate. The harvest is fail-soft, so these endpoints
//! degrade to partial data instead of failing.

use axum::extract::{Extension, Query, State};
use axum::response::Json;
use uuid::Uuid;

use crate::catalog;
use crate::engine::{filter_pois, unique_categories, DashboardStats, PoiFilter};
use crate::fetch::harvest;
use crate::layers::LayerKind;
use crate::server::middleware::RequestContext;
use crate::server::types::{
  BaseResponse, BusinessTypeInfo, CatalogResponse, CategoriesResponse, DashboardQuery,
  DashboardStatsResponse, LayerCatalogResponse, LayerInfo, PoiListResponse,
};
use crate::server::AppState;

fn filter_from(query: &DashboardQuery) -> PoiFilter {
  PoiFilter { category: query.category.clone(), min_reviews: query.min_reviews }
}

/// GET /pois/stats - Dashboard statistics plus the filtered count
pub async fn dashboard_stats(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  Query(query): Query<DashboardQuery>,
) -> Json<BaseResponse<DashboardStatsResponse>> {
  let transaction_id = Uuid::new_v4();

  let outcome = harvest(state.store.as_ref(), state.store.config().page_size).await;
  if !outcome.complete {
    context
      .log_warn(
        &format!("harvest incomplete, computing stats over {} records", outcome.pois.len()),
        "dashboard",
      )
      .await;
  }

  let filter = filter_from(&query);
  let filtered_count = filter_pois(&outcome.pois, &filter).len();

  let response = DashboardStatsResponse {
    stats: DashboardStats::compute(&outcome.pois),
    filtered_count,
    categories: unique_categories(&outcome.pois),
    complete: outcome.complete,
    pages_fetched: outcome.pages_fetched,
  };

  context
    .log_success(&format!("computed stats over {} records", response.stats.total_pois), "dashboard")
    .await;

  Json(BaseResponse::success(response, transaction_id))
}

/// GET /pois - The filtered subset, optionally capped
pub async fn list_pois(
  State(state): State<AppState>,
  Query(query): Query<DashboardQuery>,
) -> Json<BaseResponse<PoiListResponse>> {
  let transaction_id = Uuid::new_v4();

  let outcome = harvest(state.store.as_ref(), state.store.config().page_size).await;

  let filter = filter_from(&query);
  let mut pois: Vec<_> = filter_pois(&outcome.pois, &filter).into_iter().cloned().collect();
  if let Some(limit) = query.limit {
    pois.truncate(limit);
  }

  let count = pois.len();
  let response = PoiListResponse { pois, count, complete: outcome.complete };

  Json(BaseResponse::success(response, transaction_id))
}

/// GET /pois/categories - Distinct categories for the filter dropdown
pub async fn list_categories(
  State(state): State<AppState>,
) -> Json<BaseResponse<CategoriesResponse>> {
  let transaction_id = Uuid::new_v4();

  let outcome = harvest(state.store.as_ref(), state.store.config().page_size).await;
  let response = CategoriesResponse { categories: unique_categories(&outcome.pois) };

  Json(BaseResponse::success(response, transaction_id))
}

/// GET /layers - The map layer catalog
pub async fn layer_catalog() -> Json<BaseResponse<LayerCatalogResponse>> {
  let transaction_id = Uuid::new_v4();

  let layers = LayerKind::ALL
    .iter()
    .map(|layer| LayerInfo {
      key: layer.key().to_string(),
      label: layer.label().to_string(),
      explanation: layer.explanation().to_string(),
    })
    .collect();

  Json(BaseResponse::success(LayerCatalogResponse { layers }, transaction_id))
}

/// GET /catalog - Business-type taxonomy and map extent
pub async fn business_catalog() -> Json<BaseResponse<CatalogResponse>> {
  let transaction_id = Uuid::new_v4();

  let types = catalog::BUSINESS_TYPES
    .iter()
    .map(|entry| BusinessTypeInfo {
      key: entry.key.to_string(),
      label: entry.label.to_string(),
      color: entry.color.to_string(),
    })
    .collect();

  let response = CatalogResponse {
    types,
    center: catalog::CITY_CENTER,
    bounds: catalog::CITY_BOUNDS,
  };

  Json(BaseResponse::success(response, transaction_id))
}
