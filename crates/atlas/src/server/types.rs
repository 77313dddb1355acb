//! REST API types with schemars annotations for OpenAPI generation

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::DashboardStats;
use crate::model::{AddressRecord, Poi, SearchHit, Venue};

// Base Response Structure
// =======================

/// Base response object for all API endpoints
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BaseResponse<T> {
  /// API versioning information
  pub versioning: VersionInfo,

  /// Transaction ID for logging correlation
  pub transaction_id: Uuid,

  /// Optional error information
  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub errors: Vec<ApiError>,

  /// Response data (generic for different endpoint types)
  #[serde(flatten)]
  pub data: T,
}

/// API versioning information
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VersionInfo {
  /// The latest version of the API
  pub latest: String,

  /// The version of the API requested by the client
  pub requested: String,

  /// The version of the API that was used in producing the response
  pub resolved: String,
}

/// API error information
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiError {
  /// Error key, unique to the error source
  pub key: String,

  /// Human readable error message
  pub message: String,

  /// Additional error context
  #[serde(default)]
  pub context: serde_json::Value,
}

impl<T> BaseResponse<T> {
  /// Create a successful response
  pub fn success(data: T, transaction_id: Uuid) -> Self {
    let version = env!("CARGO_PKG_VERSION");
    Self {
      versioning: VersionInfo {
        latest: version.to_string(),
        requested: version.to_string(),
        resolved: version.to_string(),
      },
      transaction_id,
      errors: Vec::new(),
      data,
    }
  }

  /// Create an error response
  pub fn error(errors: Vec<ApiError>, transaction_id: Uuid) -> BaseResponse<()> {
    let version = env!("CARGO_PKG_VERSION");
    BaseResponse {
      versioning: VersionInfo {
        latest: version.to_string(),
        requested: version.to_string(),
        resolved: version.to_string(),
      },
      transaction_id,
      errors,
      data: (),
    }
  }
}

impl ApiError {
  /// Create a new API error
  pub fn new(key: &str, message: &str) -> Self {
    Self { key: key.to_string(), message: message.to_string(), context: serde_json::Value::Null }
  }
}

// Status/Version Endpoints
// ========================

/// Response for /status endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StatusResponse {
  /// Service health indicator
  pub status: String,

  /// Base URL of the backing table store
  pub store_url: String,

  /// Current service version
  pub version: String,
}

/// Response for /version endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VersionResponse {
  /// Current API version
  pub version: String,
}

/// Response for /api endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiInfoResponse {
  /// Latest API version
  pub latest: String,

  /// Version information
  pub versions: ApiVersions,
}

/// API version details
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiVersions {
  /// Latest version
  pub latest: String,

  /// Currently active versions
  pub active: Vec<String>,
}

// Logs Endpoint
// =============

/// Response for /logs endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LogsResponse {
  /// JSON log entries
  pub logs: Vec<LogEntry>,
}

/// Individual log entry (re-exported from quill)
pub type LogEntry = quill::service_logs::LogEntry;

/// Request context information for logs (re-exported from quill)
pub type LogContext = quill::service_logs::LogContext;

// Dashboard Endpoints
// ===================

/// Query parameters for /pois and /pois/stats
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct DashboardQuery {
  /// Exact-match category filter; absent or empty means no filter
  pub category: Option<String>,

  /// Minimum review count, inclusive
  #[serde(default)]
  pub min_reviews: u64,

  /// Cap on the number of returned records (/pois only)
  pub limit: Option<usize>,
}

/// Response for /pois/stats
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DashboardStatsResponse {
  /// Statistics over the full record set
  pub stats: DashboardStats,

  /// Size of the subset passing the requested filter
  pub filtered_count: usize,

  /// Distinct non-empty categories, for the filter dropdown
  pub categories: Vec<String>,

  /// False when a page request failed and the harvest is partial
  pub complete: bool,

  /// Page requests issued by the harvest
  pub pages_fetched: usize,
}

/// Response for /pois
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PoiListResponse {
  /// Records passing the requested filter
  pub pois: Vec<Poi>,

  /// Number of returned records
  pub count: usize,

  /// False when a page request failed and the harvest is partial
  pub complete: bool,
}

/// Response for /pois/categories
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CategoriesResponse {
  /// Distinct non-empty categories, sorted
  pub categories: Vec<String>,
}

/// One entry of the /layers catalog
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LayerInfo {
  /// Stable layer key
  pub key: String,

  /// Selector label
  pub label: String,

  /// What the layer is good for
  pub explanation: String,
}

/// Response for /layers
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LayerCatalogResponse {
  /// Available map layers, in display order
  pub layers: Vec<LayerInfo>,
}

/// One entry of the /catalog business-type taxonomy
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BusinessTypeInfo {
  /// Dataset key
  pub key: String,

  /// Display label
  pub label: String,

  /// Display color as a hex string
  pub color: String,
}

/// Response for /catalog
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CatalogResponse {
  /// Business-type taxonomy
  pub types: Vec<BusinessTypeInfo>,

  /// Default map viewport center
  pub center: crate::catalog::GeoPoint,

  /// Default map viewport bounds
  pub bounds: crate::catalog::MapBounds,
}

// Directory Endpoints
// ===================

/// Response for /malls and /banks
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VenueListResponse {
  /// Venue rows
  pub venues: Vec<Venue>,

  /// Number of returned rows
  pub count: usize,
}

/// Query parameters for /locations
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct LocationsQuery {
  /// Business name to look up
  pub business_name: Option<String>,
}

/// Response for /locations
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LocationsResponse {
  /// Matching address rows, ordered by title
  pub locations: Vec<AddressRecord>,

  /// Number of returned rows
  pub count: usize,
}

/// Query parameters for /search
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SearchQuery {
  /// Title search text
  pub query: Option<String>,
}

/// Response for /search
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchResponse {
  /// Matches across the searched tables
  pub results: Vec<SearchHit>,

  /// Number of matches
  pub total: usize,
}
