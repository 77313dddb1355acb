//! HTTP client for the Atlas REST API
//!
//! This module provides a thin HTTP client wrapper that lets the CLI
//! work with both local and remote Atlas servers.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use std::time::Duration;
use tokio::time::timeout;

use crate::predict::{Prediction, PredictionRequest};
use crate::server::types::{
  BaseResponse, CatalogResponse, CategoriesResponse, DashboardStatsResponse, LayerCatalogResponse,
  LocationsResponse, LogsResponse, PoiListResponse, SearchResponse, VenueListResponse,
};

/// Configuration for the Atlas HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Base URL of the Atlas server (e.g., "http://localhost:4600")
  pub base_url: String,
  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self { base_url: "http://localhost:4600".to_string(), timeout_secs: 60 }
  }
}

/// HTTP client for the Atlas REST API
pub struct AtlasClient {
  client: Client,
  config: ClientConfig,
}

impl Default for AtlasClient {
  fn default() -> Self {
    Self::new()
  }
}

impl AtlasClient {
  /// Create a new client with default configuration
  pub fn new() -> Self {
    Self::with_config(ClientConfig::default())
  }

  /// Create a new client with custom configuration
  pub fn with_config(config: ClientConfig) -> Self {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .expect("Failed to create HTTP client");

    Self { client, config }
  }

  async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T> {
    let url = format!("{}{}", self.config.base_url, path);
    let response =
      timeout(Duration::from_secs(self.config.timeout_secs), self.client.get(&url).send())
        .await??;

    if !response.status().is_success() {
      let error_text = response.text().await?;
      return Err(anyhow!("Failed to {what}: {error_text}"));
    }

    let result: BaseResponse<T> = response.json().await?;
    Ok(result.data)
  }

  async fn post_json<B: Serialize, T: DeserializeOwned>(
    &self,
    path: &str,
    body: &B,
    what: &str,
  ) -> Result<T> {
    let url = format!("{}{}", self.config.base_url, path);
    let response = timeout(
      Duration::from_secs(self.config.timeout_secs),
      self.client.post(&url).json(body).send(),
    )
    .await??;

    if !response.status().is_success() {
      let error_text = response.text().await?;
      return Err(anyhow!("Failed to {what}: {error_text}"));
    }

    let result: BaseResponse<T> = response.json().await?;
    Ok(result.data)
  }

  /// Dashboard statistics under the given filter
  pub async fn stats(
    &self,
    category: Option<&str>,
    min_reviews: u64,
  ) -> Result<DashboardStatsResponse> {
    let path = format!("/pois/stats?{}", filter_query(category, min_reviews, None));
    self.get_json(&path, "fetch dashboard stats").await
  }

  /// Filtered POI listing
  pub async fn pois(
    &self,
    category: Option<&str>,
    min_reviews: u64,
    limit: Option<usize>,
  ) -> Result<PoiListResponse> {
    let path = format!("/pois?{}", filter_query(category, min_reviews, limit));
    self.get_json(&path, "fetch POIs").await
  }

  /// Distinct categories
  pub async fn categories(&self) -> Result<CategoriesResponse> {
    self.get_json("/pois/categories", "fetch categories").await
  }

  /// Map layer catalog
  pub async fn layers(&self) -> Result<LayerCatalogResponse> {
    self.get_json("/layers", "fetch layer catalog").await
  }

  /// Business-type taxonomy and map extent
  pub async fn catalog(&self) -> Result<CatalogResponse> {
    self.get_json("/catalog", "fetch catalog").await
  }

  /// Mall listing
  pub async fn malls(&self) -> Result<VenueListResponse> {
    self.get_json("/malls", "fetch malls").await
  }

  /// Bank listing
  pub async fn banks(&self) -> Result<VenueListResponse> {
    self.get_json("/banks", "fetch banks").await
  }

  /// Address lookup by business name
  pub async fn locations(&self, business_name: &str) -> Result<LocationsResponse> {
    let path = format!("/locations?business_name={}", urlencode(business_name));
    self.get_json(&path, "fetch locations").await
  }

  /// Cross-table directory search
  pub async fn search(&self, query: &str) -> Result<SearchResponse> {
    let path = format!("/search?query={}", urlencode(query));
    self.get_json(&path, "search directory").await
  }

  /// Location suitability prediction
  pub async fn predict(&self, request: &PredictionRequest) -> Result<Prediction> {
    self.post_json("/predict", request, "predict location score").await
  }

  /// Server logs
  pub async fn logs(&self) -> Result<LogsResponse> {
    self.get_json("/logs", "fetch logs").await
  }

  /// Check if the server is reachable
  pub async fn health_check(&self) -> Result<()> {
    let url = format!("{}/status", self.config.base_url);
    let response = timeout(
      Duration::from_secs(5), // Shorter timeout for health checks
      self.client.get(&url).send(),
    )
    .await??;

    if response.status().is_success() {
      Ok(())
    } else {
      Err(anyhow!("Server health check failed: {}", response.status()))
    }
  }
}

fn filter_query(category: Option<&str>, min_reviews: u64, limit: Option<usize>) -> String {
  let mut parts = vec![format!("min_reviews={min_reviews}")];
  if let Some(category) = category {
    parts.push(format!("category={}", urlencode(category)));
  }
  if let Some(limit) = limit {
    parts.push(format!("limit={limit}"));
  }
  parts.join("&")
}

fn urlencode(value: &str) -> String {
  url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Get the configured client (checks environment variables)
pub fn get_client() -> AtlasClient {
  let base_url =
    std::env::var("ATLAS_SERVER_URL").unwrap_or_else(|_| "http://localhost:4600".to_string());

  let timeout_secs = std::env::var("ATLAS_TIMEOUT_SECS")
    .unwrap_or_else(|_| "60".to_string())
    .parse()
    .unwrap_or(60);

  let config = ClientConfig { base_url, timeout_secs };

  AtlasClient::with_config(config)
}
