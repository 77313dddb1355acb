//! HTTP client for the remote table store
//!
//! A thin query-building client over the store's REST interface. The
//! client is constructed explicitly and passed to whatever needs it;
//! there is no ambient singleton, which keeps tests free to substitute
//! an in-memory source.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::model::{AddressRecord, SearchHit, Venue};

/// Default number of rows requested per page
pub const DEFAULT_PAGE_SIZE: usize = 1000;

const DEFAULT_STORE_URL: &str = "http://localhost:54321";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Columns selected for directory venue listings
const VENUE_COLUMNS: &str = "id,title,category_name,price,address,street,rank,latitude,longitude";
const VENUE_COLUMNS_WITH_POSTAL: &str =
  "id,title,category_name,price,address,street,rank,latitude,longitude,postal_code";

/// Errors produced by the store client
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("store configuration invalid: {0}")]
  Configuration(String),

  #[error("request to {url} failed: {source}")]
  Request {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("store returned HTTP {status} for {url}: {body}")]
  Status { status: u16, url: String, body: String },

  #[error("failed decoding rows from {url}: {source}")]
  Decode {
    url: String,
    #[source]
    source: reqwest::Error,
  },
}

/// Configuration for the table store client
#[derive(Debug, Clone)]
pub struct StoreConfig {
  /// Base URL of the table store (e.g., "http://localhost:54321")
  pub base_url: String,
  /// API key sent with every request, if the store requires one
  pub api_key: Option<String>,
  /// Request timeout in seconds
  pub timeout_secs: u64,
  /// Rows requested per page by the harvest loop
  pub page_size: usize,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_STORE_URL.to_string(),
      api_key: None,
      timeout_secs: DEFAULT_TIMEOUT_SECS,
      page_size: DEFAULT_PAGE_SIZE,
    }
  }
}

impl StoreConfig {
  /// Build configuration from environment variables, with defaults
  pub fn from_env() -> Self {
    let base_url =
      std::env::var("ATLAS_STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());

    let api_key = std::env::var("ATLAS_STORE_KEY").ok().filter(|key| !key.is_empty());

    let timeout_secs = std::env::var("ATLAS_STORE_TIMEOUT_SECS")
      .ok()
      .and_then(|value| value.parse().ok())
      .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let page_size = std::env::var("ATLAS_STORE_PAGE_SIZE")
      .ok()
      .and_then(|value| value.parse().ok())
      .unwrap_or(DEFAULT_PAGE_SIZE);

    Self { base_url, api_key, timeout_secs, page_size }
  }
}

/// Query-building HTTP client for the table store
pub struct StoreClient {
  http: Client,
  config: StoreConfig,
}

impl StoreClient {
  /// Create a client with the given configuration
  pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
    Url::parse(&config.base_url)
      .map_err(|err| StoreError::Configuration(format!("bad base URL {}: {err}", config.base_url)))?;

    let http = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .map_err(|err| StoreError::Configuration(format!("failed building HTTP client: {err}")))?;

    Ok(Self { http, config })
  }

  /// Create a client from environment configuration
  pub fn from_env() -> Result<Self, StoreError> {
    Self::new(StoreConfig::from_env())
  }

  /// Active configuration
  pub fn config(&self) -> &StoreConfig {
    &self.config
  }

  /// Start a query against `table`
  pub fn table(&self, table: &str) -> TableQuery<'_> {
    TableQuery {
      client: self,
      table: table.to_string(),
      select: None,
      filters: Vec::new(),
      order: None,
      range: None,
    }
  }

  /// Column-selected mall listing
  pub async fn list_malls(&self) -> Result<Vec<Venue>, StoreError> {
    self.table("malls").select(VENUE_COLUMNS_WITH_POSTAL).fetch().await
  }

  /// Column-selected bank listing
  pub async fn list_banks(&self) -> Result<Vec<Venue>, StoreError> {
    self.table("banks").select(VENUE_COLUMNS).fetch().await
  }

  /// Address lookup by business name, ordered by title
  ///
  /// An empty name short-circuits to an empty result instead of querying.
  pub async fn find_locations(&self, business_name: &str) -> Result<Vec<AddressRecord>, StoreError> {
    let business_name = business_name.trim();
    if business_name.is_empty() {
      return Ok(Vec::new());
    }

    self
      .table("address")
      .ilike("title", &format!("*{business_name}*"))
      .order("title")
      .fetch()
      .await
  }

  /// Title search across the salon, hospital, and bank tables
  ///
  /// The three tables are queried concurrently and each hit is tagged
  /// with its source type. A table that fails contributes no hits
  /// rather than failing the whole search.
  pub async fn search_directory(&self, query: &str) -> Result<Vec<SearchHit>, StoreError> {
    let query = query.trim();
    if query.is_empty() {
      return Ok(Vec::new());
    }

    let pattern = format!("*{query}*");
    let (salons, hospitals, banks) = tokio::join!(
      self.table("salons").ilike("title", &pattern).fetch::<Venue>(),
      self.table("hospitals").ilike("title", &pattern).fetch::<Venue>(),
      self.table("banks").ilike("title", &pattern).fetch::<Venue>(),
    );

    let mut results = Vec::new();
    for (kind, rows) in [("salon", salons), ("hospital", hospitals), ("bank", banks)] {
      let Ok(rows) = rows else {
        continue;
      };
      results.extend(rows.into_iter().map(|venue| SearchHit { kind: kind.to_string(), venue }));
    }

    Ok(results)
  }
}

/// A single-table query under construction
pub struct TableQuery<'a> {
  client: &'a StoreClient,
  table: String,
  select: Option<String>,
  filters: Vec<(String, String)>,
  order: Option<String>,
  range: Option<(usize, usize)>,
}

impl TableQuery<'_> {
  /// Restrict the selected columns (defaults to all)
  pub fn select(mut self, columns: &str) -> Self {
    self.select = Some(columns.to_string());
    self
  }

  /// Case-insensitive pattern filter on `column` (`*` wildcards)
  pub fn ilike(mut self, column: &str, pattern: &str) -> Self {
    self.filters.push((column.to_string(), format!("ilike.{pattern}")));
    self
  }

  /// Exact-match filter on `column`
  pub fn eq(mut self, column: &str, value: &str) -> Self {
    self.filters.push((column.to_string(), format!("eq.{value}")));
    self
  }

  /// Ascending order by `column`
  pub fn order(mut self, column: &str) -> Self {
    self.order = Some(format!("{column}.asc"));
    self
  }

  /// Row range, inclusive on both ends
  pub fn range(mut self, from: usize, to: usize) -> Self {
    self.range = Some((from, to));
    self
  }

  /// Assemble the request URL
  pub fn url(&self) -> Result<Url, StoreError> {
    let mut url = Url::parse(&self.client.config.base_url).map_err(|err| {
      StoreError::Configuration(format!("bad base URL {}: {err}", self.client.config.base_url))
    })?;

    url
      .path_segments_mut()
      .map_err(|_| StoreError::Configuration("base URL cannot hold a path".to_string()))?
      .pop_if_empty()
      .extend(["rest", "v1", self.table.as_str()]);

    {
      let mut pairs = url.query_pairs_mut();
      pairs.append_pair("select", self.select.as_deref().unwrap_or("*"));
      for (column, expression) in &self.filters {
        pairs.append_pair(column, expression);
      }
      if let Some(order) = &self.order {
        pairs.append_pair("order", order);
      }
      if let Some((from, to)) = self.range {
        let limit = to.saturating_sub(from) + 1;
        pairs.append_pair("offset", &from.to_string());
        pairs.append_pair("limit", &limit.to_string());
      }
    }

    Ok(url)
  }

  /// Execute the query, decoding the result rows
  pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, StoreError> {
    let url = self.url()?;

    let mut request = self.client.http.get(url.clone());
    if let Some(key) = &self.client.config.api_key {
      request = request.header("apikey", key).bearer_auth(key);
    }

    let response = request
      .send()
      .await
      .map_err(|source| StoreError::Request { url: url.to_string(), source })?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(StoreError::Status { status: status.as_u16(), url: url.to_string(), body });
    }

    response
      .json::<Vec<T>>()
      .await
      .map_err(|source| StoreError::Decode { url: url.to_string(), source })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_client() -> StoreClient {
    StoreClient::new(StoreConfig {
      base_url: "http://store.test".to_string(),
      ..StoreConfig::default()
    })
    .unwrap()
  }

  #[test]
  fn url_defaults_to_select_all() {
    let client = test_client();
    let url = client.table("pois").url().unwrap();
    assert_eq!(url.as_str(), "http://store.test/rest/v1/pois?select=*");
  }

  #[test]
  fn url_carries_select_filters_and_order() {
    let client = test_client();
    let url = client
      .table("address")
      .select("id,title")
      .ilike("title", "*cafe*")
      .order("title")
      .url()
      .unwrap();
    assert_eq!(
      url.as_str(),
      "http://store.test/rest/v1/address?select=id%2Ctitle&title=ilike.*cafe*&order=title.asc"
    );
  }

  #[test]
  fn url_translates_inclusive_range_to_offset_and_limit() {
    let client = test_client();
    let url = client.table("pois").range(1000, 1999).url().unwrap();
    assert_eq!(
      url.as_str(),
      "http://store.test/rest/v1/pois?select=*&offset=1000&limit=1000"
    );
  }

  #[test]
  fn url_range_of_one_row() {
    let client = test_client();
    let url = client.table("pois").range(5, 5).url().unwrap();
    assert!(url.as_str().contains("offset=5&limit=1"));
  }

  #[test]
  fn new_rejects_malformed_base_url() {
    let result = StoreClient::new(StoreConfig {
      base_url: "not a url".to_string(),
      ..StoreConfig::default()
    });
    assert!(matches!(result, Err(StoreError::Configuration(_))));
  }

  #[test]
  fn base_url_with_trailing_slash_joins_cleanly() {
    let client = StoreClient::new(StoreConfig {
      base_url: "http://store.test/".to_string(),
      ..StoreConfig::default()
    })
    .unwrap();
    let url = client.table("pois").url().unwrap();
    assert_eq!(url.as_str(), "http://store.test/rest/v1/pois?select=*");
  }
}
