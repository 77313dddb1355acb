//! Paginated harvest of the full POI table
//!
//! The store caps page sizes, so the full record set is assembled by
//! walking fixed-size pages at increasing offsets. The loop is
//! fail-soft: a page that cannot be fetched after retries ends the
//! harvest early with whatever accumulated, never an error. Callers
//! can tell a partial harvest apart from a full one via
//! [`HarvestOutcome::complete`].

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::model::{Poi, RawPoi};
use crate::store::{StoreClient, StoreError};

/// Extra attempts per page after the first failure
const PAGE_RETRY_LIMIT: u32 = 2;
/// Base backoff between retry attempts, scaled linearly
const RETRY_BACKOFF_MS: u64 = 200;

/// A source of POI pages
///
/// The production implementation is [`StoreClient`]; tests drive the
/// harvest loop with in-memory fakes.
#[async_trait]
pub trait PoiSource: Send + Sync {
  /// Fetch up to `limit` rows starting at `offset`
  async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<RawPoi>, StoreError>;
}

#[async_trait]
impl PoiSource for StoreClient {
  async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<RawPoi>, StoreError> {
    self.table("pois").range(offset, offset + limit.saturating_sub(1)).fetch().await
  }
}

/// Result of a harvest run
#[derive(Debug, Clone, Default)]
pub struct HarvestOutcome {
  /// Normalized records, in page order
  pub pois: Vec<Poi>,
  /// Number of page requests that returned rows or an empty tail page
  pub pages_fetched: usize,
  /// Whether the source reported end-of-data (false means a page
  /// request failed and the result is partial)
  pub complete: bool,
}

/// Fetch every row of the POI table, one page at a time
///
/// Termination: a page shorter than `page_size` signals end-of-data.
/// A table that is an exact multiple of the page size therefore costs
/// one final request that returns zero rows. Rows are normalized to
/// [`Poi`] as they arrive.
///
/// Dropping the returned future abandons the harvest; no work outlives
/// the caller.
pub async fn harvest(source: &dyn PoiSource, page_size: usize) -> HarvestOutcome {
  let mut outcome = HarvestOutcome::default();
  if page_size == 0 {
    outcome.complete = true;
    return outcome;
  }

  let mut offset = 0usize;
  loop {
    let page = match fetch_page_with_retry(source, offset, page_size).await {
      Ok(page) => page,
      Err(err) => {
        warn!(offset, error = %err, "page request failed, keeping partial harvest");
        return outcome;
      }
    };

    outcome.pages_fetched += 1;
    let fetched = page.len();
    outcome.pois.extend(page.into_iter().map(Poi::from));

    if fetched < page_size {
      outcome.complete = true;
      return outcome;
    }

    offset += page_size;
  }
}

async fn fetch_page_with_retry(
  source: &dyn PoiSource,
  offset: usize,
  limit: usize,
) -> Result<Vec<RawPoi>, StoreError> {
  let mut attempt = 0u32;
  loop {
    match source.fetch_page(offset, limit).await {
      Ok(page) => return Ok(page),
      Err(err) if attempt < PAGE_RETRY_LIMIT => {
        attempt += 1;
        debug!(offset, attempt, error = %err, "retrying page request");
        sleep(Duration::from_millis(RETRY_BACKOFF_MS * u64::from(attempt))).await;
      }
      Err(err) => return Err(err),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::atomic::{AtomicUsize, Ordering};

  /// In-memory page source over `total` synthetic rows
  struct FixtureSource {
    total: usize,
    requests: AtomicUsize,
    /// Fail this many leading attempts for the page at `fail_offset`
    fail_offset: Option<usize>,
    failures_to_inject: AtomicUsize,
  }

  impl FixtureSource {
    fn new(total: usize) -> Self {
      Self {
        total,
        requests: AtomicUsize::new(0),
        fail_offset: None,
        failures_to_inject: AtomicUsize::new(0),
      }
    }

    fn failing_at(total: usize, fail_offset: usize, failures: usize) -> Self {
      Self {
        total,
        requests: AtomicUsize::new(0),
        fail_offset: Some(fail_offset),
        failures_to_inject: AtomicUsize::new(failures),
      }
    }

    fn requests(&self) -> usize {
      self.requests.load(Ordering::SeqCst)
    }

    fn row(idx: usize) -> RawPoi {
      RawPoi {
        title: Some(format!("poi_{idx}")),
        reviews_count: Some(idx.to_string()),
        ..RawPoi::default()
      }
    }
  }

  #[async_trait]
  impl PoiSource for FixtureSource {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<RawPoi>, StoreError> {
      self.requests.fetch_add(1, Ordering::SeqCst);

      if self.fail_offset == Some(offset)
        && self
          .failures_to_inject
          .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
          .is_ok()
      {
        return Err(StoreError::Configuration("injected failure".to_string()));
      }

      let end = (offset + limit).min(self.total);
      Ok((offset..end.max(offset)).map(Self::row).collect())
    }
  }

  #[tokio::test]
  async fn empty_table_completes_after_one_request() {
    let source = FixtureSource::new(0);
    let outcome = harvest(&source, 10).await;
    assert!(outcome.complete);
    assert!(outcome.pois.is_empty());
    assert_eq!(source.requests(), 1);
  }

  #[tokio::test]
  async fn short_table_completes_in_one_page() {
    let source = FixtureSource::new(5);
    let outcome = harvest(&source, 10).await;
    assert!(outcome.complete);
    assert_eq!(outcome.pois.len(), 5);
    assert_eq!(outcome.pages_fetched, 1);
    assert_eq!(source.requests(), 1);
  }

  #[tokio::test]
  async fn exact_page_multiple_costs_one_trailing_empty_request() {
    // 20 rows at page size 10: two full pages, then the zero-row page
    // that proves end-of-data
    let source = FixtureSource::new(20);
    let outcome = harvest(&source, 10).await;
    assert!(outcome.complete);
    assert_eq!(outcome.pois.len(), 20);
    assert_eq!(source.requests(), 3);
  }

  #[tokio::test]
  async fn one_past_the_page_boundary_terminates() {
    let source = FixtureSource::new(11);
    let outcome = harvest(&source, 10).await;
    assert!(outcome.complete);
    assert_eq!(outcome.pois.len(), 11);
    assert_eq!(source.requests(), 2);
  }

  #[tokio::test]
  async fn table_equal_to_one_page_terminates() {
    let source = FixtureSource::new(10);
    let outcome = harvest(&source, 10).await;
    assert!(outcome.complete);
    assert_eq!(outcome.pois.len(), 10);
    assert_eq!(source.requests(), 2);
  }

  #[tokio::test]
  async fn rows_accumulate_in_page_order() {
    let source = FixtureSource::new(25);
    let outcome = harvest(&source, 10).await;
    let titles: Vec<_> = outcome.pois.iter().map(|poi| poi.title.as_str()).collect();
    assert_eq!(titles[0], "poi_0");
    assert_eq!(titles[24], "poi_24");
  }

  #[tokio::test]
  async fn persistent_failure_keeps_partial_harvest() {
    // Second page fails more times than the retry budget allows
    let source = FixtureSource::failing_at(30, 10, 10);
    let outcome = harvest(&source, 10).await;
    assert!(!outcome.complete);
    assert_eq!(outcome.pois.len(), 10);
    assert_eq!(outcome.pages_fetched, 1);
  }

  #[tokio::test]
  async fn transient_failure_is_retried_and_recovered() {
    // Two failures fit inside the retry budget, so the harvest completes
    let source = FixtureSource::failing_at(30, 10, 2);
    let outcome = harvest(&source, 10).await;
    assert!(outcome.complete);
    assert_eq!(outcome.pois.len(), 30);
  }

  #[tokio::test]
  async fn zero_page_size_returns_empty_without_requests() {
    let source = FixtureSource::new(50);
    let outcome = harvest(&source, 0).await;
    assert!(outcome.complete);
    assert!(outcome.pois.is_empty());
    assert_eq!(source.requests(), 0);
  }
}
