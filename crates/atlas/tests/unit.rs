//! End-to-end pipeline tests: fixture source -> harvest -> engine

use async_trait::async_trait;

use atlas::engine::{filter_pois, unique_categories, DashboardStats, PoiFilter};
use atlas::fetch::{harvest, PoiSource};
use atlas::model::{Poi, RawPoi};
use atlas::store::StoreError;

/// In-memory page source serving a fixed row set
struct RowSource {
  rows: Vec<RawPoi>,
}

impl RowSource {
  fn new(rows: Vec<RawPoi>) -> Self {
    Self { rows }
  }

  fn synthetic(total: usize) -> Self {
    let rows = (0..total)
      .map(|idx| RawPoi {
        title: Some(format!("poi_{idx}")),
        category_name: Some(if idx % 2 == 0 { "Cafe" } else { "Bank" }.to_string()),
        reviews_count: Some(idx.to_string()),
        ..RawPoi::default()
      })
      .collect();
    Self { rows }
  }
}

#[async_trait]
impl PoiSource for RowSource {
  async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<RawPoi>, StoreError> {
    let end = (offset + limit).min(self.rows.len());
    if offset >= self.rows.len() {
      return Ok(Vec::new());
    }
    Ok(self.rows[offset..end].to_vec())
  }
}

fn raw(title: &str, category: &str, reviews: &str) -> RawPoi {
  RawPoi {
    title: Some(title.to_string()),
    category_name: Some(category.to_string()),
    reviews_count: Some(reviews.to_string()),
    ..RawPoi::default()
  }
}

#[tokio::test]
async fn category_and_threshold_filter_selects_expected_subset() {
  // Two records, a category filter, and a review threshold only the
  // first record clears
  let source = RowSource::new(vec![raw("cafe_one", "Cafe", "10"), raw("bank_one", "Bank", "0")]);

  let outcome = harvest(&source, 1000).await;
  assert!(outcome.complete);
  assert_eq!(outcome.pois.len(), 2);

  let filter = PoiFilter { category: Some("Cafe".to_string()), min_reviews: 5 };
  let filtered = filter_pois(&outcome.pois, &filter);

  assert_eq!(filtered.len(), 1);
  assert_eq!(filtered[0].title, "cafe_one");
}

#[tokio::test]
async fn empty_source_degrades_every_statistic() {
  let source = RowSource::new(Vec::new());

  let outcome = harvest(&source, 1000).await;
  assert!(outcome.complete);

  let stats = DashboardStats::compute(&outcome.pois);
  assert_eq!(stats.total_pois, 0);
  assert_eq!(stats.average_reviews, 0);
  assert!(stats.most_reviewed.is_none());
  assert_eq!(stats.total_categories, 0);
  assert!(unique_categories(&outcome.pois).is_empty());
}

#[tokio::test]
async fn two_thousand_records_at_page_size_one_thousand() {
  // Exactly two full pages plus the trailing zero-row request proving
  // end-of-data
  let source = RowSource::synthetic(2000);

  let outcome = harvest(&source, 1000).await;
  assert!(outcome.complete);
  assert_eq!(outcome.pois.len(), 2000);
  assert_eq!(outcome.pages_fetched, 3);
}

#[tokio::test]
async fn null_reviews_count_flows_through_totals() {
  let source = RowSource::new(vec![
    RawPoi { title: Some("no_reviews".to_string()), reviews_count: None, ..RawPoi::default() },
    raw("reviewed", "Cafe", "8"),
  ]);

  let outcome = harvest(&source, 1000).await;
  let stats = DashboardStats::compute(&outcome.pois);

  assert_eq!(stats.total_pois, 2);
  assert_eq!(stats.total_reviews, 8);
  assert_eq!(stats.average_reviews, 4);
}

#[tokio::test]
async fn pagination_round_trip_returns_exactly_n_records() {
  for total in [0usize, 1, 9, 10, 11, 20, 25] {
    let source = RowSource::synthetic(total);
    let outcome = harvest(&source, 10).await;
    assert!(outcome.complete, "harvest of {total} rows should complete");
    assert_eq!(outcome.pois.len(), total, "harvest of {total} rows");
  }
}

#[tokio::test]
async fn filtered_count_bounded_by_total_for_many_filters() {
  let source = RowSource::synthetic(100);
  let outcome = harvest(&source, 30).await;

  for category in [None, Some("Cafe".to_string()), Some("Bank".to_string())] {
    for min_reviews in [0u64, 1, 50, 1000] {
      let filter = PoiFilter { category: category.clone(), min_reviews };
      let filtered = filter_pois(&outcome.pois, &filter);
      assert!(filtered.len() <= outcome.pois.len());

      let review_sum: u64 = filtered.iter().map(|poi| poi.reviews).sum();
      let total_sum: u64 = outcome.pois.iter().map(|poi| poi.reviews).sum();
      assert!(review_sum <= total_sum);
    }
  }
}

#[tokio::test]
async fn stats_are_stable_across_recomputation() {
  let source = RowSource::synthetic(50);
  let outcome = harvest(&source, 10).await;

  let first = DashboardStats::compute(&outcome.pois);
  let second = DashboardStats::compute(&outcome.pois);

  assert_eq!(serde_json::to_value(&first).unwrap(), serde_json::to_value(&second).unwrap());
}

#[tokio::test]
async fn extrema_come_from_the_harvested_set() {
  let source = RowSource::synthetic(25);
  let outcome = harvest(&source, 7).await;
  let stats = DashboardStats::compute(&outcome.pois);

  let most = stats.most_reviewed.expect("non-empty set has a maximum");
  let least = stats.least_reviewed.expect("non-empty set has a minimum");

  assert!(outcome.pois.iter().all(|poi: &Poi| poi.reviews <= most.reviews));
  assert!(outcome.pois.iter().all(|poi: &Poi| poi.reviews >= least.reviews));
}
