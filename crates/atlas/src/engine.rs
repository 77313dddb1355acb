//! Aggregation and filtering over the in-memory POI set
//!
//! Everything here is a pure function of (record set, filter state):
//! no I/O, no hidden state, and nothing that can fail. An empty set
//! degrades to zeros and absent extrema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::model::Poi;

/// Dashboard filter state
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PoiFilter {
  /// Exact-match category; `None` or empty means no category filter
  pub category: Option<String>,
  /// Minimum review count, inclusive
  pub min_reviews: u64,
}

impl PoiFilter {
  /// Whether `poi` passes this filter
  pub fn matches(&self, poi: &Poi) -> bool {
    let category_ok = match self.category.as_deref() {
      None | Some("") => true,
      Some(category) => poi.category == category,
    };
    category_ok && poi.reviews >= self.min_reviews
  }
}

/// The currently visible subset under `filter`
pub fn filter_pois<'a>(pois: &'a [Poi], filter: &PoiFilter) -> Vec<&'a Poi> {
  pois.iter().filter(|poi| filter.matches(poi)).collect()
}

/// Distinct non-empty categories, sorted for the filter dropdown
pub fn unique_categories(pois: &[Poi]) -> Vec<String> {
  let set: BTreeSet<&str> =
    pois.iter().map(|poi| poi.category.as_str()).filter(|category| !category.is_empty()).collect();
  set.into_iter().map(str::to_string).collect()
}

/// All statistics shown on the insights dashboard
///
/// Computed over the unfiltered record set; the filtered count lives
/// beside this in the API response because it depends on filter state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DashboardStats {
  /// Size of the full record set
  pub total_pois: usize,
  /// Number of distinct non-empty categories
  pub total_categories: usize,
  /// Sum of review counts
  pub total_reviews: u64,
  /// Total reviews over total POIs, rounded; 0 for an empty set
  pub average_reviews: u64,
  /// Record with the highest review count (first occurrence wins ties)
  pub most_reviewed: Option<Poi>,
  /// Record with the lowest review count (first occurrence wins ties)
  pub least_reviewed: Option<Poi>,
  /// Category with the most records; ties break lexicographically
  pub most_common_category: Option<String>,
  /// Number of distinct non-empty postal codes
  pub unique_postal_codes: usize,
  /// Number of distinct non-empty data sources
  pub unique_sources: usize,
}

impl DashboardStats {
  /// Derive every dashboard statistic from the record set
  pub fn compute(pois: &[Poi]) -> Self {
    let total_pois = pois.len();
    let total_reviews: u64 = pois.iter().map(|poi| poi.reviews).sum();

    let average_reviews = if total_pois == 0 {
      0
    } else {
      (total_reviews as f64 / total_pois as f64).round() as u64
    };

    // Left-to-right folds with strict comparisons keep the first
    // occurrence on ties
    let mut most_reviewed: Option<&Poi> = None;
    let mut least_reviewed: Option<&Poi> = None;
    for poi in pois {
      match most_reviewed {
        Some(best) if poi.reviews <= best.reviews => {}
        _ => most_reviewed = Some(poi),
      }
      match least_reviewed {
        Some(worst) if poi.reviews >= worst.reviews => {}
        _ => least_reviewed = Some(poi),
      }
    }

    let mut category_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for poi in pois {
      if !poi.category.is_empty() {
        *category_counts.entry(poi.category.as_str()).or_insert(0) += 1;
      }
    }
    let total_categories = category_counts.len();

    // BTreeMap iterates in lexicographic order, so a strict `>` keeps
    // the lexicographically smallest category on count ties
    let mut most_common_category: Option<(&str, usize)> = None;
    for (&category, &count) in &category_counts {
      match most_common_category {
        Some((_, best)) if count <= best => {}
        _ => most_common_category = Some((category, count)),
      }
    }

    let unique_postal_codes = pois
      .iter()
      .map(|poi| poi.postal_code.as_str())
      .filter(|code| !code.is_empty())
      .collect::<HashSet<_>>()
      .len();

    let unique_sources = pois
      .iter()
      .map(|poi| poi.source.as_str())
      .filter(|source| !source.is_empty())
      .collect::<HashSet<_>>()
      .len();

    Self {
      total_pois,
      total_categories,
      total_reviews,
      average_reviews,
      most_reviewed: most_reviewed.cloned(),
      least_reviewed: least_reviewed.cloned(),
      most_common_category: most_common_category.map(|(category, _)| category.to_string()),
      unique_postal_codes,
      unique_sources,
    }
  }
}
