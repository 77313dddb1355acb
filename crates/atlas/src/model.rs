//! POI record types and ingestion-time normalization
//!
//! The store delivers loosely-typed rows: every field optional, counts
//! encoded as numeric text. Normalization happens exactly once, at
//! ingestion, so the aggregation engine never re-checks for missing
//! fields.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A POI row as delivered by the remote table store
///
/// One corrupt field never rejects the row; conversion to [`Poi`]
/// defaults anything missing or malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPoi {
  #[serde(default)]
  pub latitude: Option<f64>,
  #[serde(default)]
  pub longitude: Option<f64>,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub category_name: Option<String>,
  #[serde(default)]
  pub reviews_count: Option<String>,
  #[serde(default)]
  pub address: Option<String>,
  #[serde(default)]
  pub postal_code: Option<String>,
  #[serde(default)]
  pub source: Option<String>,
  #[serde(default)]
  pub total_score: Option<String>,
  #[serde(default)]
  pub reviews_distribution_one_star: Option<String>,
  #[serde(default)]
  pub reviews_distribution_two_star: Option<String>,
  #[serde(default)]
  pub reviews_distribution_three_star: Option<String>,
  #[serde(default)]
  pub reviews_distribution_four_star: Option<String>,
  #[serde(default)]
  pub reviews_distribution_five_star: Option<String>,
}

/// Review counts broken out by star rating, display-only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RatingDistribution {
  pub one_star: u64,
  pub two_star: u64,
  pub three_star: u64,
  pub four_star: u64,
  pub five_star: u64,
}

impl RatingDistribution {
  /// Total reviews across all star buckets
  pub fn total(&self) -> u64 {
    self.one_star + self.two_star + self.three_star + self.four_star + self.five_star
  }
}

/// A normalized point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Poi {
  pub latitude: f64,
  pub longitude: f64,
  pub title: String,
  pub category: String,
  /// Review count, coerced to a non-negative integer at ingestion
  pub reviews: u64,
  pub address: String,
  pub postal_code: String,
  pub source: String,
  pub total_score: f64,
  pub ratings: RatingDistribution,
}

impl From<RawPoi> for Poi {
  fn from(raw: RawPoi) -> Self {
    Self {
      latitude: raw.latitude.unwrap_or(0.0),
      longitude: raw.longitude.unwrap_or(0.0),
      title: raw.title.unwrap_or_default(),
      category: raw.category_name.unwrap_or_default(),
      reviews: coerce_count(raw.reviews_count.as_deref()),
      address: raw.address.unwrap_or_default(),
      postal_code: raw.postal_code.unwrap_or_default(),
      source: raw.source.unwrap_or_default(),
      total_score: coerce_score(raw.total_score.as_deref()),
      ratings: RatingDistribution {
        one_star: coerce_count(raw.reviews_distribution_one_star.as_deref()),
        two_star: coerce_count(raw.reviews_distribution_two_star.as_deref()),
        three_star: coerce_count(raw.reviews_distribution_three_star.as_deref()),
        four_star: coerce_count(raw.reviews_distribution_four_star.as_deref()),
        five_star: coerce_count(raw.reviews_distribution_five_star.as_deref()),
      },
    }
  }
}

/// Coerce numeric text to a non-negative count
///
/// Parses a leading run of digits the way the upstream feed was consumed
/// (so `"120 reviews"` reads as 120). Missing, non-numeric, and negative
/// values all coerce to 0.
pub fn coerce_count(raw: Option<&str>) -> u64 {
  let Some(text) = raw else {
    return 0;
  };
  let text = text.trim();

  // Negative counts violate the non-negativity invariant; clamp to zero
  if text.starts_with('-') {
    return 0;
  }

  let unsigned = text.strip_prefix('+').unwrap_or(text);
  let digits: &str = {
    let end = unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len());
    &unsigned[..end]
  };

  digits.parse().unwrap_or(0)
}

/// Coerce numeric text to a score, defaulting to 0.0
pub fn coerce_score(raw: Option<&str>) -> f64 {
  raw.and_then(|text| text.trim().parse().ok()).unwrap_or(0.0)
}

/// A directory venue row (malls, banks, salons, hospitals)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Venue {
  #[serde(default)]
  pub id: Option<i64>,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub category_name: String,
  #[serde(default)]
  pub price: Option<String>,
  #[serde(default)]
  pub address: String,
  #[serde(default)]
  pub street: String,
  #[serde(default)]
  pub rank: Option<i64>,
  #[serde(default)]
  pub latitude: Option<f64>,
  #[serde(default)]
  pub longitude: Option<f64>,
  #[serde(default)]
  pub postal_code: Option<String>,
}

/// A row from the address lookup table
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AddressRecord {
  #[serde(default)]
  pub id: Option<i64>,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub address: String,
  #[serde(default)]
  pub postal_code: Option<String>,
  #[serde(default)]
  pub latitude: Option<f64>,
  #[serde(default)]
  pub longitude: Option<f64>,
}

/// A cross-table search hit, tagged with the table it came from
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchHit {
  /// Source table type: "salon", "hospital", or "bank"
  pub kind: String,
  #[serde(flatten)]
  pub venue: Venue,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn coerce_count_parses_plain_integers() {
    assert_eq!(coerce_count(Some("120")), 120);
    assert_eq!(coerce_count(Some("0")), 0);
    assert_eq!(coerce_count(Some(" 42 ")), 42);
  }

  #[test]
  fn coerce_count_defaults_missing_and_invalid() {
    assert_eq!(coerce_count(None), 0);
    assert_eq!(coerce_count(Some("")), 0);
    assert_eq!(coerce_count(Some("n/a")), 0);
  }

  #[test]
  fn coerce_count_reads_numeric_prefix() {
    assert_eq!(coerce_count(Some("120 reviews")), 120);
    assert_eq!(coerce_count(Some("7.5")), 7);
    assert_eq!(coerce_count(Some("+12")), 12);
  }

  #[test]
  fn coerce_count_clamps_negatives_to_zero() {
    assert_eq!(coerce_count(Some("-5")), 0);
    assert_eq!(coerce_count(Some("-0")), 0);
  }

  #[test]
  fn coerce_score_parses_floats() {
    assert_eq!(coerce_score(Some("4.5")), 4.5);
    assert_eq!(coerce_score(Some("bad")), 0.0);
    assert_eq!(coerce_score(None), 0.0);
  }

  #[test]
  fn raw_poi_with_all_fields_missing_normalizes_to_defaults() {
    let poi = Poi::from(RawPoi::default());
    assert_eq!(poi.reviews, 0);
    assert_eq!(poi.category, "");
    assert_eq!(poi.postal_code, "");
    assert_eq!(poi.total_score, 0.0);
    assert_eq!(poi.ratings.total(), 0);
  }

  #[test]
  fn raw_poi_normalizes_rating_distribution() {
    let raw = RawPoi {
      reviews_count: Some("10".to_string()),
      reviews_distribution_one_star: Some("1".to_string()),
      reviews_distribution_five_star: Some("6".to_string()),
      ..RawPoi::default()
    };
    let poi = Poi::from(raw);
    assert_eq!(poi.reviews, 10);
    assert_eq!(poi.ratings.one_star, 1);
    assert_eq!(poi.ratings.five_star, 6);
    assert_eq!(poi.ratings.total(), 7);
  }

  #[test]
  fn raw_poi_null_reviews_count_deserializes_and_coerces() {
    // Scenario: the feed delivers an explicit null for reviews_count
    let raw: RawPoi = serde_json::from_str(
      r#"{"latitude": 31.5, "longitude": 74.3, "title": "Cafe One", "reviews_count": null}"#,
    )
    .unwrap();
    let poi = Poi::from(raw);
    assert_eq!(poi.reviews, 0);
    assert_eq!(poi.title, "Cafe One");
  }
}
