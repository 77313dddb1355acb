//! Location suitability stub
//!
//! A deterministic dummy scorer, not a model: the score and feature
//! map are derived entirely from the request, so identical requests
//! always produce identical responses. It exists to give the
//! prediction page a stable backend while the real model is out of
//! scope.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A prediction request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PredictionRequest {
  pub latitude: f64,
  pub longitude: f64,
  pub category: String,
}

/// A prediction result
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Prediction {
  /// Suitability score in [3.0, 5.0], two decimals
  pub prediction: f64,
  /// Synthetic site-selection covariates backing the score
  pub features: BTreeMap<String, f64>,
  pub message: String,
}

/// Validation failure for a prediction request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRequest(pub &'static str);

impl std::fmt::Display for InvalidRequest {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl std::error::Error for InvalidRequest {}

/// Check a request before scoring it
pub fn validate(request: &PredictionRequest) -> Result<(), InvalidRequest> {
  if !request.latitude.is_finite() || !request.longitude.is_finite() {
    return Err(InvalidRequest("latitude and longitude must be finite numbers"));
  }
  if request.category.trim().is_empty() {
    return Err(InvalidRequest("Missing required fields: latitude, longitude, category"));
  }
  Ok(())
}

/// Combine the request into the seed everything else derives from
fn location_hash(request: &PredictionRequest) -> f64 {
  request.latitude * 100.0 + request.longitude + request.category.chars().count() as f64
}

fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
  (value * 1000.0).round() / 1000.0
}

/// Score a location for a business category
pub fn predict(request: &PredictionRequest) -> Prediction {
  let hash = location_hash(request);
  let score = round2(3.0 + hash.rem_euclid(200.0) / 100.0);

  let mut rng = StdRng::seed_from_u64(hash.to_bits());
  let mut features = BTreeMap::new();
  let mut put = |name: &str, value: f64| {
    features.insert(name.to_string(), round3(value));
  };

  put("pop-den", 1000.0 + rng.random_range(0.0..1000.0));
  put("ntl-den", 50.0 + rng.random_range(0.0..50.0));
  put("NDVI", 0.1 + rng.random_range(0.0..0.3));
  put("MNDWI", -0.2 + rng.random_range(0.0..0.3));
  put("NDBI", 0.1 + rng.random_range(0.0..0.2));
  put("distance_center", 1.0 + rng.random_range(0.0..5.0));
  put("popden_to_ntl_ratio", 20.0 + rng.random_range(0.0..10.0));
  put("popden_ntl_interaction", 80_000.0 + rng.random_range(0.0..40_000.0));
  put("ndbi_over_ndvi", 0.5 + rng.random_range(0.0..0.5));
  put("ndvi_minus_mndwi", 0.3 + rng.random_range(0.0..0.2));
  put("business_count_1km", (5 + rng.random_range(0..20)) as f64);
  put("business_count_5km", (50 + rng.random_range(0..100)) as f64);
  put("same_category_count_1km", (1 + rng.random_range(0..5)) as f64);
  put("same_category_count_5km", (5 + rng.random_range(0..15)) as f64);

  Prediction {
    prediction: score,
    features,
    message: "Prediction successful (dummy data)".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn request(latitude: f64, longitude: f64, category: &str) -> PredictionRequest {
    PredictionRequest { latitude, longitude, category: category.to_string() }
  }

  #[test]
  fn score_stays_in_band() {
    for (lat, lng, category) in [
      (31.5204, 74.3587, "Cafe"),
      (0.0, 0.0, "x"),
      (-33.9, 151.2, "Supermarket"),
      (89.9, -179.9, "Bank"),
    ] {
      let result = predict(&request(lat, lng, category));
      assert!(
        (3.0..=5.0).contains(&result.prediction),
        "score {} out of band for ({lat}, {lng})",
        result.prediction
      );
    }
  }

  #[test]
  fn identical_requests_yield_identical_responses() {
    let req = request(31.5204, 74.3587, "Restaurant");
    let first = predict(&req);
    let second = predict(&req);
    assert_eq!(first.prediction, second.prediction);
    assert_eq!(first.features, second.features);
  }

  #[test]
  fn different_locations_usually_differ() {
    let a = predict(&request(31.5204, 74.3587, "Cafe"));
    let b = predict(&request(31.6, 74.4, "Cafe"));
    assert_ne!(a.features, b.features);
  }

  #[test]
  fn score_rounds_to_two_decimals() {
    let result = predict(&request(31.5204, 74.3587, "Cafe"));
    let scaled = result.prediction * 100.0;
    assert!((scaled - scaled.round()).abs() < 1e-9);
  }

  #[test]
  fn feature_map_is_complete() {
    let result = predict(&request(31.5, 74.3, "Cafe"));
    for name in [
      "pop-den",
      "ntl-den",
      "NDVI",
      "MNDWI",
      "NDBI",
      "distance_center",
      "popden_to_ntl_ratio",
      "popden_ntl_interaction",
      "ndbi_over_ndvi",
      "ndvi_minus_mndwi",
      "business_count_1km",
      "business_count_5km",
      "same_category_count_1km",
      "same_category_count_5km",
    ] {
      assert!(result.features.contains_key(name), "missing feature {name}");
    }
  }

  #[test]
  fn validate_rejects_blank_category() {
    let result = validate(&request(31.5, 74.3, "  "));
    assert!(result.is_err());
  }

  #[test]
  fn validate_rejects_non_finite_coordinates() {
    assert!(validate(&request(f64::NAN, 74.3, "Cafe")).is_err());
    assert!(validate(&request(31.5, f64::INFINITY, "Cafe")).is_err());
  }

  #[test]
  fn validate_accepts_well_formed_requests() {
    assert!(validate(&request(31.5, 74.3, "Cafe")).is_ok());
  }
}
