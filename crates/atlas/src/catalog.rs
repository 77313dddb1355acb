//! Static reference data: business types, display colors, map extent
//!
//! The explorer views key everything off a small fixed taxonomy of
//! business types. Keys match the upstream dataset names; labels and
//! colors are what the presentation layer shows.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry in the business-type taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessType {
  /// Dataset key, e.g. "coffeeshops"
  pub key: &'static str,
  /// Display label, e.g. "Cafe"
  pub label: &'static str,
  /// Display color as a hex string
  pub color: &'static str,
}

/// Every known business type
pub const BUSINESS_TYPES: [BusinessType; 9] = [
  BusinessType { key: "bakeries", label: "Bakery", color: "#FF6B6B" },
  BusinessType { key: "coffeeshops", label: "Cafe", color: "#C3A6A0" },
  BusinessType { key: "hospitals", label: "Healthcare", color: "#45B7D1" },
  BusinessType { key: "malls", label: "Shopping Mall", color: "#4ECDC4" },
  BusinessType { key: "pizzashops", label: "Restaurant", color: "#FF8C42" },
  BusinessType { key: "realestate", label: "Real Estate", color: "#95A5A6" },
  BusinessType { key: "salons", label: "Beauty Salon", color: "#FFE66D" },
  BusinessType { key: "schools", label: "Education", color: "#96CEB4" },
  BusinessType { key: "supermarkets", label: "Retail", color: "#2ECC71" },
];

/// Color used for labels outside the taxonomy
pub const DEFAULT_COLOR: &str = "#666666";

/// Display label for a dataset key
pub fn label_for(key: &str) -> Option<&'static str> {
  BUSINESS_TYPES.iter().find(|entry| entry.key == key).map(|entry| entry.label)
}

/// Display color for a label, falling back to [`DEFAULT_COLOR`]
pub fn color_for(label: &str) -> &'static str {
  BUSINESS_TYPES
    .iter()
    .find(|entry| entry.label == label)
    .map(|entry| entry.color)
    .unwrap_or(DEFAULT_COLOR)
}

/// A WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoPoint {
  pub latitude: f64,
  pub longitude: f64,
}

/// Rectangular map extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MapBounds {
  pub north: f64,
  pub south: f64,
  pub east: f64,
  pub west: f64,
}

/// Default map viewport center (Lahore)
pub const CITY_CENTER: GeoPoint = GeoPoint { latitude: 31.5204, longitude: 74.3587 };

/// Default map viewport bounds (Lahore)
pub const CITY_BOUNDS: MapBounds =
  MapBounds { north: 31.6354, south: 31.4018, east: 74.5019, west: 74.2284 };

impl MapBounds {
  /// Whether a point falls inside these bounds
  pub fn contains(&self, point: GeoPoint) -> bool {
    point.latitude <= self.north
      && point.latitude >= self.south
      && point.longitude <= self.east
      && point.longitude >= self.west
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn label_lookup_by_dataset_key() {
    assert_eq!(label_for("coffeeshops"), Some("Cafe"));
    assert_eq!(label_for("unknown"), None);
  }

  #[test]
  fn color_lookup_falls_back_to_default() {
    assert_eq!(color_for("Cafe"), "#C3A6A0");
    assert_eq!(color_for("Nonexistent"), DEFAULT_COLOR);
  }

  #[test]
  fn city_center_sits_inside_city_bounds() {
    assert!(CITY_BOUNDS.contains(CITY_CENTER));
  }

  #[test]
  fn bounds_exclude_far_away_points() {
    assert!(!CITY_BOUNDS.contains(GeoPoint { latitude: 0.0, longitude: 0.0 }));
  }
}
