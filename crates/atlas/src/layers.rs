//! Map layer configuration for the dashboard visualizations
//!
//! The rendering itself belongs to the visualization widget; this
//! module only derives the configuration values it consumes: color
//! ramps, radii, and aggregation weights keyed off review counts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Review-count thresholds for the point color ramp
const RAMP_MID: u64 = 20;
const RAMP_HIGH: u64 = 100;

/// Point color above the high threshold (RGBA)
pub const COLOR_SECONDARY: [u8; 4] = [62, 80, 91, 220];
/// Point color between the thresholds (RGBA)
pub const COLOR_PRIMARY: [u8; 4] = [38, 65, 60, 220];
/// Point color at or below the mid threshold (RGBA)
pub const COLOR_ACCENT: [u8; 4] = [138, 176, 171, 200];

/// Shared six-step color range for the aggregation layers
pub const COLOR_RANGE: [[u8; 3]; 6] = [
  [138, 176, 171],
  [38, 65, 60],
  [62, 80, 91],
  [229, 231, 235],
  [153, 153, 153],
  [24, 24, 27],
];

/// Maximum records plotted by the label layer
pub const LABEL_LIMIT: usize = 200;

const RADIUS_MIN: f64 = 10.0;
const RADIUS_MAX: f64 = 40.0;

/// The dashboard's map layer modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
  Scatter,
  Heatmap,
  Hexbin,
  Grid,
  Column,
  Labels,
}

impl LayerKind {
  /// Every layer mode, in display order
  pub const ALL: [LayerKind; 6] = [
    LayerKind::Scatter,
    LayerKind::Heatmap,
    LayerKind::Hexbin,
    LayerKind::Grid,
    LayerKind::Column,
    LayerKind::Labels,
  ];

  /// Stable key used in API payloads and CLI arguments
  pub fn key(self) -> &'static str {
    match self {
      LayerKind::Scatter => "scatter",
      LayerKind::Heatmap => "heatmap",
      LayerKind::Hexbin => "hex",
      LayerKind::Grid => "grid",
      LayerKind::Column => "column",
      LayerKind::Labels => "text",
    }
  }

  /// Human-readable selector label
  pub fn label(self) -> &'static str {
    match self {
      LayerKind::Scatter => "Scatter",
      LayerKind::Heatmap => "Heatmap",
      LayerKind::Hexbin => "Hexbin",
      LayerKind::Grid => "Grid",
      LayerKind::Column => "3D Columns",
      LayerKind::Labels => "Labels",
    }
  }

  /// Explanation shown next to the layer selector
  pub fn explanation(self) -> &'static str {
    match self {
      LayerKind::Scatter => {
        "Shows each business as a circle. Size and color reflect the number of reviews. \
         Useful for seeing individual POIs."
      }
      LayerKind::Heatmap => {
        "Displays review density as a smooth heatmap. Brighter areas have more reviews. \
         Great for spotting hotspots."
      }
      LayerKind::Hexbin => {
        "Aggregates POIs into hexagonal bins. Height and color show review counts per bin. \
         Good for density analysis."
      }
      LayerKind::Grid => {
        "Aggregates POIs into square grid cells. Height and color show review counts per cell. \
         Useful for spatial patterns."
      }
      LayerKind::Column => {
        "Places a 3D column at each POI. Height and color represent review count. \
         Useful for visualizing volume per location."
      }
      LayerKind::Labels => {
        "Shows the name of each POI as a label. Useful for identifying specific businesses \
         (limited to 200 for clarity)."
      }
    }
  }
}

/// Fill color for a point given its review count
pub fn fill_color(reviews: u64) -> [u8; 4] {
  if reviews > RAMP_HIGH {
    COLOR_SECONDARY
  } else if reviews > RAMP_MID {
    COLOR_PRIMARY
  } else {
    COLOR_ACCENT
  }
}

/// Scatter point radius for a review count, clamped to [10, 40]
pub fn point_radius(reviews: u64) -> f64 {
  (RADIUS_MIN + (reviews as f64).sqrt() * 2.0).clamp(RADIUS_MIN, RADIUS_MAX)
}

/// Weight contributed to heat/hex/grid aggregation
///
/// Zero-review records still register with weight 1 so sparse areas
/// remain visible.
pub fn aggregation_weight(reviews: u64) -> u64 {
  reviews.max(1)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fill_color_follows_the_ramp_thresholds() {
    assert_eq!(fill_color(0), COLOR_ACCENT);
    assert_eq!(fill_color(20), COLOR_ACCENT);
    assert_eq!(fill_color(21), COLOR_PRIMARY);
    assert_eq!(fill_color(100), COLOR_PRIMARY);
    assert_eq!(fill_color(101), COLOR_SECONDARY);
  }

  #[test]
  fn point_radius_stays_clamped() {
    assert_eq!(point_radius(0), 10.0);
    assert_eq!(point_radius(1), 12.0);
    // sqrt(10000) * 2 = 200, clamped to the max
    assert_eq!(point_radius(10_000), 40.0);
  }

  #[test]
  fn point_radius_grows_with_reviews() {
    assert!(point_radius(4) < point_radius(25));
  }

  #[test]
  fn aggregation_weight_floors_at_one() {
    assert_eq!(aggregation_weight(0), 1);
    assert_eq!(aggregation_weight(1), 1);
    assert_eq!(aggregation_weight(37), 37);
  }

  #[test]
  fn layer_keys_are_distinct() {
    let keys: std::collections::HashSet<_> =
      LayerKind::ALL.iter().map(|layer| layer.key()).collect();
    assert_eq!(keys.len(), LayerKind::ALL.len());
  }

  #[test]
  fn every_layer_has_an_explanation() {
    for layer in LayerKind::ALL {
      assert!(!layer.explanation().is_empty());
    }
  }
}
