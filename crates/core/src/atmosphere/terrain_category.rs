//! Eurocode EN 1991-1-4 terrain categories (Table 4.1).
//!
//! Each category fixes the aerodynamic roughness length `z0` and the minimum
//! height `z_min` below which the mean wind profile is held constant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Terrain category from EN 1991-1-4 Table 4.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainCategory {
    /// Category 0: sea or coastal area exposed to the open sea
    Zero,
    /// Category I: lakes or flat, horizontal area with negligible vegetation and
    /// without obstacles
    I,
    /// Category II: low vegetation such as grass and isolated obstacles (trees,
    /// buildings) with separations of at least 20 obstacle heights
    II,
    /// Category III: regular cover of vegetation or buildings, or isolated obstacles
    /// with separations of at most 20 obstacle heights (villages, suburbs, forest)
    III,
    /// Category IV: at least 15% of the surface covered with buildings whose average
    /// height exceeds 15 m
    IV,
}

impl TerrainCategory {
    /// All categories, roughest last.
    pub const ALL: [TerrainCategory; 5] = [
        TerrainCategory::Zero,
        TerrainCategory::I,
        TerrainCategory::II,
        TerrainCategory::III,
        TerrainCategory::IV,
    ];

    /// Aerodynamic roughness length `z0` (m)
    pub fn roughness_length(self) -> f64 {
        match self {
            TerrainCategory::Zero => 0.003,
            TerrainCategory::I => 0.01,
            TerrainCategory::II => 0.05,
            TerrainCategory::III => 0.3,
            TerrainCategory::IV => 1.0,
        }
    }

    /// Minimum height `z_min` (m)
    pub fn minimum_height(self) -> f64 {
        match self {
            TerrainCategory::Zero | TerrainCategory::I => 1.0,
            TerrainCategory::II => 2.0,
            TerrainCategory::III => 5.0,
            TerrainCategory::IV => 10.0,
        }
    }

    /// Roman-numeral label used in the standard.
    pub fn label(self) -> &'static str {
        match self {
            TerrainCategory::Zero => "0",
            TerrainCategory::I => "I",
            TerrainCategory::II => "II",
            TerrainCategory::III => "III",
            TerrainCategory::IV => "IV",
        }
    }
}

impl fmt::Display for TerrainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category {}", self.label())
    }
}

/// Error returned when a terrain category label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTerrainCategory(pub String);

impl fmt::Display for UnknownTerrainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown terrain category '{}' (expected one of 0, I, II, III, IV)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTerrainCategory {}

impl FromStr for TerrainCategory {
    type Err = UnknownTerrainCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "0" | "ZERO" => Ok(TerrainCategory::Zero),
            "I" | "1" => Ok(TerrainCategory::I),
            "II" | "2" => Ok(TerrainCategory::II),
            "III" | "3" => Ok(TerrainCategory::III),
            "IV" | "4" => Ok(TerrainCategory::IV),
            _ => Err(UnknownTerrainCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        assert_eq!(TerrainCategory::Zero.roughness_length(), 0.003);
        assert_eq!(TerrainCategory::Zero.minimum_height(), 1.0);
        assert_eq!(TerrainCategory::II.roughness_length(), 0.05);
        assert_eq!(TerrainCategory::II.minimum_height(), 2.0);
        assert_eq!(TerrainCategory::IV.roughness_length(), 1.0);
        assert_eq!(TerrainCategory::IV.minimum_height(), 10.0);
    }

    #[test]
    fn test_roughness_increases_with_category() {
        for pair in TerrainCategory::ALL.windows(2) {
            assert!(pair[1].roughness_length() > pair[0].roughness_length());
            assert!(pair[1].minimum_height() >= pair[0].minimum_height());
        }
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("iii".parse::<TerrainCategory>(), Ok(TerrainCategory::III));
        assert_eq!(" 0 ".parse::<TerrainCategory>(), Ok(TerrainCategory::Zero));
        assert_eq!("4".parse::<TerrainCategory>(), Ok(TerrainCategory::IV));
        assert!("V".parse::<TerrainCategory>().is_err());

        for category in TerrainCategory::ALL {
            assert_eq!(category.label().parse::<TerrainCategory>(), Ok(category));
        }
    }
}
