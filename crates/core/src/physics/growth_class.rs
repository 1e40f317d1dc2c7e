//! Standard t² fire growth classes (NFPA 72 / NFPA 92 design fires).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reference heat release rate used to define the growth classes (kW, ~1000 BTU/s)
pub const REFERENCE_HRR_KW: f64 = 1055.0;

/// Conventional t² growth class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FireGrowthClass {
    /// Reaches 1055 kW after 600 s (e.g. dense wood products)
    Slow,
    /// Reaches 1055 kW after 300 s (e.g. solid wood furniture)
    Medium,
    /// Reaches 1055 kW after 150 s (e.g. upholstered furniture, stacked pallets)
    Fast,
    /// Reaches 1055 kW after 75 s (e.g. pool fires, high-rack storage)
    UltraFast,
}

impl FireGrowthClass {
    /// Every class, slowest first
    pub const ALL: [FireGrowthClass; 4] = [
        FireGrowthClass::Slow,
        FireGrowthClass::Medium,
        FireGrowthClass::Fast,
        FireGrowthClass::UltraFast,
    ];

    /// Growth coefficient α in `Q = α × t²` (kW/s²)
    pub fn growth_coefficient(self) -> f64 {
        match self {
            FireGrowthClass::Slow => 0.00293,
            FireGrowthClass::Medium => 0.01172,
            FireGrowthClass::Fast => 0.0469,
            FireGrowthClass::UltraFast => 0.1876,
        }
    }

    /// Time for the curve to reach [`REFERENCE_HRR_KW`] (s)
    pub fn time_to_reference(self) -> f64 {
        (REFERENCE_HRR_KW / self.growth_coefficient()).sqrt()
    }
}

impl fmt::Display for FireGrowthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FireGrowthClass::Slow => "slow",
            FireGrowthClass::Medium => "medium",
            FireGrowthClass::Fast => "fast",
            FireGrowthClass::UltraFast => "ultra-fast",
        };
        f.write_str(name)
    }
}

/// Error returned when a growth class name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGrowthClass(pub String);

impl fmt::Display for UnknownGrowthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown growth class '{}' (expected slow, medium, fast or ultra-fast)",
            self.0
        )
    }
}

impl std::error::Error for UnknownGrowthClass {}

impl FromStr for FireGrowthClass {
    type Err = UnknownGrowthClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Ok(FireGrowthClass::Slow),
            "medium" => Ok(FireGrowthClass::Medium),
            "fast" => Ok(FireGrowthClass::Fast),
            "ultra-fast" | "ultrafast" | "ultra_fast" => Ok(FireGrowthClass::UltraFast),
            _ => Err(UnknownGrowthClass(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_times() {
        let expected = [
            (FireGrowthClass::Slow, 600.0),
            (FireGrowthClass::Medium, 300.0),
            (FireGrowthClass::Fast, 150.0),
            (FireGrowthClass::UltraFast, 75.0),
        ];
        for (class, seconds) in expected {
            let t = class.time_to_reference();
            assert!(
                (t - seconds).abs() < 1.0,
                "{class} should reach 1055 kW near {seconds} s, got {t}"
            );
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for class in [
            FireGrowthClass::Slow,
            FireGrowthClass::Medium,
            FireGrowthClass::Fast,
            FireGrowthClass::UltraFast,
        ] {
            assert_eq!(class.to_string().parse::<FireGrowthClass>(), Ok(class));
        }
        assert_eq!("UltraFast".parse::<FireGrowthClass>(), Ok(FireGrowthClass::UltraFast));
        assert!("blazing".parse::<FireGrowthClass>().is_err());
    }
}
