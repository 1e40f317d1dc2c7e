//! Logarithmic atmospheric boundary layer wind profile (EN 1991-1-4)
//!
//! Mean wind and inflow turbulence for a CFD domain, following the Eurocode
//! 1991-1-4 log law:
//!
//! ```text
//! k_r   = 0.19 × (z0 / z0,II)^0.07
//! c_r   = k_r × ln(max(z, z_min) / z0)
//! v_m   = c_r × c_0 × v_b
//! I_v   = k_r × v_b × k_I / v_m(max(z, z_min))
//! k     = 1.5 × (v_m × I_v)²
//! ε     = C_μ^0.75 × k^1.5 / L
//! ω     = k^0.5 / C_μ^0.25 × L
//! ```
//!
//! where `L = 0.07 × H` is the turbulence length scale for a domain of height `H`.
//! Below `z_min` the profile is constant; at or below the ground datum every
//! velocity and turbulence quantity is zero.
//!
//! # References
//!
//! - EN 1991-1-4:2005, Eurocode 1: Actions on structures, Part 1-4: Wind actions,
//!   §4.3 (mean wind) and §4.4 (wind turbulence), Table 4.1.
//! - Richards, P.J. & Hoxey, R.P. (1993). "Appropriate boundary conditions for
//!   computational wind engineering models using the k-ε turbulence model."

use crate::atmosphere::terrain_category::TerrainCategory;
use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Constants of the Eurocode profile and the k-ε / k-ω closure
pub mod constants {
    /// Roughness length of terrain category II, the normalisation reference (m)
    pub const Z0_II: f64 = 0.05;

    /// Turbulence model closure constant `C_μ`
    pub const C_MU: f64 = 0.09;

    /// Leading coefficient of the terrain factor `k_r`
    pub const TERRAIN_FACTOR_COEFFICIENT: f64 = 0.19;

    /// Exponent of the terrain factor `k_r`
    pub const TERRAIN_FACTOR_EXPONENT: f64 = 0.07;

    /// Turbulence length scale as a fraction of domain height
    pub const LENGTH_SCALE_FRACTION: f64 = 0.07;
}

use constants::{
    C_MU, LENGTH_SCALE_FRACTION, TERRAIN_FACTOR_COEFFICIENT, TERRAIN_FACTOR_EXPONENT, Z0_II,
};

/// Input parameters for the wind profile
///
/// Defaults reproduce a category 0 (open sea) site with a 22 m/s basic wind
/// blowing from 270° inside a 400 m tall domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindProfileConfig {
    /// Aerodynamic roughness length `z0` (m)
    pub z0: f64,

    /// Minimum height `z_min` (m); the profile is constant below it
    pub z_min: f64,

    /// Computational domain height (m), sets the turbulence length scale
    pub zone_height: f64,

    /// Fundamental basic wind velocity at 10 m (m/s)
    pub vb0: f64,

    /// Directional factor (national annex, usually 1.0)
    pub c_dir: f64,

    /// Seasonal factor (national annex, usually 1.0)
    pub c_season: f64,

    /// Orography factor (1.0 unless §4.3.3 applies)
    pub c0z: f64,

    /// Turbulence factor (usually 1.0)
    pub k_i: f64,

    /// Wind direction, clockwise degrees from true north
    pub wind_direction_deg: f64,

    /// True north to plant north correction, clockwise positive (degrees)
    pub true_north_correction_deg: f64,
}

impl Default for WindProfileConfig {
    fn default() -> Self {
        Self {
            z0: TerrainCategory::Zero.roughness_length(),
            z_min: TerrainCategory::Zero.minimum_height(),
            zone_height: 400.0,
            vb0: 22.0,
            c_dir: 1.0,
            c_season: 1.0,
            c0z: 1.0,
            k_i: 1.0,
            wind_direction_deg: 270.0,
            true_north_correction_deg: 0.0,
        }
    }
}

impl WindProfileConfig {
    /// Default configuration with `z0` and `z_min` taken from a terrain category
    pub fn for_terrain(category: TerrainCategory) -> Self {
        Self::default().with_terrain(category)
    }

    /// Replace `z0` and `z_min` with the values of a terrain category
    pub fn with_terrain(mut self, category: TerrainCategory) -> Self {
        self.z0 = category.roughness_length();
        self.z_min = category.minimum_height();
        self
    }

    /// Combined wind heading in radians (direction plus true-north correction)
    pub fn heading(&self) -> f64 {
        (self.wind_direction_deg + self.true_north_correction_deg).to_radians()
    }

    /// Design basic wind velocity `v_b = v_b,0 × c_dir × c_season` (m/s)
    pub fn basic_velocity(&self) -> f64 {
        self.vb0 * self.c_dir * self.c_season
    }

    /// Check that the parameters describe a physical profile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("z0", self.z0)?;
        ensure_positive("z_min", self.z_min)?;
        ensure_positive("zone_height", self.zone_height)?;
        ensure_non_negative("vb0", self.vb0)?;
        ensure_non_negative("c_dir", self.c_dir)?;
        ensure_non_negative("c_season", self.c_season)?;
        ensure_non_negative("c0z", self.c0z)?;
        ensure_non_negative("k_i", self.k_i)?;
        ensure_finite("wind_direction_deg", self.wind_direction_deg)?;
        ensure_finite("true_north_correction_deg", self.true_north_correction_deg)?;
        Ok(())
    }
}

/// All profile quantities at one height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    /// Height above the ground datum (m)
    pub z: f64,
    /// Velocity component along x (m/s)
    pub vx: f64,
    /// Velocity component along y (m/s)
    pub vy: f64,
    /// Turbulence intensity (-)
    pub turbulence_intensity: f64,
    /// Turbulent kinetic energy (m²/s²)
    pub tke: f64,
    /// Dissipation rate ε (m²/s³)
    pub epsilon: f64,
    /// Specific dissipation rate ω (1/s)
    pub omega: f64,
}

/// Eurocode log-law wind profile
///
/// Built once from a [`WindProfileConfig`]; every height-independent term is
/// computed at construction and the value is never mutated afterwards, so a
/// model can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindProfileModel {
    config: WindProfileConfig,
    terrain_factor: f64,
    basic_velocity: f64,
    velocity_reduction: f64,
    length_scale: f64,
    heading: f64,
}

impl WindProfileModel {
    /// Build the profile, caching the height-independent terms.
    ///
    /// No validation is performed here; see [`WindProfileConfig::validate`].
    pub fn new(config: WindProfileConfig) -> Self {
        let terrain_factor =
            TERRAIN_FACTOR_COEFFICIENT * (config.z0 / Z0_II).powf(TERRAIN_FACTOR_EXPONENT);
        let basic_velocity = config.basic_velocity();
        let velocity_reduction = terrain_factor * basic_velocity * config.k_i;
        let length_scale = LENGTH_SCALE_FRACTION * config.zone_height;
        let heading = config.heading();

        debug!(
            kr = terrain_factor,
            vb = basic_velocity,
            del_v = velocity_reduction,
            length_scale,
            theta = heading,
            "wind profile initialised"
        );

        Self {
            config,
            terrain_factor,
            basic_velocity,
            velocity_reduction,
            length_scale,
            heading,
        }
    }

    /// Configuration this model was built from
    pub fn config(&self) -> &WindProfileConfig {
        &self.config
    }

    /// Terrain factor `k_r = 0.19 × (z0 / z0,II)^0.07`
    pub fn roughness_factor(&self) -> f64 {
        self.terrain_factor
    }

    /// Design basic wind velocity `v_b` (m/s)
    pub fn basic_velocity(&self) -> f64 {
        self.basic_velocity
    }

    /// Standard deviation of turbulence `σ_v = k_r × v_b × k_I` (m/s)
    pub fn velocity_reduction_factor(&self) -> f64 {
        self.velocity_reduction
    }

    /// Wind heading θ in radians
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Turbulence length scale `L = 0.07 × H` (m)
    pub fn length_scale(&self) -> f64 {
        self.length_scale
    }

    /// Roughness factor `c_r(z) = k_r × ln(max(z, z_min) / z0)`
    ///
    /// Heights at or below `z_min` are evaluated at `z_min`; this is the
    /// Eurocode minimum-height rule, not an error.
    pub fn roughness_log_term(&self, z: f64) -> f64 {
        let z_eff = self.effective_height(z);
        self.terrain_factor * (z_eff / self.config.z0).ln()
    }

    /// Height raised to `z_min`; NaN passes through
    fn effective_height(&self, z: f64) -> f64 {
        if z <= self.config.z_min {
            self.config.z_min
        } else {
            z
        }
    }

    /// Mean wind velocity `v_m(z)` (m/s), zero at or below ground
    pub fn mean_velocity(&self, z: f64) -> f64 {
        if z <= 0.0 {
            return 0.0;
        }
        self.roughness_log_term(z) * self.config.c0z * self.basic_velocity
    }

    /// Turbulence intensity `I_v(z)`, zero at or below ground
    pub fn turbulence_intensity(&self, z: f64) -> f64 {
        if z <= 0.0 {
            return 0.0;
        }
        self.velocity_reduction / self.mean_velocity(self.effective_height(z))
    }

    /// Turbulent kinetic energy `k = 1.5 × (v_m × I_v)²` (m²/s²)
    pub fn turbulent_kinetic_energy(&self, z: f64) -> f64 {
        if z <= 0.0 {
            return 0.0;
        }
        1.5 * (self.mean_velocity(z) * self.turbulence_intensity(z)).powi(2)
    }

    /// Turbulence dissipation rate `ε = C_μ^0.75 × k^1.5 / L` (m²/s³)
    ///
    /// No ground guard is needed: `k` is already zero there.
    pub fn dissipation_rate(&self, z: f64) -> f64 {
        let k = self.turbulent_kinetic_energy(z);
        C_MU.powf(0.75) * k.powf(1.5) / self.length_scale
    }

    /// Specific dissipation rate `ω = k^0.5 / C_μ^0.25 × L` (1/s)
    ///
    /// The length scale multiplies here, unlike the usual closure
    /// `ω = k^0.5 / (C_μ^0.25 × L)`. Existing case results depend on this form.
    pub fn specific_dissipation_rate(&self, z: f64) -> f64 {
        let k = self.turbulent_kinetic_energy(z);
        k.sqrt() / C_MU.powf(0.25) * self.length_scale
    }

    /// Velocity components `(sin θ × v_m, cos θ × v_m)` for an explicit heading
    pub fn velocity_components(&self, z: f64, heading_rad: f64) -> (f64, f64) {
        let vm = self.mean_velocity(z);
        (heading_rad.sin() * vm, heading_rad.cos() * vm)
    }

    /// Velocity components for the configured heading
    pub fn velocity(&self, z: f64) -> (f64, f64) {
        self.velocity_components(z, self.heading)
    }

    /// Evaluate every quantity at one height
    pub fn sample(&self, z: f64) -> ProfileSample {
        let (vx, vy) = self.velocity(z);
        ProfileSample {
            z,
            vx,
            vy,
            turbulence_intensity: self.turbulence_intensity(z),
            tke: self.turbulent_kinetic_energy(z),
            epsilon: self.dissipation_rate(z),
            omega: self.specific_dissipation_rate(z),
        }
    }
}

impl Default for WindProfileModel {
    fn default() -> Self {
        Self::new(WindProfileConfig::default())
    }
}

impl From<WindProfileConfig> for WindProfileModel {
    fn from(config: WindProfileConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn open_sea() -> WindProfileModel {
        WindProfileModel::default()
    }

    #[test]
    fn test_roughness_factor_reference_site() {
        let model = open_sea();
        let expected = 0.19 * (0.003_f64 / 0.05).powf(0.07);
        assert_relative_eq!(model.roughness_factor(), expected, epsilon = 1e-12);
        assert_relative_eq!(model.roughness_factor(), 0.15604, epsilon = 1e-4);
    }

    #[test]
    fn test_category_ii_has_unit_normalisation() {
        // z0 == z0,II gives k_r == 0.19 exactly
        let model = WindProfileModel::new(WindProfileConfig::for_terrain(TerrainCategory::II));
        assert_relative_eq!(model.roughness_factor(), 0.19, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_velocity_at_minimum_height() {
        let model = open_sea();
        let expected = model.roughness_factor() * (1.0_f64 / 0.003).ln() * 22.0;
        assert_relative_eq!(model.mean_velocity(1.0), expected, epsilon = 1e-12);
        assert_relative_eq!(model.mean_velocity(1.0), 19.94, epsilon = 0.01);
    }

    #[test]
    fn test_below_ground_is_zero() {
        let model = open_sea();
        for z in [0.0, -0.5, -100.0] {
            assert_eq!(model.mean_velocity(z), 0.0);
            assert_eq!(model.turbulence_intensity(z), 0.0);
            assert_eq!(model.turbulent_kinetic_energy(z), 0.0);
            assert_eq!(model.dissipation_rate(z), 0.0);
            assert_eq!(model.specific_dissipation_rate(z), 0.0);
            assert_eq!(model.velocity(z), (0.0, 0.0));
        }
    }

    #[test]
    fn test_constant_below_minimum_height() {
        let model = WindProfileModel::new(WindProfileConfig::for_terrain(TerrainCategory::III));
        let at_min = model.mean_velocity(5.0);
        for z in [0.01, 1.0, 2.5, 4.999] {
            assert_eq!(model.mean_velocity(z), at_min);
            assert_eq!(model.turbulence_intensity(z), model.turbulence_intensity(5.0));
        }
        assert!(model.mean_velocity(5.5) > at_min);
    }

    #[test]
    fn test_roughness_log_term_clamps_negative_heights() {
        // The log term itself only applies the z_min floor
        let model = open_sea();
        assert_eq!(model.roughness_log_term(-3.0), model.roughness_log_term(1.0));
    }

    #[test]
    fn test_nan_height_propagates() {
        let model = open_sea();
        assert!(model.roughness_log_term(f64::NAN).is_nan());
        assert!(model.mean_velocity(f64::NAN).is_nan());
        assert!(model.turbulence_intensity(f64::NAN).is_nan());
        assert!(model.turbulent_kinetic_energy(f64::NAN).is_nan());
        assert!(model.dissipation_rate(f64::NAN).is_nan());
    }

    #[test]
    fn test_turbulence_intensity_decreases_with_height() {
        let model = open_sea();
        let low = model.turbulence_intensity(2.0);
        let high = model.turbulence_intensity(200.0);
        assert!(high < low, "I_v should fall with height: {low} -> {high}");
        assert_relative_eq!(
            model.turbulence_intensity(10.0),
            1.0 / (10.0_f64 / 0.003).ln(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_tke_uniform_with_unit_orography() {
        // With c0 = 1, v_m × I_v collapses to σ_v so k is height independent
        let model = open_sea();
        let sigma = model.velocity_reduction_factor();
        for z in [0.5, 1.0, 10.0, 150.0, 400.0] {
            assert_relative_eq!(
                model.turbulent_kinetic_energy(z),
                1.5 * sigma * sigma,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_dissipation_rates_reference_values() {
        let model = open_sea();
        let k = model.turbulent_kinetic_energy(10.0);
        assert_relative_eq!(model.length_scale(), 28.0, epsilon = 1e-12);
        assert_relative_eq!(
            model.dissipation_rate(10.0),
            0.09_f64.powf(0.75) * k.powf(1.5) / 28.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            model.specific_dissipation_rate(10.0),
            k.sqrt() / 0.09_f64.powf(0.25) * 28.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_velocity_components_follow_heading() {
        let model = open_sea();
        let vm = model.mean_velocity(50.0);

        // 270° heading: all velocity on -x
        let (vx, vy) = model.velocity(50.0);
        assert_relative_eq!(vx, -vm, epsilon = 1e-9);
        assert_relative_eq!(vy, 0.0, epsilon = 1e-6);

        let (vx, vy) = model.velocity_components(50.0, 0.0);
        assert_eq!(vx, 0.0);
        assert_eq!(vy, vm);

        let (vx, vy) = model.velocity_components(50.0, 1.234);
        assert_relative_eq!(vx.hypot(vy), vm, epsilon = 1e-9);
    }

    #[test]
    fn test_true_north_correction_adds_to_direction() {
        let config = WindProfileConfig {
            wind_direction_deg: 80.0,
            true_north_correction_deg: 10.0,
            ..Default::default()
        };
        assert_relative_eq!(config.heading(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_basic_velocity_factors() {
        let config = WindProfileConfig {
            vb0: 20.0,
            c_dir: 0.9,
            c_season: 0.8,
            k_i: 0.5,
            ..Default::default()
        };
        let model = WindProfileModel::new(config);
        assert_relative_eq!(model.basic_velocity(), 14.4, epsilon = 1e-12);
        assert_relative_eq!(
            model.velocity_reduction_factor(),
            model.roughness_factor() * 14.4 * 0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sample_matches_individual_calls() {
        let model = open_sea();
        let sample = model.sample(37.5);
        assert_eq!(sample.z, 37.5);
        assert_eq!((sample.vx, sample.vy), model.velocity(37.5));
        assert_eq!(sample.tke, model.turbulent_kinetic_energy(37.5));
        assert_eq!(sample.epsilon, model.dissipation_rate(37.5));
        assert_eq!(sample.omega, model.specific_dissipation_rate(37.5));
    }

    #[test]
    fn test_validate_rejects_bad_roughness() {
        assert!(WindProfileConfig::default().validate().is_ok());

        let config = WindProfileConfig {
            z0: 0.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("z0"));

        let config = WindProfileConfig {
            zone_height: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field(), Some("zone_height"));
    }

    #[test]
    fn test_degenerate_roughness_is_not_finite() {
        // Unvalidated degenerate input propagates NaN/Inf rather than panicking
        let model = WindProfileModel::new(WindProfileConfig {
            z0: 0.0,
            ..Default::default()
        });
        assert!(!model.mean_velocity(10.0).is_finite());
    }
}
