//! t-squared design fire source terms
//!
//! Heat and soot released from a fixed source volume by a fire growing as
//! `Q(t) = α × t²` until it reaches its peak heat release rate:
//!
//! ```text
//! q'''(t)    = min(Q_max, α t²) × 1000 / V          [W/m³]
//! m'''(t)    = q'''(t) / (ΔH_c × 10⁶) × Y_s / V     [kg/(s·m³)]
//! ```
//!
//! Both source terms come with a linearization term handed to the host's
//! implicit source coupling. The terms are the growth-phase derivatives
//! `2000 α t / V` and `α Y_s t / (500 ΔH_c V²)`; they are not switched off once
//! the curve has saturated at `Q_max`.
//!
//! # References
//!
//! - Heskestad, G. (1984). "Engineering relations for fire plumes." Fire Safety J. 7(1).
//! - Mulholland, G.W. (2002). "Smoke production and properties." SFPE Handbook, 3rd ed.

use crate::error::{ensure_positive, ConfigError};
use crate::physics::growth_class::FireGrowthClass;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// kW to W
const W_PER_KW: f64 = 1000.0;

/// MJ to J
const J_PER_MJ: f64 = 1.0e6;

/// Input parameters for the fire curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireCurveConfig {
    /// Peak heat release rate (kW)
    pub hrr_max: f64,

    /// Fire growth coefficient α (kW/s²)
    pub growth_coef: f64,

    /// Volume of the source region the heat is spread over (m³)
    pub src_vol: f64,

    /// Soot yield (kg soot / kg fuel)
    pub soot_yield: f64,

    /// Heat of combustion of the burning material (MJ/kg)
    pub heat_of_combustion: f64,
}

impl Default for FireCurveConfig {
    fn default() -> Self {
        Self {
            hrr_max: 2500.0,
            growth_coef: 0.045,
            src_vol: 10.5,
            soot_yield: 0.12,
            heat_of_combustion: 25.0,
        }
    }
}

impl FireCurveConfig {
    /// Replace the growth coefficient with a standard growth class
    pub fn with_growth_class(mut self, class: FireGrowthClass) -> Self {
        self.growth_coef = class.growth_coefficient();
        self
    }

    /// Check that every parameter is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("hrr_max", self.hrr_max)?;
        ensure_positive("growth_coef", self.growth_coef)?;
        ensure_positive("src_vol", self.src_vol)?;
        ensure_positive("soot_yield", self.soot_yield)?;
        ensure_positive("heat_of_combustion", self.heat_of_combustion)?;
        Ok(())
    }
}

/// Fire curve values at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireCurveSample {
    /// Simulation time (s)
    pub time: f64,
    /// Volumetric heat release rate (W/m³)
    pub heat_release_rate: f64,
    /// Whole-source heat release rate (kW)
    pub heat_release_kw: f64,
    /// Volumetric soot generation (kg/(s·m³))
    pub smoke_mass_flow: f64,
    /// Whole-source soot generation (kg/s)
    pub smoke_flow_total: f64,
}

/// t² fire growth curve for a volumetric heat and soot source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireCurveModel {
    config: FireCurveConfig,
}

impl FireCurveModel {
    /// Build the curve. No validation is performed; see [`FireCurveConfig::validate`].
    pub fn new(config: FireCurveConfig) -> Self {
        debug!(
            hrr_max = config.hrr_max,
            growth_coef = config.growth_coef,
            src_vol = config.src_vol,
            saturation_time = (config.hrr_max / config.growth_coef).sqrt(),
            "fire curve initialised"
        );
        Self { config }
    }

    /// Configuration this curve was built from
    pub fn config(&self) -> &FireCurveConfig {
        &self.config
    }

    /// Time at which `α t²` first reaches the peak heat release rate (s)
    pub fn saturation_time(&self) -> f64 {
        (self.config.hrr_max / self.config.growth_coef).sqrt()
    }

    /// Volumetric heat release rate (W/m³)
    ///
    /// Negative times are evaluated as-is; the quadratic is symmetric in `t`.
    pub fn heat_release_rate(&self, t: f64) -> f64 {
        let q_kw = self.config.hrr_max.min(self.config.growth_coef * t * t);
        q_kw * W_PER_KW / self.config.src_vol
    }

    /// Linearization term for the heat source, `2000 α t / V`
    pub fn heat_release_rate_time_derivative_term(&self, t: f64) -> f64 {
        2.0 * W_PER_KW * (self.config.growth_coef * t) / self.config.src_vol
    }

    /// Volumetric soot generation rate (kg/(s·m³))
    pub fn smoke_mass_flow(&self, t: f64) -> f64 {
        self.heat_release_rate(t) / (self.config.heat_of_combustion * J_PER_MJ)
            * self.config.soot_yield
            / self.config.src_vol
    }

    /// Linearization term for the soot source, `α Y_s t / (500 ΔH_c V²)`
    pub fn smoke_mass_flow_time_derivative_term(&self, t: f64) -> f64 {
        let c = &self.config;
        (c.growth_coef * c.soot_yield * t) / (500.0 * c.heat_of_combustion * c.src_vol * c.src_vol)
    }

    /// Heat release rate of the whole source (kW)
    pub fn total_heat_release_kw(&self, t: f64) -> f64 {
        self.heat_release_rate(t) / W_PER_KW * self.config.src_vol
    }

    /// Soot generation of the whole source (kg/s)
    pub fn total_smoke_flow(&self, t: f64) -> f64 {
        self.smoke_mass_flow(t) * self.config.src_vol
    }

    /// Evaluate every output at one instant
    pub fn sample(&self, t: f64) -> FireCurveSample {
        FireCurveSample {
            time: t,
            heat_release_rate: self.heat_release_rate(t),
            heat_release_kw: self.total_heat_release_kw(t),
            smoke_mass_flow: self.smoke_mass_flow(t),
            smoke_flow_total: self.total_smoke_flow(t),
        }
    }
}

impl Default for FireCurveModel {
    fn default() -> Self {
        Self::new(FireCurveConfig::default())
    }
}

impl From<FireCurveConfig> for FireCurveModel {
    fn from(config: FireCurveConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_at_ignition() {
        let curve = FireCurveModel::default();
        assert_eq!(curve.heat_release_rate(0.0), 0.0);
        assert_eq!(curve.smoke_mass_flow(0.0), 0.0);
        assert_eq!(curve.heat_release_rate_time_derivative_term(0.0), 0.0);
        assert_eq!(curve.smoke_mass_flow_time_derivative_term(0.0), 0.0);
    }

    #[test]
    fn test_growth_phase_value() {
        // 0.045 × 100² = 450 kW < 2500 kW
        let curve = FireCurveModel::default();
        assert_relative_eq!(curve.heat_release_rate(100.0), 450_000.0 / 10.5, epsilon = 1e-9);
        assert_relative_eq!(curve.heat_release_rate(100.0), 42857.142857, epsilon = 1e-5);
    }

    #[test]
    fn test_saturated_value() {
        // 0.045 × 300² = 4050 kW > 2500 kW
        let curve = FireCurveModel::default();
        assert_relative_eq!(curve.heat_release_rate(300.0), 2_500_000.0 / 10.5, epsilon = 1e-9);
        assert_relative_eq!(curve.heat_release_rate(300.0), 238095.238095, epsilon = 1e-5);
        assert_eq!(curve.heat_release_rate(300.0), curve.heat_release_rate(900.0));
    }

    #[test]
    fn test_saturation_time() {
        let curve = FireCurveModel::default();
        let ts = curve.saturation_time();
        assert_relative_eq!(ts, (2500.0_f64 / 0.045).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(curve.total_heat_release_kw(ts), 2500.0, epsilon = 1e-6);
        assert!(curve.total_heat_release_kw(ts * 0.9) < 2500.0);
    }

    #[test]
    fn test_smoke_is_yield_scaled_heat() {
        let curve = FireCurveModel::default();
        for t in [100.0, 300.0] {
            let expected = curve.heat_release_rate(t) * 0.12 / (25.0 * 1.0e6 * 10.5);
            assert_relative_eq!(curve.smoke_mass_flow(t), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_linearization_terms_keep_growing_after_saturation() {
        let curve = FireCurveModel::default();
        let before = curve.heat_release_rate_time_derivative_term(200.0);
        let after = curve.heat_release_rate_time_derivative_term(600.0);
        assert_eq!(curve.heat_release_rate(600.0), curve.heat_release_rate(400.0));
        assert!(after > before);
        assert_relative_eq!(after, 2000.0 * 0.045 * 600.0 / 10.5, epsilon = 1e-9);
    }

    #[test]
    fn test_linearization_matches_growth_slope() {
        // Central difference of the unclamped curve agrees with the analytic terms
        let curve = FireCurveModel::default();
        let t = 120.0;
        let h = 1e-3;
        let dq = (curve.heat_release_rate(t + h) - curve.heat_release_rate(t - h)) / (2.0 * h);
        let dm = (curve.smoke_mass_flow(t + h) - curve.smoke_mass_flow(t - h)) / (2.0 * h);
        assert_relative_eq!(curve.heat_release_rate_time_derivative_term(t), dq, max_relative = 1e-6);
        assert_relative_eq!(curve.smoke_mass_flow_time_derivative_term(t), dm, max_relative = 1e-6);
    }

    #[test]
    fn test_negative_time_is_evaluated() {
        let curve = FireCurveModel::default();
        assert_eq!(curve.heat_release_rate(-100.0), curve.heat_release_rate(100.0));
        assert!(curve.heat_release_rate_time_derivative_term(-100.0) < 0.0);
    }

    #[test]
    fn test_whole_source_totals() {
        let curve = FireCurveModel::default();
        let sample = curve.sample(100.0);
        assert_relative_eq!(sample.heat_release_kw, 450.0, epsilon = 1e-9);
        // The volumetric rate is divided by V twice, so the total keeps one 1/V
        assert_relative_eq!(
            sample.smoke_flow_total,
            450_000.0 / 10.5 / 25.0e6 * 0.12,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_growth_class_override() {
        let config = FireCurveConfig::default().with_growth_class(FireGrowthClass::Fast);
        assert_eq!(config.growth_coef, 0.0469);
        assert_eq!(config.hrr_max, 2500.0);
    }

    #[test]
    fn test_validate() {
        assert!(FireCurveConfig::default().validate().is_ok());
        let config = FireCurveConfig {
            src_vol: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field(), Some("src_vol"));
    }
}
