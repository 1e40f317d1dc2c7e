//! Complete profile configuration, loaded once and frozen.
//!
//! A [`SimulationConfig`] bundles the wind profile, the fire curve and the
//! ground datum. It is the place where parameters are validated: the models
//! trust whatever they are given.
//!
//! # Example
//! ```
//! use cfd_profiles_core::SimulationConfig;
//!
//! let config = SimulationConfig::from_json_str(r#"{ "wind": { "vb0": 26.0 } }"#).unwrap();
//! assert_eq!(config.wind.vb0, 26.0);
//! assert_eq!(config.fire.hrr_max, 2500.0);
//! ```

use crate::adapter::HeightDatum;
use crate::atmosphere::{WindProfileConfig, WindProfileModel};
use crate::error::{ensure_finite, ConfigError};
use crate::physics::{FireCurveConfig, FireCurveModel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Wind, fire and datum parameters for one CFD case
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Inflow wind profile
    pub wind: WindProfileConfig,
    /// Fire growth curve
    pub fire: FireCurveConfig,
    /// Ground reference for boundary face heights
    pub datum: HeightDatum,
}

impl SimulationConfig {
    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wind.validate()?;
        self.fire.validate()?;
        ensure_finite("ground_z", self.datum.ground_z)?;
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or a validation error.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if let Err(err) = config.validate() {
            warn!("Rejected profile configuration: {err}");
            return Err(err);
        }
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`SimulationConfig::from_json_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!("Loaded profile configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration cannot be serialized or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Wind profile model for this configuration
    pub fn wind_model(&self) -> WindProfileModel {
        WindProfileModel::new(self.wind)
    }

    /// Fire curve model for this configuration
    pub fn fire_model(&self) -> FireCurveModel {
        FireCurveModel::new(self.fire)
    }
}
