//! Named callback registry.
//!
//! CFD hosts bind boundary profiles and cell sources by name. The standard
//! registry exposes the wind profile under the callback names used by the
//! existing case files (`x_vel_profile`, `k_profile`, ...) and the fire curve
//! under `heat_release` / `soot_release`.

use crate::adapter::boundary::{BoundaryProfile, WindBoundary, WindQuantity};
use crate::adapter::source::{FireSource, FireSourceKind, SourceTerm, VolumetricSource};
use crate::config::SimulationConfig;
use crate::core_types::Position;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Callback names registered by [`ProfileRegistry::standard`]
pub mod callback_names {
    /// x velocity inlet profile
    pub const X_VELOCITY: &str = "x_vel_profile";
    /// y velocity inlet profile
    pub const Y_VELOCITY: &str = "y_vel_profile";
    /// Turbulent kinetic energy inlet profile
    pub const TKE: &str = "k_profile";
    /// Dissipation rate inlet profile
    pub const DISSIPATION: &str = "e_profile";
    /// Specific dissipation rate inlet profile
    pub const SPECIFIC_DISSIPATION: &str = "sdr_profile";
    /// Energy source
    pub const HEAT_RELEASE: &str = "heat_release";
    /// Soot mass source
    pub const SOOT_RELEASE: &str = "soot_release";
}

/// Boundary profiles and volumetric sources looked up by callback name
#[derive(Default)]
pub struct ProfileRegistry {
    profiles: FxHashMap<String, Box<dyn BoundaryProfile>>,
    sources: FxHashMap<String, Box<dyn VolumetricSource>>,
}

impl ProfileRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the standard wind and fire callbacks for `config`
    pub fn standard(config: &SimulationConfig) -> Self {
        use callback_names as names;

        let wind = config.wind_model();
        let fire = config.fire_model();
        let datum = config.datum;

        let mut registry = Self::new();
        for (name, quantity) in [
            (names::X_VELOCITY, WindQuantity::VelocityX),
            (names::Y_VELOCITY, WindQuantity::VelocityY),
            (names::TKE, WindQuantity::TurbulentKineticEnergy),
            (names::DISSIPATION, WindQuantity::DissipationRate),
            (names::SPECIFIC_DISSIPATION, WindQuantity::SpecificDissipationRate),
        ] {
            registry.register_profile(name, WindBoundary::new(quantity, wind, datum));
        }
        registry.register_source(
            names::HEAT_RELEASE,
            FireSource::new(FireSourceKind::HeatRelease, fire),
        );
        registry.register_source(names::SOOT_RELEASE, FireSource::new(FireSourceKind::Soot, fire));

        debug!(
            profiles = registry.profiles.len(),
            sources = registry.sources.len(),
            "standard profile registry built"
        );
        registry
    }

    /// Register a boundary profile, replacing any previous one of that name
    pub fn register_profile<P>(&mut self, name: &str, profile: P)
    where
        P: BoundaryProfile + 'static,
    {
        if self
            .profiles
            .insert(name.to_string(), Box::new(profile))
            .is_some()
        {
            warn!("Boundary profile '{name}' registered twice; keeping the latest");
        }
    }

    /// Register a volumetric source, replacing any previous one of that name
    pub fn register_source<S>(&mut self, name: &str, source: S)
    where
        S: VolumetricSource + 'static,
    {
        if self
            .sources
            .insert(name.to_string(), Box::new(source))
            .is_some()
        {
            warn!("Volumetric source '{name}' registered twice; keeping the latest");
        }
    }

    /// Boundary profile registered under `name`
    pub fn profile(&self, name: &str) -> Option<&dyn BoundaryProfile> {
        self.profiles.get(name).map(AsRef::as_ref)
    }

    /// Volumetric source registered under `name`
    pub fn source(&self, name: &str) -> Option<&dyn VolumetricSource> {
        self.sources.get(name).map(AsRef::as_ref)
    }

    /// Evaluate the named boundary profile at a face centroid
    pub fn evaluate_profile(&self, name: &str, position: &Position) -> Option<f64> {
        self.profile(name).map(|p| p.evaluate_at(position))
    }

    /// Evaluate the named source in a cell at `time`
    pub fn evaluate_source(&self, name: &str, cell: usize, time: f64) -> Option<SourceTerm> {
        self.source(name).map(|s| s.evaluate_at(cell, time))
    }

    /// Registered profile names, sorted
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered source names, sorted
    pub fn source_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
