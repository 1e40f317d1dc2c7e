//! CFD Profiles Core Library
//!
//! Closed-form boundary and source models for CFD wind and fire studies:
//! - Eurocode EN 1991-1-4 atmospheric boundary layer inflow (mean wind, k, ε, ω)
//! - t-squared design fire heat and soot source terms
//!
//! ## Structure
//!
//! The models in [`atmosphere`] and [`physics`] are pure functions of an immutable
//! configuration and a single scalar (height or time). They hold no state and can be
//! evaluated from any number of threads. The [`adapter`] layer maps host positions,
//! cells and callback names onto those functions, and [`config`] loads and validates
//! the parameters once before anything is evaluated.
//!
//! ```
//! use cfd_profiles_core::{SimulationConfig, WindProfileModel};
//!
//! let config = SimulationConfig::default();
//! let wind = WindProfileModel::new(config.wind);
//! assert_eq!(wind.mean_velocity(0.0), 0.0);
//! assert!(wind.mean_velocity(100.0) > wind.mean_velocity(10.0));
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Models
pub mod atmosphere;
pub mod physics;

// Host integration
pub mod adapter;
pub mod config;

// Diagnostic sampling
pub mod diagnostics;

// Re-export core types
pub use config::SimulationConfig;
pub use core_types::Position;
pub use error::ConfigError;

// Re-export model types
pub use atmosphere::{ProfileSample, TerrainCategory, WindProfileConfig, WindProfileModel};
pub use physics::{FireCurveConfig, FireCurveModel, FireCurveSample, FireGrowthClass};

// Re-export adapter types
pub use adapter::{
    BoundaryProfile, FireSource, FireSourceKind, HeightDatum, ProfileRegistry, SourceTerm,
    VerticalAxis, VolumetricSource, WindBoundary, WindQuantity,
};
