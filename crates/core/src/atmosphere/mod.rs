//! Atmospheric boundary layer inflow profiles.
//!
//! This module models the wind entering a CFD domain:
//! - Eurocode EN 1991-1-4 terrain categories (roughness length, minimum height)
//! - Logarithmic mean wind profile with clamped minimum height
//! - Inflow turbulence (intensity, k, ε, ω) for two-equation turbulence models
//!
//! # References
//!
//! - EN 1991-1-4:2005, Eurocode 1: Actions on structures, Part 1-4: Wind actions.
//! - Richards, P.J. & Hoxey, R.P. (1993). J. Wind Eng. Ind. Aerodyn. 46-47, 145-153.

mod terrain_category;
mod wind_profile;

pub use terrain_category::{TerrainCategory, UnknownTerrainCategory};
pub use wind_profile::{constants, ProfileSample, WindProfileConfig, WindProfileModel};
