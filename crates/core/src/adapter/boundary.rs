//! Boundary profiles evaluated per face centroid.

use crate::adapter::datum::HeightDatum;
use crate::atmosphere::WindProfileModel;
use crate::core_types::Position;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A scalar boundary field the host samples once per boundary face
///
/// Implementors must be pure: the host may evaluate faces in any order and
/// from any number of threads.
pub trait BoundaryProfile: Send + Sync {
    /// Value of the field at a face centroid
    fn evaluate_at(&self, position: &Position) -> f64;

    /// Evaluate a batch of centroids in parallel
    fn evaluate_faces(&self, centroids: &[Position]) -> Vec<f64> {
        centroids.par_iter().map(|p| self.evaluate_at(p)).collect()
    }

    /// Evaluate a batch of centroids into a host-owned buffer
    ///
    /// Only `min(centroids.len(), out.len())` entries are written.
    fn evaluate_faces_into(&self, centroids: &[Position], out: &mut [f64]) {
        out.par_iter_mut()
            .zip(centroids.par_iter())
            .for_each(|(slot, p)| *slot = self.evaluate_at(p));
    }
}

/// Quantity of the wind profile exposed as a boundary field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindQuantity {
    /// x velocity component (m/s)
    VelocityX,
    /// y velocity component (m/s)
    VelocityY,
    /// Turbulent kinetic energy (m²/s²)
    TurbulentKineticEnergy,
    /// Dissipation rate ε (m²/s³)
    DissipationRate,
    /// Specific dissipation rate ω (1/s)
    SpecificDissipationRate,
}

impl WindQuantity {
    /// Every quantity, in host registration order
    pub const ALL: [WindQuantity; 5] = [
        WindQuantity::VelocityX,
        WindQuantity::VelocityY,
        WindQuantity::TurbulentKineticEnergy,
        WindQuantity::DissipationRate,
        WindQuantity::SpecificDissipationRate,
    ];

    /// Evaluate this quantity at height `z` above the datum
    pub fn evaluate(self, model: &WindProfileModel, z: f64) -> f64 {
        match self {
            WindQuantity::VelocityX => model.velocity(z).0,
            WindQuantity::VelocityY => model.velocity(z).1,
            WindQuantity::TurbulentKineticEnergy => model.turbulent_kinetic_energy(z),
            WindQuantity::DissipationRate => model.dissipation_rate(z),
            WindQuantity::SpecificDissipationRate => model.specific_dissipation_rate(z),
        }
    }
}

/// One wind profile quantity bound to a ground datum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindBoundary {
    /// Quantity written to the boundary
    pub quantity: WindQuantity,
    /// Profile the quantity is taken from
    pub model: WindProfileModel,
    /// Ground reference for face heights
    pub datum: HeightDatum,
}

impl WindBoundary {
    /// Bind `quantity` of `model` to `datum`
    pub fn new(quantity: WindQuantity, model: WindProfileModel, datum: HeightDatum) -> Self {
        Self {
            quantity,
            model,
            datum,
        }
    }
}

impl BoundaryProfile for WindBoundary {
    fn evaluate_at(&self, position: &Position) -> f64 {
        let z = self.datum.height_of(position);
        self.quantity.evaluate(&self.model, z)
    }
}
