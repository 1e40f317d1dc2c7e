//! Volumetric source terms evaluated per cell and time step.

use crate::physics::FireCurveModel;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Source value plus the linearization term the host stores alongside it
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceTerm {
    /// Source strength per unit volume
    pub value: f64,
    /// Derivative term for the host's implicit source coupling
    pub linearization: f64,
}

/// A volumetric source the host samples once per cell and time step
pub trait VolumetricSource: Send + Sync {
    /// Source term in `cell` at simulation time `time` (s)
    fn evaluate_at(&self, cell: usize, time: f64) -> SourceTerm;

    /// Evaluate a batch of cells at the same instant in parallel
    fn evaluate_cells(&self, cells: &[usize], time: f64) -> Vec<SourceTerm> {
        cells
            .par_iter()
            .map(|&cell| self.evaluate_at(cell, time))
            .collect()
    }
}

/// Which output of the fire curve feeds the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FireSourceKind {
    /// Energy equation source (W/m³)
    HeatRelease,
    /// Soot mass source (kg/(s·m³))
    Soot,
}

/// Fire curve source, uniform over every cell of the source volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireSource {
    /// Output fed to the host
    pub kind: FireSourceKind,
    /// Growth curve
    pub model: FireCurveModel,
}

impl FireSource {
    /// Bind one output of `model`
    pub fn new(kind: FireSourceKind, model: FireCurveModel) -> Self {
        Self { kind, model }
    }
}

impl VolumetricSource for FireSource {
    fn evaluate_at(&self, _cell: usize, time: f64) -> SourceTerm {
        match self.kind {
            FireSourceKind::HeatRelease => SourceTerm {
                value: self.model.heat_release_rate(time),
                linearization: self.model.heat_release_rate_time_derivative_term(time),
            },
            FireSourceKind::Soot => SourceTerm {
                value: self.model.smoke_mass_flow(time),
                linearization: self.model.smoke_mass_flow_time_derivative_term(time),
            },
        }
    }
}
