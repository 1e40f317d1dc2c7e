//! Fire source physics

mod fire_curve;
mod growth_class;

pub use fire_curve::{FireCurveConfig, FireCurveModel, FireCurveSample};
pub use growth_class::{FireGrowthClass, UnknownGrowthClass, REFERENCE_HRR_KW};
