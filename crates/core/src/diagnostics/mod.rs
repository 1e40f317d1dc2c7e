//! Diagnostic sampling of the models.
//!
//! Not used by the host adapter; these produce the evaluation points for the
//! text tables printed by the headless demo and for validation tests.

mod schedule;

pub use schedule::{HeightSchedule, TimeSchedule};

use crate::atmosphere::{ProfileSample, WindProfileModel};
use crate::physics::{FireCurveModel, FireCurveSample};

/// Wind profile sampled from the ground to the top of the domain
pub fn wind_profile_table(model: &WindProfileModel) -> Vec<ProfileSample> {
    HeightSchedule::new(model.config().zone_height)
        .map(|z| model.sample(z))
        .collect()
}

/// Fire curve sampled over a schedule
pub fn fire_curve_table(model: &FireCurveModel, schedule: TimeSchedule) -> Vec<FireCurveSample> {
    schedule.map(|t| model.sample(t)).collect()
}
