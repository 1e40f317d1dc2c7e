//! Conversion from host positions to height above ground.

use crate::core_types::Position;
use serde::{Deserialize, Serialize};

/// Coordinate axis that points up in the host mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAxis {
    /// First coordinate
    X,
    /// Second coordinate
    Y,
    /// Third coordinate
    #[default]
    Z,
}

impl VerticalAxis {
    /// Index of the axis in an `[x, y, z]` triple
    pub fn index(self) -> usize {
        match self {
            VerticalAxis::X => 0,
            VerticalAxis::Y => 1,
            VerticalAxis::Z => 2,
        }
    }

    /// Position component along this axis
    #[inline]
    pub fn component(self, position: &Position) -> f64 {
        position.coords[self.index()]
    }
}

/// Ground reference used to turn a face centroid into a height
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightDatum {
    /// Coordinate of the ground plane along the vertical axis (m)
    pub ground_z: f64,
    /// Which coordinate is vertical
    pub vertical_axis: VerticalAxis,
}

impl HeightDatum {
    /// Height of `position` above the ground plane (negative below it)
    #[inline]
    pub fn height_of(&self, position: &Position) -> f64 {
        self.vertical_axis.component(position) - self.ground_z
    }
}
