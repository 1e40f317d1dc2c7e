//! Host adapter layer.
//!
//! The models know nothing about meshes. This layer is the narrow seam a CFD
//! host calls through: boundary profiles are evaluated per face centroid,
//! volumetric sources per cell and time step, and both can be looked up by the
//! callback names the host registers.

mod boundary;
mod datum;
mod registry;
mod source;

pub use boundary::{BoundaryProfile, WindBoundary, WindQuantity};
pub use datum::{HeightDatum, VerticalAxis};
pub use registry::{callback_names, ProfileRegistry};
pub use source::{FireSource, FireSourceKind, SourceTerm, VolumetricSource};
