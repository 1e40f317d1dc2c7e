//! Point type alias for boundary face centroids.

use nalgebra::Point3;

/// 3D point type for face centroids and cell positions handed over by the host.
///
/// This is a simple alias for `nalgebra::Point3<f64>`; the host solver works in
/// double precision, so positions are kept as `f64` end to end.
pub type Position = Point3<f64>;
