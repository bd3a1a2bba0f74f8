// ============================================================================
// Geometry Module
// 2-D points and precision-corrected interpolation primitives
// ============================================================================

pub mod constants;
pub mod interpolate;
pub mod point;

pub use constants::{GRAVITATIONAL, KAPPA};
pub use interpolate::{cbez_point, cbez_value, lerp_point, lerp_value, qbez_point, qbez_value};
pub use point::{Axis, CoordinateSystem, Point};
