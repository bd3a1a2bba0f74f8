// ============================================================================
// Geometric and Physical Constants
// Named process-wide constants, fixed at compile time
// ============================================================================

/// Circular-arc cubic-Bezier factor, 4(√2 − 1)/3.
///
/// Placing the two control points of a cubic Bezier at this fraction of
/// the radius along the tangents approximates a quarter circle to within
/// about 0.03% radial error.
pub const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Newtonian gravitational constant G, in m³·kg⁻¹·s⁻² (CODATA 2018).
pub const GRAVITATIONAL: f64 = 6.674_30e-11;
