// ============================================================================
// Precise Interpolation Library
// Decimal-precision-corrected arithmetic and Bezier interpolation
// ============================================================================

//! # Precise Interp
//!
//! A small stateless numeric kernel: decimal-precision-corrected
//! arithmetic and the geometric interpolation primitives built on top of
//! it.
//!
//! ## Features
//!
//! - **Precision core**: n-ary `add`/`subtract`/`multiply`/`divide`/`pow`
//!   that round every intermediate value to a fixed 5 decimal places,
//!   suppressing binary floating-point artifacts across chained operations
//! - **Interpolation layer**: linear, quadratic-Bezier, and cubic-Bezier
//!   interpolants over scalars and 2-D points, expressed entirely in
//!   terms of the corrected primitives
//! - **Pure functions throughout**: no shared state, no I/O, safely
//!   callable from any number of threads
//! - **Checked variants** returning `Result` for callers that want strict
//!   input validation instead of IEEE-754 NaN/infinity propagation
//!
//! ## Example
//!
//! ```rust
//! use precise_interp::prelude::*;
//!
//! // Chained arithmetic without binary rounding artifacts
//! assert_eq!(add(&[0.1, 0.2]), 0.3);
//! assert_eq!(divide(&[2.0, 3.0]), 0.66667);
//!
//! // Interpolation inherits the same rounding discipline
//! let p = lerp_point(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 0.3);
//! assert_eq!(p, Point::new(0.3, 0.3));
//! ```

pub mod geometry;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::geometry::{
        cbez_point, cbez_value, lerp_point, lerp_value, qbez_point, qbez_value, Axis,
        CoordinateSystem, Point, GRAVITATIONAL, KAPPA,
    };
    pub use crate::numeric::{
        add, delta, divide, e2, e3, inv, inv_from, multiply, neg, pow, subtract, NumericError,
        NumericResult, SIGDIG,
    };
}
