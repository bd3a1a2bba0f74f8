// ============================================================================
// Numeric Module
// Precision-corrected decimal arithmetic over f64
// ============================================================================
//
// This module provides:
// - The precision core: n-ary add/subtract/multiply/divide/pow that round
//   every intermediate value to SIGDIG decimal places
// - Derived helpers: inv, neg, e2/e3, delta
// - NumericError: error types for the checked entry points
//
// Design principles:
// - One normalization point (round_to_sigdig); everything routes through it
// - Raw operations follow IEEE-754: no panics, NaN/infinity propagate
// - Checked variants return Result for callers that want a strict contract
// - Precision is a named process-wide constant, fixed at 5 digits

mod errors;
mod precision;

pub use errors::{NumericError, NumericResult};
pub use precision::{
    add, checked_add, checked_divide, checked_multiply, checked_pow, checked_subtract, delta,
    divide, e2, e3, inv, inv_from, multiply, neg, pow, round_to_sigdig, scale_down, scale_up,
    subtract, SCALE, SIGDIG,
};
