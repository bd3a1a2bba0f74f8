// ============================================================================
// Precision Core
// Decimal-precision-corrected arithmetic over f64 operand lists
// ============================================================================
//
// IEEE-754 doubles cannot represent most decimal fractions exactly, so
// chained arithmetic accumulates binary rounding artifacts (the classic
// 0.1 + 0.2 != 0.3). Every operation here routes each intermediate value
// through a single normalization point that rounds to SIGDIG decimal
// places, and addition/subtraction additionally shift the significant
// digits into integer range where f64 arithmetic is exact.

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: u32) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Number of digits kept after the decimal point in every result.
pub const SIGDIG: u32 = 5;

/// The scale factor (10^SIGDIG)
pub const SCALE: f64 = pow10(SIGDIG) as f64;

// ============================================================================
// Normalization
// ============================================================================

/// Round `v` to [`SIGDIG`] decimal places, half away from zero.
///
/// This is the single normalization point: every value that crosses an
/// operation boundary passes through it. The rounding happens in exact
/// decimal space (`rust_decimal`), on the full binary value of `v`, and
/// the result is re-expressed as the nearest f64.
///
/// Non-finite inputs are returned unchanged. So are magnitudes beyond
/// `Decimal`'s range (~7.9e28): an f64 that large carries no fractional
/// part, so rounding it is the identity.
#[inline]
pub fn round_to_sigdig(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    match Decimal::from_f64_retain(v) {
        Some(d) => d
            .round_dp_with_strategy(SIGDIG, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(v),
        None => v,
    }
}

/// Shift the decimal point right by [`SIGDIG`] places.
///
/// After the shift the significant digits form an integer-valued float,
/// so addition and subtraction are exact.
#[inline]
pub fn scale_up(v: f64) -> f64 {
    round_to_sigdig(v) * SCALE
}

/// Inverse of [`scale_up`]: shift back and re-round.
#[inline]
pub fn scale_down(v: f64) -> f64 {
    round_to_sigdig(v / SCALE)
}

// ============================================================================
// N-ary Operations
// ============================================================================
//
// All operations take an ordered operand slice with at least one element
// (the caller's contract; an empty slice is answered with the fold seed
// where one exists, NaN otherwise). None of them validate ranges:
// NaN/infinity in means NaN/infinity out.

/// Sum the operands left to right.
///
/// Each step computes `scale_down(scale_up(acc) + scale_up(cur))`, so
/// the actual addition happens on integer-valued floats.
///
/// A single operand returns that operand normalized to [`SIGDIG`] places.
///
/// # Example
/// ```
/// use precise_interp::numeric::add;
///
/// assert_eq!(add(&[0.1, 0.2]), 0.3);
/// ```
#[inline]
pub fn add(operands: &[f64]) -> f64 {
    operands
        .iter()
        .fold(0.0, |acc, &cur| scale_down(scale_up(acc) + scale_up(cur)))
}

/// Subtract the second and later operands from the first, left to right.
///
/// `subtract(&[a, b, c])` is `((a - b) - c)`. The first operand seeds the
/// accumulator unscaled; a single operand is returned as-is.
#[inline]
pub fn subtract(operands: &[f64]) -> f64 {
    match operands.split_first() {
        Some((&first, rest)) => rest
            .iter()
            .fold(first, |acc, &cur| scale_down(scale_up(acc) - scale_up(cur))),
        None => f64::NAN,
    }
}

/// Multiply the operands left to right.
///
/// The accumulator seeds at 1 and each step computes
/// `scale_down(scale_up(acc) * cur)`. Only the accumulator is scaled,
/// never the current operand; the asymmetry keeps the product at the
/// right magnitude and is part of the operation's contract.
#[inline]
pub fn multiply(operands: &[f64]) -> f64 {
    operands
        .iter()
        .fold(1.0, |acc, &cur| scale_down(scale_up(acc) * cur))
}

/// Divide the first operand by the second and later operands, left to
/// right.
///
/// A zero divisor yields infinity (or NaN for 0/0) and propagates
/// through the remaining steps; use [`checked_divide`] to reject zero
/// divisors instead.
#[inline]
pub fn divide(operands: &[f64]) -> f64 {
    match operands.split_first() {
        Some((&first, rest)) => rest
            .iter()
            .fold(first, |acc, &cur| scale_down(scale_up(acc) / cur)),
        None => f64::NAN,
    }
}

/// Raise operands as a right-associative exponent tower:
/// `pow(&[a, b, c])` is `a ^ (b ^ c)`.
///
/// The operand list is reversed and right-folded with the accumulator
/// initialized to 1, computing `round_to_sigdig(operand ^ acc)` at each
/// step, so the last operand is the innermost exponent applied first.
///
/// # Example
/// ```
/// use precise_interp::numeric::pow;
///
/// assert_eq!(pow(&[2.0, 2.0, 2.0]), 16.0); // 2^(2^2)
/// ```
#[inline]
pub fn pow(operands: &[f64]) -> f64 {
    operands
        .iter()
        .rev()
        .fold(1.0, |acc, &op| round_to_sigdig(op.powf(acc)))
}

// ============================================================================
// Derived Helpers
// ============================================================================

/// `1 - value`, the complement against a minuend of 1.
#[inline]
pub fn inv(value: f64) -> f64 {
    inv_from(value, 1.0)
}

/// `minuend - value`.
#[inline]
pub fn inv_from(value: f64, minuend: f64) -> f64 {
    subtract(&[minuend, value])
}

/// `-value`, computed as `value * -1` through the corrected multiply.
#[inline]
pub fn neg(value: f64) -> f64 {
    multiply(&[value, -1.0])
}

/// `value` squared.
#[inline]
pub fn e2(value: f64) -> f64 {
    pow(&[value, 2.0])
}

/// `value` cubed.
#[inline]
pub fn e3(value: f64) -> f64 {
    pow(&[value, 3.0])
}

/// Signed distance from `a` to `b`, i.e. `b - a`.
#[inline]
pub fn delta(a: f64, b: f64) -> f64 {
    subtract(&[b, a])
}

// ============================================================================
// Checked Operations
// ============================================================================
//
// Strict-contract entry points: operand lists are validated up front and
// rejected inputs surface as NumericError instead of NaN/infinity.

fn validate(operands: &[f64]) -> NumericResult<()> {
    if operands.is_empty() {
        debug!("rejecting empty operand list");
        return Err(NumericError::EmptyOperands);
    }
    if let Some(&bad) = operands.iter().find(|v| !v.is_finite()) {
        debug!(operand = bad, "rejecting non-finite operand");
        return Err(NumericError::NonFiniteOperand);
    }
    Ok(())
}

/// Checked [`add`].
///
/// # Errors
/// `EmptyOperands` or `NonFiniteOperand` on invalid input.
#[inline]
pub fn checked_add(operands: &[f64]) -> NumericResult<f64> {
    validate(operands)?;
    Ok(add(operands))
}

/// Checked [`subtract`].
///
/// # Errors
/// `EmptyOperands` or `NonFiniteOperand` on invalid input.
#[inline]
pub fn checked_subtract(operands: &[f64]) -> NumericResult<f64> {
    validate(operands)?;
    Ok(subtract(operands))
}

/// Checked [`multiply`].
///
/// # Errors
/// `EmptyOperands` or `NonFiniteOperand` on invalid input.
#[inline]
pub fn checked_multiply(operands: &[f64]) -> NumericResult<f64> {
    validate(operands)?;
    Ok(multiply(operands))
}

/// Checked [`divide`]: additionally rejects zero divisors.
///
/// # Errors
/// `EmptyOperands`, `NonFiniteOperand`, or `DivisionByZero`.
#[inline]
pub fn checked_divide(operands: &[f64]) -> NumericResult<f64> {
    validate(operands)?;
    if operands[1..].iter().any(|&d| d == 0.0) {
        debug!("rejecting zero divisor");
        return Err(NumericError::DivisionByZero);
    }
    Ok(divide(operands))
}

/// Checked [`pow`].
///
/// # Errors
/// `EmptyOperands` or `NonFiniteOperand` on invalid input.
#[inline]
pub fn checked_pow(operands: &[f64]) -> NumericResult<f64> {
    validate(operands)?;
    Ok(pow(operands))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constants() {
        assert_eq!(SIGDIG, 5);
        assert_eq!(SCALE, 100_000.0);
    }

    #[test]
    fn test_round_to_sigdig() {
        assert_eq!(round_to_sigdig(0.123456789), 0.12346);
        assert_eq!(round_to_sigdig(-0.123456789), -0.12346);
        assert_eq!(round_to_sigdig(1.0), 1.0);
        assert_eq!(round_to_sigdig(12345.0), 12345.0);
    }

    #[test]
    fn test_round_to_sigdig_non_finite() {
        assert!(round_to_sigdig(f64::NAN).is_nan());
        assert_eq!(round_to_sigdig(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_to_sigdig(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_round_to_sigdig_huge_magnitude() {
        // Beyond Decimal's range; already integral, returned unchanged
        assert_eq!(round_to_sigdig(1e300), 1e300);
        assert_eq!(round_to_sigdig(-1e300), -1e300);
    }

    #[test]
    fn test_add_binary_artifact_suppressed() {
        // The motivating case: plain f64 gives 0.30000000000000004
        assert_eq!(add(&[0.1, 0.2]), 0.3);
        assert_eq!(add(&[0.1, 0.2, 0.3]), 0.6);
    }

    #[test]
    fn test_add_single_operand_normalizes() {
        assert_eq!(add(&[0.123456789]), 0.12346);
        assert_eq!(add(&[7.0]), 7.0);
    }

    #[test]
    fn test_subtract_left_to_right() {
        assert_eq!(subtract(&[10.0, 3.0, 2.0]), 5.0);
        assert_eq!(subtract(&[0.3, 0.1]), 0.2);
    }

    #[test]
    fn test_subtract_antisymmetry() {
        let (a, b) = (1.23456, 7.6543);
        assert_eq!(subtract(&[a, b]), -subtract(&[b, a]));
    }

    #[test]
    fn test_multiply_grouping() {
        assert_eq!(multiply(&[2.0, 2.0, 2.0]), 8.0);
        assert_eq!(multiply(&[-2.0, 2.0, -2.0]), 8.0);
        assert_eq!(multiply(&[-2.0, -2.0, -2.0]), -8.0);
    }

    #[test]
    fn test_multiply_seed() {
        // Empty list falls out of the accumulator seed
        assert_eq!(multiply(&[]), 1.0);
        assert_eq!(multiply(&[0.1, 0.2]), 0.02);
    }

    #[test]
    fn test_divide_rounding() {
        assert_eq!(divide(&[2.0, 3.0]), 0.66667);
        assert_eq!(divide(&[1.0, 3.0]), 0.33333);
        assert_eq!(divide(&[10.0, 2.0, 5.0]), 1.0);
    }

    #[test]
    fn test_divide_by_zero_propagates() {
        assert_eq!(divide(&[2.0, 0.0]), f64::INFINITY);
        assert_eq!(divide(&[-2.0, 0.0]), f64::NEG_INFINITY);
        // Infinity keeps flowing through the rest of the fold
        assert_eq!(divide(&[2.0, 0.0, 4.0]), f64::INFINITY);
        assert!(divide(&[0.0, 0.0]).is_nan());
    }

    #[test]
    fn test_pow_literals() {
        assert_eq!(pow(&[2.0, 2.0]), 4.0);
        assert_eq!(pow(&[2.0, -2.0]), 0.25);
        assert_eq!(pow(&[2.0, 2.0, 2.0]), 16.0);
        // Reversed fold: innermost exponent is the last operand
        assert_eq!(pow(&[2.0, -2.0, 2.0]), 16.0);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(inv(0.25), 0.75);
        assert_eq!(inv_from(3.0, 10.0), 7.0);
        assert_eq!(neg(2.0), -2.0);
        assert_eq!(e2(3.0), 9.0);
        assert_eq!(e3(3.0), 27.0);
        assert_eq!(delta(3.0, 10.0), 7.0);
        assert_eq!(delta(10.0, 3.0), -7.0);
    }

    #[test]
    fn test_checked_rejects_bad_input() {
        assert_eq!(checked_add(&[]), Err(NumericError::EmptyOperands));
        assert_eq!(
            checked_multiply(&[1.0, f64::NAN]),
            Err(NumericError::NonFiniteOperand)
        );
        assert_eq!(
            checked_pow(&[f64::INFINITY]),
            Err(NumericError::NonFiniteOperand)
        );
        assert_eq!(
            checked_divide(&[2.0, 0.0]),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_checked_passes_good_input() {
        assert_eq!(checked_add(&[0.1, 0.2]), Ok(0.3));
        assert_eq!(checked_divide(&[2.0, 3.0]), Ok(0.66667));
        // Zero as the dividend is fine, only divisors are checked
        assert_eq!(checked_divide(&[0.0, 3.0]), Ok(0.0));
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            prop_assert_eq!(add(&[a, b]), add(&[b, a]));
        }

        #[test]
        fn prop_scale_round_trip(v in -1e6_f64..1e6) {
            prop_assert_eq!(scale_down(scale_up(v)), round_to_sigdig(v));
        }

        #[test]
        fn prop_round_idempotent(v in -1e6_f64..1e6) {
            let once = round_to_sigdig(v);
            prop_assert_eq!(round_to_sigdig(once), once);
        }

        #[test]
        fn prop_subtract_antisymmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            // Half-away-from-zero rounding is sign-symmetric, so this
            // holds exactly, not just within one rounding unit
            prop_assert_eq!(subtract(&[a, b]), -subtract(&[b, a]));
        }

        #[test]
        fn prop_single_operand_add_is_rounding(a in -1e6_f64..1e6) {
            prop_assert_eq!(add(&[a]), round_to_sigdig(a));
        }
    }
}
