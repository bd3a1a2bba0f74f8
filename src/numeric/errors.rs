// ============================================================================
// Numeric Errors
// Error types for the checked arithmetic entry points
// ============================================================================

use std::fmt;

/// Errors reported by the `checked_*` arithmetic operations.
///
/// The raw operations never produce these: they follow IEEE-754 and let
/// NaN/infinity propagate. The checked wrappers reject such inputs up
/// front instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Operand list was empty (every operation requires at least one operand)
    EmptyOperands,
    /// An operand was NaN or infinite
    NonFiniteOperand,
    /// A divisor operand was zero
    DivisionByZero,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::EmptyOperands => {
                write!(f, "empty operand list: at least one operand is required")
            },
            NumericError::NonFiniteOperand => {
                write!(f, "non-finite operand: value is NaN or infinite")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for checked numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
