// ============================================================================
// 2-D Points
// Immutable coordinate pairs with precision-corrected derived accessors
// ============================================================================

use crate::numeric::{add, e2, round_to_sigdig};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Symbolic Labels
// ============================================================================

/// Coordinate axis of a 2-D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Coordinate system a point's components can be read in.
///
/// Points store cartesian coordinates; polar components are computed on
/// access, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateSystem {
    Cartesian,
    Polar,
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateSystem::Cartesian => write!(f, "cartesian"),
            CoordinateSystem::Polar => write!(f, "polar"),
        }
    }
}

// ============================================================================
// Point
// ============================================================================

/// An immutable 2-D point.
///
/// Both coordinates run through the arithmetic core independently; there
/// is no shared state between x and y computations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from cartesian coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, (0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Read one coordinate by axis label.
    #[inline]
    pub const fn coordinate(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Distance from the origin, rounded like every other arithmetic
    /// result.
    #[inline]
    pub fn radius(&self) -> f64 {
        round_to_sigdig(add(&[e2(self.x), e2(self.y)]).sqrt())
    }

    /// Polar angle in radians, measured counterclockwise from the
    /// positive x axis, in (−π, π].
    #[inline]
    pub fn azimuth(&self) -> f64 {
        round_to_sigdig(self.y.atan2(self.x))
    }

    /// Both polar components at once: `(radius, azimuth)`.
    #[inline]
    pub fn to_polar(&self) -> (f64, f64) {
        (self.radius(), self.azimuth())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
