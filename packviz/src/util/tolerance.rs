use crate::GeometryError;
use crate::geometry::primitives::Point;
use float_cmp::approx_eq;
use serde::{Deserialize, Serialize};

/// Tolerance used for all continuity, closure and radius checks.
///
/// Wraps [`float_cmp::approx_eq!()`] with an epsilon that scales with the size of what is compared,
/// never with its distance from the origin. Below a size of 1 it behaves as an absolute tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub eps: f64,
}

impl Tolerance {
    pub const DEFAULT_EPS: f64 = 1e-6;

    pub fn new(eps: f64) -> Self {
        debug_assert!(eps.is_finite() && eps >= 0.0, "invalid tolerance: {eps}");
        Tolerance { eps }
    }

    /// Rejects tolerances that make every comparison fail (negative, NaN) or pass (infinite).
    pub fn validate(&self) -> Result<(), GeometryError> {
        match self.eps.is_finite() && self.eps >= 0.0 {
            true => Ok(()),
            false => Err(GeometryError::InvalidTolerance(self.eps)),
        }
    }

    /// Whether two magnitudes (radii, lengths) are equal: they may differ by at most `eps * max(1, |a|, |b|)`.
    pub fn values_eq(&self, a: f64, b: f64) -> bool {
        let scale = f64::max(1.0, f64::max(a.abs(), b.abs()));
        approx_eq!(f64, a, b, epsilon = self.eps * scale)
    }

    /// Whether two points coincide, within `eps * max(1, scale)` per coordinate.
    /// `scale` is the extent of the shape both points belong to.
    pub fn points_eq(&self, a: Point, b: Point, scale: f64) -> bool {
        self.is_zero(a.0 - b.0, scale) && self.is_zero(a.1 - b.1, scale)
    }

    /// Whether `value` is indistinguishable from zero for a shape with extent `scale`.
    pub fn is_zero(&self, value: f64, scale: f64) -> bool {
        value.abs() <= self.eps * f64::max(1.0, scale.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::new(Self::DEFAULT_EPS)
    }
}
