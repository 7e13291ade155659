use crate::GeometryError;
use crate::geometry::primitives::Point;
use crate::util::Tolerance;
use std::f64::consts::TAU;

/// Boundary element following a circle around `center`, from `start` to `end`.
///
/// `anticlockwise` resolves which of the two possible arcs between `start` and `end` is meant.
/// When `start` and `end` coincide, the arc is a full circle.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct CircularArc {
    pub start: Point,
    pub end: Point,
    pub center: Point,
    pub anticlockwise: bool,
}

impl CircularArc {
    /// Creates a new arc, ensuring `start` and `end` are equidistant from `center` within `tolerance`.
    pub fn new(
        start: Point,
        end: Point,
        center: Point,
        anticlockwise: bool,
        tolerance: Tolerance,
    ) -> Result<Self, GeometryError> {
        let start_radius = start.distance(&center);
        let end_radius = end.distance(&center);
        if !tolerance.values_eq(start_radius, end_radius) {
            return Err(GeometryError::InconsistentRadius {
                start_radius,
                end_radius,
            });
        }
        Ok(CircularArc {
            start,
            end,
            center,
            anticlockwise,
        })
    }

    pub fn radius(&self) -> f64 {
        self.start.distance(&self.center)
    }

    /// Start and end angle of the arc, in radians.
    ///
    /// The end angle is shifted by a full turn where needed, so that moving from the start angle
    /// to the end angle follows the arc's direction:
    /// increasing when anticlockwise, decreasing when clockwise.
    pub fn angles(&self) -> (f64, f64) {
        let start_angle = self.start.angle_around(&self.center);
        let mut end_angle = self.end.angle_around(&self.center);
        if self.anticlockwise && end_angle <= start_angle {
            end_angle += TAU;
        }
        if !self.anticlockwise && end_angle >= start_angle {
            end_angle -= TAU;
        }
        (start_angle, end_angle)
    }

    /// Absolute angle (in radians) covered by the arc, in `(0, 2π]`
    pub fn span(&self) -> f64 {
        let (start_angle, end_angle) = self.angles();
        (end_angle - start_angle).abs()
    }

    /// Same arc, traversed in the opposite direction
    pub fn reverse(self) -> Self {
        CircularArc {
            start: self.end,
            end: self.start,
            center: self.center,
            anticlockwise: !self.anticlockwise,
        }
    }
}
