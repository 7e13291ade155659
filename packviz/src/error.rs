use crate::geometry::primitives::Point;
use thiserror::Error;

/// Everything that can go wrong while building or tessellating a boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The endpoints of an arc do not lie on the same circle around its center
    #[error("inconsistent arc radius: start radius {start_radius}, end radius {end_radius}")]
    InconsistentRadius { start_radius: f64, end_radius: f64 },

    /// The arc's radius does not exceed the tolerance's `eps`.
    /// The check is absolute: it does not depend on where the arc lies.
    #[error("degenerate arc around center {center:?}, radius {radius}")]
    DegenerateArc { center: Point, radius: f64 },

    /// An element does not start where the previous one ended.
    /// For the closure of a shape, `index` is 0 and `expected` is the end of the last element.
    #[error("discontinuous boundary at element {index}: expected start {expected:?}, found {found:?}")]
    Discontinuous {
        index: usize,
        expected: Point,
        found: Point,
    },

    #[error("unknown element type: {0:?}")]
    UnknownElementType(String),

    #[error("circular arc is missing field: {0}")]
    MissingArcField(&'static str),

    #[error("shape contains no elements")]
    EmptyShape,

    #[error("invalid arc sampling: {0}")]
    InvalidSampling(String),

    #[error("invalid tolerance: eps must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}
