use crate::geometry::primitives::Point;

/// Straight boundary element between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        debug_assert!(
            start.is_finite() && end.is_finite(),
            "invalid line segment: {start:?} -> {end:?}"
        );
        LineSegment { start, end }
    }

    pub fn reverse(mut self) -> Self {
        std::mem::swap(&mut self.start, &mut self.end);
        self
    }
}
