use crate::geometry::primitives::{CircularArc, LineSegment, Point};

/// One piece of a boundary: either a straight segment or a circular arc
#[derive(Clone, Debug, PartialEq, Copy)]
pub enum BoundaryElement {
    LineSegment(LineSegment),
    CircularArc(CircularArc),
}

impl BoundaryElement {
    pub fn start(&self) -> Point {
        match self {
            BoundaryElement::LineSegment(ls) => ls.start,
            BoundaryElement::CircularArc(arc) => arc.start,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            BoundaryElement::LineSegment(ls) => ls.end,
            BoundaryElement::CircularArc(arc) => arc.end,
        }
    }

    /// Same element, traversed from its end to its start
    pub fn reverse(self) -> Self {
        match self {
            BoundaryElement::LineSegment(ls) => BoundaryElement::LineSegment(ls.reverse()),
            BoundaryElement::CircularArc(arc) => BoundaryElement::CircularArc(arc.reverse()),
        }
    }
}

impl From<LineSegment> for BoundaryElement {
    fn from(ls: LineSegment) -> Self {
        BoundaryElement::LineSegment(ls)
    }
}

impl From<CircularArc> for BoundaryElement {
    fn from(arc: CircularArc) -> Self {
        BoundaryElement::CircularArc(arc)
    }
}
