mod circular_arc;
mod element;
mod line_segment;
mod point;

#[doc(inline)]
pub use circular_arc::CircularArc;
#[doc(inline)]
pub use element::BoundaryElement;
#[doc(inline)]
pub use line_segment::LineSegment;
#[doc(inline)]
pub use point::Point;
