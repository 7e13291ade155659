use crate::GeometryError;
use crate::geometry::primitives::{BoundaryElement, LineSegment, Point};
use itertools::Itertools;

/// Closed boundary, described as an ordered chain of [`BoundaryElement`]s.
///
/// Every element is expected to start where the previous one ends, and the last element to end
/// where the first one starts. This is verified when the shape is tessellated.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    elements: Vec<BoundaryElement>,
}

impl Shape {
    pub fn new(elements: Vec<BoundaryElement>) -> Result<Self, GeometryError> {
        if elements.is_empty() {
            return Err(GeometryError::EmptyShape);
        }
        Ok(Shape { elements })
    }

    /// Closed polygon through `vertices`, one [`LineSegment`] per edge.
    /// The closing edge back to the first vertex is added automatically.
    pub fn polygon(vertices: &[Point]) -> Result<Self, GeometryError> {
        let elements = vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&start, &end)| LineSegment::new(start, end).into())
            .collect_vec();
        Shape::new(elements)
    }

    pub fn elements(&self) -> &[BoundaryElement] {
        &self.elements
    }

    pub fn n_elements(&self) -> usize {
        self.elements.len()
    }

    /// Same boundary, traversed in the opposite direction
    pub fn reverse(&self) -> Self {
        let elements = self.elements.iter().rev().map(|e| e.reverse()).collect_vec();
        Shape { elements }
    }
}

/// An outer boundary with zero or more holes.
///
/// Holes are given in the same orientation convention as any other [`Shape`].
/// The [`Tessellator`](crate::tessellation::Tessellator) reverses them when assembling,
/// so callers never have to flip them. Holes are assumed to lie within the outer boundary;
/// this is not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct CompoundShape {
    pub outer: Shape,
    pub holes: Vec<Shape>,
}

impl CompoundShape {
    pub fn new(outer: Shape, holes: Vec<Shape>) -> Self {
        CompoundShape { outer, holes }
    }
}

impl From<Shape> for CompoundShape {
    fn from(outer: Shape) -> Self {
        CompoundShape::new(outer, vec![])
    }
}
