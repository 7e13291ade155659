use crate::GeometryError;
use crate::geometry::primitives::{BoundaryElement, CircularArc, Point};
use crate::geometry::{CompoundShape, Shape};
use crate::tessellation::{Path, arc_sampler};
use crate::util::TessellationConfig;
use log::trace;

/// Converts boundaries into point sequences, according to a [`TessellationConfig`].
#[derive(Clone, Debug, Copy, Default)]
pub struct Tessellator {
    pub config: TessellationConfig,
}

impl Tessellator {
    pub fn new(config: TessellationConfig) -> Self {
        Tessellator { config }
    }

    pub fn sample_arc(&self, arc: &CircularArc) -> Result<Vec<Point>, GeometryError> {
        arc_sampler::sample_arc(arc, self.config.arc_sampling, self.config.tolerance)
    }

    /// Tessellates a (possibly open) chain of elements.
    ///
    /// The result starts at the first element's start. Segments contribute their end point,
    /// arcs their samples minus the first one, which coincides with the previous point.
    /// Gaps are measured relative to the extent of the chain, not to its distance from the origin.
    pub fn tessellate_chain(&self, elements: &[BoundaryElement]) -> Result<Vec<Point>, GeometryError> {
        self.config.tolerance.validate()?;
        let first = elements.first().ok_or(GeometryError::EmptyShape)?;
        let scale = chain_extent(elements);
        let mut points = vec![first.start()];

        for (index, element) in elements.iter().enumerate() {
            let expected = points[points.len() - 1];
            let found = element.start();
            if !self.config.tolerance.points_eq(expected, found, scale) {
                return Err(GeometryError::Discontinuous {
                    index,
                    expected,
                    found,
                });
            }
            match element {
                BoundaryElement::LineSegment(ls) => points.push(ls.end),
                BoundaryElement::CircularArc(arc) => {
                    let samples = self.sample_arc(arc)?;
                    points.extend(samples.into_iter().skip(1));
                }
            }
        }
        Ok(points)
    }

    /// Tessellates a closed [`Shape`].
    /// The last point of the result coincides with the first one.
    pub fn tessellate_shape(&self, shape: &Shape) -> Result<Vec<Point>, GeometryError> {
        let points = self.tessellate_chain(shape.elements())?;

        let (first, last) = (points[0], points[points.len() - 1]);
        if !self.config.tolerance.points_eq(last, first, chain_extent(shape.elements())) {
            return Err(GeometryError::Discontinuous {
                index: 0,
                expected: last,
                found: first,
            });
        }
        trace!(
            "[TESS] shape of {} elements tessellated into {} points",
            shape.n_elements(),
            points.len()
        );
        Ok(points)
    }

    /// Assembles a [`CompoundShape`] into a single [`Path`]: the outer boundary, followed by every hole.
    ///
    /// Each hole is preceded by exactly one break marker and emitted in reverse point order,
    /// giving it the opposite winding of the outer boundary. Even-odd and nonzero fill rules then
    /// render it as a cutout.
    pub fn assemble_compound(&self, compound: &CompoundShape) -> Result<Path, GeometryError> {
        let mut path = Path::new();
        path.push_subpath(self.tessellate_shape(&compound.outer)?);
        for hole in &compound.holes {
            let hole_points = self.tessellate_shape(hole)?;
            path.push_subpath(hole_points.into_iter().rev());
        }
        Ok(path)
    }
}

/// Largest side of the bounding box of all endpoints and arc circles of the chain
fn chain_extent(elements: &[BoundaryElement]) -> f64 {
    let corners = elements.iter().flat_map(|e| match e {
        BoundaryElement::LineSegment(ls) => vec![ls.start, ls.end],
        BoundaryElement::CircularArc(arc) => {
            let (Point(cx, cy), r) = (arc.center, arc.radius());
            vec![arc.start, arc.end, Point(cx - r, cy - r), Point(cx + r, cy + r)]
        }
    });
    let (x_min, y_min, x_max, y_max) = corners.fold(
        (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
        |(x_min, y_min, x_max, y_max), Point(x, y)| {
            (x_min.min(x), y_min.min(y), x_max.max(x), y_max.max(y))
        },
    );
    f64::max(x_max - x_min, y_max - y_min).max(0.0)
}
