#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use packviz::GeometryError;
    use packviz::geometry::primitives::{BoundaryElement, CircularArc, LineSegment, Point};
    use packviz::geometry::{CompoundShape, Shape};
    use packviz::tessellation::Tessellator;
    use packviz::util::{ArcSampling, TessellationConfig, Tolerance};

    const N: usize = ArcSampling::DEFAULT_N_SAMPLES;

    fn arc(start: (f64, f64), end: (f64, f64), center: (f64, f64), anticlockwise: bool) -> CircularArc {
        CircularArc::new(
            start.into(),
            end.into(),
            center.into(),
            anticlockwise,
            Tolerance::default(),
        )
        .unwrap()
    }

    fn segment(start: (f64, f64), end: (f64, f64)) -> BoundaryElement {
        LineSegment::new(start.into(), end.into()).into()
    }

    fn square(x_min: f64, y_min: f64, size: f64) -> Shape {
        Shape::polygon(&[
            Point(x_min, y_min),
            Point(x_min + size, y_min),
            Point(x_min + size, y_min + size),
            Point(x_min, y_min + size),
        ])
        .unwrap()
    }

    /// Circle of radius `r` around `c`, as two half arcs
    fn circle(c: (f64, f64), r: f64, anticlockwise: bool) -> Shape {
        let right = (c.0 + r, c.1);
        let left = (c.0 - r, c.1);
        Shape::new(vec![
            arc(right, left, c, anticlockwise).into(),
            arc(left, right, c, anticlockwise).into(),
        ])
        .unwrap()
    }

    fn assert_point_eq(a: Point, b: Point) {
        assert!(
            approx_eq!(f64, a.0, b.0, epsilon = 1e-9) && approx_eq!(f64, a.1, b.1, epsilon = 1e-9),
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn segment_then_clockwise_half_circle() {
        let tessellator = Tessellator::default();
        let chain = [
            segment((0.0, 0.0), (10.0, 0.0)),
            arc((10.0, 0.0), (10.0, 10.0), (10.0, 5.0), false).into(),
        ];
        let points = tessellator.tessellate_chain(&chain).unwrap();

        assert_eq!(points.len(), 2 + (N - 1));
        assert_eq!(points[0], Point(0.0, 0.0));
        assert_eq!(points[1], Point(10.0, 0.0));
        assert_eq!(points[points.len() - 1], Point(10.0, 10.0));

        let center = Point(10.0, 5.0);
        for p in &points[1..] {
            assert!(approx_eq!(f64, p.distance(&center), 5.0, epsilon = 1e-9));
            //left half of the circle
            assert!(p.0 <= 10.0 + 1e-9, "{p:?} is not on the left half-circle");
        }
        //clockwise from the bottom, via the leftmost point (5, 5)
        let leftmost = points
            .iter()
            .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap())
            .unwrap();
        assert!(approx_eq!(f64, leftmost.0, 5.0, epsilon = 1e-4));
        assert!(approx_eq!(f64, leftmost.1, 5.0, epsilon = 1e-2));
    }

    #[test]
    fn closed_shape_ends_where_it_starts() {
        let tessellator = Tessellator::default();
        let shape = Shape::new(vec![
            segment((0.0, 0.0), (10.0, 0.0)),
            arc((10.0, 0.0), (10.0, 10.0), (10.0, 5.0), false).into(),
            segment((10.0, 10.0), (0.0, 0.0)),
        ])
        .unwrap();
        let points = tessellator.tessellate_shape(&shape).unwrap();
        assert_eq!(points.len(), 1 + 1 + (N - 1) + 1);
        assert_point_eq(points[0], points[points.len() - 1]);
    }

    #[test_case(square(0.0, 0.0, 1.0); "unit square")]
    #[test_case(circle((3.0, -2.0), 2.5, true); "anticlockwise circle")]
    #[test_case(circle((3.0, -2.0), 2.5, false); "clockwise circle")]
    #[test_case(square(1e5, 1e5, 1e3); "far from origin")]
    fn closure(shape: Shape) {
        let points = Tessellator::default().tessellate_shape(&shape).unwrap();
        assert_point_eq(points[0], points[points.len() - 1]);
    }

    #[test_case((1.0, 0.0), (0.0, 1.0), (0.0, 0.0); "quarter")]
    #[test_case((1.0, 0.0), (-1.0, 0.0), (0.0, 0.0); "half")]
    #[test_case((-1.0, 0.0), (-1.0, 0.0), (0.0, 0.0); "full circle at the atan2 seam")]
    #[test_case((13.0, 7.0), (7.0, 13.0), (7.0, 7.0); "offset center")]
    #[test_case((-0.70710678118654757, -0.70710678118654757), (-0.70710678118654757, 0.70710678118654757), (0.0, 0.0); "across the seam")]
    fn arc_endpoints_and_direction(start: (f64, f64), end: (f64, f64), center: (f64, f64)) {
        let tessellator = Tessellator::default();
        for anticlockwise in [true, false] {
            let arc = arc(start, end, center, anticlockwise);
            let samples = tessellator.sample_arc(&arc).unwrap();

            assert_eq!(samples.len(), N);
            assert_eq!(samples[0], arc.start);
            assert_eq!(samples[N - 1], arc.end);

            //consecutive samples turn in the arc's direction
            let c = arc.center;
            for (p, q) in samples.iter().zip(samples.iter().skip(1)) {
                let cross = (p.0 - c.0) * (q.1 - c.1) - (p.1 - c.1) * (q.0 - c.0);
                match anticlockwise {
                    true => assert!(cross > 0.0, "not anticlockwise: {p:?} -> {q:?}"),
                    false => assert!(cross < 0.0, "not clockwise: {p:?} -> {q:?}"),
                }
            }
        }
    }

    #[test_case(5.0; "5 degrees")]
    #[test_case(90.0; "90 degrees")]
    #[test_case(355.0; "355 degrees")]
    fn fixed_sample_count_independent_of_span(span_deg: f64) {
        let end_angle = span_deg.to_radians();
        let arc = arc((1.0, 0.0), (end_angle.cos(), end_angle.sin()), (0.0, 0.0), true);
        for n_samples in [2, 16, N] {
            let tessellator = Tessellator::new(TessellationConfig {
                arc_sampling: ArcSampling::Fixed { n_samples },
                ..Default::default()
            });
            assert_eq!(tessellator.sample_arc(&arc).unwrap().len(), n_samples);
        }
    }

    #[test]
    fn arc_angles_follow_direction() {
        let anticlockwise = arc((0.0, -1.0), (0.0, 1.0), (0.0, 0.0), true);
        let (start, end) = anticlockwise.angles();
        assert!(approx_eq!(f64, start, -PI / 2.0));
        assert!(approx_eq!(f64, end, PI / 2.0));

        let clockwise = arc((0.0, -1.0), (0.0, 1.0), (0.0, 0.0), false);
        let (start, end) = clockwise.angles();
        assert!(approx_eq!(f64, start, -PI / 2.0));
        assert!(approx_eq!(f64, end, -3.0 * PI / 2.0));
        assert!(approx_eq!(f64, clockwise.span(), PI));
    }

    #[test]
    fn adaptive_sampling_respects_deviation_and_bounds() {
        let max_deviation = 0.01;
        let tessellator = Tessellator::new(TessellationConfig {
            arc_sampling: ArcSampling::Adaptive {
                max_deviation,
                min_samples: 3,
                max_samples: 4096,
            },
            ..Default::default()
        });

        let full = arc((100.0, 0.0), (100.0, 0.0), (0.0, 0.0), true);
        let samples = tessellator.sample_arc(&full).unwrap();
        assert!(samples.len() > 3 && samples.len() < 4096);
        for (p, q) in samples.iter().zip(samples.iter().skip(1)) {
            //sagitta of the chord between consecutive samples
            let mid = Point((p.0 + q.0) / 2.0, (p.1 + q.1) / 2.0);
            let sagitta = 100.0 - mid.distance(&Point(0.0, 0.0));
            assert!(sagitta <= max_deviation + 1e-9, "sagitta {sagitta} too large");
        }

        let small = arc((100.0, 0.0), (99.99995, 0.1), (0.0, 0.0), true);
        assert_eq!(tessellator.sample_arc(&small).unwrap().len(), 3);

        let tiny_radius = arc((0.001, 0.0), (-0.001, 0.0), (0.0, 0.0), true);
        assert_eq!(tessellator.sample_arc(&tiny_radius).unwrap().len(), 3);
    }

    #[test_case(1e6, false, 1e-12, 2, 64, 64; "deviation vanishing against a huge radius")]
    #[test_case(100.0, false, 1e-12, 2, 64, 64; "deviation far below the radius")]
    #[test_case(1.0, true, 1.0, 2, 64, 3; "deviation equal to the radius")]
    #[test_case(1.0, true, 5.0, 2, 64, 3; "deviation beyond the radius")]
    #[test_case(1.0, false, 2.0, 2, 64, 2; "quarter with deviation beyond the radius")]
    #[test_case(100.0, true, 0.01, 3, 16, 16; "full circle capped by max_samples")]
    fn adaptive_sample_count_extremes(
        radius: f64,
        full_circle: bool,
        max_deviation: f64,
        min_samples: usize,
        max_samples: usize,
        expected: usize,
    ) {
        let tessellator = Tessellator::new(TessellationConfig {
            arc_sampling: ArcSampling::Adaptive {
                max_deviation,
                min_samples,
                max_samples,
            },
            ..Default::default()
        });
        let end = match full_circle {
            true => (radius, 0.0),
            false => (0.0, radius),
        };
        let arc = arc((radius, 0.0), end, (0.0, 0.0), true);
        let samples = tessellator.sample_arc(&arc).unwrap();

        assert_eq!(samples.len(), expected);
        assert_eq!(samples[0], arc.start);
        assert_eq!(samples[samples.len() - 1], arc.end);
    }

    #[test]
    fn small_arc_far_from_origin() {
        let c = (2e6, 2e6);
        let fillet = arc((c.0 + 0.5, c.1), (c.0, c.1 + 0.5), c, true);
        let samples = Tessellator::default().sample_arc(&fillet).unwrap();
        assert_eq!(samples.len(), N);
        for p in &samples {
            assert!(approx_eq!(f64, p.distance(&c.into()), 0.5, epsilon = 1e-6));
        }

        //the radius check does not loosen with the distance from the origin
        let tiny = arc((c.0 + 1e-7, c.1), (c.0, c.1 + 1e-7), c, true);
        assert!(matches!(
            Tessellator::default().sample_arc(&tiny),
            Err(GeometryError::DegenerateArc { .. })
        ));
    }

    #[test_case(0.5, false; "gap large for the shape")]
    #[test_case(1e-7, true; "gap within tolerance")]
    fn gaps_are_relative_to_shape_size(gap: f64, accepted: bool) {
        let (x0, y0) = (2e6, 2e6);
        let shape = Shape::new(vec![
            segment((x0, y0), (x0 + 10.0, y0)),
            segment((x0 + 10.0, y0 + gap), (x0, y0 + 10.0)),
            segment((x0, y0 + 10.0), (x0, y0)),
        ])
        .unwrap();
        let result = Tessellator::default().tessellate_shape(&shape);
        match accepted {
            true => assert_eq!(result.unwrap().len(), 4),
            false => assert!(matches!(result, Err(GeometryError::Discontinuous { index: 1, .. }))),
        }
    }

    #[test_case(-1e-6; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    fn invalid_tolerance(eps: f64) {
        let config = TessellationConfig {
            tolerance: Tolerance { eps },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GeometryError::InvalidTolerance(_))));
        assert!(matches!(
            Tessellator::new(config).tessellate_shape(&square(0.0, 0.0, 1.0)),
            Err(GeometryError::InvalidTolerance(_))
        ));
        assert!(TessellationConfig::default().validate().is_ok());
    }

    #[test]
    fn compound_square_with_square_hole() {
        let tessellator = Tessellator::default();
        let hole = square(0.25, 0.25, 0.5);
        let compound = CompoundShape::new(square(0.0, 0.0, 1.0), vec![hole.clone()]);

        let path = tessellator.assemble_compound(&compound).unwrap();
        let nodes = path.nodes();
        assert_eq!(nodes.len(), 5 + 1 + 5);
        assert_eq!(nodes[5], None);

        let outer = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
        for (node, expected) in nodes[..5].iter().zip(outer) {
            assert_eq!(*node, Some(Point::from(expected)));
        }

        let mut reversed_hole = tessellator.tessellate_shape(&hole).unwrap();
        reversed_hole.reverse();
        let emitted_hole = nodes[6..].iter().map(|n| n.unwrap()).collect::<Vec<_>>();
        assert_eq!(emitted_hole, reversed_hole);
        assert_eq!(path.n_subpaths(), 2);
    }

    #[test]
    fn holes_with_arcs_are_emitted_reversed() {
        let tessellator = Tessellator::default();
        let holes = vec![circle((3.0, 3.0), 1.0, true), circle((7.0, 7.0), 1.0, false)];
        let compound = CompoundShape::new(square(0.0, 0.0, 10.0), holes.clone());
        let path = tessellator.assemble_compound(&compound).unwrap();

        let subpaths = path.subpaths().collect::<Vec<_>>();
        assert_eq!(subpaths.len(), 3);
        for (hole, emitted) in holes.iter().zip(&subpaths[1..]) {
            let mut expected = tessellator.tessellate_shape(hole).unwrap();
            expected.reverse();
            assert_eq!(*emitted, expected);
        }
        //exactly one break marker between consecutive boundaries
        assert_eq!(path.nodes().iter().filter(|n| n.is_none()).count(), 2);
    }

    #[test]
    fn reversed_hole_matches_reversed_shape() {
        //traversing the hole's elements backwards describes the same boundary as the reversed points
        let tessellator = Tessellator::default();
        let hole = square(2.0, 2.0, 3.0);
        let mut reversed_points = tessellator.tessellate_shape(&hole).unwrap();
        reversed_points.reverse();
        let reversed_elements = tessellator.tessellate_shape(&hole.reverse()).unwrap();
        assert_eq!(reversed_points, reversed_elements);
    }

    #[test]
    fn discontinuous_chain() {
        let shape = Shape::new(vec![
            segment((0.0, 0.0), (1.0, 0.0)),
            segment((1.0, 0.5), (1.0, 1.0)),
            segment((1.0, 1.0), (0.0, 0.0)),
        ])
        .unwrap();
        let err = Tessellator::default().tessellate_shape(&shape).unwrap_err();
        assert_eq!(
            err,
            GeometryError::Discontinuous {
                index: 1,
                expected: Point(1.0, 0.0),
                found: Point(1.0, 0.5),
            }
        );
    }

    #[test]
    fn open_shape_fails_closure() {
        let shape = Shape::new(vec![
            segment((0.0, 0.0), (1.0, 0.0)),
            segment((1.0, 0.0), (1.0, 1.0)),
        ])
        .unwrap();
        let tessellator = Tessellator::default();
        assert!(tessellator.tessellate_chain(shape.elements()).is_ok());
        assert!(matches!(
            tessellator.tessellate_shape(&shape),
            Err(GeometryError::Discontinuous { index: 0, .. })
        ));
    }

    #[test]
    fn small_gaps_within_tolerance_are_accepted() {
        let shape = Shape::new(vec![
            segment((0.0, 0.0), (1.0, 0.0)),
            segment((1.0 + 1e-9, 0.0), (1.0, 1.0)),
            segment((1.0, 1.0), (0.0, 1e-9)),
        ])
        .unwrap();
        assert!(Tessellator::default().tessellate_shape(&shape).is_ok());
    }

    #[test]
    fn inconsistent_radius() {
        let result = CircularArc::new(
            Point(1.0, 0.0),
            Point(0.0, 2.0),
            Point(0.0, 0.0),
            true,
            Tolerance::default(),
        );
        assert!(matches!(result, Err(GeometryError::InconsistentRadius { .. })));
    }

    #[test]
    fn degenerate_arc() {
        let arc = arc((1.0, 1.0), (1.0, 1.0), (1.0, 1.0), true);
        assert!(matches!(
            Tessellator::default().sample_arc(&arc),
            Err(GeometryError::DegenerateArc { .. })
        ));
    }

    #[test_case(ArcSampling::Fixed { n_samples: 1 }; "single sample")]
    #[test_case(ArcSampling::Adaptive { max_deviation: 0.1, min_samples: 1, max_samples: 10 }; "min too small")]
    #[test_case(ArcSampling::Adaptive { max_deviation: 0.1, min_samples: 10, max_samples: 5 }; "max below min")]
    #[test_case(ArcSampling::Adaptive { max_deviation: 0.0, min_samples: 2, max_samples: 5 }; "zero deviation")]
    fn invalid_sampling(arc_sampling: ArcSampling) {
        let tessellator = Tessellator::new(TessellationConfig {
            arc_sampling,
            ..Default::default()
        });
        let arc = arc((1.0, 0.0), (0.0, 1.0), (0.0, 0.0), true);
        assert!(matches!(
            tessellator.sample_arc(&arc),
            Err(GeometryError::InvalidSampling(_))
        ));
    }

    #[test]
    fn empty_shape() {
        assert_eq!(Shape::new(vec![]), Err(GeometryError::EmptyShape));
        assert_eq!(
            Tessellator::default().tessellate_chain(&[]),
            Err(GeometryError::EmptyShape)
        );
    }
}
