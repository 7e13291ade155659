use crate::GeometryError;
use crate::geometry::primitives::{CircularArc, Point};
use crate::util::{ArcSampling, Tolerance};
use itertools::Itertools;

/// Samples a [`CircularArc`] into an ordered sequence of points, from `start` to `end` (both included).
///
/// The angles of the samples progress monotonically in the arc's direction.
/// The first and last point are exactly the arc's `start` and `end`.
pub fn sample_arc(
    arc: &CircularArc,
    sampling: ArcSampling,
    tolerance: Tolerance,
) -> Result<Vec<Point>, GeometryError> {
    sampling.validate()?;

    let radius = arc.radius();
    if tolerance.is_zero(radius, 1.0) {
        return Err(GeometryError::DegenerateArc {
            center: arc.center,
            radius,
        });
    }

    let (start_angle, end_angle) = arc.angles();
    let n_samples = n_samples(sampling, radius, (end_angle - start_angle).abs());
    let Point(cx, cy) = arc.center;

    let mut points = (0..n_samples)
        .map(|i| {
            let t = i as f64 / (n_samples - 1) as f64;
            let angle = start_angle + t * (end_angle - start_angle);
            Point(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect_vec();

    //snap the endpoints onto the exact input coordinates
    points[0] = arc.start;
    points[n_samples - 1] = arc.end;

    Ok(points)
}

fn n_samples(sampling: ArcSampling, radius: f64, span: f64) -> usize {
    match sampling {
        ArcSampling::Fixed { n_samples } => n_samples,
        ArcSampling::Adaptive {
            max_deviation,
            min_samples,
            max_samples,
        } => {
            //largest angular step for which the sagitta r * (1 - cos(step / 2)) stays within max_deviation
            let max_step = match max_deviation < radius {
                true => 2.0 * f64::acos(1.0 - max_deviation / radius),
                false => std::f64::consts::PI,
            };
            //clamp in floating point, a vanishing step makes the count infinite
            let n_samples = (span / max_step).ceil() + 1.0;
            (n_samples.min(max_samples as f64) as usize).clamp(min_samples, max_samples)
        }
    }
}
