use crate::GeometryError;
use crate::util::Tolerance;
use serde::{Deserialize, Serialize};

/// Configuration of the [`Tessellator`](crate::tessellation::Tessellator)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TessellationConfig {
    /// Tolerance for continuity, closure and arc radius checks
    #[serde(default)]
    pub tolerance: Tolerance,
    /// How many points each circular arc is sampled into
    #[serde(default)]
    pub arc_sampling: ArcSampling,
}

impl TessellationConfig {
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.tolerance.validate()?;
        self.arc_sampling.validate()
    }
}

/// Resolution at which circular arcs are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ArcSampling {
    /// Every arc is sampled into exactly `n_samples` points, whatever its span.
    /// Keeps the output size predictable.
    Fixed { n_samples: usize },
    /// The number of samples follows the arc's span and radius, such that the distance
    /// between a chord and the arc never exceeds `max_deviation`.
    Adaptive {
        max_deviation: f64,
        min_samples: usize,
        max_samples: usize,
    },
}

impl ArcSampling {
    pub const DEFAULT_N_SAMPLES: usize = 1024;

    pub fn validate(&self) -> Result<(), GeometryError> {
        match *self {
            ArcSampling::Fixed { n_samples } if n_samples < 2 => Err(
                GeometryError::InvalidSampling(format!("n_samples must be at least 2, got {n_samples}")),
            ),
            ArcSampling::Adaptive { min_samples, .. } if min_samples < 2 => Err(
                GeometryError::InvalidSampling(format!(
                    "min_samples must be at least 2, got {min_samples}"
                )),
            ),
            ArcSampling::Adaptive {
                min_samples,
                max_samples,
                ..
            } if max_samples < min_samples => Err(GeometryError::InvalidSampling(format!(
                "max_samples ({max_samples}) is smaller than min_samples ({min_samples})"
            ))),
            ArcSampling::Adaptive { max_deviation, .. }
                if !(max_deviation.is_finite() && max_deviation > 0.0) =>
            {
                Err(GeometryError::InvalidSampling(format!(
                    "max_deviation must be strictly positive, got {max_deviation}"
                )))
            }
            _ => Ok(()),
        }
    }
}

impl Default for ArcSampling {
    fn default() -> Self {
        ArcSampling::Fixed {
            n_samples: Self::DEFAULT_N_SAMPLES,
        }
    }
}
