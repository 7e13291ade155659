use packviz::io::svg::SvgDrawOptions;
use packviz::util::TessellationConfig;
use serde::{Deserialize, Serialize};

/// Configuration of a visualization run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct VizConfig {
    /// Tolerance and arc sampling resolution
    #[serde(default)]
    pub tessellation: TessellationConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
