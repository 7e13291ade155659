use crate::geometry::primitives::Point;
use crate::tessellation::Path;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::node::element::path::Data;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Write the id of every placed item at its label position
    #[serde(default = "default_true")]
    pub labels: bool,
    ///Fill rule used for defects and items, holes only show up as cutouts with a proper fill rule
    #[serde(default)]
    pub fill_rule: FillRule,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            labels: true,
            fill_rule: FillRule::EvenOdd,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    #[default]
    EvenOdd,
    NonZero,
}

impl Display for FillRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FillRule::EvenOdd => write!(f, "evenodd"),
            FillRule::NonZero => write!(f, "nonzero"),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f64,
    pub container_fill: Color,
    pub defect_fill: Color,
    pub item_fill: Color,
    pub item_fill_opacity: f64,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::PLOTLY
    }
}

impl SvgTheme {
    pub const PLOTLY: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        container_fill: Color(0xFF, 0xFF, 0xFF),
        defect_fill: Color(0xDC, 0x14, 0x3C),     // CRIMSON
        item_fill: Color(0x64, 0x95, 0xED),       // CORNFLOWER BLUE
        item_fill_opacity: 0.8,
    };

    pub const GRAY: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.5,
        container_fill: Color(0xD3, 0xD3, 0xD3),
        defect_fill: Color(0x2D, 0x2D, 0x2D),
        item_fill: Color(0x7A, 0x7A, 0x7A),
        item_fill_opacity: 1.0,
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid color: {s:?}, expected #RRGGBB"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("invalid color: {s:?}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

/// Converts a [`Path`] into SVG path data, every sub-path becomes a closed polygon
pub fn path_data(path: &Path) -> Data {
    let mut data = Data::new();
    for subpath in path.subpaths() {
        let Some((first, rest)) = subpath.split_first() else {
            continue;
        };
        data = data.move_to(svg_coords(*first));
        for p in rest {
            data = data.line_to(svg_coords(*p));
        }
        data = data.close();
    }
    data
}

fn svg_coords(Point(x, y): Point) -> (f32, f32) {
    (x as f32, y as f32)
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> svg::node::element::Path {
    let mut path = svg::node::element::Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
