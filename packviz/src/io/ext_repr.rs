use crate::aggregation::RegionCategory;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPoint {
    pub x: f64,
    pub y: f64,
}

/// External representation of a [`BoundaryElement`](crate::geometry::primitives::BoundaryElement).
///
/// The type tag is kept as a string, so unknown element types surface as a
/// per-record error instead of failing the whole document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtElement {
    /// `LineSegment` or `CircularArc`
    #[serde(rename = "type")]
    pub kind: String,
    pub start: ExtPoint,
    pub end: ExtPoint,
    /// Center of the circle, arcs only
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub center: Option<ExtPoint>,
    /// Direction of the arc, arcs only
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub anticlockwise: Option<bool>,
}

/// External representation of a [`CompoundShape`](crate::geometry::CompoundShape).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCompoundShape {
    /// Outer boundary
    pub shape: Vec<ExtElement>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub holes: Vec<Vec<ExtElement>>,
}

/// External representation of a [`RegionRecord`](crate::aggregation::RegionRecord).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRegionRecord {
    pub bin: usize,
    pub category: RegionCategory,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub centroid: Option<ExtPoint>,
    pub shapes: Vec<ExtCompoundShape>,
}

/// Ordered stream of region records
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRecordStream {
    pub records: Vec<ExtRegionRecord>,
}

/// Boundary element as written in a solution certificate: flat coordinates, already in bin space.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCertElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub xs: f64,
    pub ys: f64,
    pub xe: f64,
    pub ye: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub xc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub yc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub anticlockwise: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCertShape {
    pub shape: Vec<ExtCertElement>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub holes: Vec<Vec<ExtCertElement>>,
}

/// An item placed in a certificate bin
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCertItem {
    /// Id of the item type
    pub id: u64,
    /// Translation applied to the item (already included in the element coordinates)
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Rotation applied to the item (already included in the element coordinates)
    #[serde(default)]
    pub angle: f64,
    pub item_shapes: Vec<ExtCertShape>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCertBin {
    /// Id of the bin type
    pub id: u64,
    #[serde(default = "default_copies")]
    pub copies: u64,
    pub shape: Vec<ExtCertElement>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub defects: Vec<ExtCertShape>,
    #[serde(default)]
    pub items: Vec<ExtCertItem>,
}

fn default_copies() -> u64 {
    1
}

/// Solution certificate, as written by the optimizer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    pub bins: Vec<ExtCertBin>,
}

/// Coordinates of a [`Path`](crate::tessellation::Path) as two parallel lists, `null` marks a break
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ExtPath {
    pub xs: Vec<Option<f64>>,
    pub ys: Vec<Option<f64>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLabel {
    pub x: f64,
    pub y: f64,
    pub id: u64,
}

/// External representation of a [`BinPaths`](crate::aggregation::BinPaths)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBinPaths {
    pub bin: usize,
    pub container: ExtPath,
    pub defects: ExtPath,
    pub items: ExtPath,
    pub labels: Vec<ExtLabel>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRecordError {
    pub bin: usize,
    pub category: RegionCategory,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<u64>,
    pub message: String,
}

/// External representation of an [`Aggregation`](crate::aggregation::Aggregation)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtVisualization {
    pub bins: Vec<ExtBinPaths>,
    pub errors: Vec<ExtRecordError>,
}
