use crate::GeometryError;
use crate::geometry::CompoundShape;
use crate::geometry::primitives::Point;
use crate::tessellation::{Path, Tessellator};
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Role of a region within a bin
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionCategory {
    /// Outline of the bin (container) itself
    #[serde(alias = "container")]
    Bin,
    /// Unusable zone within a bin
    #[serde(alias = "obstacle")]
    Defect,
    /// Placed piece
    #[serde(alias = "piece")]
    Item,
}

impl Display for RegionCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionCategory::Bin => write!(f, "bin"),
            RegionCategory::Defect => write!(f, "defect"),
            RegionCategory::Item => write!(f, "item"),
        }
    }
}

/// A region of a solution: which bin it belongs to, what it is and what it looks like.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionRecord {
    /// Index of the bin the region belongs to
    pub bin: usize,
    pub category: RegionCategory,
    pub id: Option<u64>,
    /// Position for the record's annotation, if known
    pub centroid: Option<Point>,
    /// A placed item can consist of several disjoint shapes, each with their own holes
    pub shapes: Vec<CompoundShape>,
}

/// Annotation of a placed item
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub position: Point,
    pub id: u64,
}

/// All paths of a single bin, one per [`RegionCategory`]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct BinPaths {
    pub bin: usize,
    pub container: Path,
    pub defects: Path,
    pub items: Path,
    /// Labels of the items, in input order
    pub labels: Vec<Label>,
}

impl BinPaths {
    pub fn new(bin: usize) -> Self {
        BinPaths {
            bin,
            ..Default::default()
        }
    }

    pub fn path(&self, category: RegionCategory) -> &Path {
        match category {
            RegionCategory::Bin => &self.container,
            RegionCategory::Defect => &self.defects,
            RegionCategory::Item => &self.items,
        }
    }

    fn path_mut(&mut self, category: RegionCategory) -> &mut Path {
        match category {
            RegionCategory::Bin => &mut self.container,
            RegionCategory::Defect => &mut self.defects,
            RegionCategory::Item => &mut self.items,
        }
    }
}

/// A record that could not be converted, with enough context to find it back
#[derive(Clone, Debug, PartialEq)]
pub struct RecordError {
    pub bin: usize,
    pub category: RegionCategory,
    pub record_id: Option<u64>,
    pub error: GeometryError,
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.record_id {
            Some(id) => write!(f, "[bin {}, {} {}] {}", self.bin, self.category, id, self.error),
            None => write!(f, "[bin {}, {}] {}", self.bin, self.category, self.error),
        }
    }
}

/// Result of aggregating a stream of [`RegionRecord`]s.
/// Partial: malformed records are left out of `bins` and listed in `errors` instead.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Aggregation {
    /// Paths per bin, sorted by bin index
    pub bins: Vec<BinPaths>,
    pub errors: Vec<RecordError>,
}

/// Tessellates all records and groups them per bin and category.
///
/// Within a group, every record's sub-paths are appended in input order, separated by break markers.
/// Records are tessellated in parallel, results are merged back in input order.
pub fn aggregate(tessellator: &Tessellator, records: &[RegionRecord]) -> Aggregation {
    let tessellated = records
        .par_iter()
        .map(|record| tessellate_record(tessellator, record))
        .collect::<Vec<_>>();

    let mut bins: BTreeMap<usize, BinPaths> = BTreeMap::new();
    let mut errors = vec![];

    for (record, result) in records.iter().zip(tessellated) {
        let bin_paths = bins
            .entry(record.bin)
            .or_insert_with(|| BinPaths::new(record.bin));
        match result {
            Ok(path) => {
                if let (RegionCategory::Item, Some(id)) = (record.category, record.id) {
                    let position = record.centroid.unwrap_or_else(|| label_position(&path));
                    bin_paths.labels.push(Label { position, id });
                }
                bin_paths.path_mut(record.category).append(path);
            }
            Err(error) => {
                let record_error = RecordError {
                    bin: record.bin,
                    category: record.category,
                    record_id: record.id,
                    error,
                };
                warn!("[AGGR] skipping malformed record: {record_error}");
                errors.push(record_error);
            }
        }
    }

    debug!(
        "[AGGR] aggregated {} records into {} bins ({} errors)",
        records.len(),
        bins.len(),
        errors.len()
    );

    Aggregation {
        bins: bins.into_values().collect(),
        errors,
    }
}

fn tessellate_record(tessellator: &Tessellator, record: &RegionRecord) -> Result<Path, GeometryError> {
    if record.shapes.is_empty() {
        return Err(GeometryError::EmptyShape);
    }
    let mut path = Path::new();
    for compound in &record.shapes {
        path.append(tessellator.assemble_compound(compound)?);
    }
    Ok(path)
}

/// Center of the bounding box of the first sub-path (the first outer boundary)
fn label_position(path: &Path) -> Point {
    let outer = path.subpaths().next().unwrap_or_default();
    let (x_min, y_min, x_max, y_max) = outer.iter().fold(
        (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
        |(x_min, y_min, x_max, y_max), Point(x, y)| {
            (x_min.min(*x), y_min.min(*y), x_max.max(*x), y_max.max(*y))
        },
    );
    match outer.is_empty() {
        true => Point(0.0, 0.0),
        false => Point((x_min + x_max) / 2.0, (y_min + y_max) / 2.0),
    }
}
