use crate::GeometryError;
use crate::aggregation::{RecordError, RegionCategory, RegionRecord};
use crate::geometry::primitives::{BoundaryElement, CircularArc, LineSegment, Point};
use crate::geometry::{CompoundShape, Shape};
use crate::io::ext_repr::{
    ExtCertElement, ExtCertShape, ExtCompoundShape, ExtElement, ExtPoint, ExtRegionRecord,
    ExtSolution,
};
use crate::util::Tolerance;
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

/// Converts external representations of region records into internal ones.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer {
    /// Tolerance used to validate arc radii
    pub tolerance: Tolerance,
}

impl Importer {
    pub fn new(tolerance: Tolerance) -> Importer {
        Importer { tolerance }
    }

    pub fn import_element(&self, ext_element: &ExtElement) -> Result<BoundaryElement, GeometryError> {
        let start = Point::from(ext_element.start);
        let end = Point::from(ext_element.end);
        match ElementType::parse(&ext_element.kind)? {
            ElementType::LineSegment => Ok(LineSegment::new(start, end).into()),
            ElementType::CircularArc => {
                let center = ext_element
                    .center
                    .ok_or(GeometryError::MissingArcField("center"))?;
                let anticlockwise = ext_element
                    .anticlockwise
                    .ok_or(GeometryError::MissingArcField("anticlockwise"))?;
                let arc = CircularArc::new(start, end, center.into(), anticlockwise, self.tolerance)?;
                Ok(arc.into())
            }
        }
    }

    pub fn import_shape(&self, ext_elements: &[ExtElement]) -> Result<Shape, GeometryError> {
        let elements = ext_elements
            .iter()
            .map(|e| self.import_element(e))
            .collect::<Result<Vec<_>, _>>()?;
        Shape::new(elements)
    }

    pub fn import_compound(&self, ext_compound: &ExtCompoundShape) -> Result<CompoundShape, GeometryError> {
        let outer = self.import_shape(&ext_compound.shape)?;
        let holes = ext_compound
            .holes
            .iter()
            .map(|h| self.import_shape(h))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CompoundShape::new(outer, holes))
    }

    pub fn import_record(&self, ext_record: &ExtRegionRecord) -> Result<RegionRecord, RecordError> {
        let shapes = ext_record
            .shapes
            .iter()
            .map(|s| self.import_compound(s))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| RecordError {
                bin: ext_record.bin,
                category: ext_record.category,
                record_id: ext_record.id,
                error,
            })?;

        Ok(RegionRecord {
            bin: ext_record.bin,
            category: ext_record.category,
            id: ext_record.id,
            centroid: ext_record.centroid.map(Point::from),
            shapes,
        })
    }

    /// Imports all records, in order. Records which fail to import are returned separately,
    /// the others are unaffected.
    pub fn import_records(&self, ext_records: &[ExtRegionRecord]) -> (Vec<RegionRecord>, Vec<RecordError>) {
        let (records, errors): (Vec<_>, Vec<_>) = ext_records
            .par_iter()
            .map(|r| self.import_record(r))
            .collect::<Vec<_>>()
            .into_iter()
            .partition_result();

        debug!(
            "[IMPORT] imported {} records, {} failed",
            records.len(),
            errors.len()
        );
        (records, errors)
    }
}

/// Flattens a solution certificate into a record stream:
/// one record for every bin outline, defect and placed item, in that order per bin.
pub fn solution_to_records(solution: &ExtSolution) -> Vec<ExtRegionRecord> {
    let mut records = vec![];
    for (bin_pos, cert_bin) in solution.bins.iter().enumerate() {
        records.push(ExtRegionRecord {
            bin: bin_pos,
            category: RegionCategory::Bin,
            id: Some(cert_bin.id),
            centroid: None,
            shapes: vec![ExtCompoundShape {
                shape: cert_elements(&cert_bin.shape),
                holes: vec![],
            }],
        });
        for (defect_id, defect) in cert_bin.defects.iter().enumerate() {
            records.push(ExtRegionRecord {
                bin: bin_pos,
                category: RegionCategory::Defect,
                id: Some(defect_id as u64),
                centroid: None,
                shapes: vec![cert_shape(defect)],
            });
        }
        for item in cert_bin.items.iter() {
            records.push(ExtRegionRecord {
                bin: bin_pos,
                category: RegionCategory::Item,
                id: Some(item.id),
                centroid: None,
                shapes: item.item_shapes.iter().map(cert_shape).collect_vec(),
            });
        }
    }
    records
}

fn cert_shape(cert_shape: &ExtCertShape) -> ExtCompoundShape {
    ExtCompoundShape {
        shape: cert_elements(&cert_shape.shape),
        holes: cert_shape.holes.iter().map(|h| cert_elements(h)).collect_vec(),
    }
}

fn cert_elements(cert_elements: &[ExtCertElement]) -> Vec<ExtElement> {
    cert_elements.iter().map(ExtElement::from).collect_vec()
}

impl From<&ExtCertElement> for ExtElement {
    fn from(e: &ExtCertElement) -> Self {
        ExtElement {
            kind: e.kind.clone(),
            start: ExtPoint { x: e.xs, y: e.ys },
            end: ExtPoint { x: e.xe, y: e.ye },
            center: e.xc.zip(e.yc).map(|(x, y)| ExtPoint { x, y }),
            anticlockwise: e.anticlockwise,
        }
    }
}

impl From<ExtPoint> for Point {
    fn from(p: ExtPoint) -> Self {
        Point(p.x, p.y)
    }
}

enum ElementType {
    LineSegment,
    CircularArc,
}

impl ElementType {
    fn parse(tag: &str) -> Result<Self, GeometryError> {
        match tag {
            "LineSegment" | "line_segment" | "L" | "l" => Ok(ElementType::LineSegment),
            "CircularArc" | "circular_arc" | "C" | "c" => Ok(ElementType::CircularArc),
            _ => Err(GeometryError::UnknownElementType(tag.to_owned())),
        }
    }
}
