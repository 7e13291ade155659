use std::sync::LazyLock;
use std::time::Instant;

use log::{info, warn};
use packviz::aggregation::{Aggregation, aggregate};
use packviz::io::ext_repr::ExtRegionRecord;
use packviz::io::import::Importer;
use packviz::tessellation::Tessellator;

use crate::config::VizConfig;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Imports and aggregates a record stream.
/// Records that fail either step are reported in [`Aggregation::errors`], import failures first.
pub fn visualize(ext_records: &[ExtRegionRecord], config: &VizConfig) -> Aggregation {
    let importer = Importer::new(config.tessellation.tolerance);
    let tessellator = Tessellator::new(config.tessellation);

    let (records, import_errors) = importer.import_records(ext_records);
    for record_error in &import_errors {
        warn!("[VIZ] skipping record that failed to import: {record_error}");
    }
    let mut aggregation = aggregate(&tessellator, &records);
    aggregation.errors.splice(0..0, import_errors);

    info!(
        "[VIZ] {} records imported, {} bins aggregated, {} records skipped",
        records.len(),
        aggregation.bins.len(),
        aggregation.errors.len()
    );
    aggregation
}
