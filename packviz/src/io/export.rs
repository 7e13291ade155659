use crate::aggregation::{Aggregation, BinPaths, RecordError};
use crate::io::ext_repr::{ExtBinPaths, ExtLabel, ExtPath, ExtRecordError, ExtVisualization};
use crate::tessellation::Path;
use itertools::Itertools;

/// Exports an [`Aggregation`] into a renderer-ready external representation
pub fn export(aggregation: &Aggregation) -> ExtVisualization {
    ExtVisualization {
        bins: aggregation.bins.iter().map(export_bin_paths).collect_vec(),
        errors: aggregation.errors.iter().map(export_record_error).collect_vec(),
    }
}

pub fn export_bin_paths(bin_paths: &BinPaths) -> ExtBinPaths {
    ExtBinPaths {
        bin: bin_paths.bin,
        container: export_path(&bin_paths.container),
        defects: export_path(&bin_paths.defects),
        items: export_path(&bin_paths.items),
        labels: bin_paths
            .labels
            .iter()
            .map(|l| ExtLabel {
                x: l.position.0,
                y: l.position.1,
                id: l.id,
            })
            .collect_vec(),
    }
}

pub fn export_path(path: &Path) -> ExtPath {
    let (xs, ys) = path.xs_ys();
    ExtPath { xs, ys }
}

pub fn export_record_error(record_error: &RecordError) -> ExtRecordError {
    ExtRecordError {
        bin: record_error.bin,
        category: record_error.category,
        id: record_error.record_id,
        message: record_error.error.to_string(),
    }
}
