//! Tessellation of line segment and circular arc boundaries into flat, renderable point paths.
//!
//! Boundaries come from irregular cutting and packing solutions: bins, defects and placed items,
//! each possibly with holes. The output is one [`Path`](tessellation::Path) per bin and category,
//! with break markers separating disjoint sub-paths.

/// Grouping of many region records into per-bin, per-category paths
pub mod aggregation;

/// Geometric primitives: points, boundary elements and shapes
pub mod geometry;

/// Importing external representations and exporting aggregation results
pub mod io;

/// Converting boundaries into point sequences
pub mod tessellation;

/// Helper types which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::GeometryError;
