/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting aggregation results into external representations
pub mod export;

/// All logic for drawing aggregated bins as SVG
pub mod svg;
