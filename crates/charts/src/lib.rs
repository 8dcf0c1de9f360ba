//! Chart definitions: labeled, styled series and the report documents that
//! collect them, plus the seam through which a rendering backend persists a
//! document.

pub mod document;
pub mod error;
pub mod exporter;
pub mod series;

pub use document::{DocumentId, ReportDocument};
pub use error::ChartError;
pub use exporter::ChartExporter;
pub use series::{ChartSeries, DensityMetric, Marker, Metric, SeriesBuilder};
