pub mod dimension;
pub mod enums;
pub mod error;
pub mod records;

// Re-export the core types to provide a clean public API.
pub use dimension::{Axis, DimensionValue};
pub use enums::Algorithm;
pub use error::CoreError;
pub use records::{BenchmarkRecord, DensityRecord};
