//! # Benchmark Analytics
//!
//! Turns raw benchmark records into the numbers that end up on the charts.
//!
//! - `AggregationEngine` groups records by a dimension (state count, alphabet
//!   size, density) and computes per-group means.
//! - `RatioEngine` inner-joins two aggregated series on their dimension value
//!   and divides their mean execution times.
//!
//! Both are stateless and deterministic: the same multiset of records always
//! yields the same points in ascending dimension order, whatever the input
//! order.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod ratio;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AggregationEngine;
pub use error::AnalyticsError;
pub use ratio::RatioEngine;
pub use report::{AggregatedPoint, DensityPoint, RatioPoint};
