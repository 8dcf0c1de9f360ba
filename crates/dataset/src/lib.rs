//! # Benchmark Dataset Reader
//!
//! Parses the CSV files written by the minimization benchmark harness into
//! validated, immutable records. Nothing downstream ever sees a partially
//! typed row: a malformed row, an unknown algorithm or a violated record
//! invariant fails the whole read.

pub mod error;
pub mod reader;

pub use error::DatasetError;
pub use reader::{
    parse_benchmark_records, parse_density_records, read_benchmark_records, read_density_records,
};
