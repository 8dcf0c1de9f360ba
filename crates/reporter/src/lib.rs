//! # Report Orchestration
//!
//! Drives a complete report run over an already-loaded dataset:
//!
//! 1. `ReportAssembler` sweeps the records twice (varying the state count with
//!    the alphabet size fixed, then the reverse) and exports four charts per
//!    fixed value: time, frequency, compression ratio and time ratio.
//! 2. `DocumentMerger` composes the first page of every exported chart, in
//!    identifier order, into `charts_combined`.
//!
//! `DensityReport` covers the secondary determinization experiment with the
//! same aggregation machinery. The `pipeline` module wires dataset, exporter
//! and merger together for the binary.

pub mod assembler;
pub mod density;
pub mod error;
pub mod pipeline;

pub use assembler::{RatioPair, ReportAssembler, ReportMetric, Sweep, TIME_RATIO_PAIRS};
pub use density::{COMPRESSION_DOCUMENT_ID, DFA_STATES_DOCUMENT_ID, DensityReport};
pub use error::ReportError;
pub use pipeline::{run_density_report, run_report, RunSummary, COMBINED_DOCUMENT_NAME};
