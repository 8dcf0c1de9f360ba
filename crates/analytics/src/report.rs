use core_types::DimensionValue;
use serde::{Deserialize, Serialize};

/// Summary statistics of every run sharing one dimension value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    pub dimension: DimensionValue,
    /// Arithmetic mean of the elapsed times, in nanoseconds.
    pub mean_time_ns: f64,
    /// Automata minimized per second at the mean time (`1e9 / mean_time_ns`).
    pub frequency_hz: f64,
    /// Mean fraction of states eliminated by minimization.
    pub mean_compression_ratio: f64,
    pub sample_count: usize,
}

/// Relative speed of two algorithms at one dimension value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioPoint {
    pub dimension: DimensionValue,
    /// `mean_time_ns(numerator) / mean_time_ns(denominator)`.
    pub ratio: f64,
}

/// Summary of the determinization experiment at one density value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub dimension: DimensionValue,
    pub mean_dfa_states: f64,
    pub mean_compression_ratio: f64,
    pub sample_count: usize,
}
