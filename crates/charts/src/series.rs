use analytics::{AggregatedPoint, DensityPoint, RatioPoint};
use core_types::Algorithm;
use serde::{Deserialize, Serialize};

/// Marker shape drawn at every point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    /// Plain line, no marker.
    None,
    Circle,
    Square,
    Diamond,
}

impl Marker {
    /// The marker every chart uses for an algorithm.
    ///
    /// This is a total mapping: a new `Algorithm` variant will not compile
    /// until it is given a marker here.
    pub fn for_algorithm(algorithm: Algorithm) -> Marker {
        match algorithm {
            Algorithm::Hopcroft => Marker::Circle,
            Algorithm::Incremental => Marker::Square,
            Algorithm::Hybrid => Marker::Diamond,
        }
    }
}

/// One line on a chart. Points are ordered ascending by x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub marker: Marker,
    pub points: Vec<(f64, f64)>,
}

/// The field of an `AggregatedPoint` plotted on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Mean execution time in nanoseconds.
    Time,
    /// Automata minimized per second.
    Frequency,
    /// Mean fraction of states removed.
    CompressionRatio,
}

impl Metric {
    pub fn value(&self, point: &AggregatedPoint) -> f64 {
        match self {
            Metric::Time => point.mean_time_ns,
            Metric::Frequency => point.frequency_hz,
            Metric::CompressionRatio => point.mean_compression_ratio,
        }
    }
}

/// The field of a `DensityPoint` plotted on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityMetric {
    DfaStates,
    CompressionRatio,
}

impl DensityMetric {
    pub fn value(&self, point: &DensityPoint) -> f64 {
        match self {
            DensityMetric::DfaStates => point.mean_dfa_states,
            DensityMetric::CompressionRatio => point.mean_compression_ratio,
        }
    }
}

/// Converts analytics output into chart series.
///
/// The x value is always the point's dimension value; the input order, which
/// the engines guarantee to be ascending, is preserved.
#[derive(Debug, Default)]
pub struct SeriesBuilder {}

impl SeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A per-algorithm series, labeled with the algorithm's name.
    pub fn algorithm_series(&self, algorithm: Algorithm, metric: Metric, points: &[AggregatedPoint]) -> ChartSeries {
        build(
            algorithm.name(),
            Marker::for_algorithm(algorithm),
            points.iter().map(|p| (p.dimension.as_f64(), metric.value(p))),
        )
    }

    /// A time-ratio series between two algorithms.
    pub fn ratio_series(&self, label: &str, marker: Marker, points: &[RatioPoint]) -> ChartSeries {
        build(label, marker, points.iter().map(|p| (p.dimension.as_f64(), p.ratio)))
    }

    /// A density-experiment series; these are drawn without markers.
    pub fn density_series(&self, label: &str, metric: DensityMetric, points: &[DensityPoint]) -> ChartSeries {
        build(
            label,
            Marker::None,
            points.iter().map(|p| (p.dimension.as_f64(), metric.value(p))),
        )
    }
}

fn build(label: &str, marker: Marker, points: impl Iterator<Item = (f64, f64)>) -> ChartSeries {
    let points: Vec<(f64, f64)> = points.collect();
    debug_assert!(points.is_sorted_by(|a, b| a.0 <= b.0), "series points must ascend by x");
    ChartSeries {
        label: label.to_string(),
        marker,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::DimensionValue;

    fn aggregated(n: u64, t: f64, ratio: f64) -> AggregatedPoint {
        AggregatedPoint {
            dimension: DimensionValue::Count(n),
            mean_time_ns: t,
            frequency_hz: 1.0e9 / t,
            mean_compression_ratio: ratio,
            sample_count: 1,
        }
    }

    #[test]
    fn marker_mapping_is_fixed() {
        assert_eq!(Marker::for_algorithm(Algorithm::Hopcroft), Marker::Circle);
        assert_eq!(Marker::for_algorithm(Algorithm::Incremental), Marker::Square);
        assert_eq!(Marker::for_algorithm(Algorithm::Hybrid), Marker::Diamond);
    }

    #[test]
    fn every_algorithm_has_its_own_marker() {
        let markers: Vec<Marker> = Algorithm::ALL.iter().map(|&alg| Marker::for_algorithm(alg)).collect();
        assert!(!markers.contains(&Marker::None));
        for (i, marker) in markers.iter().enumerate() {
            assert!(!markers[i + 1..].contains(marker), "{marker:?} is shared");
        }
    }

    #[test]
    fn algorithm_series_extracts_the_requested_metric() {
        let points = vec![aggregated(4, 200.0, 0.5), aggregated(8, 400.0, 0.25)];
        let builder = SeriesBuilder::new();

        let time = builder.algorithm_series(Algorithm::Incremental, Metric::Time, &points);
        assert_eq!(time.label, "Incremental");
        assert_eq!(time.marker, Marker::Square);
        assert_eq!(time.points, vec![(4.0, 200.0), (8.0, 400.0)]);

        let freq = builder.algorithm_series(Algorithm::Incremental, Metric::Frequency, &points);
        assert_eq!(freq.points, vec![(4.0, 5.0e6), (8.0, 2.5e6)]);

        let ratio = builder.algorithm_series(Algorithm::Incremental, Metric::CompressionRatio, &points);
        assert_eq!(ratio.points, vec![(4.0, 0.5), (8.0, 0.25)]);
    }

    #[test]
    fn ratio_series_keeps_label_and_marker() {
        let points = vec![
            RatioPoint { dimension: DimensionValue::Count(2), ratio: 0.5 },
            RatioPoint { dimension: DimensionValue::Count(3), ratio: 1.5 },
        ];
        let series = SeriesBuilder::new().ratio_series("Hybrid/Hopcroft", Marker::Diamond, &points);
        assert_eq!(series.label, "Hybrid/Hopcroft");
        assert_eq!(series.marker, Marker::Diamond);
        assert_eq!(series.points, vec![(2.0, 0.5), (3.0, 1.5)]);
    }
}
