use crate::error::ReportError;
use analytics::{AggregatedPoint, AggregationEngine, RatioEngine};
use charts::{ChartExporter, DocumentId, Marker, Metric, ReportDocument, SeriesBuilder};
use core_types::{Algorithm, Axis, BenchmarkRecord, DimensionValue};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{BTreeMap, BTreeSet};

/// The four charts produced for every fixed-dimension value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMetric {
    Time,
    Frequency,
    CompressionRatio,
    TimeRatio,
}

impl ReportMetric {
    pub const ALL: [ReportMetric; 4] = [
        ReportMetric::Time,
        ReportMetric::Frequency,
        ReportMetric::CompressionRatio,
        ReportMetric::TimeRatio,
    ];

    /// Leading part of the output file stem.
    pub fn slug(&self) -> &'static str {
        match self {
            ReportMetric::Time => "time",
            ReportMetric::Frequency => "freq",
            ReportMetric::CompressionRatio => "ratio",
            ReportMetric::TimeRatio => "timeratio",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ReportMetric::Time => "Average Execution time",
            ReportMetric::Frequency => "Automata frequency",
            ReportMetric::CompressionRatio => "Average Compression Ratio",
            ReportMetric::TimeRatio => "Average Time Execution Ratio",
        }
    }

    pub fn y_axis_label(&self) -> &'static str {
        match self {
            ReportMetric::Time => "Time (ns)",
            ReportMetric::Frequency => "Frequency (DFAs/s)",
            ReportMetric::CompressionRatio | ReportMetric::TimeRatio => "Ratio",
        }
    }

    /// The per-algorithm field charted, or `None` for the cross-algorithm ratio.
    fn series_metric(&self) -> Option<Metric> {
        match self {
            ReportMetric::Time => Some(Metric::Time),
            ReportMetric::Frequency => Some(Metric::Frequency),
            ReportMetric::CompressionRatio => Some(Metric::CompressionRatio),
            ReportMetric::TimeRatio => None,
        }
    }
}

/// One pass over the dataset: `free` varies along the x axis while its
/// complement is held at each of its values in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    pub free: Axis,
}

impl Sweep {
    /// Vary the state count, one chart set per alphabet size.
    pub const STATES: Sweep = Sweep { free: Axis::States };
    /// Vary the alphabet size, one chart set per state count.
    pub const ALPHABET: Sweep = Sweep { free: Axis::Alphabet };

    pub fn fixed(&self) -> Axis {
        self.free.complement()
    }

    /// e.g. `time_vs_states_k2` or `freq_vs_alpha_n64`.
    pub fn output_id(&self, metric: ReportMetric, fixed_value: DimensionValue) -> String {
        let axis = match self.free {
            Axis::States => "states_k",
            Axis::Alphabet => "alpha_n",
        };
        format!("{}_vs_{}{}", metric.slug(), axis, fixed_value)
    }

    pub fn title(&self, metric: ReportMetric, fixed_value: DimensionValue) -> String {
        let (varied, symbol) = match self.free {
            Axis::States => ("States number", "k"),
            Axis::Alphabet => ("Alphabet length", "n"),
        };
        format!("{} vs. {} ({}={})", metric.title(), varied, symbol, fixed_value)
    }

    pub fn x_axis_label(&self) -> &'static str {
        match self.free {
            Axis::States => "States",
            Axis::Alphabet => "Symbols",
        }
    }
}

/// A named pair of algorithms compared on the time-ratio chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioPair {
    pub numerator: Algorithm,
    pub denominator: Algorithm,
    pub marker: Marker,
}

impl RatioPair {
    pub fn label(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }
}

/// The pairs drawn on every time-ratio chart, in legend order.
pub const TIME_RATIO_PAIRS: [RatioPair; 3] = [
    RatioPair {
        numerator: Algorithm::Hybrid,
        denominator: Algorithm::Hopcroft,
        marker: Marker::Diamond,
    },
    RatioPair {
        numerator: Algorithm::Hybrid,
        denominator: Algorithm::Incremental,
        marker: Marker::Square,
    },
    RatioPair {
        numerator: Algorithm::Hopcroft,
        denominator: Algorithm::Incremental,
        marker: Marker::Circle,
    },
];

/// Builds and exports every chart of a report run.
pub struct ReportAssembler<E: ChartExporter> {
    exporter: E,
    aggregation: AggregationEngine,
    ratios: RatioEngine,
    builder: SeriesBuilder,
    show_progress: bool,
}

impl<E: ChartExporter> ReportAssembler<E> {
    pub fn new(exporter: E) -> Self {
        Self {
            exporter,
            aggregation: AggregationEngine::new(),
            ratios: RatioEngine::new(),
            builder: SeriesBuilder::new(),
            show_progress: false,
        }
    }

    /// Draws a progress bar on stderr while sweeping.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Runs the states sweep and then the alphabet sweep, returning the
    /// identifiers of every exported document in generation order.
    pub fn run(&self, records: &[BenchmarkRecord]) -> Result<Vec<DocumentId>, ReportError> {
        let mut ids = self.run_sweep(records, Sweep::STATES)?;
        ids.extend(self.run_sweep(records, Sweep::ALPHABET)?);
        tracing::info!(documents = ids.len(), "All report documents exported.");
        Ok(ids)
    }

    /// Exports the chart set of every value the fixed axis takes in `records`.
    pub fn run_sweep(&self, records: &[BenchmarkRecord], sweep: Sweep) -> Result<Vec<DocumentId>, ReportError> {
        let fixed = sweep.fixed();
        let fixed_values: BTreeSet<DimensionValue> = records.iter().map(|r| fixed.select(r)).collect();
        tracing::info!(free = ?sweep.free, values = fixed_values.len(), "Starting sweep.");

        let progress_bar = if self.show_progress {
            let bar = ProgressBar::new(fixed_values.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                    .progress_chars("=>-"),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        let mut ids = Vec::new();
        for value in fixed_values {
            progress_bar.set_message(format!("{:?}={}", fixed, value));
            let filtered: Vec<&BenchmarkRecord> = records.iter().filter(|r| fixed.select(r) == value).collect();

            for document in self.assemble(sweep, value, &filtered)? {
                ids.push(self.exporter.export(&document)?);
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        Ok(ids)
    }

    /// Builds, without exporting, the documents for one fixed value.
    ///
    /// `records` must already be restricted to that value. Returns no
    /// documents when it holds no algorithm at all, otherwise all four. The
    /// time-ratio chart always carries the three pairs; a pair without shared
    /// dimension values is drawn as an empty series.
    pub fn assemble(
        &self,
        sweep: Sweep,
        fixed_value: DimensionValue,
        records: &[&BenchmarkRecord],
    ) -> Result<Vec<ReportDocument>, ReportError> {
        let algorithms: BTreeSet<Algorithm> = records.iter().map(|r| r.algorithm()).collect();
        if algorithms.is_empty() {
            tracing::warn!(?sweep, %fixed_value, "No algorithm measured at this value; skipping its charts.");
            return Ok(Vec::new());
        }

        let aggregated: BTreeMap<Algorithm, Vec<AggregatedPoint>> = algorithms
            .iter()
            .map(|&alg| {
                let points = self.aggregation.aggregate(
                    records.iter().copied().filter(|r| r.algorithm() == alg),
                    |r| sweep.free.select(r),
                );
                (alg, points)
            })
            .collect();

        let mut documents = Vec::with_capacity(ReportMetric::ALL.len());
        for metric in ReportMetric::ALL {
            let series = match metric.series_metric() {
                Some(field) => aggregated
                    .iter()
                    .map(|(&alg, points)| self.builder.algorithm_series(alg, field, points))
                    .collect(),
                None => self.time_ratio_series(&aggregated)?,
            };

            documents.push(ReportDocument {
                title: sweep.title(metric, fixed_value),
                x_axis_label: sweep.x_axis_label().to_string(),
                y_axis_label: metric.y_axis_label().to_string(),
                series,
                output_id: sweep.output_id(metric, fixed_value),
            });
        }

        Ok(documents)
    }

    fn time_ratio_series(
        &self,
        aggregated: &BTreeMap<Algorithm, Vec<AggregatedPoint>>,
    ) -> Result<Vec<charts::ChartSeries>, ReportError> {
        let mut series = Vec::with_capacity(TIME_RATIO_PAIRS.len());
        for pair in TIME_RATIO_PAIRS {
            let numerator = aggregated.get(&pair.numerator).map(Vec::as_slice).unwrap_or_default();
            let denominator = aggregated.get(&pair.denominator).map(Vec::as_slice).unwrap_or_default();

            let points = self.ratios.time_ratio(numerator, denominator)?;
            if points.is_empty() {
                tracing::debug!(pair = %pair.label(), "No shared dimension values; ratio series left empty.");
            }
            series.push(self.builder.ratio_series(&pair.label(), pair.marker, &points));
        }
        Ok(series)
    }
}
