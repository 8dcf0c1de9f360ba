use crate::error::ReportError;
use analytics::{AggregationEngine, DensityPoint};
use charts::{ChartExporter, ChartSeries, DensityMetric, DocumentId, ReportDocument, SeriesBuilder};
use core_types::{DensityRecord, DimensionValue};
use std::collections::BTreeMap;

pub const COMPRESSION_DOCUMENT_ID: &str = "report_401_compression_vs_density";
pub const DFA_STATES_DOCUMENT_ID: &str = "report_401_dfa_states_vs_density";

const X_AXIS_LABEL: &str = "Transition function density";

/// NFA shape held fixed along one density series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Shape {
    alphabet: u32,
    states: u32,
    final_density: DimensionValue,
}

/// Charts of the determinization experiment: how the DFA size and its
/// Hopcroft compression evolve with the NFA transition density.
///
/// Produces exactly two documents, one series per NFA shape in each.
pub struct DensityReport<E: ChartExporter> {
    exporter: E,
    aggregation: AggregationEngine,
    builder: SeriesBuilder,
}

impl<E: ChartExporter> DensityReport<E> {
    pub fn new(exporter: E) -> Self {
        Self {
            exporter,
            aggregation: AggregationEngine::new(),
            builder: SeriesBuilder::new(),
        }
    }

    pub fn run(&self, records: &[DensityRecord]) -> Result<Vec<DocumentId>, ReportError> {
        let documents = self.assemble(records);
        let ids = documents
            .iter()
            .map(|document| self.exporter.export(document))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(documents = ids.len(), "Density report exported.");
        Ok(ids)
    }

    /// Builds both documents without exporting them.
    pub fn assemble(&self, records: &[DensityRecord]) -> Vec<ReportDocument> {
        let mut shapes: BTreeMap<Shape, Vec<&DensityRecord>> = BTreeMap::new();
        for record in records {
            let shape = Shape {
                alphabet: record.alphabet,
                states: record.states,
                final_density: DimensionValue::from(record.final_density),
            };
            shapes.entry(shape).or_default().push(record);
        }
        tracing::debug!(shapes = shapes.len(), "Grouped density records by NFA shape.");

        let mut compression = Vec::with_capacity(shapes.len());
        let mut dfa_states = Vec::with_capacity(shapes.len());
        for (shape, group) in &shapes {
            let points: Vec<DensityPoint> = self
                .aggregation
                .aggregate_density(group.iter().copied(), |r| DimensionValue::from(r.density));

            compression.push(self.builder.density_series(
                &format!("k={}, n={}, fd={}", shape.alphabet, shape.states, shape.final_density),
                DensityMetric::CompressionRatio,
                &points,
            ));
            dfa_states.push(self.builder.density_series(
                &format!("NFAs k={}, n={} fd={}", shape.alphabet, shape.states, shape.final_density),
                DensityMetric::DfaStates,
                &points,
            ));
        }

        vec![
            document(
                "States count compression ratio vs density",
                "Ratio",
                compression,
                COMPRESSION_DOCUMENT_ID,
            ),
            document("Average DFA states vs density", "DFA states", dfa_states, DFA_STATES_DOCUMENT_ID),
        ]
    }
}

fn document(title: &str, y_axis_label: &str, series: Vec<ChartSeries>, output_id: &str) -> ReportDocument {
    ReportDocument {
        title: title.to_string(),
        x_axis_label: X_AXIS_LABEL.to_string(),
        y_axis_label: y_axis_label.to_string(),
        series,
        output_id: output_id.to_string(),
    }
}
