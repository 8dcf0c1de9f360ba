use crate::series::ChartSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One chart, ready to be handed to an exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub series: Vec<ChartSeries>,
    /// File stem the exporter persists the document under, e.g. `time_vs_states_k2`.
    pub output_id: String,
}

impl ReportDocument {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }
}

/// The identifier a persisted document is known by after export.
///
/// Ordering is the plain lexicographic order of the identifier string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
