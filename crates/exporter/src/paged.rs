use charts::ReportDocument;
use configuration::ChartStyle;
use serde::{Deserialize, Serialize};

/// One page: a chart and the canvas it is drawn on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub style: ChartStyle,
    pub chart: ReportDocument,
}

/// A persisted document made of an ordered list of pages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PagedDocument {
    pub pages: Vec<Page>,
}
