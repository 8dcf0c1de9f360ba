use crate::document::{DocumentId, ReportDocument};
use crate::error::ChartError;

/// A rendering backend that turns a chart definition into a persisted document.
///
/// Each document is exported exactly once; the returned identifier is all the
/// caller keeps afterwards, and it must resolve to a readable document for as
/// long as the run lasts.
pub trait ChartExporter {
    fn export(&self, document: &ReportDocument) -> Result<DocumentId, ChartError>;
}

impl<T: ChartExporter + ?Sized> ChartExporter for &T {
    fn export(&self, document: &ReportDocument) -> Result<DocumentId, ChartError> {
        (**self).export(document)
    }
}
