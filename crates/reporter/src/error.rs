use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] dataset::DatasetError),

    #[error("Analytics calculation error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("Chart error: {0}")]
    Chart(#[from] charts::ChartError),

    #[error("Document composition error: {0}")]
    Export(#[from] exporter::ExportError),

    #[error("Cannot prepare output directory '{path}': {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Progress bar template error: {0}")]
    ProgressBarTemplate(String),
}

impl From<indicatif::style::TemplateError> for ReportError {
    fn from(error: indicatif::style::TemplateError) -> Self {
        ReportError::ProgressBarTemplate(error.to_string())
    }
}
