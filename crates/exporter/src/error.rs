use charts::{ChartError, DocumentId};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Page document serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document '{0}' has no pages")]
    NoPages(DocumentId),

    #[error("There are no documents to merge")]
    NothingToMerge,
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ExportError> for ChartError {
    fn from(error: ExportError) -> Self {
        let output_id = match &error {
            ExportError::Io { path, .. } => path.display().to_string(),
            ExportError::NoPages(id) => id.to_string(),
            ExportError::Json(_) | ExportError::NothingToMerge => String::new(),
        };
        ChartError::Export {
            output_id,
            reason: error.to_string(),
        }
    }
}
