use core_types::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to open dataset '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid record at data row {row}: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: CoreError,
    },

    #[error("Dataset '{0}' contains no records")]
    Empty(String),
}
