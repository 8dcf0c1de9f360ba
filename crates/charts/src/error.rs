use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to export chart '{output_id}': {reason}")]
    Export { output_id: String, reason: String },
}
