use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unknown minimization algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),
}
