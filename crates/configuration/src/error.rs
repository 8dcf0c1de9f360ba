use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A source could not be read or did not match the expected shape.
    #[error("Cannot load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The settings parsed but cannot drive a run.
    #[error("Invalid configuration: {0}")]
    Validation(String),
}
