use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AnalyticsError {
    #[error("Calculation error: Division by zero encountered in ratio at dimension value {0}")]
    DivisionByZero(String),

    #[error("Series contains more than one point at dimension value {0}")]
    DuplicateDimension(String),
}
