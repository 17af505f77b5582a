use crate::domain::outcome::SubmissionState;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unknown form field: {0}")]
    UnknownField(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Gateway error: {0}")]
    GatewayError(String),
    #[error("Invalid submission transition: {from} -> {to}")]
    InvalidTransition {
        from: SubmissionState,
        to: SubmissionState,
    },
}

pub type Result<T> = std::result::Result<T, PaymentError>;
