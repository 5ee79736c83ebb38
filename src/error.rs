//! Error handling for the resume builder application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeBuilderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("PDF rendering error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ResumeBuilderError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeBuilderError {
    fn from(err: anyhow::Error) -> Self {
        ResumeBuilderError::Export(err.to_string())
    }
}
