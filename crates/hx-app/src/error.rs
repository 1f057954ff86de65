//! Error types for the hx-app service layer.

use std::path::PathBuf;

/// Unified error for CLI and other front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Calculation failed: {0}")]
    Engine(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Failed to read request file: {path}")]
    RequestFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write request file: {path}")]
    RequestFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported request file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Calculation not found: {0}")]
    CalculationNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hx-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<hx_engine::EngineError> for AppError {
    fn from(err: hx_engine::EngineError) -> Self {
        AppError::Engine(err.to_string())
    }
}

impl From<hx_results::ResultsError> for AppError {
    fn from(err: hx_results::ResultsError) -> Self {
        match err {
            hx_results::ResultsError::CalculationNotFound { id } => {
                AppError::CalculationNotFound(id.to_string())
            }
            other => AppError::Results(other.to_string()),
        }
    }
}
