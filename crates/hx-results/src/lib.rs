//! hx-results: saved calculations and their exports.

pub mod export;
pub mod store;
pub mod types;

pub use export::{CsvOptions, csv_file_name, to_csv, to_json};
pub use store::CalculationStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Calculation not found: {id}")]
    CalculationNotFound { id: CalculationId },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
