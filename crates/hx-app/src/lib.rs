//! Shared application service layer for heatbed.
//!
//! Front ends go through this crate to run calculations, manage request
//! files and browse the calculation store.

pub mod error;
pub mod query;
pub mod request_service;
pub mod run_service;

pub use error::{AppError, AppResult};
pub use query::{CalculationSummary, summarize};
pub use request_service::{RequestFormat, load_request, save_request};
pub use run_service::{
    RunOptions, RunResponse, delete_calculation, get_calculation, list_calculations,
    parse_calculation_id, run_calculation,
};
