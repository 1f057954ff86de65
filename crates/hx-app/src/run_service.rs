//! Calculation execution and store access.

use hx_engine::{CalculationRequest, CalculationResult, SolverKind, calculate};
use hx_results::{CalculationId, CalculationStore, SavedCalculation};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Options for running a calculation.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub solver: SolverKind,
    /// Persist the result in the store.
    pub save: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            solver: SolverKind::default(),
            save: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunResponse {
    /// Store id, present when the result was saved.
    pub id: Option<CalculationId>,
    pub result: CalculationResult,
}

/// Run the engine on `request` and optionally persist the outcome.
pub fn run_calculation(
    store: &CalculationStore,
    request: &CalculationRequest,
    options: &RunOptions,
) -> AppResult<RunResponse> {
    let result = calculate(request, options.solver)?;
    info!(
        name = %request.name,
        solver = %options.solver,
        efficiency = result.efficiency,
        "calculation finished"
    );

    if !options.save {
        return Ok(RunResponse { id: None, result });
    }

    let saved = SavedCalculation::new(request.clone(), options.solver, result);
    store.save(&saved)?;
    info!(id = %saved.id, "calculation saved");

    Ok(RunResponse {
        id: Some(saved.id),
        result: saved.result,
    })
}

/// Stored calculations, newest first.
pub fn list_calculations(store: &CalculationStore) -> AppResult<Vec<SavedCalculation>> {
    Ok(store.list()?)
}

pub fn get_calculation(store: &CalculationStore, id: &CalculationId) -> AppResult<SavedCalculation> {
    Ok(store.load(id)?)
}

/// Delete a calculation. Deleting an absent id is not an error.
pub fn delete_calculation(store: &CalculationStore, id: &CalculationId) -> AppResult<bool> {
    let removed = store.delete(id)?;
    if removed {
        info!(%id, "calculation deleted");
    }
    Ok(removed)
}

pub fn parse_calculation_id(text: &str) -> AppResult<CalculationId> {
    CalculationId::parse_str(text.trim())
        .map_err(|e| AppError::InvalidInput(format!("Invalid calculation id '{}': {}", text, e)))
}
