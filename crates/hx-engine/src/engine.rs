//! Calculation entry point.

use tracing::debug;

use crate::assemble::assemble;
use crate::coefficient::HeatTransferCoefficient;
use crate::error::EngineResult;
use crate::flow::FlowCharacteristics;
use crate::model::{CalculationRequest, CalculationResult};
use crate::solver::{SolveInput, SolverKind};
use crate::validate::validate_request;

/// Run one calculation with the selected solver.
///
/// Pure apart from the result timestamp: the request is only read, and two
/// calls with the same request produce the same profile.
pub fn calculate(
    request: &CalculationRequest,
    solver: SolverKind,
) -> EngineResult<CalculationResult> {
    validate_request(request)?;

    let flow = FlowCharacteristics::from_request(request)?;
    let coefficient = HeatTransferCoefficient::for_request(request, &flow)?;
    let input = SolveInput {
        parameters: &request.parameters,
        flow: &flow,
        coefficient: &coefficient,
    };

    let profile = solver.solve(&input)?;
    debug!(
        solver = %solver,
        samples = profile.len(),
        clamped = profile.clamped(),
        "profile solved"
    );

    Ok(assemble(&input, solver, profile))
}
