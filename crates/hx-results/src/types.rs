//! Stored record types.

use chrono::{DateTime, Utc};
use hx_engine::{CalculationRequest, CalculationResult, SolverKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CalculationId = Uuid;

/// A request together with the result computed for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedCalculation {
    pub id: CalculationId,
    #[serde(flatten)]
    pub request: CalculationRequest,
    #[serde(default)]
    pub solver: SolverKind,
    pub result: CalculationResult,
    pub created_at: DateTime<Utc>,
}

impl SavedCalculation {
    /// Wrap a fresh result under a new random id.
    pub fn new(request: CalculationRequest, solver: SolverKind, result: CalculationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            request,
            solver,
            result,
            created_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.request.name
    }
}
