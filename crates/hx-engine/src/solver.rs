//! Profile solver selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analytical::AnalyticalSolver;
use crate::coefficient::HeatTransferCoefficient;
use crate::error::EngineResult;
use crate::flow::FlowCharacteristics;
use crate::model::LayerParameters;
use crate::numerical::NumericalSolver;
use crate::profile::Profile;

/// Everything a solver may read: the layer parameters and the outputs of the
/// two preceding stages.
#[derive(Debug, Clone, Copy)]
pub struct SolveInput<'a> {
    pub parameters: &'a LayerParameters,
    pub flow: &'a FlowCharacteristics,
    pub coefficient: &'a HeatTransferCoefficient,
}

impl SolveInput<'_> {
    /// Y = α_v·S·h / (V_g·ρ_g·c_g) for a height `h` in metres.
    pub fn dimensionless_height(&self, h: f64) -> f64 {
        self.coefficient.volumetric * self.parameters.cross_section * h
            / (self.flow.gas_volume_flow.value * self.flow.gas_volumetric_heat_capacity)
    }
}

/// Trait for temperature profile solvers.
pub trait ProfileSolver {
    fn name(&self) -> &'static str;

    /// Compute the `steps + 1` sample profile.
    fn solve(&self, input: &SolveInput<'_>) -> EngineResult<Profile>;
}

/// Solver selection for a calculation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// Closed-form lumped solution (default).
    #[default]
    Analytical,
    /// Explicit Euler marching with the correlated coefficient.
    Numerical,
}

impl SolverKind {
    pub fn solve(self, input: &SolveInput<'_>) -> EngineResult<Profile> {
        match self {
            SolverKind::Analytical => AnalyticalSolver.solve(input),
            SolverKind::Numerical => NumericalSolver.solve(input),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SolverKind::Analytical => AnalyticalSolver.name(),
            SolverKind::Numerical => NumericalSolver.name(),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analytical" => Ok(SolverKind::Analytical),
            "numerical" => Ok(SolverKind::Numerical),
            other => Err(format!(
                "unknown solver '{other}' (expected 'analytical' or 'numerical')"
            )),
        }
    }
}
