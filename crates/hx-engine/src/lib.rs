//! Counter-current heat exchange between a descending granular material and
//! an ascending gas in a packed bed.
//!
//! Pipeline:
//! - flow characterization (SI flows, heat-capacity flows, gas velocity)
//! - heat-transfer coefficient (Nusselt correlation or override)
//! - profile solver (closed-form or explicit Euler)
//! - result assembly (heat duty, efficiency, summary)

pub mod analytical;
pub mod assemble;
pub mod coefficient;
pub mod engine;
pub mod error;
pub mod flow;
pub mod model;
pub mod numerical;
pub mod profile;
pub mod solver;
pub mod validate;

pub use analytical::AnalyticalSolver;
pub use coefficient::{CoefficientSource, DimensionlessGroups, HeatTransferCoefficient};
pub use engine::calculate;
pub use error::{EngineError, EngineResult};
pub use flow::FlowCharacteristics;
pub use model::{
    CalculationRequest, CalculationResult, GasProperties, LayerParameters, MaterialProperties,
};
pub use numerical::NumericalSolver;
pub use profile::{GasOutlet, Profile, ProfileSample};
pub use solver::{ProfileSolver, SolveInput, SolverKind};
pub use validate::validate_request;
