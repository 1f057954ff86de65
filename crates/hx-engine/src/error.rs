//! Error types for engine operations.

use hx_core::CoreError;
use thiserror::Error;

/// Errors surfaced by a calculation run.
///
/// Only invalid input aborts a run. Numerical irregularities inside valid
/// ranges are resolved by the solvers themselves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn invalid(field: &'static str, reason: &'static str) -> Self {
        EngineError::InvalidInput { field, reason }
    }

    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            EngineError::InvalidInput { field, .. } => field,
        }
    }
}

impl From<CoreError> for EngineError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NonFinite { what, .. } => EngineError::invalid(what, "must be finite"),
            CoreError::InvalidArg { what } => EngineError::invalid(what, "must be positive"),
        }
    }
}

/// Require a finite, strictly positive value for `field`.
pub(crate) fn require_positive(value: f64, field: &'static str) -> EngineResult<f64> {
    Ok(hx_core::ensure_positive(value, field)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_field() {
        let err = EngineError::invalid("gas.density", "must be positive");
        assert_eq!(err.to_string(), "Invalid input: gas.density must be positive");
        assert_eq!(err.field(), "gas.density");
    }

    #[test]
    fn core_error_conversion() {
        let err: EngineError = CoreError::NonFinite {
            what: "layer.height",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err, EngineError::invalid("layer.height", "must be finite"));
    }

    #[test]
    fn require_positive_rejects_zero() {
        assert_eq!(require_positive(1.5, "x"), Ok(1.5));
        assert_eq!(
            require_positive(0.0, "layer.cross_section"),
            Err(EngineError::invalid("layer.cross_section", "must be positive"))
        );
    }
}
