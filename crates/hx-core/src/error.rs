use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Failure of one of the numeric input guards.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be strictly positive")]
    InvalidArg { what: &'static str },
}
