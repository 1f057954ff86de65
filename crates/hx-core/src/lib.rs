//! hx-core: shared foundation for the heatbed workspace.
//!
//! - units: uom SI types and constructors for request quantities
//! - numeric: float comparison and input guards
//! - error: guard failures

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
