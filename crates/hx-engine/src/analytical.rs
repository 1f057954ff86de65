//! Closed-form counter-current profile.
//!
//! Lumped model of a bed where the material enters at height 0 and the gas at
//! height H₀. With capacity ratio `m = W_m / W_g`, `k = (m − 1) / m` and the
//! dimensionless height `Y`, the dimensionless temperatures are
//!
//! ```text
//! ϑ(Y) = (1 − e^{kY}) / (1 − m·e^{kY₀})        material
//! θ(Y) = (1 − m·e^{kY}) / (1 − m·e^{kY₀})      gas
//! ```
//!
//! so that `ϑ(0) = 0` and `θ(Y₀) = 1`.

use tracing::{debug, warn};

use crate::error::{EngineResult, require_positive};
use crate::profile::{GasOutlet, Profile, ProfileSample, sample_height};
use crate::solver::{ProfileSolver, SolveInput};

/// Below this distance from 1 the capacity ratio is treated as balanced.
pub const CAPACITY_RATIO_TOLERANCE: f64 = 1e-6;

/// Gap restored between the phases when a sample comes out inverted, °C.
pub const ORDERING_MARGIN: f64 = 0.1;

#[derive(Clone, Debug)]
pub struct AnalyticalSolver;

/// Shape of the dimensionless solution for a given capacity ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ExchangeShape {
    /// m ≈ 1: both profiles are straight lines with a constant gap.
    Balanced { y0: f64 },
    /// m < 1: every exponent is non-positive as written.
    LowRatio { m: f64, k: f64, y0: f64 },
    /// m > 1: numerator and denominator are scaled by e^{−kY₀}.
    HighRatio { m: f64, k: f64, y0: f64 },
}

impl ExchangeShape {
    fn new(m: f64, y0: f64) -> Self {
        if (m - 1.0).abs() < CAPACITY_RATIO_TOLERANCE {
            return ExchangeShape::Balanced { y0 };
        }
        let k = (m - 1.0) / m;
        if m < 1.0 {
            ExchangeShape::LowRatio { m, k, y0 }
        } else {
            ExchangeShape::HighRatio { m, k, y0 }
        }
    }

    /// `(ϑ, θ)` at dimensionless height `y`.
    fn at(self, y: f64) -> (f64, f64) {
        match self {
            ExchangeShape::Balanced { y0 } => (y / (1.0 + y0), (1.0 + y) / (1.0 + y0)),
            ExchangeShape::LowRatio { m, k, y0 } => {
                let e = (k * y).exp();
                let d = 1.0 - m * (k * y0).exp();
                ((1.0 - e) / d, (1.0 - m * e) / d)
            }
            ExchangeShape::HighRatio { m, k, y0 } => {
                let s = (-k * y0).exp();
                let e = (k * (y - y0)).exp();
                let d = s - m;
                ((s - e) / d, (s - m * e) / d)
            }
        }
    }
}

impl ProfileSolver for AnalyticalSolver {
    fn name(&self) -> &'static str {
        "analytical"
    }

    fn solve(&self, input: &SolveInput<'_>) -> EngineResult<Profile> {
        let layer = input.parameters;
        require_positive(
            input.flow.material_capacity_rate.value,
            "parameters.material_flow_rate",
        )?;

        let m = input.flow.capacity_ratio();
        let y0 = input.dimensionless_height(layer.height);
        let shape = ExchangeShape::new(m, y0);
        if let ExchangeShape::Balanced { .. } = shape {
            warn!(m, "capacity ratio close to 1, using the balanced linear profile");
        }
        debug!(m, y0, ?shape, "analytical profile");

        let t_in = layer.material_inlet_temp;
        let span = layer.gas_inlet_temp - t_in;
        let steps = layer.steps;

        let mut clamped = 0;
        let samples = (0..=steps)
            .map(|i| {
                let h = sample_height(i, steps, layer.height);
                let (vartheta, theta) = shape.at(input.dimensionless_height(h));
                let mut material = t_in + span * vartheta;
                let mut gas = t_in + span * theta;
                if gas < material {
                    gas = material + ORDERING_MARGIN;
                    clamped += 1;
                }
                if material > gas {
                    material = gas - ORDERING_MARGIN;
                }
                ProfileSample::new(h, material, gas)
            })
            .collect();

        if clamped > 0 {
            warn!(clamped, "analytical samples clamped to keep gas above material");
        }

        Ok(Profile::new(samples, GasOutlet::FirstSample, clamped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_core::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(
            a,
            b,
            Tolerances {
                abs: 1e-10,
                rel: 1e-9,
            },
        )
    }

    /// Direct transcription of the closed form, for moderate arguments only.
    fn textbook(m: f64, y0: f64, y: f64) -> (f64, f64) {
        let k = (m - 1.0) / m;
        let d = 1.0 - m * (k * y0).exp();
        let e = (k * y).exp();
        ((1.0 - e) / d, (1.0 - m * e) / d)
    }

    #[test]
    fn boundary_conditions_hold_for_every_shape() {
        for m in [0.3, 1.0, 1.0 + 1e-9, 1.8, 4.0] {
            let y0 = 3.5;
            let shape = ExchangeShape::new(m, y0);
            let (vartheta_in, _) = shape.at(0.0);
            let (_, theta_in) = shape.at(y0);
            assert!(close(vartheta_in, 0.0), "m={m}: ϑ(0)={vartheta_in}");
            assert!(close(theta_in, 1.0), "m={m}: θ(Y0)={theta_in}");
        }
    }

    #[test]
    fn scaled_form_matches_textbook_form() {
        for m in [0.25, 0.9, 1.1, 2.5] {
            let y0 = 4.0;
            let shape = ExchangeShape::new(m, y0);
            for y in [0.0, 0.5, 1.7, 3.2, 4.0] {
                let (a_v, a_t) = shape.at(y);
                let (b_v, b_t) = textbook(m, y0, y);
                assert!(close(a_v, b_v), "m={m} y={y}: {a_v} vs {b_v}");
                assert!(close(a_t, b_t), "m={m} y={y}: {a_t} vs {b_t}");
            }
        }
    }

    #[test]
    fn balanced_shape_is_limit_of_exponential() {
        let y0 = 2.0;
        let balanced = ExchangeShape::new(1.0, y0);
        let near = ExchangeShape::new(1.0 + 1e-4, y0);
        for y in [0.0, 0.5, 1.0, 2.0] {
            let (bv, bt) = balanced.at(y);
            let (nv, nt) = near.at(y);
            assert!((bv - nv).abs() < 1e-3);
            assert!((bt - nt).abs() < 1e-3);
            assert!(close(bt - bv, 1.0 / (1.0 + y0)));
        }
    }

    #[test]
    fn large_dimensionless_height_stays_finite() {
        let shape = ExchangeShape::new(1.8, 5_000.0);
        for y in [0.0, 10.0, 2_500.0, 5_000.0] {
            let (v, t) = shape.at(y);
            assert!(v.is_finite() && t.is_finite(), "y={y}: ({v}, {t})");
        }
    }
}
