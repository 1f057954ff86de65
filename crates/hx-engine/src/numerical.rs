//! Explicit Euler marching of the bed heat balance.
//!
//! Starting from both inlet temperatures at height 0, each step applies
//!
//! ```text
//! dT_m/dh =  α·(a·S)·(T_g − T_m) / W_m
//! dT_g/dh = −α·(a·S)·(T_g − T_m) / W_g
//! ```
//!
//! with the local temperature difference re-evaluated at every step.

use tracing::{debug, warn};

use crate::error::{EngineResult, require_positive};
use crate::profile::{GasOutlet, Profile, ProfileSample, sample_height};
use crate::solver::{ProfileSolver, SolveInput};

/// Smallest gas-to-material gap the marching may close down to, °C.
pub const MIN_GAP: f64 = 1.0;

#[derive(Clone, Debug)]
pub struct NumericalSolver;

/// State of the two phases between steps.
#[derive(Debug, Clone, Copy)]
struct PhaseTemperatures {
    material: f64,
    gas: f64,
}

impl ProfileSolver for NumericalSolver {
    fn name(&self) -> &'static str {
        "numerical"
    }

    fn solve(&self, input: &SolveInput<'_>) -> EngineResult<Profile> {
        let layer = input.parameters;
        let w_m = require_positive(
            input.flow.material_capacity_rate.value,
            "parameters.material_flow_rate",
        )?;
        let w_g = require_positive(input.flow.gas_capacity_rate.value, "parameters.gas_flow_rate")?;

        // α·(a·S), W/(m·°C): exchange per metre of bed and degree of gap.
        let exchange = input.coefficient.surface * input.coefficient.exchange_surface;
        let steps = layer.steps;
        let dh = layer.height / steps as f64;
        debug!(exchange, dh, w_m, w_g, "numerical profile");

        let material_inlet = layer.material_inlet_temp;
        let gas_inlet = layer.gas_inlet_temp;
        let mut state = PhaseTemperatures {
            material: material_inlet,
            gas: gas_inlet,
        };

        let mut clamped = 0;
        let mut samples = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            samples.push(ProfileSample::new(
                sample_height(i, steps, layer.height),
                state.material,
                state.gas,
            ));
            if i == steps {
                break;
            }

            let gap = state.gas - state.material;
            let d_material = exchange * gap / w_m * dh;
            let d_gas = -exchange * gap / w_g * dh;
            let closing = d_material - d_gas;

            if closing > 0.0 && gap - closing < MIN_GAP {
                // Shorten the step so the gap lands on the floor instead of
                // overshooting; the split between phases is kept.
                let scale = ((gap - MIN_GAP) / closing).clamp(0.0, 1.0);
                state.material += d_material * scale;
                state.gas += d_gas * scale;
                if scale > 0.0 {
                    state.material = state.gas - MIN_GAP;
                }
                clamped += 1;
            } else {
                state.material += d_material;
                state.gas += d_gas;
            }

            state.material = state.material.max(material_inlet);
            state.gas = state.gas.min(gas_inlet);
        }

        if clamped > 0 {
            debug!(clamped, "numerical steps limited by the minimum gap");
        }
        if samples.iter().any(|s| s.gas < s.material) {
            warn!("numerical profile has gas below material");
        }

        Ok(Profile::new(samples, GasOutlet::LastSample, clamped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficient::HeatTransferCoefficient;
    use crate::flow::FlowCharacteristics;
    use crate::model::CalculationRequest;

    fn solve(request: &CalculationRequest) -> Profile {
        let flow = FlowCharacteristics::from_request(request).unwrap();
        let coefficient = HeatTransferCoefficient::for_request(request, &flow).unwrap();
        NumericalSolver
            .solve(&SolveInput {
                parameters: &request.parameters,
                flow: &flow,
                coefficient: &coefficient,
            })
            .unwrap()
    }

    #[test]
    fn first_step_matches_hand_euler() {
        let mut request = CalculationRequest::default();
        request.parameters.steps = 1000;
        let flow = FlowCharacteristics::from_request(&request).unwrap();
        let coefficient = HeatTransferCoefficient::for_request(&request, &flow).unwrap();
        let profile = solve(&request);

        let dh = 2.0 / 1000.0;
        let exchange = coefficient.surface * coefficient.exchange_surface;
        let gap = 780.0;
        let expected_material = 20.0 + exchange * gap / flow.material_capacity_rate.value * dh;
        let expected_gas = 800.0 - exchange * gap / flow.gas_capacity_rate.value * dh;

        let second = profile.samples()[1];
        assert!((second.material - expected_material).abs() < 1e-9);
        assert!((second.gas - expected_gas).abs() < 1e-9);
    }

    #[test]
    fn energy_leaving_gas_enters_material_until_floor() {
        let mut request = CalculationRequest::default();
        request.parameters.steps = 2000;
        request.parameters.height = 0.05;
        let flow = FlowCharacteristics::from_request(&request).unwrap();
        let profile = solve(&request);
        assert_eq!(profile.clamped(), 0);

        let last = profile.samples().last().unwrap();
        let released = flow.gas_capacity_rate.value * (800.0 - last.gas);
        let absorbed = flow.material_capacity_rate.value * (last.material - 20.0);
        assert!((released - absorbed).abs() < 1e-6 * released);
    }

    #[test]
    fn huge_steps_do_not_overshoot() {
        let mut request = CalculationRequest::default();
        request.parameters.steps = 1;
        request.parameters.heat_transfer_coefficient = Some(1.0e6);
        let profile = solve(&request);
        let last = profile.samples()[1];
        assert!((last.gas - last.material - MIN_GAP).abs() < 1e-9);
        assert!(last.material >= 20.0);
        assert!(last.gas <= 800.0);
    }

    #[test]
    fn zero_material_flow_is_invalid() {
        let mut request = CalculationRequest::default();
        request.parameters.material_flow_rate = 0.0;
        let flow = FlowCharacteristics::from_request(&request).unwrap();
        let coefficient = HeatTransferCoefficient::for_request(&request, &flow).unwrap();
        let err = NumericalSolver
            .solve(&SolveInput {
                parameters: &request.parameters,
                flow: &flow,
                coefficient: &coefficient,
            })
            .unwrap_err();
        assert_eq!(err.field(), "parameters.material_flow_rate");
    }
}
