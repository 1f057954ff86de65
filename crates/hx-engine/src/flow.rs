//! Flow characterization: SI flow rates, heat-capacity flows, gas velocity.

use hx_core::units::{
    CapacityRate, MassRate, Velocity, VolumeRate, j_per_kg_k, kg_per_m3, kgph, m2,
};
use tracing::debug;

use crate::error::{EngineResult, require_positive};
use crate::model::CalculationRequest;

/// Derived flow quantities of both phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowCharacteristics {
    pub material_mass_flow: MassRate,
    pub gas_mass_flow: MassRate,
    /// Gas volumetric flow V_g
    pub gas_volume_flow: VolumeRate,
    /// W_m, heat-capacity flow of the material
    pub material_capacity_rate: CapacityRate,
    /// W_g, heat-capacity flow of the gas
    pub gas_capacity_rate: CapacityRate,
    /// ρ_g·c_g, J/(m³·°C)
    pub gas_volumetric_heat_capacity: f64,
    /// Gas velocity through the free cross-section
    pub superficial_velocity: Velocity,
}

impl FlowCharacteristics {
    pub fn from_request(request: &CalculationRequest) -> EngineResult<Self> {
        let layer = &request.parameters;
        let gas_density = kg_per_m3(require_positive(request.gas.density, "gas.density")?);
        let gas_flow = require_positive(layer.gas_flow_rate, "parameters.gas_flow_rate")?;
        let porosity = require_positive(request.material.porosity, "material.porosity")?;
        let cross_section =
            m2(require_positive(layer.cross_section, "parameters.cross_section")?);

        let material_mass_flow = kgph(layer.material_flow_rate);
        let gas_mass_flow = kgph(gas_flow);
        let gas_volume_flow: VolumeRate = gas_mass_flow / gas_density;

        let material_cp = j_per_kg_k(request.material.specific_heat);
        let gas_cp = j_per_kg_k(request.gas.specific_heat);

        let material_capacity_rate: CapacityRate = material_mass_flow * material_cp;
        // Through the volumetric flow so the dimensionless height uses the
        // same V_g·ρ_g·c_g product.
        let gas_capacity_rate: CapacityRate = gas_volume_flow * (gas_density * gas_cp);

        let superficial_velocity: Velocity =
            gas_mass_flow / (gas_density * cross_section * porosity);

        let flow = Self {
            material_mass_flow,
            gas_mass_flow,
            gas_volume_flow,
            material_capacity_rate,
            gas_capacity_rate,
            gas_volumetric_heat_capacity: gas_density.value * gas_cp.value,
            superficial_velocity,
        };
        debug!(
            w_m = flow.material_capacity_rate.value,
            w_g = flow.gas_capacity_rate.value,
            v_g = flow.gas_volume_flow.value,
            u = flow.superficial_velocity.value,
            "characterized flows"
        );
        Ok(flow)
    }

    /// Capacity ratio m = W_m / W_g.
    pub fn capacity_ratio(&self) -> f64 {
        self.material_capacity_rate.value / self.gas_capacity_rate.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use hx_core::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    #[test]
    fn reference_flows() {
        let flow = FlowCharacteristics::from_request(&CalculationRequest::default()).unwrap();

        assert!(close(flow.material_mass_flow.value, 1000.0 / 3600.0));
        assert!(close(flow.gas_mass_flow.value, 500.0 / 3600.0));
        assert!(close(flow.gas_volume_flow.value, 500.0 / 3600.0 / 1.2));
        assert!(close(flow.material_capacity_rate.value, 250.0));
        assert!(close(flow.gas_capacity_rate.value, 500.0 / 3600.0 * 1005.0));
        assert!(close(flow.gas_volumetric_heat_capacity, 1.2 * 1005.0));
        assert!(close(
            flow.superficial_velocity.value,
            500.0 / 3600.0 / (1.2 * 1.0 * 0.4)
        ));
    }

    #[test]
    fn capacity_ratio_matches_mass_flow_form() {
        let flow = FlowCharacteristics::from_request(&CalculationRequest::default()).unwrap();
        let expected = (1000.0 * 900.0) / (500.0 * 1005.0);
        assert!(close(flow.capacity_ratio(), expected));
    }

    #[test]
    fn zero_divisors_are_invalid_input() {
        let cases: [(&str, fn(&mut CalculationRequest)); 4] = [
            ("parameters.gas_flow_rate", |r| r.parameters.gas_flow_rate = 0.0),
            ("gas.density", |r| r.gas.density = 0.0),
            ("material.porosity", |r| r.material.porosity = 0.0),
            ("parameters.cross_section", |r| r.parameters.cross_section = 0.0),
        ];
        for (field, mutate) in cases {
            let mut request = CalculationRequest::default();
            mutate(&mut request);
            let err = FlowCharacteristics::from_request(&request).unwrap_err();
            assert_eq!(err, EngineError::invalid(field, "must be positive"));
        }
    }
}
