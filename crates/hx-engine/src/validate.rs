//! Input validation run before any stage of the pipeline.

use crate::error::{EngineError, EngineResult, require_positive};
use crate::model::CalculationRequest;

/// Check every physical quantity of a request.
///
/// Fails on the first offending field. A request that passes can be run by
/// either solver without producing a division by zero.
pub fn validate_request(request: &CalculationRequest) -> EngineResult<()> {
    let material = &request.material;
    require_positive(material.density, "material.density")?;
    require_positive(material.specific_heat, "material.specific_heat")?;
    require_positive(material.particle_size, "material.particle_size")?;
    if !(material.porosity > 0.0 && material.porosity < 1.0) {
        return Err(EngineError::invalid(
            "material.porosity",
            "must lie strictly between 0 and 1",
        ));
    }

    let gas = &request.gas;
    require_positive(gas.density, "gas.density")?;
    require_positive(gas.specific_heat, "gas.specific_heat")?;
    require_positive(gas.viscosity, "gas.viscosity")?;
    require_positive(gas.thermal_conductivity, "gas.thermal_conductivity")?;

    let layer = &request.parameters;
    require_positive(layer.height, "parameters.height")?;
    require_positive(layer.cross_section, "parameters.cross_section")?;
    require_positive(layer.gas_flow_rate, "parameters.gas_flow_rate")?;
    // Both strategies divide by the material heat-capacity flow.
    require_positive(layer.material_flow_rate, "parameters.material_flow_rate")?;
    if layer.steps == 0 {
        return Err(EngineError::invalid("parameters.steps", "must be at least 1"));
    }

    hx_core::ensure_finite(layer.material_inlet_temp, "parameters.material_inlet_temp")?;
    hx_core::ensure_finite(layer.gas_inlet_temp, "parameters.gas_inlet_temp")?;
    if layer.gas_inlet_temp < layer.material_inlet_temp {
        return Err(EngineError::invalid(
            "parameters.gas_inlet_temp",
            "must not be below the material inlet temperature",
        ));
    }

    if let Some(alpha) = layer.heat_transfer_coefficient {
        hx_core::ensure_finite(alpha, "parameters.heat_transfer_coefficient")?;
    }

    Ok(())
}
