//! Condensed views of calculation results.

use hx_engine::CalculationResult;

/// Headline numbers of one result.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationSummary {
    pub sample_count: usize,
    /// m
    pub bed_height: f64,
    /// °C
    pub gas_outlet_temperature: f64,
    /// °C
    pub material_outlet_temperature: f64,
    /// Largest gas/material gap along the bed, °C
    pub max_temperature_difference: f64,
    /// W
    pub total_heat_transfer: f64,
    /// %
    pub efficiency: f64,
}

pub fn summarize(result: &CalculationResult) -> CalculationSummary {
    CalculationSummary {
        sample_count: result.len(),
        bed_height: result.heights.last().copied().unwrap_or(0.0),
        gas_outlet_temperature: result.gas_outlet_temperature,
        material_outlet_temperature: result.material_outlet_temperature,
        max_temperature_difference: result
            .temperature_differences
            .iter()
            .copied()
            .fold(0.0, f64::max),
        total_heat_transfer: result.total_heat_transfer,
        efficiency: result.efficiency,
    }
}
