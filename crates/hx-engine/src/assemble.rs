//! Result assembly: heat duty, efficiency and summary.

use chrono::Utc;

use crate::coefficient::HeatTransferCoefficient;
use crate::model::CalculationResult;
use crate::profile::Profile;
use crate::solver::{SolveInput, SolverKind};

/// Heat duty and its thermodynamic bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatBalance {
    /// Q = W_g·(T_in − T_out), W
    pub total: f64,
    /// Q_max = min(W_g, W_m)·(T_in − t_in), W
    pub maximum: f64,
}

impl HeatBalance {
    pub fn new(input: &SolveInput<'_>, gas_outlet_temperature: f64) -> Self {
        let layer = input.parameters;
        let w_g = input.flow.gas_capacity_rate.value;
        let w_m = input.flow.material_capacity_rate.value;
        Self {
            total: w_g * (layer.gas_inlet_temp - gas_outlet_temperature),
            maximum: w_g.min(w_m) * (layer.gas_inlet_temp - layer.material_inlet_temp),
        }
    }

    /// Percent of the maximum; 0 when no exchange is possible.
    pub fn efficiency(&self) -> f64 {
        if self.maximum > 0.0 {
            self.total / self.maximum * 100.0
        } else {
            0.0
        }
    }
}

/// Human-readable description of the derived quantities.
pub fn summarize(input: &SolveInput<'_>, solver: SolverKind) -> String {
    let m = input.flow.capacity_ratio();
    let y0 = input.dimensionless_height(input.parameters.height);
    let coefficient: &HeatTransferCoefficient = input.coefficient;
    let mut summary = format!(
        "m = {m:.3}, Y0 = {y0:.3}, alpha_v = {:.1} W/(m3·°C), solver = {solver}",
        coefficient.volumetric
    );
    match coefficient.groups() {
        Some(groups) => summary.push_str(&format!(
            ", Re = {:.1}, Pr = {:.3}, Nu = {:.2}, alpha = {:.2} W/(m2·°C)",
            groups.reynolds, groups.prandtl, groups.nusselt, coefficient.surface
        )),
        None => summary.push_str(" (override)"),
    }
    summary
}

/// Package a solved profile into a [`CalculationResult`].
pub fn assemble(input: &SolveInput<'_>, solver: SolverKind, profile: Profile) -> CalculationResult {
    let gas_outlet_temperature = profile.gas_outlet_temperature();
    let material_outlet_temperature = profile.material_outlet_temperature();
    let balance = HeatBalance::new(input, gas_outlet_temperature);

    let samples = profile.samples();
    CalculationResult {
        heights: samples.iter().map(|s| s.height).collect(),
        material_temperatures: samples.iter().map(|s| s.material).collect(),
        gas_temperatures: samples.iter().map(|s| s.gas).collect(),
        temperature_differences: samples.iter().map(|s| s.difference()).collect(),
        heat_transfer_coefficient: input.coefficient.volumetric,
        total_heat_transfer: balance.total,
        efficiency: balance.efficiency(),
        gas_outlet_temperature,
        material_outlet_temperature,
        solver,
        summary: summarize(input, solver),
        calculated_at: Utc::now(),
    }
}
