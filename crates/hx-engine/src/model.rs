//! Request and result data types.
//!
//! Every request struct carries serde defaults so a partial request file is
//! filled in with the reference iron-ore / air configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::solver::SolverKind;

/// Granular solid descending through the bed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MaterialProperties {
    pub name: String,
    /// kg/m³
    pub density: f64,
    /// J/(kg·°C)
    pub specific_heat: f64,
    /// Particle diameter, m
    pub particle_size: f64,
    /// Void fraction of the bed, open interval (0, 1)
    pub porosity: f64,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self {
            name: "Iron ore".to_string(),
            density: 3500.0,
            specific_heat: 900.0,
            particle_size: 0.02,
            porosity: 0.4,
        }
    }
}

/// Gas ascending through the bed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GasProperties {
    pub name: String,
    /// kg/m³
    pub density: f64,
    /// J/(kg·°C)
    pub specific_heat: f64,
    /// Dynamic viscosity, Pa·s
    pub viscosity: f64,
    /// W/(m·°C)
    pub thermal_conductivity: f64,
}

impl Default for GasProperties {
    fn default() -> Self {
        Self {
            name: "Air".to_string(),
            density: 1.2,
            specific_heat: 1005.0,
            viscosity: 1.8e-5,
            thermal_conductivity: 0.026,
        }
    }
}

/// Bed geometry, flows and inlet conditions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayerParameters {
    /// Bed height H₀, m
    pub height: f64,
    /// Cross-section S, m²
    pub cross_section: f64,
    /// kg/h
    pub material_flow_rate: f64,
    /// kg/h
    pub gas_flow_rate: f64,
    /// °C
    pub material_inlet_temp: f64,
    /// °C
    pub gas_inlet_temp: f64,
    /// Number of height intervals; the profile has `steps + 1` samples.
    pub steps: usize,
    /// Volumetric heat-transfer coefficient override, W/(m³·°C).
    ///
    /// `None` or a non-positive value lets the correlation decide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_transfer_coefficient: Option<f64>,
}

impl Default for LayerParameters {
    fn default() -> Self {
        Self {
            height: 2.0,
            cross_section: 1.0,
            material_flow_rate: 1000.0,
            gas_flow_rate: 500.0,
            material_inlet_temp: 20.0,
            gas_inlet_temp: 800.0,
            steps: 100,
            heat_transfer_coefficient: None,
        }
    }
}

impl LayerParameters {
    /// The override coefficient, if one was supplied and is positive.
    pub fn coefficient_override(&self) -> Option<f64> {
        self.heat_transfer_coefficient.filter(|v| *v > 0.0)
    }
}

/// Complete input of one calculation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalculationRequest {
    pub material: MaterialProperties,
    pub gas: GasProperties,
    pub parameters: LayerParameters,
    pub name: String,
    pub description: String,
}

impl Default for CalculationRequest {
    fn default() -> Self {
        Self {
            material: MaterialProperties::default(),
            gas: GasProperties::default(),
            parameters: LayerParameters::default(),
            name: "New calculation".to_string(),
            description: String::new(),
        }
    }
}

/// Output of one calculation run.
///
/// The four sequences are sampled at the same heights and always have
/// `steps + 1` entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationResult {
    /// m, from 0 to H₀
    pub heights: Vec<f64>,
    /// °C
    pub material_temperatures: Vec<f64>,
    /// °C
    pub gas_temperatures: Vec<f64>,
    /// |T_gas − T_material|, °C
    pub temperature_differences: Vec<f64>,
    /// Coefficient the profile was computed with, W/(m³·°C)
    pub heat_transfer_coefficient: f64,
    /// Heat released by the gas, W
    pub total_heat_transfer: f64,
    /// Percent of the thermodynamic maximum
    pub efficiency: f64,
    /// °C, where the gas leaves the bed
    pub gas_outlet_temperature: f64,
    /// °C, where the material leaves the bed
    pub material_outlet_temperature: f64,
    pub solver: SolverKind,
    /// Derived quantities for display
    pub summary: String,
    pub calculated_at: DateTime<Utc>,
}

impl CalculationResult {
    /// Number of height samples.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Iterate `(height, material, gas, difference)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.heights
            .iter()
            .zip(&self.material_temperatures)
            .zip(&self.gas_temperatures)
            .zip(&self.temperature_differences)
            .map(|(((h, t), g), d)| (*h, *t, *g, *d))
    }
}
