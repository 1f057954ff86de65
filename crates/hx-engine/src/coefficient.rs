//! Convective heat-transfer coefficient of a packed bed.
//!
//! Gas-side correlation `Nu = 0.106 · Re^0.72 · Pr^0.33` with the particle
//! diameter as characteristic length. The surface coefficient is converted to
//! a volumetric one through the specific interfacial area of spherical
//! particles, `a = 6·(1 − ε) / d`.

use tracing::debug;

use crate::error::{EngineResult, require_positive};
use crate::flow::FlowCharacteristics;
use crate::model::CalculationRequest;

/// Leading constant of the Nusselt correlation.
pub const NUSSELT_COEFFICIENT: f64 = 0.106;
/// Reynolds exponent of the Nusselt correlation.
pub const REYNOLDS_EXPONENT: f64 = 0.72;
/// Prandtl exponent of the Nusselt correlation.
pub const PRANDTL_EXPONENT: f64 = 0.33;

/// Dimensionless groups of the gas flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionlessGroups {
    pub reynolds: f64,
    pub prandtl: f64,
    pub nusselt: f64,
}

/// Where the coefficient came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoefficientSource {
    Correlation(DimensionlessGroups),
    Override,
}

/// Heat-transfer coefficient in both forms plus the bed surface data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatTransferCoefficient {
    /// α, W/(m²·°C)
    pub surface: f64,
    /// α_v = α·a, W/(m³·°C)
    pub volumetric: f64,
    /// a, m²/m³
    pub specific_area: f64,
    /// a·S, interfacial surface per metre of bed height, m
    pub exchange_surface: f64,
    pub source: CoefficientSource,
}

pub fn reynolds(density: f64, velocity: f64, particle_size: f64, viscosity: f64) -> f64 {
    density * velocity * particle_size / viscosity
}

pub fn prandtl(viscosity: f64, specific_heat: f64, conductivity: f64) -> f64 {
    viscosity * specific_heat / conductivity
}

pub fn nusselt(reynolds: f64, prandtl: f64) -> f64 {
    NUSSELT_COEFFICIENT * reynolds.powf(REYNOLDS_EXPONENT) * prandtl.powf(PRANDTL_EXPONENT)
}

/// Specific interfacial area of a bed of spheres, m²/m³.
pub fn specific_area(porosity: f64, particle_size: f64) -> f64 {
    6.0 * (1.0 - porosity) / particle_size
}

impl HeatTransferCoefficient {
    /// Coefficient for a request: the positive override if present,
    /// otherwise the Nusselt correlation.
    pub fn for_request(
        request: &CalculationRequest,
        flow: &FlowCharacteristics,
    ) -> EngineResult<Self> {
        let gas = &request.gas;
        let d = require_positive(request.material.particle_size, "material.particle_size")?;
        let a = specific_area(request.material.porosity, d);
        let exchange_surface = a * request.parameters.cross_section;

        if let Some(volumetric) = request.parameters.coefficient_override() {
            debug!(alpha_v = volumetric, "using override heat-transfer coefficient");
            return Ok(Self {
                surface: volumetric / a,
                volumetric,
                specific_area: a,
                exchange_surface,
                source: CoefficientSource::Override,
            });
        }

        let mu = require_positive(gas.viscosity, "gas.viscosity")?;
        let lambda = require_positive(gas.thermal_conductivity, "gas.thermal_conductivity")?;

        let re = reynolds(gas.density, flow.superficial_velocity.value, d, mu);
        let pr = prandtl(mu, gas.specific_heat, lambda);
        let nu = nusselt(re, pr);
        let surface = nu * lambda / d;

        debug!(re, pr, nu, alpha = surface, a, "correlated heat-transfer coefficient");

        Ok(Self {
            surface,
            volumetric: surface * a,
            specific_area: a,
            exchange_surface,
            source: CoefficientSource::Correlation(DimensionlessGroups {
                reynolds: re,
                prandtl: pr,
                nusselt: nu,
            }),
        })
    }

    pub fn groups(&self) -> Option<DimensionlessGroups> {
        match self.source {
            CoefficientSource::Correlation(groups) => Some(groups),
            CoefficientSource::Override => None,
        }
    }
}
