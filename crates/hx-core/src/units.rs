//! SI quantity types and constructors for the request units.
//!
//! Request files give mass flows in kg/h; everything downstream works in SI.

use uom::si::f64::{
    Area as UomArea, Mass, MassDensity, MassRate as UomMassRate,
    SpecificHeatCapacity, ThermalConductance, Time, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

pub type Area = UomArea;
pub type Density = MassDensity;
pub type MassRate = UomMassRate;
pub type SpecificHeat = SpecificHeatCapacity;
/// Heat-capacity flow (W/K): mass flow times specific heat.
pub type CapacityRate = ThermalConductance;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

/// Mass flow given in kilograms per hour.
#[inline]
pub fn kgph(v: f64) -> MassRate {
    use uom::si::mass::kilogram;
    use uom::si::time::hour;
    Mass::new::<kilogram>(v) / Time::new::<hour>(1.0)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn j_per_kg_k(v: f64) -> SpecificHeat {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecificHeat::new::<joule_per_kilogram_kelvin>(v)
}
