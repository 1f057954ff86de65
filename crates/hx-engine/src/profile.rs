//! Sampled temperature profile produced by a solver.

/// Temperatures of both phases at one height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    /// m
    pub height: f64,
    /// °C
    pub material: f64,
    /// °C
    pub gas: f64,
}

impl ProfileSample {
    pub fn new(height: f64, material: f64, gas: f64) -> Self {
        Self {
            height,
            material,
            gas,
        }
    }

    pub fn difference(&self) -> f64 {
        (self.gas - self.material).abs()
    }
}

/// End of the profile at which the gas leaves the bed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasOutlet {
    /// Gas enters at the last sample (counter-current closed form).
    FirstSample,
    /// Gas is marched from the first sample onwards.
    LastSample,
}

/// Immutable profile: `steps + 1` samples from height 0 to H₀.
///
/// The material always enters at the first sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    samples: Vec<ProfileSample>,
    gas_outlet: GasOutlet,
    clamped: usize,
}

impl Profile {
    pub(crate) fn new(samples: Vec<ProfileSample>, gas_outlet: GasOutlet, clamped: usize) -> Self {
        debug_assert!(!samples.is_empty());
        Self {
            samples,
            gas_outlet,
            clamped,
        }
    }

    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn gas_outlet(&self) -> GasOutlet {
        self.gas_outlet
    }

    /// Number of samples an ordering or monotonicity guard had to correct.
    pub fn clamped(&self) -> usize {
        self.clamped
    }

    pub fn gas_outlet_temperature(&self) -> f64 {
        let sample = match self.gas_outlet {
            GasOutlet::FirstSample => self.samples.first(),
            GasOutlet::LastSample => self.samples.last(),
        };
        sample.map(|s| s.gas).unwrap_or(f64::NAN)
    }

    pub fn material_outlet_temperature(&self) -> f64 {
        self.samples.last().map(|s| s.material).unwrap_or(f64::NAN)
    }
}

/// Height of sample `i` out of `steps` intervals; the last sample sits
/// exactly at `total`.
pub(crate) fn sample_height(i: usize, steps: usize, total: f64) -> f64 {
    if i >= steps {
        total
    } else {
        total * i as f64 / steps as f64
    }
}
