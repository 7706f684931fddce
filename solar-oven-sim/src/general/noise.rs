use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::error::{Result, SimulationError};

/// Source of Gaussian noise for irradiance and temperature.
///
/// A seeded source yields the same sequence on every run; a disabled source
/// always yields zero so the simulation becomes fully deterministic.
#[derive(Debug, Clone)]
pub struct Noise {
    rng: StdRng,
    enabled: bool,
}

impl Noise {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            enabled: true,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            rng: StdRng::seed_from_u64(0),
            enabled: false,
        }
    }

    /// Build the noise source described by a seed and an enable flag
    pub fn from_settings(seed: Option<u64>, enabled: bool) -> Self {
        match (enabled, seed) {
            (false, _) => Self::disabled(),
            (true, Some(seed)) => Self::seeded(seed),
            (true, None) => Self::from_entropy(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Draw a zero-mean Gaussian sample with the given standard deviation
    pub fn gaussian(&mut self, std_dev: f64) -> Result<f64> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(SimulationError::invalid_input(format!(
                "noise standard deviation must be finite and non-negative, got {}",
                std_dev
            )));
        }
        if !self.enabled || std_dev == 0.0 {
            return Ok(0.0);
        }

        let normal = Normal::new(0.0, std_dev)
            .map_err(|e| SimulationError::invalid_input(format!("invalid noise: {}", e)))?;
        Ok(normal.sample(&mut self.rng))
    }
}
