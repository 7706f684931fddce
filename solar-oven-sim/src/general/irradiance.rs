use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::general::noise::Noise;

/// Shape of the solar irradiance curve over a cooking session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrradianceParams {
    pub peak_w_m2: f64,     // Irradiance at the midpoint of the window
    pub width_minutes: f64, // Standard deviation of the bell curve
    pub noise_std: f64,     // Additive Gaussian noise in W/m²
    pub min_w_m2: f64,      // Floor applied after the noise
}

impl Default for IrradianceParams {
    fn default() -> Self {
        Self {
            peak_w_m2: 1000.0,
            width_minutes: 45.0,
            noise_std: 25.0,
            min_w_m2: 100.0,
        }
    }
}

/// Sample times `0, step, 2*step, ...` strictly below `duration_minutes`
pub fn time_grid(duration_minutes: u32, step_minutes: u32) -> Result<Vec<u32>> {
    if step_minutes == 0 {
        return Err(SimulationError::invalid_input("step must be positive"));
    }
    if duration_minutes == 0 {
        return Err(SimulationError::invalid_input("duration must be positive"));
    }

    Ok((0..duration_minutes).step_by(step_minutes as usize).collect())
}

/// Generate one irradiance value per time sample.
///
/// The curve is a Gaussian bell centred on the midpoint of the sampled window
/// with additive noise, floored at `min_w_m2`.
pub fn solar_irradiance(
    times: &[u32],
    params: &IrradianceParams,
    noise: &mut Noise,
) -> Result<Vec<f64>> {
    let (first, last) = match (times.first(), times.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(SimulationError::invalid_input("time grid is empty")),
    };
    if params.width_minutes <= 0.0 {
        return Err(SimulationError::invalid_input(format!(
            "irradiance width must be positive, got {}",
            params.width_minutes
        )));
    }
    if params.min_w_m2 <= 0.0 {
        return Err(SimulationError::invalid_input(format!(
            "minimum irradiance must be positive, got {}",
            params.min_w_m2
        )));
    }

    let midpoint = (first as f64 + last as f64) / 2.0;
    let two_sigma_sq = 2.0 * params.width_minutes * params.width_minutes;

    times
        .iter()
        .map(|&t| {
            let offset = t as f64 - midpoint;
            let bell = params.peak_w_m2 * (-(offset * offset) / two_sigma_sq).exp();
            let value = bell + noise.gaussian(params.noise_std)?;
            Ok(value.max(params.min_w_m2))
        })
        .collect()
}
