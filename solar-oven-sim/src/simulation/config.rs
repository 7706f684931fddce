use std::path::PathBuf;

use crate::general::irradiance::IrradianceParams;

/// Configuration struct holding all simulation parameters
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    // Time grid
    pub duration_minutes: u32, // Length of the cooking session
    pub step_minutes: u32,     // Spacing between samples

    // Thermal parameters
    pub ambient_temp_c: f64,      // Ambient temperature, trajectories never drop below it
    pub cooking_threshold_c: f64, // Temperature needed for effective cooking
    pub temp_noise_std: f64,      // Gaussian noise added to every temperature step

    // Solar input
    pub irradiance: IrradianceParams,

    // Randomness
    pub noise_enabled: bool, // if false, irradiance and temperature noise are zero
    pub seed: Option<u64>,   // fixed seed for reproducible runs, fresh entropy if None

    // Output
    pub output_dir: PathBuf, // Where charts and the summary are written
    pub analyst: String,     // Recorded in the analysis summary
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration_minutes: 120,
            step_minutes: 5,

            ambient_temp_c: 25.0,
            cooking_threshold_c: 80.0,
            temp_noise_std: 3.0,

            irradiance: IrradianceParams::default(),

            noise_enabled: true,
            seed: None,

            output_dir: PathBuf::from("solar_oven_output"),
            analyst: "Giulia Torrentia".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Default configuration with all noise disabled
    pub fn deterministic() -> Self {
        Self {
            noise_enabled: false,
            ..Self::default()
        }
    }

    /// Default configuration with noise drawn from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
