use oven_model::{OvenProfile, OvenType, TimeSeriesPoint};
use tracing::debug;

use crate::error::{Result, SimulationError};
use crate::general::irradiance::{solar_irradiance, time_grid};
use crate::general::noise::Noise;
use crate::simulation::config::SimulationConfig;

/// Converts W/m² times efficiency into °C gained per step
const GAIN_SCALE: f64 = 80.0;
/// Share of the heat gain available at the first step, rising linearly to 1
const RAMP_FLOOR: f64 = 0.8;

/// All records of one simulation run together with the inputs that produced them
#[derive(Debug, Clone)]
pub struct Dataset {
    pub times: Vec<u32>,
    pub irradiance: Vec<f64>,
    pub records: Vec<TimeSeriesPoint>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of a single design in time order
    pub fn records_for(&self, oven_type: OvenType) -> impl Iterator<Item = &TimeSeriesPoint> {
        self.records
            .iter()
            .filter(move |point| point.oven_type == oven_type)
    }

    /// Designs present in the dataset in first-appearance order
    pub fn oven_types(&self) -> Vec<OvenType> {
        let mut seen = Vec::new();
        for point in &self.records {
            if !seen.contains(&point.oven_type) {
                seen.push(point.oven_type);
            }
        }
        seen
    }

    /// Last sampled minute
    pub fn duration_minutes(&self) -> u32 {
        self.times.last().copied().unwrap_or(0)
    }
}

/// Run the first-order thermal model for one design.
///
/// Each step adds a heat gain proportional to the irradiance and removes a
/// loss proportional to the gap to ambient. The result is clamped at ambient
/// and holds one temperature per time sample.
pub fn simulate_trajectory(
    profile: &OvenProfile,
    times: &[u32],
    irradiance: &[f64],
    ambient_temp_c: f64,
    temp_noise_std: f64,
    noise: &mut Noise,
) -> Result<Vec<f64>> {
    if times.is_empty() {
        return Err(SimulationError::invalid_input("time grid is empty"));
    }
    if times.len() != irradiance.len() {
        return Err(SimulationError::invalid_input(format!(
            "time grid has {} samples but irradiance has {}",
            times.len(),
            irradiance.len()
        )));
    }

    let steps = times.len() as f64;
    let mut temperatures = Vec::with_capacity(times.len());
    let mut current = ambient_temp_c;

    for (i, &radiation) in irradiance.iter().enumerate() {
        let ramp = RAMP_FLOOR + (1.0 - RAMP_FLOOR) * i as f64 / steps;
        let heat_gain =
            radiation * profile.max_efficiency / GAIN_SCALE * profile.warmup_speed * ramp;
        let heat_loss = (current - ambient_temp_c) * (1.0 - profile.heat_retention);

        current = current + heat_gain - heat_loss + noise.gaussian(temp_noise_std)?;
        current = current.max(ambient_temp_c);
        temperatures.push(current);
    }

    Ok(temperatures)
}

/// Simulate every design over the same time grid and irradiance
pub fn simulate_designs(
    config: &SimulationConfig,
    times: &[u32],
    irradiance: &[f64],
    noise: &mut Noise,
) -> Result<Vec<TimeSeriesPoint>> {
    let mut records = Vec::with_capacity(times.len() * OvenType::ALL.len());

    for oven_type in OvenType::ALL {
        let temperatures = simulate_trajectory(
            &oven_type.profile(),
            times,
            irradiance,
            config.ambient_temp_c,
            config.temp_noise_std,
            noise,
        )?;

        debug!(
            oven = %oven_type,
            peak = temperatures.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
            "simulated trajectory"
        );

        records.extend(
            times
                .iter()
                .zip(irradiance.iter())
                .zip(temperatures)
                .map(|((&t, &radiation), temp)| {
                    TimeSeriesPoint::new(t, radiation, oven_type, temp)
                }),
        );
    }

    Ok(records)
}

/// Build the full dataset from a configuration: time grid, irradiance and trajectories
pub fn build_dataset(config: &SimulationConfig) -> Result<Dataset> {
    let mut noise = Noise::from_settings(config.seed, config.noise_enabled);

    let times = time_grid(config.duration_minutes, config.step_minutes)?;
    let irradiance = solar_irradiance(&times, &config.irradiance, &mut noise)?;
    let records = simulate_designs(config, &times, &irradiance, &mut noise)?;

    Ok(Dataset {
        times,
        irradiance,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_inputs(samples: usize, radiation: f64) -> (Vec<u32>, Vec<f64>) {
        let times = (0..samples as u32).map(|i| i * 5).collect();
        (times, vec![radiation; samples])
    }

    #[test]
    fn test_trajectory_length_matches_grid() {
        let (times, irradiance) = constant_inputs(24, 900.0);
        for oven in OvenType::ALL {
            let temps = simulate_trajectory(
                &oven.profile(),
                &times,
                &irradiance,
                25.0,
                3.0,
                &mut Noise::seeded(5),
            )
            .unwrap();
            assert_eq!(temps.len(), times.len());
        }
    }

    #[test]
    fn test_mismatched_lengths_are_invalid() {
        let times = vec![0, 5, 10];
        let irradiance = vec![800.0, 900.0];
        let result = simulate_trajectory(
            &OvenType::Box.profile(),
            &times,
            &irradiance,
            25.0,
            0.0,
            &mut Noise::disabled(),
        );
        assert!(matches!(result, Err(SimulationError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_input_is_invalid() {
        let result = simulate_trajectory(
            &OvenType::Box.profile(),
            &[],
            &[],
            25.0,
            0.0,
            &mut Noise::disabled(),
        );
        assert!(matches!(result, Err(SimulationError::InvalidInput(_))));
    }

    #[test]
    fn test_never_below_ambient_with_heavy_noise() {
        let (times, irradiance) = constant_inputs(200, 150.0);
        let temps = simulate_trajectory(
            &OvenType::Parabolic.profile(),
            &times,
            &irradiance,
            25.0,
            50.0,
            &mut Noise::seeded(99),
        )
        .unwrap();
        assert!(temps.iter().all(|&t| t >= 25.0));
    }

    #[test]
    fn test_deterministic_trajectory_rises_under_constant_sun() {
        let (times, irradiance) = constant_inputs(24, 900.0);
        let temps = simulate_trajectory(
            &OvenType::Funnel.profile(),
            &times,
            &irradiance,
            25.0,
            3.0,
            &mut Noise::disabled(),
        )
        .unwrap();

        for pair in temps.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!(temps[0] > 25.0);
    }

    #[test]
    fn test_first_step_gain() {
        let profile = OvenProfile::new(0.5, 0.9, 1.0);
        let temps = simulate_trajectory(
            &profile,
            &[0],
            &[1000.0],
            25.0,
            0.0,
            &mut Noise::disabled(),
        )
        .unwrap();
        // 1000 * 0.5 / 80 * 1.0 * 0.8 with no loss at ambient
        assert!((temps[0] - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_simulate_designs_emits_all_designs() {
        let config = SimulationConfig::deterministic();
        let (times, irradiance) = constant_inputs(10, 800.0);
        let records =
            simulate_designs(&config, &times, &irradiance, &mut Noise::disabled()).unwrap();

        assert_eq!(records.len(), 30);
        assert_eq!(records[0].oven_type, OvenType::Box);
        assert_eq!(records[10].oven_type, OvenType::Parabolic);
        assert_eq!(records[20].oven_type, OvenType::Funnel);
    }

    #[test]
    fn test_build_dataset_default_grid() {
        let dataset = build_dataset(&SimulationConfig::seeded(3)).unwrap();
        assert_eq!(dataset.times.len(), 24);
        assert_eq!(dataset.len(), 72);
        assert_eq!(dataset.duration_minutes(), 115);
        assert_eq!(dataset.oven_types(), OvenType::ALL.to_vec());
        assert_eq!(dataset.records_for(OvenType::Funnel).count(), 24);
    }

    #[test]
    fn test_default_threshold_reachable_without_noise() {
        let config = SimulationConfig::deterministic();
        let dataset = build_dataset(&config).unwrap();
        let peak = |oven_type: OvenType| {
            dataset
                .records_for(oven_type)
                .fold(f64::NEG_INFINITY, |a, p| a.max(p.temperature_c))
        };

        assert!(peak(OvenType::Parabolic) >= config.cooking_threshold_c);
        assert!(peak(OvenType::Box) < config.cooking_threshold_c);
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = build_dataset(&SimulationConfig::seeded(2025)).unwrap();
        let b = build_dataset(&SimulationConfig::seeded(2025)).unwrap();
        assert_eq!(a.records, b.records);
        assert_eq!(a.irradiance, b.irradiance);
    }
}
