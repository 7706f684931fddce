use indexmap::IndexMap;
use oven_model::{CookingPhase, OvenType, TimeSeriesPoint};
use serde::Serialize;

use crate::error::{Result, SimulationError};

/// Temperature statistics of one design
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureStats {
    pub mean: f64,
    pub max: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std: f64,
}

/// Efficiency figures of one design
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EfficiencyStats {
    pub avg_temp: f64,
    pub max_temp: f64,
    pub avg_solar_input: f64,
    pub efficiency_ratio: f64,
}

fn group_by_design(
    records: &[TimeSeriesPoint],
) -> Result<IndexMap<OvenType, Vec<&TimeSeriesPoint>>> {
    if records.is_empty() {
        return Err(SimulationError::invalid_input("no records to aggregate"));
    }

    let mut groups: IndexMap<OvenType, Vec<&TimeSeriesPoint>> = IndexMap::new();
    for point in records {
        groups.entry(point.oven_type).or_default().push(point);
    }
    Ok(groups)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn max(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
}

fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Mean, max and standard deviation of temperature per design
pub fn temperature_stats(
    records: &[TimeSeriesPoint],
) -> Result<IndexMap<OvenType, TemperatureStats>> {
    let groups = group_by_design(records)?;

    Ok(groups
        .into_iter()
        .map(|(oven_type, points)| {
            let temps: Vec<f64> = points.iter().map(|p| p.temperature_c).collect();
            let stats = TemperatureStats {
                mean: mean(&temps),
                max: max(&temps),
                std: sample_std(&temps),
            };
            (oven_type, stats)
        })
        .collect())
}

/// Average temperature per unit of average solar input, as a percentage
pub fn efficiency_ratio(avg_temp: f64, avg_solar_input: f64) -> f64 {
    avg_temp / avg_solar_input * 100.0
}

/// Average and peak temperature against average solar input per design
pub fn efficiency_analysis(
    records: &[TimeSeriesPoint],
) -> Result<IndexMap<OvenType, EfficiencyStats>> {
    let groups = group_by_design(records)?;

    Ok(groups
        .into_iter()
        .map(|(oven_type, points)| {
            let temps: Vec<f64> = points.iter().map(|p| p.temperature_c).collect();
            let solar: Vec<f64> = points.iter().map(|p| p.solar_radiation).collect();
            let avg_temp = mean(&temps);
            let avg_solar_input = mean(&solar);
            let stats = EfficiencyStats {
                avg_temp,
                max_temp: max(&temps),
                avg_solar_input,
                efficiency_ratio: efficiency_ratio(avg_temp, avg_solar_input),
            };
            (oven_type, stats)
        })
        .collect())
}

/// Earliest sampled minute at which the temperature meets the threshold.
///
/// `None` means the threshold was never reached.
pub fn time_to_temperature<'a>(
    points: impl IntoIterator<Item = &'a TimeSeriesPoint>,
    threshold_c: f64,
) -> Option<u32> {
    points
        .into_iter()
        .filter(|p| p.temperature_c >= threshold_c)
        .map(|p| p.time_minutes)
        .min()
}

/// Time to cooking temperature for every design
pub fn cooking_times(
    records: &[TimeSeriesPoint],
    threshold_c: f64,
) -> Result<IndexMap<OvenType, Option<u32>>> {
    let groups = group_by_design(records)?;

    Ok(groups
        .into_iter()
        .map(|(oven_type, points)| (oven_type, time_to_temperature(points, threshold_c)))
        .collect())
}

/// Mean temperature per design and cooking phase
pub fn phase_averages(
    records: &[TimeSeriesPoint],
) -> Result<IndexMap<OvenType, IndexMap<CookingPhase, f64>>> {
    let groups = group_by_design(records)?;

    Ok(groups
        .into_iter()
        .map(|(oven_type, points)| {
            let mut phases = IndexMap::new();
            for phase in CookingPhase::ALL {
                let temps: Vec<f64> = points
                    .iter()
                    .filter(|p| p.cooking_phase == phase)
                    .map(|p| p.temperature_c)
                    .collect();
                if !temps.is_empty() {
                    phases.insert(phase, mean(&temps));
                }
            }
            (oven_type, phases)
        })
        .collect())
}

/// Design with the highest efficiency ratio
pub fn most_efficient(efficiency: &IndexMap<OvenType, EfficiencyStats>) -> Option<OvenType> {
    efficiency
        .iter()
        .max_by(|a, b| a.1.efficiency_ratio.total_cmp(&b.1.efficiency_ratio))
        .map(|(oven_type, _)| *oven_type)
}
