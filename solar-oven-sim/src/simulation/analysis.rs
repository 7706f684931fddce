use indexmap::IndexMap;
use oven_model::{CookingPhase, OvenType};
use tracing::{info, warn};

use crate::error::Result;
use crate::simulation::config::SimulationConfig;
use crate::simulation::export::{AnalysisSummary, write_summary};
use crate::simulation::plot::render_all;
use crate::simulation::report::print_report;
use crate::simulation::stats::{
    EfficiencyStats, TemperatureStats, cooking_times, efficiency_analysis, phase_averages,
    temperature_stats,
};
use crate::simulation::thermal::{Dataset, build_dataset};

/// Struct to hold the simulated dataset and everything derived from it
#[derive(Debug, Clone)]
pub struct AnalysisResults {
    pub dataset: Dataset,
    pub temperature: IndexMap<OvenType, TemperatureStats>,
    pub efficiency: IndexMap<OvenType, EfficiencyStats>,
    pub cooking_times: IndexMap<OvenType, Option<u32>>,
    pub phase_averages: IndexMap<OvenType, IndexMap<CookingPhase, f64>>,

    // Configuration used
    pub config: SimulationConfig,
}

/// Simulate and aggregate without touching stdout or the filesystem
pub fn analyze(config: SimulationConfig) -> Result<AnalysisResults> {
    let dataset = build_dataset(&config)?;
    info!(
        records = dataset.len(),
        seed = ?config.seed,
        noise = config.noise_enabled,
        "dataset created"
    );

    let temperature = temperature_stats(&dataset.records)?;
    let efficiency = efficiency_analysis(&dataset.records)?;
    let cooking_times = cooking_times(&dataset.records, config.cooking_threshold_c)?;
    let phase_averages = phase_averages(&dataset.records)?;

    for (oven_type, minutes) in &cooking_times {
        if minutes.is_none() {
            warn!(
                oven = %oven_type,
                threshold = config.cooking_threshold_c,
                "cooking temperature never reached"
            );
        }
    }

    Ok(AnalysisResults {
        dataset,
        temperature,
        efficiency,
        cooking_times,
        phase_averages,
        config,
    })
}

/// Run the whole pipeline: simulate, print the report, render charts and write the summary
pub fn run_analysis(config: SimulationConfig) -> Result<AnalysisResults> {
    let results = analyze(config)?;

    print_report(&results);

    let output_dir = results.config.output_dir.clone();
    let charts = render_all(
        &results.dataset,
        results.config.cooking_threshold_c,
        &output_dir,
    )?;
    info!(charts = charts.len(), dir = %output_dir.display(), "charts rendered");

    write_summary(&AnalysisSummary::from_results(&results), &output_dir)?;

    Ok(results)
}
