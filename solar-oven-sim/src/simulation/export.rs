use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use oven_model::OvenType;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::simulation::analysis::AnalysisResults;
use crate::simulation::stats::{EfficiencyStats, most_efficient};

pub const SUMMARY_FILE: &str = "summary.json";

/// Condensed outcome of an analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub analysis_date: String,
    pub analyst: String,
    pub methodology: String,
    pub best_overall: Option<OvenType>,
    pub most_practical: OvenType,
    pub best_retention: OvenType,
    pub seed: Option<u64>,
    pub noise_enabled: bool,
    pub records: usize,
    pub cooking_threshold_c: f64,
    pub cooking_times: IndexMap<OvenType, Option<u32>>,
    pub efficiency: IndexMap<OvenType, EfficiencyStats>,
}

impl AnalysisSummary {
    pub fn from_results(results: &AnalysisResults) -> Self {
        Self {
            analysis_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            analyst: results.config.analyst.clone(),
            methodology: "Comparative analysis of solar oven designs".to_string(),
            best_overall: most_efficient(&results.efficiency),
            // easy build with good performance
            most_practical: OvenType::Funnel,
            // steady cooking temperature
            best_retention: OvenType::Box,
            seed: results.config.seed,
            noise_enabled: results.config.noise_enabled,
            records: results.dataset.len(),
            cooking_threshold_c: results.config.cooking_threshold_c,
            cooking_times: results.cooking_times.clone(),
            efficiency: results.efficiency.clone(),
        }
    }
}

/// Write the summary as pretty JSON into `output_dir`
pub fn write_summary(summary: &AnalysisSummary, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(SUMMARY_FILE);

    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush()?;

    info!("Summary saved as {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::analysis::analyze;
    use crate::simulation::config::SimulationConfig;

    #[test]
    fn test_summary_from_deterministic_run() {
        let results = analyze(SimulationConfig::deterministic()).unwrap();
        let summary = AnalysisSummary::from_results(&results);

        assert_eq!(summary.records, 72);
        assert!(!summary.noise_enabled);
        assert_eq!(summary.most_practical, OvenType::Funnel);
        assert_eq!(summary.best_retention, OvenType::Box);
        assert_eq!(summary.efficiency.len(), 3);
    }

    #[test]
    fn test_summary_records_configured_analyst() {
        let config = SimulationConfig {
            analyst: "Field Team".to_string(),
            ..SimulationConfig::deterministic()
        };
        let results = analyze(config).unwrap();
        let summary = AnalysisSummary::from_results(&results);
        assert_eq!(summary.analyst, "Field Team");

        let default_run = analyze(SimulationConfig::deterministic()).unwrap();
        assert_eq!(
            AnalysisSummary::from_results(&default_run).analyst,
            "Giulia Torrentia"
        );
    }

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let results = analyze(SimulationConfig::seeded(21)).unwrap();
        let summary = AnalysisSummary::from_results(&results);

        let path = write_summary(&summary, dir.path()).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(written["seed"], 21);
        assert_eq!(written["records"], 72);
        assert_eq!(written["most_practical"], "Funnel");
        assert!(written["efficiency"]["Parabolic"]["efficiency_ratio"].is_number());
        assert!(written["cooking_times"].get("Box").is_some());
    }
}
