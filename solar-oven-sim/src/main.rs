use anyhow::{Context, Result};
use solar_oven_sim::{SimulationConfig, run_analysis};
use std::env;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: solar-oven-sim [deterministic | seed <u64>]");
}

fn config_from_args(args: &[String]) -> SimulationConfig {
    match args.get(1).map(|s| s.as_str()) {
        Some("deterministic") => SimulationConfig::deterministic(),
        Some("seed") => match args.get(2).and_then(|s| s.parse::<u64>().ok()) {
            Some(seed) => SimulationConfig::seeded(seed),
            None => {
                print_usage();
                SimulationConfig::default()
            }
        },
        Some(_) => {
            print_usage();
            SimulationConfig::default()
        }
        None => SimulationConfig::default(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = config_from_args(&args);

    run_analysis(config).context("solar oven analysis failed")?;

    println!("Analysis complete!");
    Ok(())
}
