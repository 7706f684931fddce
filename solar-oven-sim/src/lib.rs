pub mod error;
pub mod general;
pub mod simulation;

// Re-export commonly used items for convenience
pub use error::{Result, SimulationError};
pub use simulation::analysis::run_analysis;
pub use simulation::config::SimulationConfig;
