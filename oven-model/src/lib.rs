pub mod design;
pub mod series;

pub use design::{OvenProfile, OvenType};
pub use series::{CookingPhase, TimeSeriesPoint};
