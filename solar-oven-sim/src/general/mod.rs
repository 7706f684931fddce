pub mod irradiance;
pub mod noise;

pub use irradiance::{IrradianceParams, solar_irradiance, time_grid};
pub use noise::Noise;
