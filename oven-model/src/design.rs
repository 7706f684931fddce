use serde::{Deserialize, Serialize};

/// Solar oven designs covered by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OvenType {
    /// Insulated box with a glazed lid
    Box,
    /// Parabolic reflector focusing on the pot
    Parabolic,
    /// Funnel-shaped reflector around the pot
    Funnel,
}

/// Thermal constants of an oven design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OvenProfile {
    /// Fraction of incoming irradiance converted to heat at full ramp
    pub max_efficiency: f64,
    /// Share of the temperature-ambient gap kept per step (0-1)
    pub heat_retention: f64,
    /// Multiplier on the heat gain, higher warms up faster
    pub warmup_speed: f64,
}

impl OvenProfile {
    pub fn new(max_efficiency: f64, heat_retention: f64, warmup_speed: f64) -> Self {
        Self {
            max_efficiency,
            heat_retention,
            warmup_speed,
        }
    }
}

impl OvenType {
    /// All designs in reporting order
    pub const ALL: [OvenType; 3] = [OvenType::Box, OvenType::Parabolic, OvenType::Funnel];

    pub fn name(&self) -> &'static str {
        match self {
            OvenType::Box => "Box",
            OvenType::Parabolic => "Parabolic",
            OvenType::Funnel => "Funnel",
        }
    }

    /// Get the thermal constants for this design
    pub fn profile(&self) -> OvenProfile {
        match self {
            // steady heat retention, slower warmup
            OvenType::Box => OvenProfile::new(0.65, 0.90, 0.80),
            // high peak temperature, faster response
            OvenType::Parabolic => OvenProfile::new(0.85, 0.85, 1.20),
            // moderate efficiency, good heat retention
            OvenType::Funnel => OvenProfile::new(0.75, 0.88, 1.00),
        }
    }

    /// Qualitative strengths of the design
    pub fn insight(&self) -> &'static str {
        match self {
            OvenType::Box => "Best for slow cooking, excellent heat retention",
            OvenType::Parabolic => "Highest temperatures, best for quick cooking",
            OvenType::Funnel => "Good balance, easiest to build with recycled materials",
        }
    }

    /// Dishes the design is recommended for
    pub fn recommendation(&self) -> (&'static str, &'static str) {
        match self {
            OvenType::Box => ("Bread/Rice", "steady temperature"),
            OvenType::Parabolic => ("Meat/Vegetables", "high heat"),
            OvenType::Funnel => ("Stews/Soups", "moderate, consistent"),
        }
    }
}

impl std::fmt::Display for OvenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
