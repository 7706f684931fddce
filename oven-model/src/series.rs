use serde::{Deserialize, Serialize};

use crate::design::OvenType;

/// Minutes at which the warmup phase ends
pub const COOKING_START_MINUTES: u32 = 30;
/// Minutes at which the cooking phase ends
pub const MAINTENANCE_START_MINUTES: u32 = 90;

/// Coarse time bucket of a cooking session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CookingPhase {
    Warmup,
    Cooking,
    Maintenance,
}

impl CookingPhase {
    pub const ALL: [CookingPhase; 3] = [
        CookingPhase::Warmup,
        CookingPhase::Cooking,
        CookingPhase::Maintenance,
    ];

    /// Phase for the elapsed minutes of a session
    pub fn from_minutes(time_minutes: u32) -> Self {
        if time_minutes < COOKING_START_MINUTES {
            CookingPhase::Warmup
        } else if time_minutes < MAINTENANCE_START_MINUTES {
            CookingPhase::Cooking
        } else {
            CookingPhase::Maintenance
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CookingPhase::Warmup => "Warmup",
            CookingPhase::Cooking => "Cooking",
            CookingPhase::Maintenance => "Maintenance",
        }
    }
}

/// One simulated sample of one oven design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Elapsed minutes since the start of the session
    pub time_minutes: u32,
    /// Solar irradiance in W/m²
    pub solar_radiation: f64,
    pub oven_type: OvenType,
    /// Oven temperature in °C, never below ambient
    pub temperature_c: f64,
    pub cooking_phase: CookingPhase,
}

impl TimeSeriesPoint {
    /// Create a point, deriving the cooking phase from the time
    pub fn new(
        time_minutes: u32,
        solar_radiation: f64,
        oven_type: OvenType,
        temperature_c: f64,
    ) -> Self {
        Self {
            time_minutes,
            solar_radiation,
            oven_type,
            temperature_c,
            cooking_phase: CookingPhase::from_minutes(time_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(CookingPhase::from_minutes(0), CookingPhase::Warmup);
        assert_eq!(CookingPhase::from_minutes(29), CookingPhase::Warmup);
        assert_eq!(CookingPhase::from_minutes(30), CookingPhase::Cooking);
        assert_eq!(CookingPhase::from_minutes(89), CookingPhase::Cooking);
        assert_eq!(CookingPhase::from_minutes(90), CookingPhase::Maintenance);
        assert_eq!(CookingPhase::from_minutes(115), CookingPhase::Maintenance);
    }

    #[test]
    fn test_phase_is_pure_function_of_time() {
        for minutes in (0..240).step_by(5) {
            let a = TimeSeriesPoint::new(minutes, 900.0, OvenType::Box, 40.0);
            let b = TimeSeriesPoint::new(minutes, 300.0, OvenType::Parabolic, 110.0);
            assert_eq!(a.cooking_phase, b.cooking_phase);
            assert_eq!(a.cooking_phase, CookingPhase::from_minutes(minutes));
        }
    }

    #[test]
    fn test_point_derives_phase() {
        let point = TimeSeriesPoint::new(45, 950.0, OvenType::Funnel, 72.5);
        assert_eq!(point.cooking_phase, CookingPhase::Cooking);
        assert_eq!(point.cooking_phase.name(), "Cooking");
    }
}
