//! Runner athletic profile.

use workouts::{WorkoutKind, metrics::LEN_STEP};

use super::{AthleteProfile, actions_for};

/// Athletic profile for running workouts.
///
/// Based on typical recreational to competitive runner performance:
/// - Base pace: ~6:00/km (10 km/h)
/// - Day-to-day variance around 8%
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Mean speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            base_speed: 10.0, // 6:00/km
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a new runner profile with specified base pace.
    ///
    /// # Arguments
    /// * `pace_min_per_km` - Base pace in minutes per kilometer (e.g., 5.0 for 5:00/km)
    pub fn with_pace(pace_min_per_km: f64) -> Self {
        Self {
            base_speed: 60.0 / pace_min_per_km,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~3:30/km base pace).
    pub fn elite() -> Self {
        Self::with_pace(3.5)
    }

    /// Creates a recreational runner profile (~7:00/km base pace).
    pub fn recreational() -> Self {
        Self::with_pace(7.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn parameters(&self, duration_h: f64, weight_kg: f64, speed_kmh: f64) -> Vec<f64> {
        let steps = actions_for(speed_kmh * duration_h * 1000.0, LEN_STEP);
        vec![steps, duration_h, weight_kg]
    }
}
