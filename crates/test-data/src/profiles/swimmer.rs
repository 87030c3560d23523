//! Pool swimmer athletic profile.

use workouts::{WorkoutKind, metrics::LEN_STROKE};

use super::{AthleteProfile, actions_for};

/// Athletic profile for pool swimming.
///
/// Based on typical lap swimmers:
/// - Base speed: ~2 km/h (3:00 per 100 m)
/// - Short-course 25 m pool by default
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Mean speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    /// Pool length in meters.
    pool_length: u32,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            base_speed: 2.0,
            variance: 0.1,
            pool_length: 25,
        }
    }
}

impl SwimmerProfile {
    /// Creates a swimmer profile with specified pace per 100 m.
    ///
    /// # Arguments
    /// * `pace_min_per_100m` - Pace in minutes per 100 meters
    pub fn with_pace(pace_min_per_100m: f64) -> Self {
        Self {
            base_speed: 6.0 / pace_min_per_100m,
            ..Default::default()
        }
    }

    /// Creates a competitive swimmer profile (~1:30/100 m) in a 50 m pool.
    pub fn competitive() -> Self {
        Self::with_pace(1.5).pool_length(50)
    }

    pub fn pool_length(mut self, meters: u32) -> Self {
        self.pool_length = meters.max(1);
        self
    }
}

impl AthleteProfile for SwimmerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn parameters(&self, duration_h: f64, weight_kg: f64, speed_kmh: f64) -> Vec<f64> {
        let pool_length = f64::from(self.pool_length);
        let laps = actions_for(speed_kmh * duration_h * 1000.0, pool_length).max(1.0);
        let strokes = actions_for(laps * pool_length, LEN_STROKE);
        vec![strokes, duration_h, weight_kg, pool_length, laps]
    }
}
