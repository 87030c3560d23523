//! Sports walker athletic profile.

use workouts::{WorkoutKind, metrics::LEN_STEP};

use super::{AthleteProfile, actions_for};

const MIN_HEIGHT_CM: f64 = 100.0;
const MAX_HEIGHT_CM: f64 = 230.0;

/// Athletic profile for sports walking.
///
/// Based on typical fitness walking:
/// - Base speed: ~6 km/h
/// - Race walkers reach 12+ km/h
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Mean speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    /// Walker height in centimeters.
    height_cm: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            base_speed: 6.0,
            variance: 0.1,
            height_cm: 175.0,
        }
    }
}

impl WalkerProfile {
    /// Creates a walker profile with specified base speed.
    ///
    /// # Arguments
    /// * `speed_kmh` - Base speed in km/h
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh,
            ..Default::default()
        }
    }

    /// Creates a race walker profile (~12 km/h base).
    pub fn race() -> Self {
        Self::with_speed(12.0)
    }

    /// Creates a leisurely walker profile (~4.5 km/h base).
    pub fn leisurely() -> Self {
        Self::with_speed(4.5)
    }

    /// Sets the walker height, clamped to 100-230 cm.
    pub fn height(mut self, height_cm: f64) -> Self {
        self.height_cm = if height_cm.is_nan() {
            Self::default().height_cm
        } else {
            height_cm.clamp(MIN_HEIGHT_CM, MAX_HEIGHT_CM)
        };
        self
    }
}

impl AthleteProfile for WalkerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn parameters(&self, duration_h: f64, weight_kg: f64, speed_kmh: f64) -> Vec<f64> {
        let steps = actions_for(speed_kmh * duration_h * 1000.0, LEN_STEP);
        vec![steps, duration_h, weight_kg, self.height_cm]
    }
}
