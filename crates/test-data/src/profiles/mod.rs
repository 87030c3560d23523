//! Athletic performance profiles.
//!
//! Profiles define realistic speeds for each workout kind and turn a sampled
//! speed into the positional parameters a tracker would report.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use workouts::WorkoutKind;

/// Trait for athletic performance profiles.
///
/// Implementations should provide:
/// - The workout kind they describe
/// - Typical mean speed
/// - Day-to-day variance
/// - The sensor parameters produced at a given speed
pub trait AthleteProfile: Send + Sync {
    fn kind(&self) -> WorkoutKind;

    /// Typical mean speed in km/h.
    fn base_speed_kmh(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;

    /// Positional package parameters for a workout held at `speed_kmh`.
    ///
    /// The returned list has exactly `self.kind().arity()` entries.
    fn parameters(&self, duration_h: f64, weight_kg: f64, speed_kmh: f64) -> Vec<f64>;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    match Normal::new(1.0, profile.variance()) {
        Ok(normal) if profile.variance() > 0.0 => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.7, 1.4)
        }
        _ => 1.0,
    }
}

/// Number of whole actions needed to cover `distance_m` at `action_length_m` each.
pub(crate) fn actions_for(distance_m: f64, action_length_m: f64) -> f64 {
    (distance_m / action_length_m).round()
}
