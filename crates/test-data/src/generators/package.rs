//! Sensor package generation from athlete profiles.

use rand::Rng;
use rand::distributions::WeightedIndex;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use workouts::{SensorPackage, WorkoutKind};

use crate::profiles::{
    AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
};

/// Configuration for package generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageGenConfig {
    /// Workout duration range in hours (min, max).
    pub duration_hours: (f64, f64),
    /// Mean body weight in kilograms.
    pub weight_mean: f64,
    /// Standard deviation of body weight.
    pub weight_std: f64,
    /// Relative frequency of running, walking and swimming packages.
    pub kind_weights: [f64; 3],
}

impl Default for PackageGenConfig {
    fn default() -> Self {
        Self {
            duration_hours: (0.25, 2.0),
            weight_mean: 75.0,
            weight_std: 12.0,
            // Running dominates typical tracker data
            kind_weights: [0.5, 0.3, 0.2],
        }
    }
}

/// Generates sensor packages that build into valid workouts.
pub struct PackageGenerator {
    config: PackageGenConfig,
    runner: RunnerProfile,
    walker: WalkerProfile,
    swimmer: SwimmerProfile,
}

impl Default for PackageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageGenerator {
    /// Creates a new package generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(PackageGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: PackageGenConfig) -> Self {
        Self {
            config,
            runner: RunnerProfile::default(),
            walker: WalkerProfile::default(),
            swimmer: SwimmerProfile::default(),
        }
    }

    pub fn with_runner(mut self, runner: RunnerProfile) -> Self {
        self.runner = runner;
        self
    }

    pub fn with_walker(mut self, walker: WalkerProfile) -> Self {
        self.walker = walker;
        self
    }

    pub fn with_swimmer(mut self, swimmer: SwimmerProfile) -> Self {
        self.swimmer = swimmer;
        self
    }

    fn profile(&self, kind: WorkoutKind) -> &dyn AthleteProfile {
        match kind {
            WorkoutKind::Running => &self.runner,
            WorkoutKind::SportsWalking => &self.walker,
            WorkoutKind::Swimming => &self.swimmer,
        }
    }

    /// Generates a single package of a random kind.
    pub fn generate(&self, rng: &mut impl Rng) -> SensorPackage {
        let kind = match WeightedIndex::new(self.config.kind_weights) {
            Ok(dist) => WorkoutKind::ALL[dist.sample(rng)],
            Err(_) => WorkoutKind::Running,
        };
        self.generate_kind(kind, rng)
    }

    /// Generates a single package of the given kind.
    pub fn generate_kind(&self, kind: WorkoutKind, rng: &mut impl Rng) -> SensorPackage {
        let profile = self.profile(kind);

        let (min, max) = self.config.duration_hours;
        let duration = if max > min {
            rng.gen_range(min..=max)
        } else {
            min
        };
        // Round to whole minutes
        let duration = ((duration * 60.0).round() / 60.0).max(1.0 / 60.0);

        let weight = Normal::new(self.config.weight_mean, self.config.weight_std)
            .map(|normal| normal.sample(rng))
            .unwrap_or(self.config.weight_mean)
            .clamp(40.0, 150.0);
        let weight = (weight * 10.0).round() / 10.0;

        let speed = profile.base_speed_kmh() * sample_variance(profile, rng);
        let data = profile.parameters(duration, weight, speed);

        debug!(%kind, duration, weight, speed, "Generated package");
        SensorPackage::new(kind.code(), data)
    }

    /// Generates multiple packages.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<SensorPackage> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_each_kind() {
        let package_gen = PackageGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);

        for kind in WorkoutKind::ALL {
            let package = package_gen.generate_kind(kind, &mut rng);
            assert_eq!(package.workout_type, kind.code());
            assert_eq!(package.data.len(), kind.arity());
        }
    }

    #[test]
    fn test_generate_batch() {
        let package_gen = PackageGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let packages = package_gen.generate_batch(25, &mut rng);

        assert_eq!(packages.len(), 25);
        for package in &packages {
            let (min, max) = PackageGenConfig::default().duration_hours;
            let duration = package.data[1];
            assert!(duration >= min - 1.0 / 60.0 && duration <= max + 1.0 / 60.0);
            assert!((40.0..=150.0).contains(&package.data[2]));
        }
    }

    #[test]
    fn test_same_seed_same_packages() {
        let package_gen = PackageGenerator::new();
        let first = package_gen.generate_batch(5, &mut StdRng::seed_from_u64(1));
        let second = package_gen.generate_batch(5, &mut StdRng::seed_from_u64(1));
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_walker_height_still_builds() {
        let mut rng = StdRng::seed_from_u64(11);

        for height in [0.0, -20.0, 1000.0] {
            let package_gen =
                PackageGenerator::new().with_walker(WalkerProfile::default().height(height));
            let package = package_gen.generate_kind(WorkoutKind::SportsWalking, &mut rng);
            let result = workouts::read_package(&package.workout_type, &package.data);
            assert!(result.is_ok(), "height {height}: {result:?}");
        }
    }

    #[test]
    fn test_single_kind_mix() {
        let config = PackageGenConfig {
            kind_weights: [0.0, 0.0, 1.0],
            ..Default::default()
        };
        let package_gen = PackageGenerator::with_config(config);
        let mut rng = StdRng::seed_from_u64(3);

        assert!(
            package_gen
                .generate_batch(10, &mut rng)
                .iter()
                .all(|p| p.workout_type == "SWM")
        );
    }
}
