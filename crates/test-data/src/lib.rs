//! Test data generation for workouts.
//!
//! This crate generates realistic sensor packages from athlete profiles to
//! support manual verification and integration testing.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use test_data::prelude::*;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
//! let packages = PackageGenerator::new()
//!     .with_runner(RunnerProfile::elite())
//!     .generate_batch(10, &mut rng);
//! assert_eq!(packages.len(), 10);
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

pub use workouts::{SensorPackage, WorkoutKind};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::GenerateConfig;
    pub use crate::generators::{PackageGenConfig, PackageGenerator};
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
    };
    pub use crate::{SensorPackage, WorkoutKind};
}
