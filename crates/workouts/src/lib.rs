//! Workout statistics from tracker sensor packages.
//!
//! ```rust
//! use workouts::{read_package, Training};
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", workout.summary());
//! # Ok::<(), workouts::WorkoutError>(())
//! ```

pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod packages;

pub use errors::{Result, WorkoutError};
pub use metrics::Training;
pub use models::{
    Running, SensorPackage, Session, SportsWalking, Summary, Swimming, Workout, WorkoutKind,
};
pub use packages::{
    FromParameters, Report, demo_packages, load_packages, read_package, render, render_all,
    summarize, summarize_all,
};
