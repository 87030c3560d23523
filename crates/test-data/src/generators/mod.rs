//! Package generators for test data.
//!
//! - [`PackageGenerator`]: Generate sensor packages with realistic durations, weights and speeds

pub mod package;

pub use package::{PackageGenConfig, PackageGenerator};
