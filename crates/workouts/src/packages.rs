//! Building workout records from sensor packages.
//!
//! A sensor package is a type code (`RUN`, `WLK`, `SWM`) and a flat list of
//! numbers. [`read_package`] resolves the code to a [`WorkoutKind`], checks the
//! parameter count and assigns the parameters positionally to the matching
//! record type.

use std::fs;
use std::path::Path;

use tracing::{debug, error};

use crate::{
    config::OutputFormat,
    errors::{Result, WorkoutError},
    metrics::Training,
    models::{
        Running, SensorPackage, SportsWalking, Summary, Swimming, Workout, WorkoutKind, count,
    },
};

/// Records that can be built from a positional parameter list.
pub trait FromParameters: Sized + Into<Workout> {
    const KIND: WorkoutKind;

    fn from_parameters(data: &[f64]) -> Result<Self>;
}

impl FromParameters for Running {
    const KIND: WorkoutKind = WorkoutKind::Running;

    fn from_parameters(data: &[f64]) -> Result<Self> {
        let [action, duration, weight] = positional::<3>(Self::KIND, data)?;
        Running::new(count("action", action)?, duration, weight)
    }
}

impl FromParameters for SportsWalking {
    const KIND: WorkoutKind = WorkoutKind::SportsWalking;

    fn from_parameters(data: &[f64]) -> Result<Self> {
        let [action, duration, weight, height] = positional::<4>(Self::KIND, data)?;
        SportsWalking::new(count("action", action)?, duration, weight, height)
    }
}

impl FromParameters for Swimming {
    const KIND: WorkoutKind = WorkoutKind::Swimming;

    fn from_parameters(data: &[f64]) -> Result<Self> {
        let [action, duration, weight, pool_length, pool_laps] =
            positional::<5>(Self::KIND, data)?;
        Swimming::new(
            count("action", action)?,
            duration,
            weight,
            count("pool_length", pool_length)?,
            count("pool_laps", pool_laps)?,
        )
    }
}

fn positional<const N: usize>(kind: WorkoutKind, data: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(data).map_err(|_| WorkoutError::ArityMismatch {
        kind,
        expected: N,
        actual: data.len(),
    })
}

fn build<T: FromParameters>(data: &[f64]) -> Result<Workout> {
    T::from_parameters(data).map(Into::into)
}

/// Builds the workout record described by a type code and its parameters.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let kind: WorkoutKind = workout_type.parse()?;
    debug!(%kind, params = data.len(), "Building workout");

    match kind {
        WorkoutKind::Running => build::<Running>(data),
        WorkoutKind::SportsWalking => build::<SportsWalking>(data),
        WorkoutKind::Swimming => build::<Swimming>(data),
    }
}

/// Builds the record for a package and derives its summary.
pub fn summarize(workout_type: &str, data: &[f64]) -> Result<Summary> {
    read_package(workout_type, data).map(|workout| workout.summary())
}

/// Summarizes every package independently, preserving input order.
pub fn summarize_all<'a, I>(packages: I) -> Vec<Result<Summary>>
where
    I: IntoIterator<Item = &'a SensorPackage>,
{
    packages
        .into_iter()
        .map(|package| summarize(&package.workout_type, &package.data))
        .collect()
}

/// Reference packages covering each workout kind.
pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Reads a JSON array of sensor packages.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<SensorPackage>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let packages: Vec<SensorPackage> = serde_json::from_str(&content)?;
    debug!(count = packages.len(), path = %path.display(), "Loaded sensor packages");
    Ok(packages)
}

/// Renders one summary as a single output line.
pub fn render(summary: &Summary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.message()),
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
    }
}

/// Output lines for the accepted packages and the number rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub lines: Vec<String>,
    pub rejected: usize,
}

/// Summarizes and renders every package. Rejected packages are logged and
/// counted without stopping the run.
pub fn render_all(packages: &[SensorPackage], format: OutputFormat) -> Result<Report> {
    let mut report = Report::default();
    for (package, result) in packages.iter().zip(summarize_all(packages)) {
        match result {
            Ok(summary) => report.lines.push(render(&summary, format)?),
            Err(e) => {
                report.rejected += 1;
                error!(workout_type = %package.workout_type, "Rejected package: {e}");
            }
        }
    }
    Ok(report)
}
