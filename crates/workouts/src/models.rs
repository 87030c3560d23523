use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WorkoutError};

/// The three supported workout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    /// Sensor type code as reported by the tracker.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional parameters a package of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutKind(code.to_string()))
    }
}

/// Fields shared by every workout record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    action: u32,
    duration: f64,
    weight: f64,
}

impl Session {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            action,
            duration: positive("duration", duration)?,
            weight: positive("weight", weight)?,
        })
    }

    /// Steps or strokes recorded by the sensor.
    pub fn action(&self) -> u32 {
        self.action
    }

    /// Duration in hours.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Body weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub(crate) session: Session,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            session: Session::new(action, duration, weight)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub(crate) session: Session,
    pub(crate) height: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self> {
        Ok(Self {
            session: Session::new(action, duration, weight)?,
            height: positive("height", height)?,
        })
    }

    /// Height in centimeters.
    pub fn height(&self) -> f64 {
        self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub(crate) session: Session,
    pub(crate) pool_length: u32,
    pub(crate) pool_laps: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        pool_length: u32,
        pool_laps: u32,
    ) -> Result<Self> {
        Ok(Self {
            session: Session::new(action, duration, weight)?,
            pool_length,
            pool_laps,
        })
    }

    /// Pool length in meters.
    pub fn pool_length(&self) -> u32 {
        self.pool_length
    }

    pub fn pool_laps(&self) -> u32 {
        self.pool_laps
    }
}

/// A workout record of any kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl From<Running> for Workout {
    fn from(workout: Running) -> Self {
        Workout::Running(workout)
    }
}

impl From<SportsWalking> for Workout {
    fn from(workout: SportsWalking) -> Self {
        Workout::SportsWalking(workout)
    }
}

impl From<Swimming> for Workout {
    fn from(workout: Swimming) -> Self {
        Workout::Swimming(workout)
    }
}

/// Computed statistics for a single workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub training_type: WorkoutKind,
    /// Duration in hours.
    pub duration: f64,
    /// Distance in kilometers.
    pub distance: f64,
    /// Mean speed in km/h.
    pub speed: f64,
    /// Energy spent in kilocalories.
    pub calories: f64,
}

impl Summary {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// One `(type code, parameters)` pair as reported by a tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::invalid(
            field,
            format!("expected a positive number, got {value}"),
        ))
    }
}

pub(crate) fn count(field: &'static str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::invalid(
            field,
            format!("expected a non-negative whole number, got {value}"),
        ))
    }
}
