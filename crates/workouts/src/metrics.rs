//! Distance, speed and calorie formulas for each workout kind.

use crate::models::{Running, Session, SportsWalking, Summary, Swimming, Workout, WorkoutKind};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Step length in meters for land workouts.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in meters for swimming.
pub const LEN_STROKE: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

pub trait Training {
    fn kind(&self) -> WorkoutKind;

    fn session(&self) -> &Session;

    /// Meters covered by one recorded action.
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        f64::from(self.session().action()) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration()
    }

    /// Energy spent in kilocalories.
    fn spent_calories(&self) -> f64;

    fn summary(&self) -> Summary {
        Summary {
            training_type: self.kind(),
            duration: self.session().duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let session = &self.session;
        (RUN_SPEED_MULTIPLIER * self.mean_speed() - RUN_SPEED_SHIFT) * session.weight() / M_IN_KM
            * session.duration()
            * MIN_IN_H
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let session = &self.session;
        // Floor division: speeds below sqrt(height) contribute nothing.
        let speed_term = self.mean_speed().powi(2).div_euclid(self.height);
        (WALK_WEIGHT_MULTIPLIER * session.weight()
            + speed_term * WALK_SPEED_HEIGHT_MULTIPLIER * session.weight())
            * session.duration()
            * MIN_IN_H
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed(&self) -> f64 {
        f64::from(self.pool_length) * f64::from(self.pool_laps)
            / M_IN_KM
            / self.session.duration()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.session.weight()
    }
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    fn session(&self) -> &Session {
        self.as_training().session()
    }

    fn step_length(&self) -> f64 {
        self.as_training().step_length()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}
