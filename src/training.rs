use crate::types::{InfoMessage, WorkoutKind};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Step length in metres for running and walking.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in metres for swimming.
pub const LEN_STROKE: f64 = 1.38;

/// Readings shared by every workout kind.
///
/// Has no calorie calculation; only concrete workouts implement [`Workout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    /// Steps or strokes.
    pub action: u32,
    /// Hours, always > 0 when built through [`crate::package::read_package`].
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl Training {
    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

pub trait Workout {
    fn kind(&self) -> WorkoutKind;

    fn training(&self) -> &Training;

    /// Metres covered by one action.
    fn step_len(&self) -> f64 {
        LEN_STEP
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.training().action) * self.step_len() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.training().duration
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().name(),
            duration: self.training().duration,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: Training,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            base: Training::new(action, duration, weight),
        }
    }
}

impl Workout for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn training(&self) -> &Training {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let Training {
            duration, weight, ..
        } = self.base;
        let speed = Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT;
        speed * weight / M_IN_KM * duration * MIN_IN_H
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub base: Training,
    /// Centimetres.
    pub height: f64,
}

impl SportsWalking {
    const CM_IN_M: f64 = 100.0;
    const KMH_IN_MSEC: f64 = 0.278;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub const fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: Training::new(action, duration, weight),
            height,
        }
    }
}

impl Workout for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn training(&self) -> &Training {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let Training {
            duration, weight, ..
        } = self.base;
        let height_m = self.height / Self::CM_IN_M;
        let speed_mps = self.mean_speed_kmh() * Self::KMH_IN_MSEC;
        let per_minute = Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_mps.powi(2) / height_m) * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight;
        per_minute * duration * MIN_IN_H
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: Training,
    /// Metres.
    pub length_pool: f64,
    pub count_pool: u32,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub const fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            base: Training::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn training(&self) -> &Training {
        &self.base
    }

    fn step_len(&self) -> f64 {
        LEN_STROKE
    }

    // Pool laps, not strokes, determine speed.
    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        let Training {
            duration, weight, ..
        } = self.base;
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * weight
            * duration
    }
}
