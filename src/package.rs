use crate::dlog;
use crate::error::PackageError;
use crate::training::{Running, SportsWalking, Swimming, Training, Workout};
use crate::types::WorkoutKind;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// One `[kind, [values...]]` entry as received from the sensors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPackage(pub String, pub Vec<Value>);

/// A validated package, ready for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Package {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Package {
    fn as_workout(&self) -> &dyn Workout {
        match self {
            Self::Swimming(w) => w,
            Self::Running(w) => w,
            Self::SportsWalking(w) => w,
        }
    }
}

impl Workout for Package {
    fn kind(&self) -> WorkoutKind {
        self.as_workout().kind()
    }

    fn training(&self) -> &Training {
        self.as_workout().training()
    }

    fn step_len(&self) -> f64 {
        self.as_workout().step_len()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_workout().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.as_workout().spent_calories()
    }
}

/// Validate raw sensor values and build the matching workout.
///
/// Values map positionally onto `[action, duration, weight, ...]`; swimming
/// adds `length_pool, count_pool` and walking adds `height`.
///
/// # Errors
///
/// Checked in order: unknown kind code, non-numeric value, wrong value count,
/// non-positive duration, non-positive height for walking.
pub fn read_package(workout_type: &str, data: &[Value]) -> Result<Package, PackageError> {
    let kind: WorkoutKind = workout_type.parse()?;

    let nums = data
        .iter()
        .enumerate()
        .map(|(index, v)| {
            v.as_f64().ok_or_else(|| PackageError::InvalidValueType {
                index,
                value: v.to_string(),
                expected: "number",
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if nums.len() != kind.arity() {
        return Err(PackageError::ArityMismatch {
            kind,
            expected: kind.arity(),
            got: nums.len(),
        });
    }

    let action = whole(nums[0], 0)?;
    let duration = nums[1];
    let weight = nums[2];
    if !(duration.is_finite() && duration > 0.0) {
        return Err(PackageError::NonPositiveDuration(duration));
    }

    let package = match kind {
        WorkoutKind::Swimming => Package::Swimming(Swimming::new(
            action,
            duration,
            weight,
            nums[3],
            whole(nums[4], 4)?,
        )),
        WorkoutKind::Running => Package::Running(Running::new(action, duration, weight)),
        WorkoutKind::SportsWalking => {
            let height = nums[3];
            if height <= 0.0 {
                return Err(PackageError::NonPositiveHeight(height));
            }
            Package::SportsWalking(SportsWalking::new(action, duration, weight, height))
        }
    };

    dlog!("package kind={kind} values={nums:?}");
    Ok(package)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn whole(v: f64, index: usize) -> Result<u32, PackageError> {
    if v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v) {
        return Ok(v as u32);
    }
    Err(PackageError::InvalidValueType {
        index,
        value: v.to_string(),
        expected: "non-negative integer",
    })
}

/// Packages used when no input is given.
pub fn sample_packages() -> Vec<RawPackage> {
    vec![
        RawPackage("SWM".into(), [720, 1, 80, 25, 40].map(Value::from).to_vec()),
        RawPackage("RUN".into(), [15000, 1, 75].map(Value::from).to_vec()),
        RawPackage("WLK".into(), [9000, 1, 75, 180].map(Value::from).to_vec()),
    ]
}

/// Read a JSON array of `[kind, [values...]]` pairs from a file, or stdin for `-`.
pub fn load_packages(path: &Path) -> Result<Vec<RawPackage>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading packages from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("reading packages: {}", path.display()))?
    };

    let packages: Vec<RawPackage> = serde_json::from_str(&text)
        .with_context(|| format!("parsing packages JSON: {}", path.display()))?;
    tracing::info!(source = %path.display(), packages = packages.len(), "packages loaded");
    Ok(packages)
}
