use crate::dlog;
use crate::package::{RawPackage, read_package};
use crate::training::Workout;
use anyhow::{Context, Result};
use std::io::Write;

/// Validate each package in order and write one report line per package.
///
/// Stops at the first invalid package.
pub fn report_packages<W: Write>(
    packages: &[RawPackage],
    json: bool,
    out: &mut W,
) -> Result<()> {
    for (i, RawPackage(workout_type, data)) in packages.iter().enumerate() {
        let training = read_package(workout_type, data)
            .with_context(|| format!("package #{} ({workout_type})", i + 1))?;
        let info = training.show_training_info();
        dlog!(
            "report kind={} distance={} speed={} calories={}",
            info.training_type,
            info.distance,
            info.speed,
            info.calories
        );

        if json {
            serde_json::to_writer(&mut *out, &info).context("writing JSON report")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", info.get_message())?;
        }
    }

    tracing::info!(packages = packages.len(), "report done");
    Ok(())
}
