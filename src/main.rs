#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::Result;
use clap::Parser;
use fitness_tracker::{cli, package, report, utils};
use std::io;

#[macro_use]
extern crate fitness_tracker;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packages = match cli.packages.as_deref() {
        Some(path) => package::load_packages(path)?,
        None => {
            dlog!("mode=samples");
            package::sample_packages()
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::report_packages(&packages, cli.json, &mut out)?;
    Ok(())
}
