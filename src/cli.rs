use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitness-tracker",
    about = "Report distance, mean speed and calories for workout sensor packages"
)]
pub struct Cli {
    /// JSON file with `[kind, [values...]]` packages, or `-` for stdin.
    ///
    /// Kinds: SWM (5 values), RUN (3 values), WLK (4 values).
    /// Without it the built-in sample packages are reported.
    #[arg(value_name = "PACKAGES")]
    pub packages: Option<PathBuf>,

    /// Print one JSON object per package instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_samples() {
        let cli = Cli::try_parse_from(["fitness-tracker"]).unwrap();
        assert!(cli.packages.is_none());
        assert!(!cli.json);
        assert_eq!((cli.verbose, cli.quiet), (0, 0));
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["fitness-tracker", "-vv", "--json", "-"]).unwrap();
        assert_eq!(cli.packages, Some(PathBuf::from("-")));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
