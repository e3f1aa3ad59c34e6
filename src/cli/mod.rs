//! Command-line parsing for the filter kernel generator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the kernel/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fk", version, about = "2D resampling filter kernel generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands, one per filter family.
///
/// The family set is closed; an unknown family name is rejected at parse time
/// with a nonzero exit status and no output file.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cardinal sine kernel.
    Sinc(CommonArgs),
    /// Windowed sinc kernel with integer half-width.
    Lanczos(LanczosArgs),
    /// Piecewise-cubic kernel with a free parameter.
    Bicubic(BicubicArgs),
    /// Cubic B-spline kernel.
    Cubicbspline(CommonArgs),
    /// Isotropic Gaussian kernel.
    Gaussian(GaussianArgs),
}

/// Common options for every kernel family.
#[derive(Debug, Parser, Clone)]
pub struct CommonArgs {
    /// Sampling will go from -width/2 to width/2.
    pub width: i64,

    /// Samples count per unit of distance (also the polyphase count).
    pub samples_per_unit: i64,

    /// Rescale each polyphase row group to sum to 1/samples_per_unit.
    #[arg(long)]
    pub normalize: bool,

    /// Render ASCII views (heatmap + center-row profile) in the terminal.
    #[arg(long)]
    pub show: bool,

    /// Kernel JSON output file (default: {family}-{width}-{spu}.json).
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Also export the dense matrix as CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,

    /// Log verbosity.
    #[arg(short = 'v', long, value_enum, default_value_t = Verbosity::Info)]
    pub verbosity: Verbosity,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub plot_width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 24)]
    pub plot_height: usize,
}

/// Options for the Lanczos family.
#[derive(Debug, Parser, Clone)]
pub struct LanczosArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Kernel half-width a (positive integer); the kernel is zero for |x| >= a.
    pub a: i64,
}

/// Options for the bicubic family.
#[derive(Debug, Parser, Clone)]
pub struct BicubicArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Bicubic a parameter (conventionally negative).
    #[arg(default_value_t = -0.5, allow_negative_numbers = true)]
    pub a: f64,
}

/// Options for the Gaussian family.
#[derive(Debug, Parser, Clone)]
pub struct GaussianArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Standard deviation of the Gaussian distribution.
    pub sigma: f64,
}

/// Log verbosity choices (mapped onto `log::LevelFilter`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Verbosity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
    Off,
}

impl Verbosity {
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Warning => log::LevelFilter::Warn,
            // `log` has no level above Error; `critical` keeps the familiar
            // flag value from earlier versions of this tool.
            Verbosity::Error | Verbosity::Critical => log::LevelFilter::Error,
            Verbosity::Off => log::LevelFilter::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_sinc_with_flags() {
        let cli = Cli::parse_from(["fk", "sinc", "4", "2", "--normalize", "--show"]);
        match cli.command {
            Command::Sinc(args) => {
                assert_eq!(args.width, 4);
                assert_eq!(args.samples_per_unit, 2);
                assert!(args.normalize);
                assert!(args.show);
                assert_eq!(args.verbosity, Verbosity::Info);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_lanczos_kernel_size() {
        let cli = Cli::parse_from(["fk", "lanczos", "4", "2", "3"]);
        match cli.command {
            Command::Lanczos(args) => {
                assert_eq!(args.common.width, 4);
                assert_eq!(args.a, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn bicubic_accepts_negative_parameter_and_defaults() {
        let cli = Cli::parse_from(["fk", "bicubic", "4", "2", "-0.75"]);
        match cli.command {
            Command::Bicubic(args) => assert_eq!(args.a, -0.75),
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::parse_from(["fk", "bicubic", "4", "2"]);
        match cli.command {
            Command::Bicubic(args) => assert_eq!(args.a, -0.5),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_family_is_rejected() {
        assert!(Cli::try_parse_from(["fk", "box", "4", "2"]).is_err());
    }

    #[test]
    fn verbosity_maps_to_level_filter() {
        assert_eq!(Verbosity::Warning.level_filter(), log::LevelFilter::Warn);
        assert_eq!(Verbosity::Critical.level_filter(), log::LevelFilter::Error);
        assert_eq!(Verbosity::Off.level_filter(), log::LevelFilter::Off);
    }
}
