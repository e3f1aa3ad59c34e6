//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initializes logging (the core library never logs)
//! - runs the generate pipeline
//! - prints the summary and optional ASCII views
//! - writes the kernel JSON and optional CSV export

use std::path::PathBuf;

use clap::Parser;

use crate::cli::{BicubicArgs, Command, CommonArgs, GaussianArgs, LanczosArgs, Verbosity};
use crate::domain::{FilterSpec, KernelConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `fk` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    let (spec, common) = split_command(cli.command);
    init_logging(common.verbosity);

    let config = kernel_config_from_args(spec, &common);
    handle_generate(&config)
}

fn handle_generate(config: &KernelConfig) -> Result<(), AppError> {
    log::info!(
        "generating {}...",
        config.spec.describe(config.width, config.samples_per_unit)
    );

    let run = pipeline::run_generate(config)?;

    println!(
        "{}",
        crate::report::format_run_summary(config, &run.stats, run.phase_sums.as_deref())
    );

    if config.show {
        println!(
            "{}",
            crate::plot::render_heatmap(&run.kernel, config.plot_width, config.plot_height)
        );
        println!(
            "{}",
            crate::plot::render_profile(&run.kernel, config.plot_width, config.plot_height)
        );
    }

    let output = config
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(config));
    log::info!("output file: {}", output.display());
    crate::io::write_kernel_json(&output, config, &run.kernel)?;

    if let Some(path) = &config.export_csv {
        log::info!("CSV export: {}", path.display());
        crate::io::write_kernel_csv(path, &run.kernel)?;
    }

    Ok(())
}

fn split_command(command: Command) -> (FilterSpec, CommonArgs) {
    match command {
        Command::Sinc(common) => (FilterSpec::Sinc, common),
        Command::Lanczos(LanczosArgs { common, a }) => (FilterSpec::Lanczos { a }, common),
        Command::Bicubic(BicubicArgs { common, a }) => (FilterSpec::Bicubic { a }, common),
        Command::Cubicbspline(common) => (FilterSpec::CubicBspline, common),
        Command::Gaussian(GaussianArgs { common, sigma }) => {
            (FilterSpec::Gaussian { sigma }, common)
        }
    }
}

pub fn kernel_config_from_args(spec: FilterSpec, args: &CommonArgs) -> KernelConfig {
    KernelConfig {
        spec,
        width: args.width,
        samples_per_unit: args.samples_per_unit,
        normalize: args.normalize,
        show: args.show,
        plot_width: args.plot_width,
        plot_height: args.plot_height,
        output: args.output.clone(),
        export_csv: args.export_csv.clone(),
    }
}

fn default_output_path(config: &KernelConfig) -> PathBuf {
    PathBuf::from(format!(
        "{}-{}-{}.json",
        config.spec.kind().slug(),
        config.width,
        config.samples_per_unit
    ))
}

fn init_logging(verbosity: Verbosity) {
    // `try_init` so repeated calls (e.g. under the test harness) stay quiet.
    let _ = env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .format_timestamp_millis()
        .try_init();
}
