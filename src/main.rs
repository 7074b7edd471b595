//! Command line entry point for the static asset checker.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use static_asset_check::checker::{CheckContext, run_check};
use static_asset_check::config::{CheckConfig, ConfigOverrides};
use static_asset_check::report::{ReportFormat, render_report};

/// Validate that local assets referenced by an HTML entrypoint exist on disk.
#[derive(Debug, Parser)]
#[command(name = "static-asset-check", version, about)]
struct Cli {
    /// Project root the configured paths are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Directory of public assets, overriding the configured value.
    #[arg(long)]
    public_dir: Option<String>,
    /// Entrypoint HTML file, overriding the configured public-dir/index pair.
    #[arg(long)]
    entrypoint: Option<PathBuf>,
    /// Explicit configuration file instead of the discovered one.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Report rendering used on stdout.
    #[arg(long, value_enum, default_value = "text")]
    format: ReportFormat,
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    };
    process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        config_file: cli.config,
        public_dir: cli.public_dir,
    };
    let config = CheckConfig::resolve(&cli.root, &overrides)?;

    let context = match &cli.entrypoint {
        Some(entrypoint) => CheckContext::with_entrypoint(&cli.root, &config, entrypoint)?,
        None => CheckContext::from_config(&cli.root, &config)?,
    };

    let report = run_check(&context)?;
    println!("{}", render_report(&report, cli.format)?);
    Ok(report.exit_code())
}
