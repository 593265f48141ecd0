//! HDR QC CLI - Automated quality control for processed HDR photos.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{Cli, ExitCode};
use config::AppConfig;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.assess.paths.is_empty() {
        eprintln!("error: No paths specified. Use --help for usage information.");
        return ExitCode::Error.into();
    }

    let config = AppConfig::load();
    let args = commands::assess::AssessArgs::with_config(cli.assess, &config);

    match commands::assess::run(&args) {
        Ok(result) => result.exit_code.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::Error.into()
        }
    }
}
