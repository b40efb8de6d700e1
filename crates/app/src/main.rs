//! cgen - Main Entry Point

use std::error::Error;
use std::process::ExitCode;

use cgen::Cli;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), config = %cli.config.display(), "starting cgen");

    match cgen::generate(&cli) {
        Ok(output) => {
            println!(
                "Generated library {} ({} files)",
                output.config.name,
                output.artifacts.len()
            );
            println!("Output directory: {}", output.library_root.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            let mut cause = err.source();
            while let Some(inner) = cause {
                eprintln!("  caused by: {inner}");
                cause = inner.source();
            }
            ExitCode::FAILURE
        }
    }
}
