//! Wildcard Path Router (batch CLI)
//!
//! # Architecture Overview
//!
//! ```text
//!   --routes FILE ──▶ config ──┐
//!                               ▼
//!   stdin/--input ──▶ batch ──▶ RouterBuilder ──build──▶ Router
//!     (config lines)                                      │
//!     #                                                   ▼
//!     (query lines) ─────────────────────────────▶ resolve ──▶ stdout
//!                                                  (endpoint | 404)
//! ```
//!
//! Logs go to stderr; stdout carries exactly one line per query.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use wildcard_router::batch::{self, BatchOptions};
use wildcard_router::config::{load_config, RouterConfig};
use wildcard_router::observability::logging;
use wildcard_router::RouterBuilder;

#[derive(Parser)]
#[command(name = "wildcard-router")]
#[command(about = "Resolve request paths against wildcard route patterns", long_about = None)]
struct Cli {
    /// TOML route file loaded before the configuration lines on input
    #[arg(short, long)]
    routes: Option<PathBuf>,

    /// Read from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Abort on the first malformed configuration line
    #[arg(long)]
    strict: bool,

    /// Log level for stderr (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Loaded before logging so its level can apply; errors are reported after.
    let loaded = cli.routes.as_deref().map(load_config).transpose();
    let config_level = loaded
        .as_ref()
        .ok()
        .and_then(|c| c.as_ref())
        .map(|c| c.observability.log_level.as_str());
    logging::init(&logging::filter_directive(cli.log_level.as_deref(), config_level));

    match run(&cli, loaded) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "wildcard-router failed");
            ExitCode::FAILURE
        }
    }
}

fn run(
    cli: &Cli,
    loaded: Result<Option<RouterConfig>, wildcard_router::config::ConfigError>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = RouterBuilder::new();
    if let Some(config) = loaded? {
        config.apply(&mut builder);
    }

    let options = BatchOptions { strict: cli.strict };
    let stdout = BufWriter::new(io::stdout().lock());

    match &cli.input {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            batch::run(reader, stdout, builder, options)?;
        }
        None => {
            batch::run(io::stdin().lock(), stdout, builder, options)?;
        }
    }
    Ok(())
}
