//! cliio main binary
//!
//! Drives the cliio library from the shell: styled writes, log lines,
//! prompts and a cursor-control demo.

use anyhow::{Context, Result};
use clap::Parser;
use cliio::CliIo;
use cliio_config::Config;
use cliio_core::logging::{self, dev_config};
use std::path::PathBuf;
use tracing::info;

mod app;

use app::Commands;

#[derive(Parser)]
#[command(name = "cliio")]
#[command(about = "Styled, terminal-aware output from the shell")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to <config dir>/cliio/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::load_or_default(),
    };
    config.validate().context("Invalid configuration")?;

    let logging_config = if cli.verbose {
        dev_config()
    } else {
        config.logging.clone()
    };
    logging::init_logging(&logging_config).context("Failed to initialize logging")?;

    info!(version = cliio_core::VERSION, "Starting cliio");

    let mut io = CliIo::new();
    io.set_log_styles(config.styles);
    app::run(&mut io, cli.command)
}
