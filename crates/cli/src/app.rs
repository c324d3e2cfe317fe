//! Subcommands of the `cliio` binary

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cliio::{CliIo, LogLevel};
use std::thread;
use std::time::Duration;
use tracing::debug;

#[derive(Subcommand)]
pub enum Commands {
    /// Write text, styled when stdout is a terminal
    Write(WriteArgs),
    /// Write a timestamped log line
    Log(LogArgs),
    /// Ask a question and echo the answer
    Prompt(PromptArgs),
    /// Redraw a progress bar in place
    Progress(ProgressArgs),
    /// Show detected terminal capabilities
    Caps,
}

#[derive(Args)]
pub struct WriteArgs {
    /// Text to write
    text: String,

    /// Style descriptor, e.g. "white|red|bold"
    #[arg(short, long)]
    style: Option<String>,

    /// Append a line terminator
    #[arg(short, long)]
    newline: bool,

    /// Write to stderr instead of stdout
    #[arg(long)]
    stderr: bool,
}

#[derive(Args)]
pub struct LogArgs {
    /// Message to log
    message: String,

    /// Level [default, warn, error]
    #[arg(short, long, default_value = "default")]
    level: LogLevel,
}

#[derive(Args)]
pub struct PromptArgs {
    /// Question to ask
    text: String,

    /// Style descriptor for the question
    #[arg(short, long)]
    style: Option<String>,
}

#[derive(Args)]
pub struct ProgressArgs {
    /// Number of steps to draw
    #[arg(long, default_value = "20")]
    steps: u32,

    /// Delay between steps in milliseconds
    #[arg(long, default_value = "50")]
    delay_ms: u64,
}

/// Execute one subcommand against `io`
pub fn run(io: &mut CliIo, command: Commands) -> Result<()> {
    let outcome = match command {
        Commands::Write(args) => write(io, &args),
        Commands::Log(args) => {
            io.log(&args.message, args.level)?;
            Ok(())
        }
        Commands::Prompt(args) => {
            let answer = io.prompt(&args.text, args.style.as_deref())?;
            io.write_line(&answer, None)?;
            Ok(())
        }
        Commands::Progress(args) => progress(io, &args),
        Commands::Caps => caps(io),
    };
    outcome?;

    io.flush().context("Failed to flush output")?;
    Ok(())
}

fn write(io: &mut CliIo, args: &WriteArgs) -> Result<()> {
    let style = args.style.as_deref();
    match (args.stderr, args.newline) {
        (false, false) => io.write(&args.text, style)?,
        (false, true) => io.write_line(&args.text, style)?,
        (true, false) => io.write_error(&args.text, style)?,
        (true, true) => io.write_error_line(&args.text, style)?,
    };
    Ok(())
}

const BAR_WIDTH: u64 = 30;

/// Render step `step` of `steps` (`steps` > 0) as `[###---]  50%`
fn progress_bar(step: u32, steps: u32) -> String {
    let (step, steps) = (u64::from(step), u64::from(steps));
    let filled = (step * BAR_WIDTH / steps) as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH as usize - filled),
        step * 100 / steps
    )
}

fn progress(io: &mut CliIo, args: &ProgressArgs) -> Result<()> {
    let interactive = io.is_output_ansi();
    debug!(steps = args.steps, interactive, "Drawing progress");
    io.hide_cursor()?;

    let steps = args.steps.max(1);
    for step in 0..=steps {
        let bar = progress_bar(step, steps);

        if interactive {
            io.carriage_return()?.erase_line()?.write(&bar, Some("green"))?.flush()?;
        } else {
            io.write_line(&bar, None)?;
        }
        thread::sleep(Duration::from_millis(args.delay_ms));
    }

    io.new_line()?.show_cursor()?;
    io.log("done", LogLevel::Default)?;
    Ok(())
}

fn caps(io: &mut CliIo) -> Result<()> {
    let platform = io.platform().clone();
    let output = io.is_output_ansi().to_string();
    let errors = io.is_errors_ansi().to_string();

    io.write("platform: ", Some("none||bold"))?
        .write_line(&platform.os, None)?
        .write("windows: ", Some("none||bold"))?
        .write_line(&platform.is_windows().to_string(), None)?
        .write("output ansi: ", Some("none||bold"))?
        .write_line(&output, None)?
        .write("errors ansi: ", Some("none||bold"))?
        .write_line(&errors, None)?;
    Ok(())
}
