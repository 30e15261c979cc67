//! fstrips - build and inspect FSTRIPS planning models.
//!
//! ```text
//! fstrips [--config <path>] demo
//! fstrips [--config <path>] read <path>
//! fstrips [--config <path>] write <path>
//! ```
//!
//! Logs go to stderr and are filtered through `RUST_LOG`. Any failure exits
//! non-zero with the error chain printed.

mod demo;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fstrips_config::FstripsConfig;
use fstrips_io::{ModelReader, ModelWriter, PddlReader, PddlWriter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "fstrips", about = "Build and inspect FSTRIPS planning models")]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the bundled blocks/counters model and print it.
    Demo,
    /// Read a PDDL file into a model.
    Read { path: PathBuf },
    /// Write the demo model as PDDL.
    Write { path: PathBuf },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

/// A missing file at the default location means defaults; an explicit
/// `--config` path must exist.
fn load_config(explicit: Option<&PathBuf>) -> Result<FstripsConfig> {
    let Some(path) = explicit else {
        let loaded = FstripsConfig::load().context("failed to load configuration")?;
        return Ok(loaded.unwrap_or_default());
    };
    FstripsConfig::load_from(path)
        .context("failed to load configuration")?
        .with_context(|| format!("config file {} does not exist", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(cli.config.as_ref())?;
    tracing::debug!(language = config.language().name(), "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Demo => {
            let model = demo::build(&config)?;
            demo::print(&model, &mut out)?;
        }
        Command::Read { path } => {
            let model = PddlReader::new(&path)
                .read()
                .with_context(|| format!("failed to read {}", path.display()))?;
            demo::print(&model, &mut out)?;
        }
        Command::Write { path } => {
            let model = demo::build(&config)?;
            PddlWriter::new(&path)
                .write(&model)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "wrote {}", path.display())?;
        }
    }
    Ok(())
}
