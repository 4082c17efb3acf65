//! matcalc - interactive calculator for composable square-matrix functions.

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use clap::Parser;

mod config;
mod console;
mod error;
mod matrix;
mod operation;
mod user;

use config::Config;
use user::Interpreter;

#[derive(Parser, Debug)]
#[command(name = "matcalc")]
#[command(about = "Build and evaluate composable square-matrix functions")]
struct Cli {
    /// Configuration file (default: ./matcalc.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Maximum number of operations (2-100)
    #[arg(long, conflicts_with = "bounded")]
    capacity: Option<usize>,
    /// Ask for the maximum number of operations at startup
    #[arg(long)]
    bounded: bool,
    /// Log filter, e.g. `info` or `matcalc=debug`
    #[arg(long)]
    log: Option<String>,
    /// Command files to read before the interactive session
    scripts: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = try_main(cli) {
        log::error!("{e:#}");
        eprintln!("matcalc: {e:#}");
        exit(1);
    }
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Command line flags override the configuration file
    if let Some(capacity) = cli.capacity {
        config.capacity = Some(capacity);
    }
    if cli.bounded {
        config.bounded = true;
    }
    if let Some(log) = cli.log {
        config.log = log;
    }
    config.validate()?;

    console::init_logger(&config.log);
    log::debug!("configuration: {config:?}");

    let stdin = Box::new(BufReader::new(io::stdin()));
    let mut interpreter = Interpreter::new(config, stdin, io::stdout().lock())?;

    // Pushed in reverse so the first script on the command line runs first
    for script in cli.scripts.iter().rev() {
        interpreter
            .push_script(script)
            .with_context(|| format!("Failed to open script {}", script.display()))?;
    }

    interpreter.run()?;
    Ok(())
}
