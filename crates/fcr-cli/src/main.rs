//! The `fcr` binary.
//!
//! Loads a JSON state file into an in-memory store, evaluates one pipeline
//! against it, and prints the result as JSON on stdout.
//!
//! Configuration comes from flags, falling back to environment variables:
//! - `FCR_STATE`: state file path (default: "fcr-state.json")
//! - `FCR_TIMEOUT_MS`: request timeout in milliseconds (default: none)
//! - `FCR_LOG`: tracing filter for stderr logs (default: "warn")

mod commands;
mod error;
mod state;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fcr_client::Env;
use fcr_core::Context;

use crate::commands::Command;
use crate::error::CliError;

/// Evaluate store pipelines against a JSON state file.
#[derive(Parser, Debug)]
#[command(name = "fcr", about = "Evaluate store pipelines against a JSON state file")]
struct Cli {
    /// Path to the JSON state file.
    #[arg(long, env = "FCR_STATE", default_value = "fcr-state.json", global = true)]
    state: PathBuf,

    /// Request timeout in milliseconds.
    #[arg(long, env = "FCR_TIMEOUT_MS", global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("FCR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {}", err);
            err.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let store = state::load(&cli.state)?;

    let ctx = match cli.timeout_ms {
        Some(ms) => Context::background().with_timeout(Duration::from_millis(ms)),
        None => Context::background(),
    };
    let env = Env::new(ctx, Arc::new(store.clone()));

    let output = commands::execute(&env, &cli.command)?;
    if cli.command.writes() {
        state::save(&cli.state, &store)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
