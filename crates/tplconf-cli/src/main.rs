//! tplconf CLI
//!
//! Locates, resolves, and queries templated configuration files.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    execute_command(cli.command, cli.verbose)
}

// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(e) = result {
        eprintln!("{}: failed to set tracing subscriber: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cmd: Commands, verbose: bool) -> Result<()> {
    match cmd {
        Commands::Show { load, json } => {
            commands::run_show(&load.path, load.options(verbose), json)
        }
        Commands::Get {
            key,
            load,
            default,
            raise,
        } => commands::run_get(
            &load.path,
            load.options(verbose),
            &key,
            default.as_deref(),
            raise,
        ),
        Commands::Locate { load } => commands::run_locate(&load.path, &load.options(verbose)),
    }
}
