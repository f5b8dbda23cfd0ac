//! payroll-manager - interactive console payroll manager

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use payroll_manager::config::ConfigLoader;
use payroll_manager::console::Session;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// payroll-manager - interactive console payroll manager
#[derive(Parser, Debug)]
#[command(name = "payroll-manager")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a YAML configuration file (built-in seed roster if omitted)
    #[arg(short, long, env = "PAYROLL_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        loader.seed_roster(),
        loader.manager_password(),
        stdin.lock(),
        stdout.lock(),
    );
    session.run().context("console session failed")?;

    Ok(())
}
