// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hush - replay host lifecycle scenarios against the effect arbiter

mod commands;
mod output;
mod scenario;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::run;
use hush_core::{HushConfig, HELP_MESSAGE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hush",
    version,
    about = "hush - Exclusive arbitration of a shared effect"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario of host signals
    Run(run::RunArgs),
    /// Print the remote command help text
    HelpText,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = HushConfig::load_or_default(cli.config.as_deref())?;

    setup_logging(&config);

    match cli.command {
        Commands::Run(args) => run::run(args, &config).await?,
        Commands::HelpText => println!("{}", HELP_MESSAGE),
    }

    Ok(())
}

fn setup_logging(config: &HushConfig) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
