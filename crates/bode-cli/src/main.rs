//! bode: interactive frequency response tool
//!
//! Prompts for a first- or second-order transfer function and a frequency
//! range, prints the sweep as a table and renders its Bode plot.

mod cli;
mod plot;
mod prompt;
mod session;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use prompt::Prompter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    info!("bode v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    let completed = session::run(&mut prompter, &cli.session_options())?;

    info!(completed, "session finished");
    Ok(())
}
