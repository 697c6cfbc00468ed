//! Command-line options

use std::path::PathBuf;

use clap::Parser;

use crate::session::SessionOptions;

/// Interactive Bode plot of first- and second-order transfer functions
#[derive(Parser, Debug)]
#[command(name = "bode", version, about)]
pub struct Cli {
    /// SVG file the Bode plot is written to after every sweep
    #[arg(long, value_name = "PATH", default_value = "bode.svg")]
    pub plot: PathBuf,

    /// Skip rendering the Bode plot
    #[arg(long)]
    pub no_plot: bool,

    /// Skip printing the sample table
    #[arg(long)]
    pub no_table: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            table: !self.no_table,
            plot: (!self.no_plot).then(|| self.plot.clone()),
        }
    }
}
