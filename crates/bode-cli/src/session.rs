//! Interactive session loop
//!
//! Runs cases until the user declines to continue or input ends. Each case
//! builds a fresh transfer function and sweep; nothing carries over.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bode_core::report::write_table;
use bode_core::{sweep, BodeError, FrequencyRange, SweepResult, TransferFunction};
use tracing::{info, warn};

use crate::plot;
use crate::prompt::{CaseInput, PromptError, Prompter};

/// What to do with each sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub table: bool,
    pub plot: Option<PathBuf>,
}

/// Sweep the transfer function described by one case
pub fn evaluate_case(case: &CaseInput) -> Result<SweepResult, BodeError> {
    let tf = TransferFunction::new(case.order, &case.zeros, &case.poles)?;
    let range = FrequencyRange::new(case.start_freq, case.stop_freq)?;
    sweep(&tf, &range)
}

/// Run the session; returns the number of sweeps completed
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    options: &SessionOptions,
) -> Result<usize> {
    let mut completed = 0;
    let mut running = true;

    while running {
        let case = match prompter.case_input() {
            Ok(case) => case,
            Err(PromptError::EndOfInput) => {
                info!("input ended, leaving session");
                break;
            }
            Err(e) => return Err(e).context("Failed to read case parameters"),
        };

        match evaluate_case(&case) {
            Ok(result) => {
                info!(order = %case.order, samples = result.len(), "sweep complete");
                if options.table {
                    write_table(&result, prompter.output())
                        .context("Failed to write sample table")?;
                }
                if let Some(path) = &options.plot {
                    plot::render_svg(&result, path)?;
                    writeln!(prompter.output(), "Bode plot written to {}", path.display())?;
                }
                completed += 1;
            }
            Err(e) => {
                warn!("sweep rejected: {}", e);
                writeln!(prompter.output(), "Error: {}", e)?;
            }
        }

        running = prompter
            .continue_session()
            .context("Failed to read continuation answer")?;
    }

    Ok(completed)
}
