//! Console table writer
//!
//! Renders a sweep as `Frequency (Hz) | Magnitude | Phase (degrees)` with
//! 2, 4 and 2 decimal places.

use std::fmt;
use std::io::{self, Write};

use crate::sweep::{Sample, SweepResult};

/// Table header line
pub const TABLE_HEADER: &str = "Frequency (Hz) | Magnitude | Phase (degrees)";

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} | {:.4} | {:.2}",
            self.frequency, self.magnitude, self.phase_deg
        )
    }
}

impl fmt::Display for SweepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TABLE_HEADER)?;
        for sample in self {
            writeln!(f, "{}", sample)?;
        }
        Ok(())
    }
}

/// Write the sweep table to a writer
pub fn write_table<W: Write>(result: &SweepResult, writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", result)?;
    writer.flush()
}
