//! Bode plot rendering
//!
//! Magnitude (dB) above phase (degrees), both against a shared logarithmic
//! frequency axis.

use std::path::Path;

use anyhow::{Context, Result};
use bode_core::SweepResult;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Pixel size of the rendered figure
pub const PLOT_SIZE: (u32, u32) = (960, 720);

/// Render the Bode plot of a sweep to an SVG file
pub fn render_svg(result: &SweepResult, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    draw_bode(&root, result)?;
    root.present()
        .with_context(|| format!("Failed to write Bode plot to {}", path.display()))?;
    Ok(())
}

/// Draw both Bode charts onto a drawing area
pub fn draw_bode<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    result: &SweepResult,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 1));

    let (f_lo, f_hi) = frequency_bounds(result);
    let frequencies = result.frequencies();

    let magnitude: Vec<(f64, f64)> = frequencies
        .iter()
        .zip(result.magnitudes_db().iter())
        .map(|(&f, &db)| (f, db))
        .filter(|(_, db)| db.is_finite())
        .collect();
    let (db_lo, db_hi) = value_bounds(magnitude.iter().map(|p| p.1));

    let mut upper = ChartBuilder::on(&areas[0])
        .caption("Bode plot", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d((f_lo..f_hi).log_scale(), db_lo..db_hi)?;
    upper
        .configure_mesh()
        .y_desc("Magnitude (dB)")
        .draw()?;
    upper.draw_series(LineSeries::new(magnitude, &BLUE))?;

    let phase: Vec<(f64, f64)> = frequencies
        .iter()
        .zip(result.phases_deg().iter())
        .map(|(&f, &deg)| (f, deg))
        .collect();
    let (ph_lo, ph_hi) = value_bounds(phase.iter().map(|p| p.1));

    let mut lower = ChartBuilder::on(&areas[1])
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((f_lo..f_hi).log_scale(), ph_lo..ph_hi)?;
    lower
        .configure_mesh()
        .x_desc("Frequency (Hz)")
        .y_desc("Phase (degrees)")
        .draw()?;
    lower.draw_series(LineSeries::new(phase, &RED))?;

    Ok(())
}

/// X-axis bounds; a zero-width sweep is widened so the log axis stays valid
fn frequency_bounds(result: &SweepResult) -> (f64, f64) {
    let samples = result.samples();
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) if first.frequency < last.frequency => {
            (first.frequency, last.frequency)
        }
        (Some(first), _) => (first.frequency / 2.0, first.frequency * 2.0),
        _ => (1.0, 10.0),
    }
}

/// Y-axis bounds with a small margin; flat or empty data gets +/-1
fn value_bounds<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(1.0);
    (lo - pad, hi + pad)
}
