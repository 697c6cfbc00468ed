//! Numerical constants for frequency response sweeps
//!
//! The operating ranges below are advisory. Inputs outside them are accepted
//! and only reported through `tracing`.

use std::ops::RangeInclusive;

/// Number of frequency points in every sweep.
pub const SWEEP_POINTS: usize = 1000;

/// Documented operating range for zero and pole locations.
pub const ZERO_POLE_RANGE: RangeInclusive<f64> = 0.0..=1e8;

/// Documented operating range for sweep frequencies in Hz.
pub const FREQUENCY_RANGE_HZ: RangeInclusive<f64> = 1.0..=1e9;
