//! Frequency module - validated sweep range and log-uniform axis
//!
//! The logarithmic mapping is only defined for positive frequencies, so
//! ranges are checked once at construction and never re-checked downstream.

use tracing::warn;

use crate::constants::FREQUENCY_RANGE_HZ;
use crate::error::{BodeError, Result};

/// A validated (start, stop) frequency pair in Hz
///
/// Invariant: `0 < start <= stop`, both finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRange {
    start: f64,
    stop: f64,
}

impl FrequencyRange {
    /// Create a new range, rejecting non-positive starts and reversed bounds
    ///
    /// # Arguments
    /// * `start` - Start frequency in Hz
    /// * `stop` - Stop frequency in Hz
    ///
    /// # Example
    /// ```
    /// use bode_core::frequency::FrequencyRange;
    /// let range = FrequencyRange::new(1.0, 1e6).unwrap();
    /// assert_eq!(range.stop(), 1e6);
    /// assert!(FrequencyRange::new(-1.0, 1e6).is_err());
    /// ```
    pub fn new(start: f64, stop: f64) -> Result<Self> {
        if !start.is_finite() || start <= 0.0 {
            return Err(BodeError::InvalidStartFrequency { start });
        }
        if !stop.is_finite() {
            return Err(BodeError::InvalidStopFrequency { stop });
        }
        if start > stop {
            return Err(BodeError::ReversedRange { start, stop });
        }

        if !FREQUENCY_RANGE_HZ.contains(&start) || !FREQUENCY_RANGE_HZ.contains(&stop) {
            warn!(
                start,
                stop,
                "frequency range lies outside the operating range {:?} Hz",
                FREQUENCY_RANGE_HZ
            );
        }

        Ok(Self { start, stop })
    }

    /// Get the start frequency in Hz
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Get the stop frequency in Hz
    #[inline]
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Number of decades spanned by the range
    pub fn decades(&self) -> f64 {
        self.stop.log10() - self.start.log10()
    }

    /// Generate `npoints` frequencies log-uniformly spaced from start to stop inclusive
    ///
    /// f_k = 10^(log10(start) + k * (log10(stop) - log10(start)) / (npoints - 1))
    ///
    /// A range with `start == stop` yields `npoints` identical frequencies;
    /// `npoints == 0` yields an empty axis.
    pub fn log_space(&self, npoints: usize) -> Vec<f64> {
        match npoints {
            0 => return Vec::new(),
            1 => return vec![self.start],
            _ => {}
        }

        let log_start = self.start.log10();
        let log_step = self.decades() / (npoints - 1) as f64;
        (0..npoints)
            .map(|k| 10.0_f64.powf(log_start + k as f64 * log_step))
            .collect()
    }
}
