//! Frequency sweep engine
//!
//! Evaluates a transfer function at log-spaced points `s = j*2*pi*f` and
//! reduces each response to a [`Sample`].

use ndarray::Array1;
use num_complex::Complex64;
use std::f64::consts::PI;
use tracing::debug;

use crate::constants::SWEEP_POINTS;
use crate::error::Result;
use crate::frequency::FrequencyRange;
use crate::math::conversions::{complex_2_degree, complex_2_magnitude, magnitude_2_db};
use crate::transfer::TransferFunction;

/// One point of a frequency response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Frequency in Hz
    pub frequency: f64,
    /// Linear magnitude |H|
    pub magnitude: f64,
    /// Phase in degrees, in (-180, 180]
    pub phase_deg: f64,
}

impl Sample {
    /// Reduce a complex response at `frequency` to magnitude and phase
    pub fn from_response(frequency: f64, h: Complex64) -> Self {
        Self {
            frequency,
            magnitude: complex_2_magnitude(h),
            phase_deg: complex_2_degree(h),
        }
    }

    /// Magnitude in dB (20*log10(|H|))
    #[inline]
    pub fn magnitude_db(&self) -> f64 {
        magnitude_2_db(self.magnitude)
    }
}

/// Samples ordered by increasing frequency
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    samples: Vec<Sample>,
}

impl SweepResult {
    /// Get the samples
    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Get the number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Frequency column in Hz
    pub fn frequencies(&self) -> Array1<f64> {
        self.samples.iter().map(|s| s.frequency).collect()
    }

    /// Linear magnitude column
    pub fn magnitudes(&self) -> Array1<f64> {
        self.samples.iter().map(|s| s.magnitude).collect()
    }

    /// Magnitude column in dB
    pub fn magnitudes_db(&self) -> Array1<f64> {
        self.samples.iter().map(Sample::magnitude_db).collect()
    }

    /// Phase column in degrees
    pub fn phases_deg(&self) -> Array1<f64> {
        self.samples.iter().map(|s| s.phase_deg).collect()
    }
}

impl<'a> IntoIterator for &'a SweepResult {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Sweep a transfer function over a frequency range
///
/// Produces exactly [`SWEEP_POINTS`] samples, log-uniformly spaced from
/// `range.start()` to `range.stop()`. The first singular evaluation aborts
/// the sweep and no partial result is returned.
///
/// # Example
/// ```
/// use bode_core::{sweep, FrequencyRange, ModelOrder, TransferFunction};
/// let tf = TransferFunction::new(ModelOrder::First, &[1000.0], &[10000.0]).unwrap();
/// let range = FrequencyRange::new(1.0, 1e6).unwrap();
/// let result = sweep(&tf, &range).unwrap();
/// assert_eq!(result.len(), 1000);
/// ```
pub fn sweep(tf: &TransferFunction, range: &FrequencyRange) -> Result<SweepResult> {
    sweep_points(tf, range, SWEEP_POINTS)
}

/// Sweep with an explicit number of points
pub fn sweep_points(
    tf: &TransferFunction,
    range: &FrequencyRange,
    npoints: usize,
) -> Result<SweepResult> {
    debug!(
        order = %tf.order(),
        start = range.start(),
        stop = range.stop(),
        npoints,
        "frequency sweep"
    );

    let samples = range
        .log_space(npoints)
        .into_iter()
        .map(|freq| {
            let s = Complex64::new(0.0, 2.0 * PI * freq);
            tf.evaluate(s).map(|h| Sample::from_response(freq, h))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SweepResult { samples })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::ModelOrder;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_from_response() {
        let sample = Sample::from_response(50.0, Complex64::new(0.0, -10.0));
        assert_eq!(sample.frequency, 50.0);
        assert_relative_eq!(sample.magnitude, 10.0, epsilon = 1e-12);
        assert_relative_eq!(sample.phase_deg, -90.0, epsilon = 1e-12);
        assert_relative_eq!(sample.magnitude_db(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sweep_points_count() {
        let tf = TransferFunction::new(ModelOrder::First, &[10.0], &[100.0]).unwrap();
        let range = FrequencyRange::new(1.0, 1e3).unwrap();
        let result = sweep_points(&tf, &range, 16).unwrap();
        assert_eq!(result.len(), 16);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_sweep_zero_points_is_empty() {
        let tf = TransferFunction::new(ModelOrder::First, &[10.0], &[100.0]).unwrap();
        let range = FrequencyRange::new(1.0, 1e3).unwrap();
        let result = sweep_points(&tf, &range, 0).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.frequencies().len(), 0);
    }

    #[test]
    fn test_columns_match_samples() {
        let tf = TransferFunction::new(ModelOrder::First, &[10.0], &[100.0]).unwrap();
        let range = FrequencyRange::new(1.0, 1e3).unwrap();
        let result = sweep(&tf, &range).unwrap();

        let f = result.frequencies();
        let mag = result.magnitudes();
        let db = result.magnitudes_db();
        let phase = result.phases_deg();
        for (k, sample) in result.iter().enumerate() {
            assert_eq!(f[k], sample.frequency);
            assert_eq!(mag[k], sample.magnitude);
            assert_eq!(db[k], sample.magnitude_db());
            assert_eq!(phase[k], sample.phase_deg);
        }
    }

    #[test]
    fn test_high_frequency_limit() {
        // Both orders tend to unity gain and zero phase well above every corner
        let tf = TransferFunction::new(ModelOrder::Second, &[1.0, 2.0], &[3.0, 4.0]).unwrap();
        let range = FrequencyRange::new(1e8, 1e9).unwrap();
        let result = sweep(&tf, &range).unwrap();
        let last = result.samples()[result.len() - 1];
        assert_relative_eq!(last.magnitude, 1.0, epsilon = 1e-9);
        assert_relative_eq!(last.phase_deg, 0.0, epsilon = 1e-6);
    }
}
