//! Forward and inverse FFT over real-valued signals.

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;
use tracing::{debug, warn};

use super::padding::pad_to_power_of_two;
use crate::error::{Result, TransformError};

/// Complex frequency-domain coefficient produced by the forward transform.
pub type Phasor = Complex<f64>;

/// Width of the centered moving average applied after every smoothed inverse.
pub const SMOOTHING_WINDOW: usize = 5;

/// What the forward transform does with NaN or infinite samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SanitizePolicy {
    /// Fail with [`TransformError::NonFinite`] (generated data)
    #[default]
    Reject,
    /// Replace the sample with zero, log it and continue (user data)
    ReplaceWithZero,
}

/// FFT wrapper that pads its input and owns the planner between calls.
///
/// Plans are cached by the planner, so reusing one `SpectralTransform` for
/// several signals of the same length avoids replanning.
pub struct SpectralTransform {
    planner: FftPlanner<f64>,
    policy: SanitizePolicy,
}

impl SpectralTransform {
    /// Creates a transform that rejects non-finite samples.
    pub fn new() -> Self {
        Self::with_policy(SanitizePolicy::Reject)
    }

    /// Creates a transform with an explicit sanitize policy.
    pub fn with_policy(policy: SanitizePolicy) -> Self {
        Self {
            planner: FftPlanner::new(),
            policy,
        }
    }

    /// Policy applied to non-finite samples.
    pub fn policy(&self) -> SanitizePolicy {
        self.policy
    }

    /// Computes the FFT of `signal` after zero padding it to a power of two.
    ///
    /// The returned phasor sequence has the padded length.
    ///
    /// # Errors
    ///
    /// [`TransformError::EmptyInput`] for an empty signal, and
    /// [`TransformError::NonFinite`] when the policy is `Reject` and a sample
    /// is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use spectral_lab::SpectralTransform;
    ///
    /// let mut transform = SpectralTransform::new();
    /// let phasors = transform.forward(&[1.0, 1.0, 1.0]).unwrap();
    /// assert_eq!(phasors.len(), 4);
    /// assert!((phasors[0].re - 3.0).abs() < 1e-12);
    /// ```
    pub fn forward(&mut self, signal: &[f64]) -> Result<Vec<Phasor>> {
        if signal.is_empty() {
            warn!("forward transform called with an empty signal");
            return Err(TransformError::EmptyInput);
        }

        let mut padded = pad_to_power_of_two(signal);
        match self.policy {
            SanitizePolicy::Reject => {
                if let Some((index, &value)) =
                    padded.iter().enumerate().find(|(_, v)| !v.is_finite())
                {
                    warn!(index, value, "rejecting signal with non-finite sample");
                    return Err(TransformError::NonFinite { index, value });
                }
            }
            SanitizePolicy::ReplaceWithZero => {
                let replaced = sanitize(&mut padded);
                if replaced > 0 {
                    warn!(replaced, "replaced non-finite samples with zero before FFT");
                }
            }
        }

        let mut buffer: Vec<Phasor> = padded.iter().map(|&s| Complex::new(s, 0.0)).collect();
        debug!(len = buffer.len(), "forward FFT");
        let fft = self.planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);
        Ok(buffer)
    }

    /// Inverse FFT keeping only the real part, scaled by `1/N`.
    ///
    /// Non-finite outputs are replaced with zero.
    pub fn inverse_real(&mut self, phasors: &[Phasor]) -> Result<Vec<f64>> {
        if phasors.is_empty() {
            warn!("inverse transform called with no phasors");
            return Err(TransformError::EmptyInput);
        }

        let mut buffer = phasors.to_vec();
        debug!(len = buffer.len(), "inverse FFT");
        let ifft = self.planner.plan_fft_inverse(buffer.len());
        ifft.process(&mut buffer);

        let scale = 1.0 / buffer.len() as f64;
        let mut real: Vec<f64> = buffer.iter().map(|c| c.re * scale).collect();
        let replaced = sanitize(&mut real);
        if replaced > 0 {
            warn!(replaced, "replaced non-finite samples after inverse FFT");
        }
        Ok(real)
    }

    /// Reconstructs a real signal from its phasors.
    ///
    /// The real part of the inverse FFT is passed through a
    /// [`SMOOTHING_WINDOW`]-sample centered moving average, so the result is
    /// a low-passed approximation of the original, not an exact copy.
    pub fn inverse(&mut self, phasors: &[Phasor]) -> Result<Vec<f64>> {
        let real = self.inverse_real(phasors)?;
        Ok(smooth(&real, SMOOTHING_WINDOW))
    }
}

impl Default for SpectralTransform {
    fn default() -> Self {
        Self::new()
    }
}

/// Centered moving average.
///
/// Near the edges the window shrinks to the samples that exist instead of
/// wrapping around or padding.
pub fn smooth(signal: &[f64], window: usize) -> Vec<f64> {
    let half = window / 2;
    (0..signal.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half + 1).min(signal.len());
            let slice = &signal[start..end];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Replaces NaN and infinite samples with zero, returning how many changed.
pub fn sanitize(samples: &mut [f64]) -> usize {
    let mut replaced = 0;
    for sample in samples.iter_mut().filter(|s| !s.is_finite()) {
        *sample = 0.0;
        replaced += 1;
    }
    replaced
}
