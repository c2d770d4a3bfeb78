//! Sampled signals and the waveform trait.
//!
//! This module provides the two shapes every generator in the crate speaks:
//! - `Waveform` for anything that can be evaluated at a time instant
//! - `SampledSignal` for a time axis paired with sample values

use crate::error::{Result, TransformError};

/// Common interface for continuous-time waveforms.
///
/// Implementors describe the value of the waveform at any instant. Sampling
/// over a time axis is provided by `generate()`.
pub trait Waveform {
    /// Value of the waveform at time `t` (seconds).
    fn value_at(&self, t: f64) -> f64;

    /// Evaluates the waveform at every instant of `time`.
    ///
    /// Default implementation calls `value_at()` for each element.
    ///
    /// # Arguments
    ///
    /// * `time` - Time axis to sample on
    fn generate(&self, time: &[f64]) -> Vec<f64> {
        time.iter().map(|&t| self.value_at(t)).collect()
    }
}

/// Time axis and the samples taken on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledSignal {
    /// Sample instants (seconds), strictly increasing
    pub time: Vec<f64>,
    /// Sample values, one per instant
    pub values: Vec<f64>,
}

impl SampledSignal {
    /// Pairs a time axis with its samples.
    ///
    /// # Errors
    ///
    /// [`TransformError::LengthMismatch`] when the two lengths differ, and
    /// [`TransformError::NonFinite`] when a sample is NaN or infinite.
    pub fn new(time: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if time.len() != values.len() {
            return Err(TransformError::LengthMismatch {
                expected: time.len(),
                found: values.len(),
            });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(TransformError::NonFinite { index, value });
        }
        Ok(Self { time, values })
    }

    /// Samples `waveform` on `time`.
    pub fn sample<W: Waveform + ?Sized>(waveform: &W, time: Vec<f64>) -> Result<Self> {
        let values = waveform.generate(&time);
        Self::new(time, values)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there are no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Step between the first two instants, or `None` with fewer than two.
    pub fn time_step(&self) -> Option<f64> {
        match self.time.as_slice() {
            [first, second, ..] => Some(second - first),
            _ => None,
        }
    }

    /// `[time, value]` pairs for plotting.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.time
            .iter()
            .zip(self.values.iter())
            .map(|(&t, &v)| [t, v])
            .collect()
    }
}

/// `samples` evenly spaced instants from `start` to `end`, both included.
///
/// # Examples
///
/// ```
/// use spectral_lab::linspace;
///
/// assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (samples - 1) as f64;
            (0..samples).map(|i| start + i as f64 * step).collect()
        }
    }
}
