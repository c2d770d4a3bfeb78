//! Colored noise synthesis and statistics.
//!
//! [`NoiseSynthesizer`] shapes the spectrum of uniform white noise; the
//! free functions describe any signal through its amplitude spectrum, value
//! histogram and chunk-to-chunk correlation.

mod stats;
mod synth;

pub use stats::{
    CorrelationMatrix, Histogram, amplitude_spectrum, correlation_matrix, histogram, pearson,
};
pub use synth::{NoiseColor, NoisePalette, NoiseSynthesizer, hermitian_envelope};

use rand::Rng;
use tracing::info;

use crate::spectral::Spectrum;

/// Sizes used to generate and describe a noise signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    /// Samples per signal
    pub length: usize,
    /// Sample rate used to label spectrum frequencies (Hz)
    pub sample_rate: f64,
    /// Histogram bins
    pub bins: usize,
    /// Samples per correlation chunk
    pub chunk_size: usize,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            length: 1 << 15,
            sample_rate: 1000.0,
            bins: 100,
            chunk_size: 1000,
        }
    }
}

impl NoiseParams {
    /// Sets the signal length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the sample rate.
    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the histogram bin count.
    pub fn bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Sets the correlation chunk size.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

/// A noise signal together with everything computed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseAnalysis {
    pub color: NoiseColor,
    pub samples: Vec<f64>,
    pub spectrum: Spectrum,
    pub histogram: Histogram,
    pub correlation: CorrelationMatrix,
}

impl NoiseAnalysis {
    /// Describes existing samples.
    pub fn of(color: NoiseColor, samples: Vec<f64>, params: &NoiseParams) -> Self {
        Self {
            color,
            spectrum: amplitude_spectrum(&samples, params.sample_rate),
            histogram: histogram(&samples, params.bins),
            correlation: correlation_matrix(&samples, params.chunk_size),
            samples,
        }
    }
}

/// Generates and describes one signal of each color.
pub fn analyze_palette<R: Rng>(
    synth: &mut NoiseSynthesizer<R>,
    params: &NoiseParams,
) -> Vec<NoiseAnalysis> {
    NoiseColor::all()
        .iter()
        .map(|&color| {
            let samples = synth.generate(color, params.length);
            info!(color = color.name(), len = samples.len(), "generated noise");
            NoiseAnalysis::of(color, samples, params)
        })
        .collect()
}
