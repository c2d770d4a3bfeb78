//! Spectral Lab - signal generation and spectral analysis for Rust
//!
//! This library generates periodic waveforms, aperiodic pulses and colored
//! noise, and moves them between the time and frequency domains with an FFT.
//! Every generator returns plain sample vectors ready for plotting.

pub mod error;
pub mod noise;
pub mod periodic;
pub mod pulses;
pub mod signal;
pub mod spectral;
#[cfg(feature = "wav-export")]
pub mod wav;
pub mod waveforms;

// Re-export commonly used types at the crate root
#[cfg(feature = "wav-export")]
pub use error::ExportError;
pub use error::{Result, TransformError};
pub use noise::{NoiseColor, NoiseParams, NoisePalette, NoiseSynthesizer};
pub use periodic::HarmonicParams;
pub use pulses::{Pulse, PulseParams};
pub use signal::{SampledSignal, Waveform, linspace};
pub use spectral::{
    Phasor, SanitizePolicy, SpectralTransform, Spectrum, next_power_of_two, pad_to_power_of_two,
};
pub use waveforms::{RoundTrip, WaveParams, WaveShape};
