//! Spectral transforms.
//!
//! This module contains everything that moves signals between the time and
//! frequency domains:
//! - power-of-two zero padding
//! - forward and smoothed inverse FFT (`SpectralTransform`)
//! - one-sided and shifted amplitude spectra (`Spectrum`)

mod padding;
mod spectrum;
mod transform;

pub use padding::{next_power_of_two, pad_to_power_of_two};
pub use spectrum::{DominantComponent, Spectrum};
pub use transform::{
    Phasor, SMOOTHING_WINDOW, SanitizePolicy, SpectralTransform, sanitize, smooth,
};
