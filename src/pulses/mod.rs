//! Aperiodic pulse generators.
//!
//! Five single-shot pulse shapes evaluated over an arbitrary time axis, and
//! their peak-normalized two-sided spectra.

use std::f64::consts::PI;

use crate::error::{Result, TransformError};
use crate::signal::{SampledSignal, Waveform, linspace};
use crate::spectral::{SanitizePolicy, SpectralTransform, Spectrum};

/// Start of the default pulse time axis (seconds).
pub const WINDOW_START: f64 = -5.0;
/// End of the default pulse time axis (seconds).
pub const WINDOW_END: f64 = 5.0;
/// Samples on the default pulse time axis.
pub const WINDOW_SAMPLES: usize = 2000;

/// Shared parameters of the pulse family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseParams {
    /// Peak amplitude `A`
    pub amplitude: f64,
    /// Width `T` of the rectangular, sinc and triangular pulses (seconds)
    pub width: f64,
    /// Standard deviation `σ` of the Gaussian pulse (seconds)
    pub sigma: f64,
    /// Center `t0` of the Gaussian pulse (seconds)
    pub center: f64,
    /// Decay rate `α` of the exponential pulse (1/s)
    pub decay: f64,
}

impl Default for PulseParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            width: 1.0,
            sigma: 1.0,
            center: 0.0,
            decay: 1.0,
        }
    }
}

/// A single pulse shape with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pulse {
    /// `A` for `t ≤ T/2`, else 0. One-sided: every earlier instant is high.
    Rectangular { amplitude: f64, width: f64 },
    /// `A·exp(-(t-t0)²/2σ²)`
    Gaussian {
        amplitude: f64,
        sigma: f64,
        center: f64,
    },
    /// `A·exp(-αt)` for `t ≥ 0`, else 0
    Exponential { amplitude: f64, decay: f64 },
    /// `A·sin(πt/T)/(πt/T)`, `A` at `t = 0`
    Sinc { amplitude: f64, width: f64 },
    /// `A·(1 - 2|t|/T)` for `|t| ≤ T/2`, else 0
    Triangular { amplitude: f64, width: f64 },
}

impl Pulse {
    /// Every pulse shape built from `params`, in display order.
    pub fn all(params: &PulseParams) -> [Pulse; 5] {
        let PulseParams {
            amplitude,
            width,
            sigma,
            center,
            decay,
        } = *params;
        [
            Pulse::Rectangular { amplitude, width },
            Pulse::Gaussian {
                amplitude,
                sigma,
                center,
            },
            Pulse::Exponential { amplitude, decay },
            Pulse::Sinc { amplitude, width },
            Pulse::Triangular { amplitude, width },
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Pulse::Rectangular { .. } => "Rectangular",
            Pulse::Gaussian { .. } => "Gaussian",
            Pulse::Exponential { .. } => "Exponential",
            Pulse::Sinc { .. } => "Sinc",
            Pulse::Triangular { .. } => "Triangular",
        }
    }
}

impl Waveform for Pulse {
    fn value_at(&self, t: f64) -> f64 {
        match *self {
            Pulse::Rectangular { amplitude, width } => {
                if t <= width / 2.0 {
                    amplitude
                } else {
                    0.0
                }
            }
            Pulse::Gaussian {
                amplitude,
                sigma,
                center,
            } => amplitude * (-(t - center).powi(2) / (2.0 * sigma * sigma)).exp(),
            Pulse::Exponential { amplitude, decay } => {
                if t >= 0.0 {
                    amplitude * (-decay * t).exp()
                } else {
                    0.0
                }
            }
            Pulse::Sinc { amplitude, width } => {
                let arg = PI * t / width;
                if arg == 0.0 {
                    amplitude
                } else {
                    amplitude * arg.sin() / arg
                }
            }
            Pulse::Triangular { amplitude, width } => {
                if t.abs() <= width / 2.0 {
                    amplitude * (1.0 - 2.0 * t.abs() / width)
                } else {
                    0.0
                }
            }
        }
    }
}

/// A pulse sampled in time together with its spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseAnalysis {
    pub pulse: Pulse,
    pub signal: SampledSignal,
    pub spectrum: Spectrum,
}

/// The default pulse time axis, 2000 samples over `[-5, 5]`.
pub fn time_axis() -> Vec<f64> {
    linspace(WINDOW_START, WINDOW_END, WINDOW_SAMPLES)
}

/// Peak-normalized two-sided spectrum of a pulse sampled every `dt` seconds.
///
/// # Errors
///
/// [`TransformError::InvalidParameter`] unless `dt` is finite and positive,
/// plus the errors of [`SpectralTransform::forward`].
pub fn spectrum(signal: &[f64], dt: f64) -> Result<Spectrum> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(TransformError::invalid("dt", format!("{dt} is not a positive step")));
    }
    let phasors = SpectralTransform::with_policy(SanitizePolicy::Reject).forward(signal)?;
    Ok(Spectrum::shifted(&phasors, dt))
}

/// Samples `pulse` on `time` and computes its spectrum.
pub fn analyze(pulse: Pulse, time: Vec<f64>) -> Result<PulseAnalysis> {
    let signal = SampledSignal::sample(&pulse, time)?;
    let dt = signal.time_step().ok_or(TransformError::EmptyInput)?;
    let spectrum = spectrum(&signal.values, dt)?;
    Ok(PulseAnalysis {
        pulse,
        signal,
        spectrum,
    })
}
