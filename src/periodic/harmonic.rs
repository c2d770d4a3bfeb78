//! Harmonic signals with fixed or interpolated parameters.

use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::error::{Result, TransformError};
use crate::signal::{SampledSignal, Waveform};
use crate::spectral::{DominantComponent, SanitizePolicy, SpectralTransform, Spectrum};

/// Samples on the fixed time axis.
pub const SAMPLE_COUNT: usize = 1000;
/// Step of the fixed time axis (seconds).
pub const TIME_STEP: f64 = 0.002;

const TABLE_STEP: f64 = 0.1;
const FREQUENCY_TABLE_LEN: usize = 32;
const AMPLITUDE_TABLE_LEN: usize = 21;

/// Parameters of `A·cos(2πft + φ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicParams {
    /// Amplitude `A`
    pub amplitude: f64,
    /// Frequency `f` (Hz)
    pub frequency: f64,
    /// Initial phase `φ` (radians)
    pub phase: f64,
}

impl Default for HarmonicParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 2.0,
            phase: 0.0,
        }
    }
}

impl HarmonicParams {
    /// Sets the amplitude.
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets the frequency.
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the initial phase.
    pub fn phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }
}

impl Waveform for HarmonicParams {
    fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency * t + self.phase).cos()
    }
}

/// Spectrum of the combined signal with its strongest component.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedSpectrum {
    /// One-sided amplitude spectrum of the padded combined signal
    pub spectrum: Spectrum,
    /// Strongest bin and its phase
    pub dominant: DominantComponent,
}

/// The fixed axis `t ∈ [0, 2)` with step 0.002 s.
pub fn time_axis() -> Vec<f64> {
    (0..SAMPLE_COUNT).map(|i| i as f64 * TIME_STEP).collect()
}

fn table(len: usize) -> Vec<f64> {
    (0..len).map(|k| k as f64 * TABLE_STEP).collect()
}

/// Linear interpolation into `table` at the fractional position of sample
/// `i` within a sequence of `len` samples.
fn interpolate(table: &[f64], i: usize, len: usize) -> f64 {
    let last = table.len() - 1;
    let position = (i as f64 / len as f64) * last as f64;
    let lower = (position.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let fraction = position - lower as f64;
    table[lower] + fraction * (table[upper] - table[lower])
}

/// `A·cos(2πft + φ)` on the fixed time axis.
///
/// # Examples
///
/// ```
/// use spectral_lab::periodic::{harmonic, HarmonicParams};
///
/// let signal = harmonic(&HarmonicParams::default()).unwrap();
/// assert_eq!(signal.len(), 1000);
/// assert!((signal.values[0] - 1.0).abs() < 1e-12);
/// ```
pub fn harmonic(params: &HarmonicParams) -> Result<SampledSignal> {
    SampledSignal::sample(params, time_axis()).inspect_err(|e| {
        warn!(error = %e, "harmonic signal generation failed");
    })
}

/// Cosine whose frequency sweeps the table `0.0, 0.1, …, 3.1` Hz.
///
/// Each sample uses the interpolated instantaneous frequency directly,
/// `cos(2π f(i) t_i)`, rather than an accumulated phase.
pub fn varying_frequency() -> Result<SampledSignal> {
    let time = time_axis();
    let frequencies = table(FREQUENCY_TABLE_LEN);
    let len = time.len();
    let values = time
        .iter()
        .enumerate()
        .map(|(i, &t)| (2.0 * PI * interpolate(&frequencies, i, len) * t).cos())
        .collect();
    SampledSignal::new(time, values)
}

/// 2 Hz cosine whose amplitude ramps through the table `0.0, 0.1, …, 2.0`.
pub fn varying_amplitude() -> Result<SampledSignal> {
    let time = time_axis();
    let amplitudes = table(AMPLITUDE_TABLE_LEN);
    let carrier = HarmonicParams::default();
    let len = time.len();
    let values = time
        .iter()
        .enumerate()
        .map(|(i, &t)| interpolate(&amplitudes, i, len) * carrier.value_at(t))
        .collect();
    SampledSignal::new(time, values)
}

/// Elementwise sum of signals that share a time axis.
///
/// The time axis of the first signal is kept.
///
/// # Errors
///
/// [`TransformError::EmptyInput`] with no signals and
/// [`TransformError::LengthMismatch`] when any length differs from the first.
pub fn superpose(signals: &[SampledSignal]) -> Result<SampledSignal> {
    let (first, rest) = signals.split_first().ok_or(TransformError::EmptyInput)?;
    let mut values = first.values.clone();
    for signal in rest {
        if signal.len() != values.len() {
            warn!(
                expected = values.len(),
                found = signal.len(),
                "cannot superpose signals of different lengths"
            );
            return Err(TransformError::LengthMismatch {
                expected: values.len(),
                found: signal.len(),
            });
        }
        for (acc, v) in values.iter_mut().zip(signal.values.iter()) {
            *acc += v;
        }
    }
    SampledSignal::new(first.time.clone(), values)
}

/// Sum of the harmonic, varying-frequency and varying-amplitude signals.
pub fn combined() -> Result<SampledSignal> {
    superpose(&[
        harmonic(&HarmonicParams::default())?,
        varying_frequency()?,
        varying_amplitude()?,
    ])
}

/// One-sided spectrum of the combined signal, `f_k = k / (N·dt)`.
///
/// The signal is zero padded to 1024 samples before the transform.
pub fn combined_spectrum() -> Result<CombinedSpectrum> {
    let signal = combined()?;
    let mut transform = SpectralTransform::with_policy(SanitizePolicy::Reject);
    let phasors = transform.forward(&signal.values)?;
    let spectrum = Spectrum::one_sided(&phasors, 1.0 / TIME_STEP);
    let dominant = spectrum
        .dominant(&phasors)
        .ok_or(TransformError::EmptyInput)?;

    debug!(
        frequency = dominant.frequency,
        amplitude = dominant.amplitude,
        phase = dominant.phase,
        bins = spectrum.len(),
        "combined signal spectrum"
    );

    Ok(CombinedSpectrum { spectrum, dominant })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_axis() {
        let t = time_axis();
        assert_eq!(t.len(), 1000);
        assert_eq!(t[0], 0.0);
        assert!((t[999] - 1.998).abs() < 1e-12);
    }

    #[test]
    fn test_harmonic_known_values() {
        let params = HarmonicParams::default();
        assert!((params.value_at(0.0) - 1.0).abs() < 1e-12);
        assert!((params.value_at(0.25) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_harmonic_on_axis() {
        let signal = harmonic(&HarmonicParams::default()).unwrap();
        // t = 0.25 is sample 125
        assert!((signal.values[125] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_harmonic_builder() {
        let params = HarmonicParams::default()
            .amplitude(3.0)
            .frequency(5.0)
            .phase(PI);
        assert_eq!(params.amplitude, 3.0);
        assert!((params.value_at(0.0) + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_harmonic_nan_fails() {
        let params = HarmonicParams::default().amplitude(f64::NAN);
        assert!(matches!(
            harmonic(&params),
            Err(TransformError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_interpolate_endpoints() {
        let table = [0.0, 1.0, 2.0];
        assert_eq!(interpolate(&table, 0, 10), 0.0);
        // position = 5/10 * 2 = 1.0
        assert!((interpolate(&table, 5, 10) - 1.0).abs() < 1e-12);
        // position = 9/10 * 2 = 1.8
        assert!((interpolate(&table, 9, 10) - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_tables() {
        let frequencies = table(FREQUENCY_TABLE_LEN);
        assert_eq!(frequencies.len(), 32);
        assert!(*frequencies.last().unwrap() <= PI);
        let amplitudes = table(AMPLITUDE_TABLE_LEN);
        assert_eq!(amplitudes.len(), 21);
        assert!((amplitudes[20] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_varying_frequency_starts_flat() {
        let signal = varying_frequency().unwrap();
        assert_eq!(signal.len(), SAMPLE_COUNT);
        // Frequency starts at 0 Hz, so the first sample is cos(0)
        assert_eq!(signal.values[0], 1.0);
        assert!(signal.values.iter().all(|v| v.abs() <= 1.0));
    }

    #[test]
    fn test_varying_amplitude_envelope() {
        let signal = varying_amplitude().unwrap();
        assert_eq!(signal.values[0], 0.0);
        // Sample 500 is halfway through the table: amplitude 1.0, t = 1.0
        assert!((signal.values[500] - 1.0).abs() < 1e-9);
        assert!(signal.values.iter().all(|v| v.abs() <= 2.0));
    }

    #[test]
    fn test_combined_is_sum() {
        let sum = combined().unwrap();
        let a = harmonic(&HarmonicParams::default()).unwrap();
        let b = varying_frequency().unwrap();
        let c = varying_amplitude().unwrap();
        for i in [0, 137, 999] {
            let expected = a.values[i] + b.values[i] + c.values[i];
            assert!((sum.values[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_superpose_mismatch_fails() {
        let a = SampledSignal::new(vec![0.0, 1.0], vec![1.0, 2.0]).unwrap();
        let b = SampledSignal::new(vec![0.0], vec![1.0]).unwrap();
        assert_eq!(
            superpose(&[a, b]),
            Err(TransformError::LengthMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(superpose(&[]), Err(TransformError::EmptyInput));
    }

    #[test]
    fn test_combined_spectrum() {
        let result = combined_spectrum().unwrap();
        assert_eq!(result.spectrum.len(), 512);
        // Bins are 500/1024 Hz apart
        assert!((result.spectrum.frequencies[1] - 500.0 / 1024.0).abs() < 1e-12);
        // The two 2 Hz components dominate
        assert!((result.dominant.frequency - 2.0).abs() < 0.5);
        assert!(result.dominant.phase.is_finite());
    }
}
