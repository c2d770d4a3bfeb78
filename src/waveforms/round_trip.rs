//! Spectrum and reconstruction of a waveform.

use tracing::debug;

use crate::error::{Result, TransformError};
use crate::spectral::{
    SanitizePolicy, SpectralTransform, Spectrum, pad_to_power_of_two, sanitize,
};

/// Original and reconstructed signal with a spectrum for each.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    /// Time axis of the padded signal, step `dt` from 0
    pub time: Vec<f64>,
    /// Original signal after zero padding
    pub original: Vec<f64>,
    /// One-sided spectrum of the original
    pub spectrum: Spectrum,
    /// Smoothed inverse transform of the original's phasors
    pub reconstructed: Vec<f64>,
    /// One-sided spectrum of the reconstruction
    pub reconstructed_spectrum: Spectrum,
}

impl RoundTrip {
    /// Mean squared difference between original and reconstruction.
    pub fn mean_squared_error(&self) -> f64 {
        if self.original.is_empty() {
            return 0.0;
        }
        self.original
            .iter()
            .zip(self.reconstructed.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / self.original.len() as f64
    }
}

/// Pads, transforms, reconstructs and re-analyzes `signal`.
///
/// The reconstruction comes from the complex phasors, not the amplitude
/// spectrum, and inherits the 5-sample smoothing of the inverse transform, so
/// sharp edges come back rounded. Non-finite samples are replaced with zero.
///
/// # Errors
///
/// [`TransformError::InvalidParameter`] unless `dt` and `sample_rate` are
/// finite and positive, and [`TransformError::EmptyInput`] for an empty
/// signal.
pub fn round_trip(signal: &[f64], dt: f64, sample_rate: f64) -> Result<RoundTrip> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(TransformError::invalid("dt", "must be finite and positive"));
    }
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(TransformError::invalid("sample_rate", "must be finite and positive"));
    }

    let mut transform = SpectralTransform::with_policy(SanitizePolicy::ReplaceWithZero);
    let phasors = transform.forward(signal)?;
    let mut original = pad_to_power_of_two(signal);
    sanitize(&mut original);
    let spectrum = Spectrum::one_sided(&phasors, sample_rate);

    let reconstructed = transform.inverse(&phasors)?;
    let reconstructed_phasors = transform.forward(&reconstructed)?;
    let reconstructed_spectrum = Spectrum::one_sided(&reconstructed_phasors, sample_rate);

    let time = (0..original.len()).map(|i| i as f64 * dt).collect();
    debug!(
        len = signal.len(),
        padded = original.len(),
        "waveform round trip"
    );

    Ok(RoundTrip {
        time,
        original,
        spectrum,
        reconstructed,
        reconstructed_spectrum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveforms::{WaveParams, WaveShape, synthesize};

    #[test]
    fn test_lengths_line_up() {
        let signal = synthesize(WaveShape::Triangle, &WaveParams::default()).unwrap();
        let result = round_trip(&signal.values, 0.001, 1000.0).unwrap();
        assert_eq!(result.original.len(), 2048);
        assert_eq!(result.time.len(), 2048);
        assert_eq!(result.reconstructed.len(), 2048);
        assert_eq!(result.spectrum.len(), 1024);
        assert_eq!(result.reconstructed_spectrum.len(), 1024);
        assert_eq!(&result.original[..2000], signal.values.as_slice());
        assert!(result.original[2000..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_triangle_survives_smoothing() {
        let signal = synthesize(WaveShape::Triangle, &WaveParams::default()).unwrap();
        let result = round_trip(&signal.values, 0.001, 1000.0).unwrap();
        assert!(result.mean_squared_error() < 0.05);
    }

    #[test]
    fn test_square_edges_rounded() {
        let signal = synthesize(WaveShape::Square, &WaveParams::default()).unwrap();
        let result = round_trip(&signal.values, 0.001, 1000.0).unwrap();
        let mse = result.mean_squared_error();
        assert!(mse > 0.0);
        assert!(mse < 0.2);
        // Mid-segment samples are unaffected by a 5-sample window
        assert!((result.reconstructed[12] - 1.0).abs() < 1e-9);
        assert!((result.reconstructed[37] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fundamental_preserved() {
        let signal = synthesize(WaveShape::Square, &WaveParams::default()).unwrap();
        let result = round_trip(&signal.values, 0.001, 1000.0).unwrap();
        let (original_peak, _) = result.spectrum.peak().unwrap();
        let (reconstructed_peak, _) = result.reconstructed_spectrum.peak().unwrap();
        assert_eq!(original_peak, reconstructed_peak);
        assert!((result.spectrum.frequencies[original_peak] - 20.0).abs() < 0.5);
    }

    #[test]
    fn test_nan_replaced() {
        let result = round_trip(&[1.0, f64::NAN, -1.0, 0.5], 0.1, 10.0).unwrap();
        assert_eq!(result.original, vec![1.0, 0.0, -1.0, 0.5]);
        assert!(result.reconstructed.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(round_trip(&[], 0.1, 10.0), Err(TransformError::EmptyInput));
        assert!(round_trip(&[1.0], 0.0, 10.0).is_err());
        assert!(round_trip(&[1.0], 0.1, f64::INFINITY).is_err());
    }
}
