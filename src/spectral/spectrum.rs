//! Amplitude spectra derived from phasor sequences.

use super::transform::Phasor;

/// Frequency axis paired with amplitudes of the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    /// Frequency of each bin (Hz)
    pub frequencies: Vec<f64>,
    /// Amplitude of each bin
    pub amplitudes: Vec<f64>,
}

/// Strongest bin of a spectrum together with the phase of its phasor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantComponent {
    /// Bin index in the spectrum
    pub index: usize,
    /// Frequency of the bin (Hz)
    pub frequency: f64,
    /// Amplitude of the bin
    pub amplitude: f64,
    /// `atan2(im, re)` of the phasor at that bin (radians)
    pub phase: f64,
}

/// `(2/N)|X|`. The factor 2 folds the negative half of the spectrum and is
/// applied to DC and Nyquist as well.
fn amplitude(c: &Phasor, n: usize) -> f64 {
    (2.0 / n as f64) * (c.re * c.re + c.im * c.im).sqrt()
}

fn one_sided_bins(phasors: &[Phasor], sample_rate: f64, bins: usize) -> Spectrum {
    let n = phasors.len();
    let step = sample_rate / n as f64;
    let bins = bins.min(n);
    Spectrum {
        frequencies: (0..bins).map(|k| k as f64 * step).collect(),
        amplitudes: phasors[..bins].iter().map(|c| amplitude(c, n)).collect(),
    }
}

impl Spectrum {
    /// One-sided spectrum over bins `k ∈ [0, N/2)`, `f_k = k·fs/N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spectral_lab::{Spectrum, SpectralTransform};
    ///
    /// let signal: Vec<f64> = (0..64)
    ///     .map(|i| (2.0 * std::f64::consts::PI * 8.0 * i as f64 / 64.0).cos())
    ///     .collect();
    /// let phasors = SpectralTransform::new().forward(&signal).unwrap();
    /// let spectrum = Spectrum::one_sided(&phasors, 64.0);
    /// let (index, amplitude) = spectrum.peak().unwrap();
    /// assert_eq!(spectrum.frequencies[index], 8.0);
    /// assert!((amplitude - 1.0).abs() < 1e-9);
    /// ```
    pub fn one_sided(phasors: &[Phasor], sample_rate: f64) -> Self {
        one_sided_bins(phasors, sample_rate, phasors.len() / 2)
    }

    /// One-sided spectrum that also reports the Nyquist bin, `k ∈ [0, N/2]`.
    pub fn one_sided_with_nyquist(phasors: &[Phasor], sample_rate: f64) -> Self {
        one_sided_bins(phasors, sample_rate, phasors.len() / 2 + 1)
    }

    /// Two-sided spectrum in fftshift order, normalized to a peak of 1.0.
    ///
    /// Frequencies run from `-fs/2` upwards in steps of `fs/N` where
    /// `fs = 1/dt`. Amplitudes are reordered the same way so every amplitude
    /// stays at its own frequency. A spectrum with no energy is all zeros.
    pub fn shifted(phasors: &[Phasor], dt: f64) -> Self {
        let n = phasors.len();
        if n == 0 {
            return Self::default();
        }

        let step = (1.0 / dt) / n as f64;
        let half = n / 2;
        let frequencies = (0..n).map(|k| (k as f64 - half as f64) * step).collect();

        let mut amplitudes: Vec<f64> = phasors.iter().map(|c| amplitude(c, n)).collect();
        amplitudes.rotate_right(half);

        let max = amplitudes.iter().copied().fold(0.0, f64::max);
        for a in &mut amplitudes {
            *a = if max > 0.0 { *a / max } else { 0.0 };
        }

        Self {
            frequencies,
            amplitudes,
        }
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// True when the spectrum has no bins.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Index and amplitude of the strongest bin. Ties go to the lowest index.
    pub fn peak(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &a) in self.amplitudes.iter().enumerate() {
            match best {
                Some((_, max)) if a <= max => {}
                _ => best = Some((i, a)),
            }
        }
        best
    }

    /// Strongest bin together with the phase of the phasor it came from.
    ///
    /// `phasors` must be the sequence this spectrum was computed from.
    pub fn dominant(&self, phasors: &[Phasor]) -> Option<DominantComponent> {
        let (index, amplitude) = self.peak()?;
        let phasor = phasors.get(index)?;
        let frequency = *self.frequencies.get(index)?;
        Some(DominantComponent {
            index,
            frequency,
            amplitude,
            phase: phasor.im.atan2(phasor.re),
        })
    }

    /// `[frequency, amplitude]` pairs for plotting.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.frequencies
            .iter()
            .zip(self.amplitudes.iter())
            .map(|(&f, &a)| [f, a])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::SpectralTransform;
    use std::f64::consts::PI;

    fn cosine(n: usize, fs: f64, freq: f64, amplitude: f64) -> Vec<f64> {
        (0..n)
            .map(|i| amplitude * (2.0 * PI * freq * i as f64 / fs).cos())
            .collect()
    }

    #[test]
    fn test_one_sided_length_and_axis() {
        let phasors = SpectralTransform::new().forward(&vec![0.0; 16]).unwrap();
        let spectrum = Spectrum::one_sided(&phasors, 1000.0);
        assert_eq!(spectrum.len(), 8);
        assert_eq!(spectrum.frequencies.len(), spectrum.amplitudes.len());
        assert_eq!(spectrum.frequencies[0], 0.0);
        assert!((spectrum.frequencies[1] - 62.5).abs() < 1e-12);
    }

    #[test]
    fn test_with_nyquist_adds_one_bin() {
        let phasors = SpectralTransform::new().forward(&vec![1.0; 16]).unwrap();
        let spectrum = Spectrum::one_sided_with_nyquist(&phasors, 16.0);
        assert_eq!(spectrum.len(), 9);
        assert_eq!(spectrum.frequencies[8], 8.0);
    }

    #[test]
    fn test_cosine_peak_amplitude() {
        let fs = 1024.0;
        let signal = cosine(1024, fs, 50.0, 3.0);
        let phasors = SpectralTransform::new().forward(&signal).unwrap();
        let spectrum = Spectrum::one_sided(&phasors, fs);
        let (index, amplitude) = spectrum.peak().unwrap();
        assert_eq!(spectrum.frequencies[index], 50.0);
        assert!((amplitude - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_dc_keeps_factor_two() {
        let phasors = SpectralTransform::new().forward(&[1.0; 8]).unwrap();
        let spectrum = Spectrum::one_sided(&phasors, 8.0);
        assert!((spectrum.amplitudes[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_shifted_axis_and_normalization() {
        let signal = cosine(64, 64.0, 4.0, 5.0);
        let phasors = SpectralTransform::new().forward(&signal).unwrap();
        let spectrum = Spectrum::shifted(&phasors, 1.0 / 64.0);

        assert_eq!(spectrum.len(), 64);
        assert_eq!(spectrum.frequencies[0], -32.0);
        assert_eq!(spectrum.frequencies[32], 0.0);
        assert_eq!(spectrum.frequencies[63], 31.0);

        let max = spectrum.amplitudes.iter().copied().fold(0.0, f64::max);
        assert!((max - 1.0).abs() < 1e-12);
        // Energy sits at +4 Hz and -4 Hz
        assert!((spectrum.amplitudes[36] - 1.0).abs() < 1e-9);
        assert!((spectrum.amplitudes[28] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_shifted_silence_is_zero() {
        let phasors = SpectralTransform::new().forward(&[0.0; 8]).unwrap();
        let spectrum = Spectrum::shifted(&phasors, 0.1);
        assert!(spectrum.amplitudes.iter().all(|&a| a == 0.0));
    }

    #[test]
    fn test_shifted_empty() {
        assert!(Spectrum::shifted(&[], 0.1).is_empty());
    }

    #[test]
    fn test_dominant_phase() {
        let n = 128;
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 10.0 * i as f64 / n as f64 + PI / 4.0).cos())
            .collect();
        let phasors = SpectralTransform::new().forward(&signal).unwrap();
        let spectrum = Spectrum::one_sided(&phasors, n as f64);
        let dominant = spectrum.dominant(&phasors).unwrap();
        assert_eq!(dominant.index, 10);
        assert!((dominant.frequency - 10.0).abs() < 1e-12);
        assert!((dominant.phase - PI / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_dominant_short_axis() {
        let spectrum = Spectrum {
            frequencies: vec![0.0],
            amplitudes: vec![1.0, 5.0],
        };
        let phasors = [Phasor::new(1.0, 0.0), Phasor::new(0.0, 5.0)];
        assert_eq!(spectrum.dominant(&phasors), None);
    }

    #[test]
    fn test_peak_first_of_ties() {
        let spectrum = Spectrum {
            frequencies: vec![0.0, 1.0, 2.0],
            amplitudes: vec![1.0, 3.0, 3.0],
        };
        assert_eq!(spectrum.peak(), Some((1, 3.0)));
        assert_eq!(Spectrum::default().peak(), None);
    }

    #[test]
    fn test_plot_points() {
        let spectrum = Spectrum {
            frequencies: vec![0.0, 1.0],
            amplitudes: vec![0.5, 0.25],
        };
        assert_eq!(spectrum.plot_points(), vec![[0.0, 0.5], [1.0, 0.25]]);
    }
}
