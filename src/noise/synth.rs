//! Colored noise by frequency-domain shaping of white noise.

use rand::Rng;
use tracing::{debug, warn};

use crate::spectral::{Phasor, SanitizePolicy, SpectralTransform, sanitize};

/// Spectral color of a noise signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseColor {
    /// Flat spectrum
    White,
    /// Amplitude ∝ `1/√f`, equal power per octave
    Pink,
    /// Amplitude ∝ `1/f` (Brownian)
    Red,
}

impl NoiseColor {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            NoiseColor::White => "White",
            NoiseColor::Pink => "Pink",
            NoiseColor::Red => "Red",
        }
    }

    /// Every color, in display order.
    pub fn all() -> &'static [NoiseColor] {
        &[NoiseColor::White, NoiseColor::Pink, NoiseColor::Red]
    }

    /// Shape of the amplitude envelope at normalized frequency `f`
    /// (cycles per sample). Colored noise has no DC component.
    pub fn envelope(&self, f: f64) -> f64 {
        match self {
            NoiseColor::White => 1.0,
            NoiseColor::Pink if f == 0.0 => 0.0,
            NoiseColor::Pink => 1.0 / f.sqrt(),
            NoiseColor::Red if f == 0.0 => 0.0,
            NoiseColor::Red => 1.0 / f,
        }
    }
}

/// One noise signal of each color, generated independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoisePalette {
    pub white: Vec<f64>,
    pub pink: Vec<f64>,
    pub red: Vec<f64>,
}

impl NoisePalette {
    /// Samples of the given color.
    pub fn get(&self, color: NoiseColor) -> &[f64] {
        match color {
            NoiseColor::White => &self.white,
            NoiseColor::Pink => &self.pink,
            NoiseColor::Red => &self.red,
        }
    }
}

/// Builds the full-length real envelope of a real-signal spectrum.
///
/// `one_sided` holds bins `0..=n/2`. Bin `k` is copied to `n - k` for
/// `0 < k < n/2`; DC and, for even `n`, Nyquist appear exactly once.
pub fn hermitian_envelope(one_sided: &[f64], n: usize) -> Vec<f64> {
    let mut full = vec![0.0; n];
    for (k, &value) in one_sided.iter().enumerate().take(n) {
        full[k] = value;
        if k > 0 && 2 * k < n {
            full[n - k] = value;
        }
    }
    full
}

/// Generates white, pink and red noise with an injected random source.
///
/// Every call draws fresh uniform samples in `[-1, 1]`, transforms them,
/// scales each phasor by an RMS-normalized envelope and transforms back.
/// Scaling real and imaginary parts alike keeps the phase, so only the
/// magnitude spectrum is colored.
///
/// Generation never fails: NaN or infinite values met along the way are
/// replaced with zero and logged.
pub struct NoiseSynthesizer<R: Rng = rand::rngs::ThreadRng> {
    rng: R,
}

impl NoiseSynthesizer<rand::rngs::ThreadRng> {
    /// Creates a synthesizer backed by the thread-local RNG.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for NoiseSynthesizer<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> NoiseSynthesizer<R> {
    /// Creates a synthesizer with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use spectral_lab::{NoiseColor, NoiseSynthesizer};
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut synth = NoiseSynthesizer::with_rng(rng);
    /// let pink = synth.generate(NoiseColor::Pink, 4096);
    /// assert_eq!(pink.len(), 4096);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// `n` independent uniform samples in `[-1, 1]`.
    pub fn white_samples(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.rng.gen_range(-1.0..=1.0)).collect()
    }

    /// Noise of length `n` whose amplitude spectrum follows `shape`.
    ///
    /// `shape` is evaluated at `f_k = k/N` for `k ∈ [0, N/2]`, where `N` is
    /// `n` rounded up to a power of two. The noise is synthesized at length
    /// `N` and the first `n` samples are returned.
    pub fn shaped<F>(&mut self, n: usize, shape: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        if n == 0 {
            return Vec::new();
        }

        let mut white = self.white_samples(n);
        let replaced = sanitize(&mut white);
        if replaced > 0 {
            warn!(replaced, "replaced invalid white noise samples with zero");
        }

        let mut transform = SpectralTransform::with_policy(SanitizePolicy::ReplaceWithZero);
        let phasors = match transform.forward(&white) {
            Ok(phasors) => phasors,
            Err(e) => {
                warn!(error = %e, "noise FFT failed, returning silence");
                return vec![0.0; n];
            }
        };
        let len = phasors.len();

        let mut one_sided: Vec<f64> = (0..=len / 2).map(|k| shape(k as f64 / len as f64)).collect();
        let replaced = sanitize(&mut one_sided);
        if replaced > 0 {
            warn!(replaced, "replaced invalid PSD values with zero");
        }

        let envelope = hermitian_envelope(&one_sided, len);
        let mean_square = envelope.iter().map(|s| s * s).sum::<f64>() / len as f64;
        let norm = if mean_square != 0.0 {
            mean_square.sqrt()
        } else {
            1.0
        };
        debug!(len, norm, "shaping noise spectrum");

        let shaped: Vec<Phasor> = phasors
            .iter()
            .zip(envelope.iter())
            .map(|(&c, &s)| {
                let gain = s / norm;
                let gain = if gain.is_finite() { gain } else { 0.0 };
                c * gain
            })
            .collect();

        let mut samples = match transform.inverse_real(&shaped) {
            Ok(samples) => samples,
            Err(e) => {
                warn!(error = %e, "noise inverse FFT failed, returning silence");
                return vec![0.0; n];
            }
        };
        samples.truncate(n);
        samples
    }

    /// Noise of the given color.
    pub fn generate(&mut self, color: NoiseColor, n: usize) -> Vec<f64> {
        self.shaped(n, |f| color.envelope(f))
    }

    /// White noise (flat envelope).
    pub fn white(&mut self, n: usize) -> Vec<f64> {
        self.generate(NoiseColor::White, n)
    }

    /// Pink noise (`1/√f` envelope).
    pub fn pink(&mut self, n: usize) -> Vec<f64> {
        self.generate(NoiseColor::Pink, n)
    }

    /// Red noise (`1/f` envelope).
    pub fn red(&mut self, n: usize) -> Vec<f64> {
        self.generate(NoiseColor::Red, n)
    }

    /// One signal of each color, each drawn from fresh white noise.
    pub fn palette(&mut self, n: usize) -> NoisePalette {
        NoisePalette {
            white: self.white(n),
            pink: self.pink(n),
            red: self.red(n),
        }
    }
}
