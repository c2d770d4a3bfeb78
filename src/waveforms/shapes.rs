//! Triangle and square waves over whole periods.

use tracing::warn;

use crate::error::{Result, TransformError};
use crate::signal::{SampledSignal, Waveform};
use crate::spectral::sanitize;

/// Offset added to the cycle position so instants that land on a segment
/// boundary, up to rounding error, start the next segment.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Longest time axis a waveform may request.
pub const MAX_SAMPLES: usize = 1 << 26;

/// Duration, sample rate and frequency of a periodic waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Requested duration (seconds); only whole periods are generated
    pub limit: f64,
    /// Sample rate (Hz)
    pub sample_rate: f64,
    /// Waveform frequency (Hz)
    pub frequency: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            limit: 2.0,
            sample_rate: 1000.0,
            frequency: 20.0,
        }
    }
}

impl WaveParams {
    /// Sets the duration.
    pub fn limit(mut self, limit: f64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the sample rate.
    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the frequency.
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sampling step `1/fs` (seconds).
    pub fn time_step(&self) -> f64 {
        1.0 / self.sample_rate
    }
}

/// Waveform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveShape {
    Triangle,
    Square,
}

impl WaveShape {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            WaveShape::Triangle => "Triangle",
            WaveShape::Square => "Square",
        }
    }
}

/// Triangle wave `0 → 2 → 0 → -2 → 0` over each period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleWave {
    pub frequency: f64,
}

/// Square wave, `+1` for the first half period and `-1` for the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareWave {
    pub frequency: f64,
}

/// Position within the current period, in `[0, 1)`.
fn cycle_position(t: f64, frequency: f64) -> f64 {
    (t * frequency + BOUNDARY_TOLERANCE).rem_euclid(1.0)
}

impl Waveform for TriangleWave {
    fn value_at(&self, t: f64) -> f64 {
        let p = cycle_position(t, self.frequency);
        if p < 0.25 {
            8.0 * p
        } else if p < 0.5 {
            2.0 - 8.0 * (p - 0.25)
        } else if p < 0.75 {
            -8.0 * (p - 0.5)
        } else {
            -2.0 + 8.0 * (p - 0.75)
        }
    }
}

impl Waveform for SquareWave {
    fn value_at(&self, t: f64) -> f64 {
        if cycle_position(t, self.frequency) < 0.5 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Time axis holding a whole number of periods.
///
/// `round(fs/frequency)` samples per period times `floor(limit·frequency)`
/// periods, sampled every `1/fs` seconds from 0, so the waveform never ends
/// on a partial period.
///
/// # Errors
///
/// [`TransformError::InvalidParameter`] unless the sample rate and frequency
/// are finite and positive, the limit is finite and non-negative, and the
/// axis holds at most [`MAX_SAMPLES`] samples.
///
/// # Examples
///
/// ```
/// use spectral_lab::waveforms::periodic_time_axis;
///
/// let t = periodic_time_axis(2.0, 1000.0, 20.0).unwrap();
/// assert_eq!(t.len(), 2000);
/// assert_eq!(t[1], 0.001);
/// ```
pub fn periodic_time_axis(limit: f64, sample_rate: f64, frequency: f64) -> Result<Vec<f64>> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(TransformError::invalid("sample_rate", "must be finite and positive"));
    }
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(TransformError::invalid("frequency", "must be finite and positive"));
    }
    if !limit.is_finite() || limit < 0.0 {
        return Err(TransformError::invalid("limit", "must be finite and non-negative"));
    }

    let samples_per_period = (sample_rate / frequency).round();
    let periods = (limit * frequency).floor();
    let too_long = || {
        TransformError::invalid("limit", format!("time axis exceeds {MAX_SAMPLES} samples"))
    };
    if samples_per_period > MAX_SAMPLES as f64 || periods > MAX_SAMPLES as f64 {
        return Err(too_long());
    }
    let total = (samples_per_period as usize)
        .checked_mul(periods as usize)
        .filter(|&total| total <= MAX_SAMPLES)
        .ok_or_else(too_long)?;
    Ok((0..total).map(|i| i as f64 / sample_rate).collect())
}

/// Samples `waveform` on `time`, replacing non-finite samples with zero.
fn sample_sanitized<W: Waveform>(waveform: &W, time: &[f64], name: &str) -> Vec<f64> {
    let mut values = waveform.generate(time);
    let replaced = sanitize(&mut values);
    if replaced > 0 {
        warn!(replaced, wave = name, "replaced invalid waveform samples with zero");
    }
    values
}

/// Triangle wave of `frequency` on `time`, range `[-2, 2]`.
pub fn triangle_wave(time: &[f64], frequency: f64) -> Vec<f64> {
    sample_sanitized(&TriangleWave { frequency }, time, "triangle")
}

/// Square wave of `frequency` on `time`.
pub fn square_wave(time: &[f64], frequency: f64) -> Vec<f64> {
    sample_sanitized(&SquareWave { frequency }, time, "square")
}

/// Generates `shape` over the whole-period time axis of `params`.
pub fn synthesize(shape: WaveShape, params: &WaveParams) -> Result<SampledSignal> {
    let time = periodic_time_axis(params.limit, params.sample_rate, params.frequency)?;
    let values = match shape {
        WaveShape::Triangle => triangle_wave(&time, params.frequency),
        WaveShape::Square => square_wave(&time, params.frequency),
    };
    SampledSignal::new(time, values)
}
