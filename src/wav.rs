//! Mono 16-bit PCM export of generated signals.

use std::io::Cursor;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::{info, warn};

use crate::error::ExportError;
use crate::spectral::sanitize;

/// Peak-normalizes `signal` and quantizes it to 16-bit PCM.
///
/// Non-finite samples become silence. A silent signal stays silent.
/// Halves round toward positive infinity, so `-0.5` LSB rounds up.
///
/// # Examples
///
/// ```
/// use spectral_lab::wav::normalize_pcm16;
///
/// assert_eq!(normalize_pcm16(&[0.5, -1.0, 0.0]), vec![16384, -32767, 0]);
/// ```
pub fn normalize_pcm16(signal: &[f64]) -> Vec<i16> {
    let mut samples = signal.to_vec();
    let replaced = sanitize(&mut samples);
    if replaced > 0 {
        warn!(replaced, "replaced invalid samples with silence before export");
    }

    let peak = samples.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    let scale = if peak > 0.0 { peak } else { 1.0 };
    let full_scale = i16::MAX as f64;
    samples
        .iter()
        .map(|v| (v / scale * full_scale + 0.5).floor().clamp(-full_scale, full_scale) as i16)
        .collect()
}

fn wav_spec(sample_rate: f64) -> Result<WavSpec, ExportError> {
    if !sample_rate.is_finite() || sample_rate < 1.0 || sample_rate > u32::MAX as f64 {
        return Err(ExportError::SampleRate(sample_rate));
    }
    Ok(WavSpec {
        channels: 1,
        sample_rate: sample_rate.round() as u32,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    })
}

fn checked_samples(signal: &[f64]) -> Result<Vec<i16>, ExportError> {
    if signal.is_empty() {
        return Err(ExportError::EmptySignal);
    }
    Ok(normalize_pcm16(signal))
}

/// Encodes `signal` as an in-memory WAV file.
pub fn encode_wav(signal: &[f64], sample_rate: f64) -> Result<Vec<u8>, ExportError> {
    let spec = wav_spec(sample_rate)?;
    let samples = checked_samples(signal)?;

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for sample in samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}

/// Writes `signal` to a WAV file at `path`.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    signal: &[f64],
    sample_rate: f64,
) -> Result<(), ExportError> {
    let spec = wav_spec(sample_rate)?;
    let samples = checked_samples(signal)?;

    let mut writer = WavWriter::create(path.as_ref(), spec)?;
    for sample in &samples {
        writer.write_sample(*sample)?;
    }
    writer.finalize()?;
    info!(path = %path.as_ref().display(), samples = samples.len(), "wrote WAV file");
    Ok(())
}
