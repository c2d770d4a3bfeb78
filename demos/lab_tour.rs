//! Walks through every lab and writes the audible signals to WAV files.
//!
//! Run with: cargo run --example lab_tour --features wav-export
//! Set RUST_LOG=debug to see the spectral details.

use anyhow::Context;
use spectral_lab::noise::{self, NoiseAnalysis};
use spectral_lab::periodic;
use spectral_lab::pulses::{self, Pulse};
use spectral_lab::waveforms::{self, WaveShape};
use spectral_lab::wav::write_wav;
use spectral_lab::{NoiseParams, NoiseSynthesizer, PulseParams, WaveParams};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,spectral_lab=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let out_dir = std::env::temp_dir().join("spectral-lab");
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    // Periodic signals
    let combined = periodic::combined_spectrum()?;
    info!(
        frequency = combined.dominant.frequency,
        amplitude = combined.dominant.amplitude,
        "combined signal dominant component"
    );
    let rotated = periodic::rotate_for_visualization()?;
    info!(points = rotated.combined.len(), "rotated signals ready");

    // Pulses
    let time = pulses::time_axis();
    for pulse in Pulse::all(&PulseParams::default()) {
        let analysis = pulses::analyze(pulse, time.clone())?;
        let spectrum = &analysis.spectrum;
        let step = match spectrum.frequencies.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        };
        let strong = spectrum.amplitudes.iter().filter(|&&a| a >= 0.5).count();
        info!(
            pulse = pulse.name(),
            bandwidth = strong as f64 * step,
            "pulse half-amplitude bandwidth"
        );
    }

    // Waveforms
    let params = WaveParams::default();
    for shape in [WaveShape::Triangle, WaveShape::Square] {
        let signal = waveforms::synthesize(shape, &params)?;
        let result = waveforms::round_trip(&signal.values, params.time_step(), params.sample_rate)?;
        info!(
            shape = shape.name(),
            mse = result.mean_squared_error(),
            "waveform round trip"
        );
        let path = out_dir.join(format!("{}.wav", shape.name().to_lowercase()));
        write_wav(&path, &signal.values, params.sample_rate)?;
    }

    // Noise
    let noise_params = NoiseParams::default().sample_rate(44_100.0);
    let mut synth = NoiseSynthesizer::new();
    for analysis in noise::analyze_palette(&mut synth, &noise_params) {
        report_noise(&analysis);
        let path = out_dir.join(format!("{}_noise.wav", analysis.color.name().to_lowercase()));
        write_wav(&path, &analysis.samples, noise_params.sample_rate)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    info!(dir = %out_dir.display(), "lab tour finished");
    Ok(())
}

fn report_noise(analysis: &NoiseAnalysis) {
    let rows = analysis.correlation.to_rows();
    let off_diagonal: Vec<f64> = rows
        .iter()
        .enumerate()
        .flat_map(|(i, row)| row.iter().enumerate().filter(move |(j, _)| *j != i).map(|(_, r)| *r))
        .collect();
    let mean_correlation = if off_diagonal.is_empty() {
        0.0
    } else {
        off_diagonal.iter().sum::<f64>() / off_diagonal.len() as f64
    };
    info!(
        color = analysis.color.name(),
        bins = analysis.histogram.len(),
        spectrum_bins = analysis.spectrum.len(),
        mean_correlation,
        "noise statistics"
    );
}
