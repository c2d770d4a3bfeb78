//! End-to-end scenarios for each lab.

use rand::SeedableRng;
use rand::rngs::StdRng;
use spectral_lab::noise::{NoiseAnalysis, correlation_matrix, histogram};
use spectral_lab::periodic::{self, HarmonicParams};
use spectral_lab::pulses::{self, Pulse, PulseParams};
use spectral_lab::waveforms::{self, WaveParams, WaveShape};
use spectral_lab::{
    NoiseColor, NoiseParams, NoiseSynthesizer, SpectralTransform, Spectrum, TransformError,
    pad_to_power_of_two,
};

#[test]
fn test_pad_small_signal() {
    assert_eq!(pad_to_power_of_two(&[1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0, 0.0]);
}

#[test]
fn test_harmonic_known_values() {
    let signal = periodic::harmonic(&HarmonicParams::default()).unwrap();
    assert!((signal.values[0] - 1.0).abs() < 1e-12);
    // t = 0.25 s is sample 125
    assert!((signal.time[125] - 0.25).abs() < 1e-12);
    assert!((signal.values[125] + 1.0).abs() < 1e-9);
}

#[test]
fn test_pure_cosine_peaks_at_its_bin() {
    let n = 1024;
    let fs = 1024.0;
    let signal: Vec<f64> = (0..n)
        .map(|i| 0.7 * (2.0 * std::f64::consts::PI * 50.0 * i as f64 / fs).cos())
        .collect();
    let phasors = SpectralTransform::new().forward(&signal).unwrap();
    let spectrum = Spectrum::one_sided(&phasors, fs);
    let (index, amplitude) = spectrum.peak().unwrap();
    assert_eq!(index, 50);
    assert!((amplitude - 0.7).abs() < 1e-9);
}

#[test]
fn test_combined_spectrum_dominated_by_low_frequencies() {
    let combined = periodic::combined_spectrum().unwrap();
    assert_eq!(combined.spectrum.len(), 512);
    assert!(combined.dominant.frequency > 0.0);
    assert!(combined.dominant.frequency < 5.0);
    assert!(combined.spectrum.amplitudes.iter().all(|a| a.is_finite()));
}

#[test]
fn test_square_wave_half_periods() {
    let signal = waveforms::synthesize(WaveShape::Square, &WaveParams::default()).unwrap();
    assert!(signal.values[..25].iter().all(|&v| v == 1.0));
    assert!(signal.values[25..50].iter().all(|&v| v == -1.0));
}

#[test]
fn test_waveform_round_trip_close_to_original() {
    let params = WaveParams::default();
    let signal = waveforms::synthesize(WaveShape::Triangle, &params).unwrap();
    let result = waveforms::round_trip(&signal.values, params.time_step(), params.sample_rate).unwrap();
    assert_eq!(result.time.len(), result.original.len());
    assert!(result.mean_squared_error() < 0.05);
}

#[test]
fn test_every_pulse_spectrum_normalized() {
    let time = pulses::time_axis();
    for pulse in Pulse::all(&PulseParams::default()) {
        let analysis = pulses::analyze(pulse, time.clone()).unwrap();
        let peak = analysis.spectrum.peak().map(|(_, a)| a);
        assert_eq!(peak, Some(1.0), "{}", pulse.name());
    }
}

#[test]
fn test_empty_inputs_fail_cleanly() {
    assert_eq!(
        SpectralTransform::new().forward(&[]),
        Err(TransformError::EmptyInput)
    );
    assert!(pulses::spectrum(&[], 0.01).is_err());
    assert!(waveforms::round_trip(&[], 0.001, 1000.0).is_err());
}

#[test]
fn test_identical_and_constant_chunks() {
    let chunk: Vec<f64> = (0..100).map(|i| (i as f64 * 0.1).sin()).collect();
    let mut signal = chunk.clone();
    signal.extend(&chunk);
    signal.extend(std::iter::repeat_n(0.5, 100));

    let matrix = correlation_matrix(&signal, 100);
    assert_eq!(matrix.size(), 3);
    assert!((matrix.get(0, 1).unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(matrix.row(2), Some(&[0.0, 0.0, 0.0][..]));
}

#[test]
fn test_noise_lab_default_sizes() {
    let params = NoiseParams::default();
    let mut synth = NoiseSynthesizer::with_rng(StdRng::seed_from_u64(2024));
    let samples = synth.generate(NoiseColor::Red, params.length);
    let analysis = NoiseAnalysis::of(NoiseColor::Red, samples, &params);

    assert_eq!(analysis.samples.len(), 32768);
    assert!(analysis.samples.iter().all(|v| v.is_finite()));
    assert_eq!(analysis.spectrum.len(), 16385);
    assert_eq!(analysis.histogram.len(), 100);
    assert_eq!(analysis.correlation.size(), 32);

    let mass: f64 = analysis.histogram.densities.iter().sum();
    assert!((mass - 1.0).abs() < 1e-9);
}

#[test]
fn test_histogram_of_nan_signal_is_empty() {
    assert!(histogram(&[f64::NAN; 8], 10).is_empty());
}
