//! Periodic waveform generators.
//!
//! Triangle and square waves over a time axis that holds only whole periods,
//! and the forward/inverse spectral round trip used to compare a waveform
//! with its reconstruction.

mod round_trip;
mod shapes;

pub use round_trip::{RoundTrip, round_trip};
pub use shapes::{
    MAX_SAMPLES, SquareWave, TriangleWave, WaveParams, WaveShape, periodic_time_axis, square_wave,
    synthesize, triangle_wave,
};
