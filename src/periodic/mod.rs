//! Periodic signal generators.
//!
//! Four signals on a fixed 1000-sample axis `t ∈ [0, 2)`:
//! - a plain harmonic `A·cos(2πft + φ)`
//! - a cosine with an interpolated frequency sweep
//! - a cosine with an interpolated amplitude ramp
//! - the sum of the three, with its spectrum
//!
//! plus a 3D embedding of the set for display.

mod harmonic;
mod rotation;

pub use harmonic::{
    CombinedSpectrum, HarmonicParams, SAMPLE_COUNT, TIME_STEP, combined, combined_spectrum,
    harmonic, superpose, time_axis, varying_amplitude, varying_frequency,
};
pub use rotation::{
    Axis, Curve3, RotatedSignals, SECOND_TILT_DEGREES, THIRD_TILT_DEGREES,
    rotate_for_visualization, rotation_matrix,
};
