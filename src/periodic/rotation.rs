//! 3D embedding of the periodic signals for display.
//!
//! Each signal becomes a curve `(t, y, z)`; the second and third are tilted
//! about the X axis so the three curves and their vector sum do not overlap
//! when drawn.

use tracing::warn;

use super::harmonic::{HarmonicParams, harmonic, time_axis, varying_amplitude, varying_frequency};
use crate::error::{Result, TransformError};

/// Tilt of the varying-frequency curve (degrees).
pub const SECOND_TILT_DEGREES: f64 = 23.0;
/// Tilt of the varying-amplitude curve (degrees).
pub const THIRD_TILT_DEGREES: f64 = 46.0;

/// Coordinate axis of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Right-handed rotation matrix about `axis` by `angle` radians.
pub fn rotation_matrix(axis: Axis, angle: f64) -> [[f64; 3]; 3] {
    let (sin, cos) = angle.sin_cos();
    match axis {
        Axis::X => [[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]],
        Axis::Y => [[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]],
        Axis::Z => [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]],
    }
}

/// Curve in 3D stored as three coordinate rows of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve3 {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Curve3 {
    /// Builds a curve from its coordinate rows.
    ///
    /// # Errors
    ///
    /// [`TransformError::LengthMismatch`] when the rows differ in length.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self> {
        for row in [&y, &z] {
            if row.len() != x.len() {
                return Err(TransformError::LengthMismatch {
                    expected: x.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { x, y, z })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Applies `matrix` to every point.
    pub fn transformed(&self, matrix: &[[f64; 3]; 3]) -> Self {
        let row = |r: &[f64; 3]| -> Vec<f64> {
            (0..self.len())
                .map(|i| r[0] * self.x[i] + r[1] * self.y[i] + r[2] * self.z[i])
                .collect()
        };
        Self {
            x: row(&matrix[0]),
            y: row(&matrix[1]),
            z: row(&matrix[2]),
        }
    }

    /// Rotates every point about `axis` by `angle` radians.
    pub fn rotated(&self, axis: Axis, angle: f64) -> Self {
        self.transformed(&rotation_matrix(axis, angle))
    }

    /// Pointwise vector sum.
    pub fn sum(&self, other: &Curve3) -> Result<Self> {
        if other.len() != self.len() {
            return Err(TransformError::LengthMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        let add = |a: &[f64], b: &[f64]| -> Vec<f64> { a.iter().zip(b).map(|(p, q)| p + q).collect() };
        Ok(Self {
            x: add(&self.x, &other.x),
            y: add(&self.y, &other.y),
            z: add(&self.z, &other.z),
        })
    }

    /// `[x, y, z]` triples for a 3D plot.
    pub fn points(&self) -> Vec<[f64; 3]> {
        (0..self.len())
            .map(|i| [self.x[i], self.y[i], self.z[i]])
            .collect()
    }

    fn is_finite(&self) -> bool {
        [&self.x, &self.y, &self.z]
            .iter()
            .all(|row| row.iter().all(|v| v.is_finite()))
    }
}

/// The three periodic signals as 3D curves, plus their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedSignals {
    /// Shared time axis
    pub time: Vec<f64>,
    /// Harmonic signal as `(t, 0, s)`
    pub first: Curve3,
    /// Varying-frequency signal `(t, s, 0)` tilted 23° about X
    pub second: Curve3,
    /// Varying-amplitude signal `(t, s, 0)` tilted 46° about X
    pub third: Curve3,
    /// Pointwise sum of the three curves
    pub combined: Curve3,
}

/// Embeds the periodic signals in 3D for the visualization panel.
pub fn rotate_for_visualization() -> Result<RotatedSignals> {
    let time = time_axis();
    let first = harmonic(&HarmonicParams::default())?;
    let second = varying_frequency()?;
    let third = varying_amplitude()?;
    let zeros = vec![0.0; time.len()];

    let first = Curve3::new(time.clone(), zeros.clone(), first.values)?;
    let second = Curve3::new(time.clone(), second.values, zeros.clone())?
        .rotated(Axis::X, SECOND_TILT_DEGREES.to_radians());
    let third = Curve3::new(time.clone(), third.values, zeros)?
        .rotated(Axis::X, THIRD_TILT_DEGREES.to_radians());
    let combined = first.sum(&second)?.sum(&third)?;

    for (name, curve) in [
        ("first", &first),
        ("second", &second),
        ("third", &third),
        ("combined", &combined),
    ] {
        if !curve.is_finite() {
            warn!(curve = name, "non-finite coordinate in rotated signals");
            return Err(TransformError::invalid("curve", format!("{name} is not finite")));
        }
    }

    Ok(RotatedSignals {
        time,
        first,
        second,
        third,
        combined,
    })
}
