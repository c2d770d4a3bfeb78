//! Zero padding to FFT-friendly lengths.

use tracing::debug;

/// Smallest power of two that is greater than or equal to `len`.
///
/// An empty signal stays empty, so `next_power_of_two(0)` is `0`.
pub fn next_power_of_two(len: usize) -> usize {
    if len == 0 { 0 } else { len.next_power_of_two() }
}

/// Appends zeros until the length is a power of two.
///
/// Signals whose length already is a power of two come back unchanged.
/// Padding always rounds up, samples are never dropped.
///
/// # Examples
///
/// ```
/// use spectral_lab::pad_to_power_of_two;
///
/// assert_eq!(pad_to_power_of_two(&[1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0, 0.0]);
/// assert_eq!(pad_to_power_of_two(&[1.0, 2.0]), vec![1.0, 2.0]);
/// ```
pub fn pad_to_power_of_two(signal: &[f64]) -> Vec<f64> {
    let len = signal.len();
    let target = next_power_of_two(len);
    let mut padded = signal.to_vec();
    if target != len {
        debug!(len, target, "zero padding signal to power of two");
        padded.resize(target, 0.0);
    }
    padded
}
