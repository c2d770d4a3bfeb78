//! Statistics of noise signals: amplitude spectrum, histogram and
//! chunk-wise correlation.

use tracing::{debug, warn};

use crate::spectral::{SanitizePolicy, SpectralTransform, Spectrum};

/// Normalized histogram of a signal's values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    /// Bin centers, equally spaced over `[min, max]`
    pub centers: Vec<f64>,
    /// Fraction of counted samples falling in each bin
    pub densities: Vec<f64>,
}

impl Histogram {
    /// Number of bins.
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// True when there are no bins.
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Width of each bin, 0 for a degenerate histogram.
    pub fn bin_width(&self) -> f64 {
        match self.centers.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }
}

/// Square matrix of Pearson coefficients between signal chunks, row-major.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorrelationMatrix {
    size: usize,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    /// Number of chunks, the side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True when no full chunk was available.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Coefficient between chunks `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.size && j < self.size {
            Some(self.values[i * self.size + j])
        } else {
            None
        }
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.size {
            Some(&self.values[i * self.size..(i + 1) * self.size])
        } else {
            None
        }
    }

    /// Row-major coefficients.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Copies the matrix into nested rows, e.g. for a heatmap.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .chunks(self.size.max(1))
            .map(|row| row.to_vec())
            .collect()
    }
}

/// One-sided amplitude spectrum `(2/N)|X_k|` over bins `0..=N/2`, where `N`
/// is the power-of-two padded length.
///
/// Non-finite samples are replaced with zero. An empty signal yields an
/// empty spectrum.
pub fn amplitude_spectrum(signal: &[f64], sample_rate: f64) -> Spectrum {
    if signal.is_empty() {
        return Spectrum::default();
    }
    let mut transform = SpectralTransform::with_policy(SanitizePolicy::ReplaceWithZero);
    match transform.forward(signal) {
        Ok(phasors) => Spectrum::one_sided_with_nyquist(&phasors, sample_rate),
        Err(e) => {
            warn!(error = %e, "amplitude spectrum unavailable");
            Spectrum::default()
        }
    }
}

/// Histogram with `bins` equal-width bins spanning the finite values of
/// `signal`.
///
/// Non-finite samples are skipped. Densities sum to 1 over the counted
/// samples. When every value is equal the bin width is 0 and all samples
/// land in the first bin. Bins and centers stay finite even when
/// `max - min` exceeds the `f64` range.
///
/// # Examples
///
/// ```
/// use spectral_lab::noise::histogram;
///
/// let h = histogram(&[0.0, 0.0, 0.5, 2.0], 2);
/// assert_eq!(h.centers, vec![0.5, 1.5]);
/// assert_eq!(h.densities, vec![0.75, 0.25]);
/// ```
pub fn histogram(signal: &[f64], bins: usize) -> Histogram {
    let finite: Vec<f64> = signal.iter().copied().filter(|v| v.is_finite()).collect();
    let skipped = signal.len() - finite.len();
    if skipped > 0 {
        warn!(skipped, "skipped non-finite samples in histogram");
    }
    if bins == 0 || finite.is_empty() {
        return Histogram::default();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Half the range never overflows
    let half_span = max / 2.0 - min / 2.0;

    let mut counts = vec![0usize; bins];
    for v in &finite {
        let bin = if half_span > 0.0 {
            let position = (v / 2.0 - min / 2.0) / half_span;
            // The maximum falls on the upper edge of the last bin
            ((position * bins as f64).floor() as usize).min(bins - 1)
        } else {
            0
        };
        counts[bin] += 1;
    }

    let centers = if half_span > 0.0 {
        (0..bins)
            .map(|i| {
                let fraction = (i as f64 + 0.5) / bins as f64;
                min * (1.0 - fraction) + max * fraction
            })
            .collect()
    } else {
        vec![min; bins]
    };

    let total = finite.len() as f64;
    Histogram {
        centers,
        densities: counts.iter().map(|&c| c as f64 / total).collect(),
    }
}

/// Pearson coefficient from raw moments.
///
/// Returns 0 when either input has no variance or the result is not
/// finite, and clamps rounding overshoot into `[-1, 1]`. Only the common
/// prefix of `x` and `y` is used.
///
/// Variance below `1e-12·Σx²` counts as none, so an input whose standard
/// deviation is under about `1e-6` of its mean magnitude also yields 0,
/// not only an exactly constant one.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let len = x.len().min(y.len());
    if len == 0 {
        return 0.0;
    }
    let n = len as f64;
    let (mut sx, mut sy, mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y.iter()) {
        sx += a;
        sy += b;
        sxx += a * a;
        syy += b * b;
        sxy += a * b;
    }

    let var_x = sxx - sx * sx / n;
    let var_y = syy - sy * sy / n;
    // Variance at the level of rounding noise counts as none
    if var_x <= sxx * 1e-12 || var_y <= syy * 1e-12 {
        return 0.0;
    }
    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }

    let r = (sxy - sx * sy / n) / denominator;
    if r.is_finite() { r.clamp(-1.0, 1.0) } else { 0.0 }
}

/// Correlation between every pair of consecutive `chunk_size`-sample chunks.
///
/// Only `floor(len / chunk_size)` full chunks are used. Non-finite samples
/// count as zero. The matrix is symmetric with a unit diagonal except for
/// constant chunks, whose coefficients are all 0.
pub fn correlation_matrix(signal: &[f64], chunk_size: usize) -> CorrelationMatrix {
    if chunk_size == 0 {
        return CorrelationMatrix::default();
    }
    let chunks: Vec<Vec<f64>> = signal
        .chunks_exact(chunk_size)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&v| if v.is_finite() { v } else { 0.0 })
                .collect()
        })
        .collect();

    let size = chunks.len();
    let mut values = vec![0.0; size * size];
    for i in 0..size {
        for j in i..size {
            let r = pearson(&chunks[i], &chunks[j]);
            values[i * size + j] = r;
            values[j * size + i] = r;
        }
    }
    debug!(size, chunk_size, "computed correlation matrix");

    CorrelationMatrix { size, values }
}
