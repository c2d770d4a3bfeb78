//! Error types for spectral-lab.
//!
//! Fallible operations never panic. A failed computation is reported as an
//! `Err` in place of data so the caller can render a fallback for that panel
//! and carry on with the rest.

use thiserror::Error;

/// Failure of a transform or of a deterministic generator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The input sequence had no samples
    #[error("input signal is empty")]
    EmptyInput,

    /// A sample was NaN or infinite and the policy rejects such samples
    #[error("non-finite sample {value} at index {index}")]
    NonFinite { index: usize, value: f64 },

    /// Sequences that must run in parallel had different lengths
    #[error("length mismatch: expected {expected} samples, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A parameter cannot produce a meaningful signal
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl TransformError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        TransformError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = TransformError> = std::result::Result<T, E>;

/// Failure while encoding or writing a WAV file.
#[cfg(feature = "wav-export")]
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to export
    #[error("cannot export an empty signal")]
    EmptySignal,

    /// The sample rate does not fit a WAV header
    #[error("invalid sample rate {0}")]
    SampleRate(f64),

    /// Encoder failure
    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(TransformError::EmptyInput.to_string(), "input signal is empty");
        let err = TransformError::LengthMismatch {
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: expected 4 samples, found 3"
        );
    }

    #[test]
    fn test_invalid_parameter() {
        let err = TransformError::invalid("frequency", "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid parameter `frequency`: must be positive"
        );
    }
}
