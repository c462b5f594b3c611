//! Error types for labconv

use thiserror::Error;

/// Result type for labconv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in labconv operations
///
/// The scalar pipeline (`lab_to_xyz`, `xyz_to_rgb`) never fails. These
/// variants only surface from the validating entry points.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Lab lightness outside the accepted range
    ///
    /// `index` is the pixel position for buffer conversions, `None` for
    /// single colors.
    #[error("Lightness out of range: {value} (pixel {index:?})")]
    LightnessOutOfRange { value: f64, index: Option<usize> },

    /// Malformed hex color string
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Unknown palette entry name
    #[error("Unknown named color: {0:?}")]
    UnknownName(String),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::BufferSize {
            expected: 9,
            actual: 6,
        };
        assert_eq!(err.to_string(), "Buffer size mismatch: expected 9, got 6");

        let err = Error::InvalidHex("#12".into());
        assert_eq!(err.to_string(), "Invalid hex color: \"#12\"");
    }
}
