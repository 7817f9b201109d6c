//! Error type shared by the edge filters and their host bindings.
//!
//! Every precondition of the engine (dimensions, stride, buffer sizes) is
//! checked before any byte is written. A rejected call leaves all buffers
//! exactly as the caller passed them.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EdgeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EdgeError {
    #[error("image dimensions must be non-zero (width={width}, height={height})")]
    ZeroDimension { width: usize, height: usize },

    #[error("{name} must not be negative (got {value})")]
    NegativeDimension { name: &'static str, value: i64 },

    #[error("stride {stride} is smaller than the {min} bytes one row of pixels needs")]
    StrideTooSmall { stride: usize, min: usize },

    #[error("buffer holds {len} bytes but the image needs {required}")]
    BufferTooSmall { len: usize, required: usize },

    #[error("{which} buffer holds {len} bytes, expected exactly {expected}")]
    BufferSizeMismatch {
        which: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("image geometry overflows the address space")]
    DimensionOverflow,

    #[error("{which} pointer is null")]
    NullPointer { which: &'static str },

    #[error("input and output buffers overlap")]
    OverlappingBuffers,

    #[error("expected an array of shape (height, width, 4), got {shape:?}")]
    BadShape { shape: Vec<usize> },
}

impl EdgeError {
    /// Status code reported across the C ABI. Success is `0`.
    pub fn status_code(&self) -> i32 {
        match self {
            EdgeError::ZeroDimension { .. } => -1,
            EdgeError::NegativeDimension { .. } => -2,
            EdgeError::StrideTooSmall { .. } => -3,
            EdgeError::BufferTooSmall { .. } => -4,
            EdgeError::BufferSizeMismatch { .. } => -5,
            EdgeError::DimensionOverflow => -6,
            EdgeError::NullPointer { .. } => -7,
            EdgeError::OverlappingBuffers => -8,
            EdgeError::BadShape { .. } => -9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_distinct_and_negative() {
        let errors = [
            EdgeError::ZeroDimension { width: 0, height: 1 },
            EdgeError::NegativeDimension { name: "width", value: -1 },
            EdgeError::StrideTooSmall { stride: 3, min: 4 },
            EdgeError::BufferTooSmall { len: 1, required: 2 },
            EdgeError::BufferSizeMismatch { which: "input", len: 1, expected: 2 },
            EdgeError::DimensionOverflow,
            EdgeError::NullPointer { which: "data" },
            EdgeError::OverlappingBuffers,
            EdgeError::BadShape { shape: vec![1, 1, 3] },
        ];

        let mut codes: Vec<i32> = errors.iter().map(EdgeError::status_code).collect();
        assert!(codes.iter().all(|&c| c < 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_messages_name_the_problem() {
        let err = EdgeError::StrideTooSmall { stride: 10, min: 12 };
        assert_eq!(
            err.to_string(),
            "stride 10 is smaller than the 12 bytes one row of pixels needs"
        );
    }
}
