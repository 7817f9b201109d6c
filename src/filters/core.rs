//! Core utilities shared by the edge filters.
//!
//! This module provides:
//! - Validated buffer geometry for packed BGRA (with row padding) and
//!   tightly packed 8-bit grayscale images
//! - The execution mode selecting sequential or row-parallel processing
//!
//! Layouts can only be built through their constructors, so holding one
//! means the dimensions are non-zero, the stride covers a full row and the
//! byte size fits in `usize`.

use crate::error::{EdgeError, Result};

/// Bytes per pixel of a packed BGRA image.
pub const BGRA_BYTES_PER_PIXEL: usize = 4;

/// How the interior pass is scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// Single-threaded, row after row.
    #[default]
    Sequential,
    /// Rows are distributed across the rayon thread pool.
    Parallel,
}

/// Geometry of a packed 32-bit BGRA image whose rows may be padded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bgra32Layout {
    width: usize,
    height: usize,
    stride: usize,
    len: usize,
}

impl Bgra32Layout {
    /// Validate `width`, `height` and `stride` (bytes per row).
    ///
    /// # Errors
    /// * `ZeroDimension` - width or height is 0
    /// * `StrideTooSmall` - stride is below `width * 4`
    /// * `DimensionOverflow` - `width * 4` or `height * stride` overflows
    pub fn new(width: usize, height: usize, stride: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EdgeError::ZeroDimension { width, height });
        }
        let min = width
            .checked_mul(BGRA_BYTES_PER_PIXEL)
            .ok_or(EdgeError::DimensionOverflow)?;
        if stride < min {
            return Err(EdgeError::StrideTooSmall { stride, min });
        }
        let len = height
            .checked_mul(stride)
            .ok_or(EdgeError::DimensionOverflow)?;

        Ok(Self {
            width,
            height,
            stride,
            len,
        })
    }

    /// Layout without row padding (`stride == width * 4`).
    pub fn packed(width: usize, height: usize) -> Result<Self> {
        let stride = width
            .checked_mul(BGRA_BYTES_PER_PIXEL)
            .ok_or(EdgeError::DimensionOverflow)?;
        Self::new(width, height, stride)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Bytes the image occupies: `height * stride`.
    pub fn byte_len(&self) -> usize {
        self.len
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> usize {
        y * self.stride + x * BGRA_BYTES_PER_PIXEL
    }

    /// Reject buffers shorter than `height * stride`. Longer ones are fine,
    /// the tail is never touched.
    pub fn check_buffer(&self, len: usize) -> Result<()> {
        if len < self.len {
            return Err(EdgeError::BufferTooSmall {
                len,
                required: self.len,
            });
        }
        Ok(())
    }
}

/// Geometry of a tightly packed single-channel 8-bit image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gray8Layout {
    width: usize,
    height: usize,
    len: usize,
}

impl Gray8Layout {
    /// Validate `width` and `height`; the row pitch equals `width`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EdgeError::ZeroDimension { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(EdgeError::DimensionOverflow)?;

        Ok(Self { width, height, len })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes the image occupies: `width * height`.
    pub fn byte_len(&self) -> usize {
        self.len
    }

    /// Both grayscale buffers must be exactly `width * height` bytes.
    pub fn check_buffer(&self, which: &'static str, len: usize) -> Result<()> {
        if len != self.len {
            return Err(EdgeError::BufferSizeMismatch {
                which,
                len,
                expected: self.len,
            });
        }
        Ok(())
    }
}
