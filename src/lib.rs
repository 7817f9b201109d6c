//! SobelStag
//!
//! Sobel edge-magnitude filters for raw pixel buffers owned by a host
//! application, with Python bindings via PyO3, WASM bindings for JavaScript
//! and a C ABI for native hosts.
//!
//! ## Image Formats
//! - **BGRA8**: packed 32-bit pixels, rows possibly padded to a stride.
//!   Processed in place; alpha and the one-pixel border are kept.
//! - **Gray8**: one byte per pixel, no padding. Written to a separate
//!   output buffer; the border is set to 0.
//!
//! ## Errors
//! Every entry point validates its geometry up front and returns
//! [`EdgeError`] instead of touching memory it does not own.

pub mod error;
pub mod filters;

#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{EdgeError, Result};
pub use filters::core::{Bgra32Layout, Execution, Gray8Layout};
pub use filters::edge::{
    sobel_bgra32_in_place, sobel_bgra32_in_place_with, sobel_bgra_u8, sobel_gray8,
    sobel_gray8_with, sobel_gray_u8,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyArray3, PyReadonlyArray2, PyReadonlyArray3, PyReadwriteArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::EdgeError;
    use crate::filters::core::{Bgra32Layout, Execution};
    use crate::filters::edge;

    fn to_py_err(err: EdgeError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    // ========================================================================
    // Edge Detection Filters
    // ========================================================================

    /// Sobel edge magnitude of a BGRA u8 image (height, width, 4).
    ///
    /// Returns a new array. Alpha and the one-pixel border are copied from
    /// the input.
    #[pyfunction]
    pub fn sobel_bgra<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = edge::sobel_bgra_u8(image.as_array()).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    /// Sobel edge magnitude of a BGRA u8 image, written back into `image`.
    ///
    /// The array must be C-contiguous with shape (height, width, 4).
    #[pyfunction]
    pub fn sobel_bgra_inplace<'py>(mut image: PyReadwriteArray3<'py, u8>) -> PyResult<()> {
        let mut view = image.as_array_mut();
        let (height, width, channels) = view.dim();
        if channels != 4 {
            return Err(to_py_err(EdgeError::BadShape {
                shape: view.shape().to_vec(),
            }));
        }
        let layout = Bgra32Layout::packed(width, height).map_err(to_py_err)?;
        let data = view
            .as_slice_mut()
            .ok_or_else(|| PyValueError::new_err("image must be C-contiguous"))?;
        edge::sobel_bgra32_in_place_with(data, layout, Execution::Parallel).map_err(to_py_err)
    }

    /// Sobel edge magnitude of a grayscale u8 image (height, width).
    ///
    /// Border pixels of the result are 0.
    #[pyfunction]
    pub fn sobel_gray<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = edge::sobel_gray_u8(image.as_array()).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    #[pymodule]
    pub fn sobelstag(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(sobel_bgra, m)?)?;
        m.add_function(wrap_pyfunction!(sobel_bgra_inplace, m)?)?;
        m.add_function(wrap_pyfunction!(sobel_gray, m)?)?;
        Ok(())
    }
}
