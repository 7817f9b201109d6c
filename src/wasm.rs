//! WebAssembly exports for the edge filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Browsers
//! hand over copies of canvas data, so both filters return a new buffer
//! instead of writing into the caller's memory. Invalid geometry is
//! reported as a thrown JS error.

use wasm_bindgen::prelude::*;

use crate::error::EdgeError;
use crate::filters::core::{Bgra32Layout, Execution, Gray8Layout};
use crate::filters::edge::{sobel_bgra32_in_place_with, sobel_gray8_with};

fn to_js_err(err: EdgeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Sobel - BGRA
// ============================================================================

/// Sobel edge magnitude of a BGRA image.
///
/// # Arguments
/// * `data` - BGRA bytes (length >= height * stride)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `stride` - Bytes per row (>= width * 4)
///
/// # Returns
/// Copy of `data` with interior pixels replaced by the edge magnitude
#[wasm_bindgen]
pub fn sobel_bgra_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<Vec<u8>, JsValue> {
    let layout = Bgra32Layout::new(width, height, stride).map_err(to_js_err)?;
    let mut output = data.to_vec();
    // wasm32 has no thread pool; run on the calling thread.
    sobel_bgra32_in_place_with(&mut output, layout, Execution::Sequential).map_err(to_js_err)?;
    Ok(output)
}

// ============================================================================
// Sobel - Gray8
// ============================================================================

/// Sobel edge magnitude of a grayscale image.
///
/// # Arguments
/// * `data` - Gray bytes (length = width * height)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Edge image of the same size with a zero border
#[wasm_bindgen]
pub fn sobel_gray_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    let layout = Gray8Layout::new(width, height).map_err(to_js_err)?;
    let mut output = vec![0u8; layout.byte_len()];
    sobel_gray8_with(data, &mut output, layout, Execution::Sequential).map_err(to_js_err)?;
    Ok(output)
}
