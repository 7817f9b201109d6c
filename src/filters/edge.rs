//! Edge detection filters: Sobel gradient magnitude.
//!
//! Two front-ends over the same 3x3 operator, each with its own pixel
//! format, border policy and magnitude formula:
//!
//! | Filter | Format | Output | Magnitude | Border |
//! |--------|--------|--------|-----------|--------|
//! | `sobel_bgra32_in_place` | BGRA8, padded rows | same buffer | `sqrt(gx² + gy²)` | copied from source |
//! | `sobel_gray8` | Gray8, packed rows | separate buffer | `\|gx\| + \|gy\|` | forced to 0 |
//!
//! Both clamp the magnitude to 0-255. Only interior pixels (those with a
//! full 3x3 neighbourhood) are convolved; images narrower or shorter than
//! 3 pixels are all border.
//!
//! ndarray front-ends (`sobel_bgra_u8`, `sobel_gray_u8`) wrap the buffer
//! filters for the Python and WASM bindings.

use log::debug;
use ndarray::{Array2, Array3, ArrayView2, ArrayView3};
use rayon::prelude::*;

use super::core::{Bgra32Layout, Execution, Gray8Layout, BGRA_BYTES_PER_PIXEL};
use super::grayscale::luma_bgr;
use crate::error::{EdgeError, Result};

type Kernel3 = [[i32; 3]; 3];

// BGRA kernels: Gx grows to the right, Gy grows downwards.
const BGRA_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const BGRA_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

// Gray kernels use the opposite sign convention on both axes.
const GRAY_KERNEL_X: Kernel3 = [[1, 0, -1], [2, 0, -2], [1, 0, -1]];
const GRAY_KERNEL_Y: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

// ============================================================================
// Sobel - BGRA, in place
// ============================================================================

/// Apply Sobel edge detection to a packed BGRA buffer, in place.
///
/// # Arguments
/// * `data` - BGRA bytes, at least `height * stride` long
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `stride` - Bytes per row, at least `width * 4`
///
/// Interior pixels get the gradient magnitude of their BT.601 luma in B, G
/// and R with alpha kept. Border pixels, row padding and any bytes past
/// `height * stride` are left untouched.
pub fn sobel_bgra32_in_place(
    data: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<()> {
    let layout = Bgra32Layout::new(width, height, stride)?;
    sobel_bgra32_in_place_with(data, layout, Execution::Sequential)
}

/// Same as [`sobel_bgra32_in_place`] with a pre-validated layout and an
/// explicit execution mode. Parallel and sequential runs are byte-identical.
pub fn sobel_bgra32_in_place_with(
    data: &mut [u8],
    layout: Bgra32Layout,
    execution: Execution,
) -> Result<()> {
    layout.check_buffer(data.len())?;

    let (width, height, stride) = (layout.width(), layout.height(), layout.stride());
    debug!(
        "sobel_bgra32: {}x{} stride={} execution={:?}",
        width, height, stride, execution
    );

    if width < 3 || height < 3 {
        return Ok(());
    }

    let image = &mut data[..layout.byte_len()];
    // Neighbourhoods are read from the snapshot, never from rows already written.
    let source = image.to_vec();
    let source = source.as_slice();

    // Rows 0 and height-1 are skipped and columns 0 and width-1 are never
    // written, so the border keeps its source pixels.
    match execution {
        Execution::Sequential => image
            .chunks_mut(stride)
            .enumerate()
            .skip(1)
            .take(height - 2)
            .for_each(|(y, row)| sobel_bgra_row(source, row, y, &layout)),
        Execution::Parallel => image
            .par_chunks_mut(stride)
            .enumerate()
            .skip(1)
            .take(height - 2)
            .for_each(|(y, row)| sobel_bgra_row(source, row, y, &layout)),
    }

    Ok(())
}

fn sobel_bgra_row(source: &[u8], row: &mut [u8], y: usize, layout: &Bgra32Layout) {
    for x in 1..layout.width() - 1 {
        let mut sum_x = 0.0f64;
        let mut sum_y = 0.0f64;

        for ky in 0..3 {
            for kx in 0..3 {
                let idx = layout.offset(x + kx - 1, y + ky - 1);
                let gray = luma_bgr(&source[idx..idx + 3]);

                sum_x += gray * BGRA_KERNEL_X[ky][kx] as f64;
                sum_y += gray * BGRA_KERNEL_Y[ky][kx] as f64;
            }
        }

        let magnitude = (sum_x * sum_x + sum_y * sum_y).sqrt().min(255.0) as u8;

        let out = x * BGRA_BYTES_PER_PIXEL;
        row[out] = magnitude;
        row[out + 1] = magnitude;
        row[out + 2] = magnitude;
        row[out + 3] = source[layout.offset(x, y) + 3];
    }
}

// ============================================================================
// Sobel - Gray8, out of place
// ============================================================================

/// Apply Sobel edge detection to a packed 8-bit grayscale image.
///
/// # Arguments
/// * `input` - Gray bytes, exactly `width * height` long
/// * `output` - Destination, exactly `width * height` long
/// * `width` - Image width in pixels (also the row pitch)
/// * `height` - Image height in pixels
///
/// Border pixels of `output` are set to 0, interior pixels to
/// `min(|gx| + |gy|, 255)`.
pub fn sobel_gray8(input: &[u8], output: &mut [u8], width: usize, height: usize) -> Result<()> {
    let layout = Gray8Layout::new(width, height)?;
    sobel_gray8_with(input, output, layout, Execution::Sequential)
}

/// Same as [`sobel_gray8`] with a pre-validated layout and an explicit
/// execution mode.
pub fn sobel_gray8_with(
    input: &[u8],
    output: &mut [u8],
    layout: Gray8Layout,
    execution: Execution,
) -> Result<()> {
    layout.check_buffer("input", input.len())?;
    layout.check_buffer("output", output.len())?;

    let (width, height) = (layout.width(), layout.height());
    debug!("sobel_gray8: {}x{} execution={:?}", width, height, execution);

    zero_border(output, width, height);

    if width < 3 || height < 3 {
        return Ok(());
    }

    match execution {
        Execution::Sequential => output
            .chunks_mut(width)
            .enumerate()
            .skip(1)
            .take(height - 2)
            .for_each(|(y, row)| sobel_gray_row(input, row, y, width)),
        Execution::Parallel => output
            .par_chunks_mut(width)
            .enumerate()
            .skip(1)
            .take(height - 2)
            .for_each(|(y, row)| sobel_gray_row(input, row, y, width)),
    }

    Ok(())
}

fn zero_border(output: &mut [u8], width: usize, height: usize) {
    output[..width].fill(0);
    output[(height - 1) * width..].fill(0);
    for row in output.chunks_mut(width) {
        row[0] = 0;
        row[width - 1] = 0;
    }
}

fn sobel_gray_row(input: &[u8], row: &mut [u8], y: usize, width: usize) {
    for x in 1..width - 1 {
        let mut sum_x = 0i32;
        let mut sum_y = 0i32;

        for ky in 0..3 {
            let line = &input[(y + ky - 1) * width..];
            for kx in 0..3 {
                let v = line[x + kx - 1] as i32;
                sum_x += v * GRAY_KERNEL_X[ky][kx];
                sum_y += v * GRAY_KERNEL_Y[ky][kx];
            }
        }

        row[x] = (sum_x.abs() + sum_y.abs()).min(255) as u8;
    }
}

// ============================================================================
// ndarray front-ends
// ============================================================================

/// Apply BGRA Sobel to a (height, width, 4) array, returning a new array.
///
/// Any memory layout is accepted; the result is in standard layout.
pub fn sobel_bgra_u8(input: ArrayView3<u8>) -> Result<Array3<u8>> {
    let (height, width, channels) = input.dim();
    if channels != BGRA_BYTES_PER_PIXEL {
        return Err(EdgeError::BadShape {
            shape: input.shape().to_vec(),
        });
    }
    let layout = Bgra32Layout::packed(width, height)?;

    let mut data: Vec<u8> = input.iter().copied().collect();
    sobel_bgra32_in_place_with(&mut data, layout, Execution::Parallel)?;

    Array3::from_shape_vec((height, width, channels), data).map_err(|_| EdgeError::BadShape {
        shape: vec![height, width, channels],
    })
}

/// Apply gray Sobel to a (height, width) array, returning a new array.
pub fn sobel_gray_u8(input: ArrayView2<u8>) -> Result<Array2<u8>> {
    let (height, width) = input.dim();
    let layout = Gray8Layout::new(width, height)?;

    let data: Vec<u8> = input.iter().copied().collect();
    let mut output = vec![0u8; layout.byte_len()];
    sobel_gray8_with(&data, &mut output, layout, Execution::Parallel)?;

    Array2::from_shape_vec((height, width), output).map_err(|_| EdgeError::BadShape {
        shape: vec![height, width],
    })
}
