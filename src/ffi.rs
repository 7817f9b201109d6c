//! C ABI for native hosts that load the library dynamically.
//!
//! Both functions return `0` on success and a negative
//! [`EdgeError::status_code`] when the call is rejected. A rejected call
//! never reads or writes through the given pointers.

use log::warn;

use crate::error::{EdgeError, Result};
use crate::filters::core::{Bgra32Layout, Execution, Gray8Layout};
use crate::filters::edge::{sobel_bgra32_in_place_with, sobel_gray8_with};

fn dimension(name: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| EdgeError::NegativeDimension {
        name,
        value: value as i64,
    })
}

fn status(entry: &str, result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            warn!("{entry}: call rejected: {err}");
            err.status_code()
        }
    }
}

/// Sobel edge magnitude of a BGRA image, in place.
///
/// # Safety
/// `data` must point to at least `height * stride` writable bytes that no
/// other thread accesses during the call.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn SobelFilter32bpp(data: *mut u8, width: i32, height: i32, stride: i32) -> i32 {
    let result = unsafe { bgra32_raw(data, width, height, stride) };
    status("SobelFilter32bpp", result)
}

unsafe fn bgra32_raw(data: *mut u8, width: i32, height: i32, stride: i32) -> Result<()> {
    let layout = Bgra32Layout::new(
        dimension("width", width)?,
        dimension("height", height)?,
        dimension("stride", stride)?,
    )?;
    if data.is_null() {
        return Err(EdgeError::NullPointer { which: "data" });
    }
    let buffer = unsafe { std::slice::from_raw_parts_mut(data, layout.byte_len()) };
    sobel_bgra32_in_place_with(buffer, layout, Execution::Sequential)
}

/// Sobel edge magnitude of a grayscale image into a separate buffer.
///
/// # Safety
/// `input` must point to `width * height` readable bytes and `output` to
/// `width * height` writable bytes. Overlapping regions are rejected.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn SobelFilterGray8(
    input: *const u8,
    output: *mut u8,
    width: i32,
    height: i32,
) -> i32 {
    let result = unsafe { gray8_raw(input, output, width, height) };
    status("SobelFilterGray8", result)
}

unsafe fn gray8_raw(input: *const u8, output: *mut u8, width: i32, height: i32) -> Result<()> {
    let layout = Gray8Layout::new(dimension("width", width)?, dimension("height", height)?)?;
    if input.is_null() {
        return Err(EdgeError::NullPointer { which: "input" });
    }
    if output.is_null() {
        return Err(EdgeError::NullPointer { which: "output" });
    }
    let len = layout.byte_len();
    let (start_in, start_out) = (input as usize, output as usize);
    if start_in < start_out.saturating_add(len) && start_out < start_in.saturating_add(len) {
        return Err(EdgeError::OverlappingBuffers);
    }
    let source = unsafe { std::slice::from_raw_parts(input, len) };
    let target = unsafe { std::slice::from_raw_parts_mut(output, len) };
    sobel_gray8_with(source, target, layout, Execution::Sequential)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bgra_entry_point_processes_buffer() {
        let mut data = vec![0u8; 5 * 5 * 4];
        for y in 0..5 {
            for x in 2..5 {
                let i = (y * 5 + x) * 4;
                data[i + 2] = 100;
                data[i + 3] = 255;
            }
        }
        let code = unsafe { SobelFilter32bpp(data.as_mut_ptr(), 5, 5, 20) };
        assert_eq!(code, 0);
        assert_eq!(data[(2 * 5 + 2) * 4], 119);
    }

    #[test]
    fn test_bgra_entry_point_rejects_bad_arguments() {
        let mut data = vec![0u8; 16];
        assert_eq!(
            unsafe { SobelFilter32bpp(std::ptr::null_mut(), 2, 2, 8) },
            EdgeError::NullPointer { which: "data" }.status_code()
        );
        assert_eq!(
            unsafe { SobelFilter32bpp(data.as_mut_ptr(), -2, 2, 8) },
            EdgeError::NegativeDimension { name: "width", value: -2 }.status_code()
        );
        assert_eq!(
            unsafe { SobelFilter32bpp(data.as_mut_ptr(), 2, 2, 7) },
            EdgeError::StrideTooSmall { stride: 7, min: 8 }.status_code()
        );
        assert!(data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_gray_entry_point_processes_buffer() {
        let mut input = vec![0u8; 25];
        input[2 * 5 + 3] = 10;
        let mut output = vec![9u8; 25];
        let code = unsafe { SobelFilterGray8(input.as_ptr(), output.as_mut_ptr(), 5, 5) };
        assert_eq!(code, 0);
        assert_eq!(output[2 * 5 + 2], 20);
        assert_eq!(output[0], 0);
    }

    #[test]
    fn test_gray_entry_point_rejects_overlap() {
        let mut buffer = vec![1u8; 30];
        let ptr = buffer.as_mut_ptr();
        let code = unsafe { SobelFilterGray8(ptr, ptr.add(5), 5, 5) };
        assert_eq!(code, EdgeError::OverlappingBuffers.status_code());
        assert!(buffer.iter().all(|&b| b == 1));
    }

    #[test]
    fn test_gray_entry_point_rejects_zero_size() {
        let input = [0u8; 1];
        let mut output = [0u8; 1];
        let code = unsafe { SobelFilterGray8(input.as_ptr(), output.as_mut_ptr(), 0, 1) };
        assert_eq!(code, -1);
    }
}
