//! Luminance of packed BGR(A) pixels.
//!
//! Uses ITU-R BT.601 luma coefficients, evaluated in `f64` so the
//! edge filter can accumulate neighbourhood sums without rounding each
//! sample.

/// ITU-R BT.601 luma coefficients
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Luma of a pixel stored in B, G, R byte order.
#[inline]
pub fn luma_bgr(pixel: &[u8]) -> f64 {
    let b = pixel[0] as f64;
    let g = pixel[1] as f64;
    let r = pixel[2] as f64;
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_bgr_single_channels() {
        assert!((luma_bgr(&[0, 0, 100, 255]) - 29.9).abs() < 1e-9);
        assert!((luma_bgr(&[0, 100, 0, 255]) - 58.7).abs() < 1e-9);
        assert!((luma_bgr(&[100, 0, 0, 255]) - 11.4).abs() < 1e-9);
    }

    #[test]
    fn test_luma_bgr_white_is_full_scale() {
        assert!((luma_bgr(&[255, 255, 255]) - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_luma_ignores_alpha() {
        assert_eq!(luma_bgr(&[10, 20, 30, 0]), luma_bgr(&[10, 20, 30, 255]));
    }
}
