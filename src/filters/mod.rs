//! Filter modules for edge detection.
//!
//! ## Supported Formats
//!
//! | Format | Layout | Type | Description |
//! |--------|--------|------|-------------|
//! | BGRA8 | rows of `stride` bytes | u8 | Blue, green, red, alpha; rows may be padded |
//! | Gray8 | rows of `width` bytes | u8 | Single luminance channel, 0-255 |
//!
//! ## Architecture
//!
//! - **Validated geometry** - `core` checks dimensions, stride and buffer
//!   sizes before any pixel is touched
//! - **Alpha preservation** - BGRA filters never change alpha
//! - **Thread-safe** - rayon splits the interior pass by rows on request

pub mod core;
pub mod edge;
pub mod grayscale;
