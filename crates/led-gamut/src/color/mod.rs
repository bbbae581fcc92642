//! Typed color spaces for the conversion pipeline.
//!
//! Each representation is its own type, so a value can only move between
//! spaces through the explicit `From` seams -- there is no way to feed a
//! gamma-encoded value back into the linear matrix by accident.
//!
//! # Color Spaces
//!
//! - **Chromaticity**: CIE 1931 (x, y) in 16-bit fixed point. The wire
//!   and storage form; luminance-free.
//! - **Xyz**: CIE 1931 tristimulus. Chromaticity plus luminance.
//! - **LinearRgb**: light intensity straight out of the XYZ matrix.
//!   May be negative or above 1.0; never exposed outside the pipeline.
//! - **Srgb**: gamma-encoded display values.
//! - **Rgb8**: the quantized 8-bit triple LED hardware consumes.
//!
//! # Example
//!
//! ```
//! use led_gamut::{LinearRgb, Rgb8, Srgb, Xyz};
//!
//! let xyz = Xyz::from_xyy(0.3127, 0.3290, 0.5);
//! let srgb = Srgb::from(LinearRgb::from(xyz));
//! let rgb = Rgb8::from(srgb);
//! assert!(rgb.red > 0);
//! ```

mod chromaticity;
mod linear_rgb;
mod rgb8;
mod srgb;
mod xyz;

pub use chromaticity::Chromaticity;
pub use linear_rgb::LinearRgb;
pub use rgb8::Rgb8;
pub use srgb::{gamma_encode, Srgb};
pub use xyz::Xyz;
