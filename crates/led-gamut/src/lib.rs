//! led-gamut: light-source color conversions for RGB LEDs
//!
//! This library converts a light-source color specification -- a color
//! temperature in mireds or a CIE 1931 chromaticity pair -- into the
//! 8-bit-per-channel RGB triple an LED expects. It is the numeric core
//! behind a light's "set white point" and "set color point" commands;
//! the device layer that owns power, brightness and pixel transmission
//! sits outside this crate and calls in with plain scalars.
//!
//! # Quick Start
//!
//! ```
//! use led_gamut::{cct, Rgb8};
//!
//! // White point at ~6500 K (154 mired)
//! let xy = cct::mired_to_xy(154);
//! let rgb = Rgb8::from(xy);
//! assert!(rgb.red > 200 && rgb.green > 200 && rgb.blue > 200);
//! ```
//!
//! An explicit color point skips the locus lookup:
//!
//! ```
//! use led_gamut::{xy_to_rgb, Chromaticity};
//!
//! let rgb = xy_to_rgb(Chromaticity::new(20552, 21218));
//! assert!(rgb.red > 200);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! mired ----> Kelvin ----> (x, y)          [cct: Kang2002 locus fit]
//!                            |
//!                            v
//!                   luminance search        [gamut: max Y that fits]
//!                            |
//!                            v
//!             (x, y, Y) -> XYZ -> LinearRgb [color: fixed D65 matrix]
//!                                     |
//!                                     v
//!                                   Srgb    [two-segment gamma curve]
//!                                     |
//!                                     v
//!                                   Rgb8    [clamp + quantize]
//! ```
//!
//! The two entry paths join at the chromaticity: a caller may hand over
//! a pair directly (color-point command) or derive one from a
//! temperature (white-point command).
//!
//! # Totality
//!
//! Every function in this crate is a pure, total function of its scalar
//! inputs: no error returns, no shared state, no I/O. Defensive measures
//! stand in for error signaling -- the zero-mired sentinel bypasses the
//! locus division, an epsilon clamp guards the xyY reconstruction, and
//! all float channels are clamped to their valid range before integer
//! quantization. Identical inputs always produce bit-identical outputs,
//! and everything is safe to call concurrently.

pub mod cct;
pub mod color;
pub mod gamut;


pub use color::{gamma_encode, Chromaticity, LinearRgb, Rgb8, Srgb, Xyz};
pub use gamut::xy_to_rgb;
