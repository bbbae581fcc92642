//! Linear RGB, proportional to physical light intensity.

use super::xyz::Xyz;

/// D65 matrix converting CIE 1931 XYZ to linear sRGB.
#[rustfmt::skip]
const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [ 3.2404542, -1.5371385, -0.4985314],
    [-0.9692660,  1.8760108,  0.0415560],
    [ 0.0556434, -0.2040259,  1.0572252],
];

/// A color in linear RGB color space.
///
/// Linear RGB values are proportional to physical light power. Straight
/// out of the XYZ matrix they are nominally 0.0..=1.0 but may exceed 1.0
/// (out of gamut for the requested luminance) or go negative (chromaticity
/// outside the RGB triangle); the gamma-encoding step zeroes negatives.
/// This type never leaves the crate's conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Xyz> for LinearRgb {
    /// Apply the fixed D65 XYZ -> linear sRGB matrix.
    ///
    /// No clamping happens here: out-of-gamut chromaticities produce
    /// negative channels on purpose, so the encoding step can distinguish
    /// "no light" from "tiny amount of light".
    fn from(xyz: Xyz) -> Self {
        let m = &XYZ_TO_RGB;
        Self {
            r: xyz.x * m[0][0] + xyz.y * m[0][1] + xyz.z * m[0][2],
            g: xyz.x * m[1][0] + xyz.y * m[1][1] + xyz.z * m[1][2],
            b: xyz.x * m[2][0] + xyz.y * m[2][1] + xyz.z * m[2][2],
        }
    }
}
