//! Gamma-encoded sRGB, the display-ready form.
//!
//! LED hardware expects channel values on the perceptual sRGB curve, not
//! raw light intensity. This module holds the two-segment response
//! function and the encoding seam from [`LinearRgb`].

use super::linear_rgb::LinearRgb;

/// Threshold below which the sRGB response is a straight line.
const TRANSITION: f32 = 0.0031308;
/// Slope of the linear segment.
const SLOPE: f32 = 12.92;
/// Offset of the power segment.
const OFFSET: f32 = 0.055;
/// Exponent of the power segment, the firmware simplification of 1/2.4.
const GAMMA: f32 = 0.42;

/// Apply the two-segment sRGB response curve to a linear value.
///
/// Below the transition point the response is `12.92 * value`; above it,
/// `(1 + 0.055) * value^0.42 - 0.055`. The slope and offset are chosen so
/// the derivative is continuous at the transition. The input is presumed
/// non-negative; values above 1.0 encode to values above 1.0 (callers
/// clamp after gamut mapping, not here).
#[inline]
#[must_use]
pub fn gamma_encode(value: f32) -> f32 {
    if value <= TRANSITION {
        SLOPE * value
    } else {
        (1.0 + OFFSET) * value.powf(GAMMA) - OFFSET
    }
}

/// A color in gamma-encoded sRGB.
///
/// Channels are nominally 0.0..=1.0; a value above 1.0 means the
/// requested luminance does not fit the display gamut at this
/// chromaticity, which is exactly the signal the gamut mapper iterates
/// on. Quantize with [`Rgb8::from`](super::rgb8::Rgb8) once in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: f32,
    /// Green channel (gamma-encoded)
    pub g: f32,
    /// Blue channel (gamma-encoded)
    pub b: f32,
}

impl Srgb {
    /// Create a new Srgb color from already-encoded values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// The largest of the three channels.
    ///
    /// The gamut mapper uses this as its overflow measure: a value above
    /// 1.0 is the factor by which the candidate luminance misses the
    /// displayable range.
    #[inline]
    pub fn max_channel(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode each channel.
    ///
    /// Negative linear light has no physical display meaning: channels at
    /// or below zero encode to exactly 0.0 instead of entering the power
    /// function.
    fn from(linear: LinearRgb) -> Self {
        #[inline]
        fn encode(value: f32) -> f32 {
            if value > 0.0 {
                gamma_encode(value)
            } else {
                0.0
            }
        }

        Self {
            r: encode(linear.r),
            g: encode(linear.g),
            b: encode(linear.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_zero_is_zero() {
        assert_eq!(gamma_encode(0.0), 0.0);
    }

    #[test]
    fn test_gamma_monotonic() {
        let mut prev = gamma_encode(0.0);
        for i in 1..=1000 {
            let curr = gamma_encode(i as f32 / 1000.0);
            assert!(curr >= prev, "gamma_encode not monotonic at step {i}");
            prev = curr;
        }
    }

    #[test]
    fn test_gamma_seam_at_transition_is_sub_quantum() {
        // The 0.42 exponent leaves a small seam where the segments meet
        // (the standard offset pairs with 1/2.4). It measures ~0.0018,
        // under half an 8-bit quantization step, so it can never show as
        // more than one output code.
        let below = gamma_encode(TRANSITION);
        let above = gamma_encode(TRANSITION + 1e-6);
        assert!(
            (above - below).abs() < 0.5 / 255.0,
            "seam exceeds half a code: {below} vs {above}"
        );
    }

    #[test]
    fn test_negative_linear_encodes_to_exact_zero() {
        let srgb = Srgb::from(LinearRgb::new(-0.5, -1e-9, 0.5));
        assert_eq!(srgb.r, 0.0);
        assert_eq!(srgb.g, 0.0);
        assert!(srgb.b > 0.0);
    }

    #[test]
    fn test_known_encode_values() {
        // Linear 0.5 -> ~0.735 on the standard curve; the 0.42 exponent
        // lands within a percent of the exact 1/2.4 encoding.
        let mid = gamma_encode(0.5);
        assert!((mid - 0.735).abs() < 0.01, "gamma_encode(0.5) = {mid}");

        // Deep in the linear segment the response is exactly the slope.
        assert!((gamma_encode(0.001) - 0.01292).abs() < 1e-6);
    }

    #[test]
    fn test_max_channel() {
        assert_eq!(Srgb::new(0.2, 0.9, 0.4).max_channel(), 0.9);
        assert_eq!(Srgb::new(1.5, 0.9, 0.4).max_channel(), 1.5);
    }

    #[test]
    fn test_encode_tracks_reference_curve() {
        // Cross-check against the palette crate's IEC 61966-2-1 encoder.
        // The firmware exponent 0.42 differs from the exact 1/2.4, so the
        // curves agree to ~0.01 rather than bit-for-bit.
        use palette::LinSrgb;

        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let reference: palette::Srgb<f32> =
                palette::Srgb::from_linear(LinSrgb::new(v, v, v));
            let ours = gamma_encode(v);
            assert!(
                (ours - reference.red).abs() < 0.01,
                "encode({v}) = {ours}, reference {}",
                reference.red
            );
        }
    }
}
