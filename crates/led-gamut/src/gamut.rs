//! Luminance-maximizing gamut mapping.
//!
//! A chromaticity alone does not pin down a display color: every
//! luminance along the (x, y) ray shares the pair. For a light source
//! the natural choice is the *brightest* color the hardware can show at
//! that chromaticity, so the mapper searches for the largest luminance
//! whose gamma-encoded channels all stay inside 0.0..=1.0.
//!
//! Because the response curve is nonlinear, scaling luminance does not
//! scale the encoded channels linearly and the maximum has no closed
//! form. The search rescales the candidate by the worst channel excess
//! each round; the excess trends to 1 quickly, and a hard cap bounds the
//! work either way.

use crate::color::{Chromaticity, LinearRgb, Rgb8, Srgb, Xyz};

/// Hard cap on luminance-search rounds.
const MAX_ITERATIONS: usize = 10;

/// Evaluate a chromaticity at a candidate luminance to display RGB.
#[inline]
fn evaluate(x: f32, y: f32, luminance: f32) -> Srgb {
    Srgb::from(LinearRgb::from(Xyz::from_xyy(x, y, luminance)))
}

/// Map a chromaticity to the brightest displayable 8-bit color.
///
/// Starts from full luminance and repeatedly divides by the largest
/// encoded channel until everything fits (early exit) or the iteration
/// cap is reached. One final evaluation at the resulting luminance is
/// clamped and quantized, so a non-converged search still yields a valid
/// triple -- the trade is a small luminance error, never a failure.
///
/// # Example
/// ```
/// use led_gamut::{xy_to_rgb, Chromaticity};
///
/// // A green-region chromaticity maps to a green-dominant color.
/// let rgb = xy_to_rgb(Chromaticity::from_normalized(0.30, 0.60));
/// assert!(rgb.green > rgb.red);
/// assert!(rgb.green > rgb.blue);
/// ```
#[must_use]
pub fn xy_to_rgb(xy: Chromaticity) -> Rgb8 {
    let (x, y) = xy.to_normalized();

    let mut luminance = 1.0;
    for _ in 0..MAX_ITERATIONS {
        let srgb = evaluate(x, y, luminance);
        let peak = srgb.max_channel();
        if peak <= 1.0 {
            break;
        }
        luminance /= peak;
    }

    Rgb8::from(evaluate(x, y, luminance))
}

impl From<Chromaticity> for Rgb8 {
    /// Gamut-map the chromaticity to the brightest displayable color.
    fn from(xy: Chromaticity) -> Self {
        xy_to_rgb(xy)
    }
}
