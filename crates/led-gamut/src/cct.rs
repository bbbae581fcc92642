//! Color temperature conversions and the Planckian locus approximation.
//!
//! Light-control protocols specify white points as reciprocal color
//! temperatures in mireds (micro reciprocal degrees): `mired =
//! 1_000_000 / Kelvin`. A mired of 0 is the "no temperature set"
//! sentinel, never a division by zero.
//!
//! The temperature-to-chromaticity mapping is the piecewise cubic fit of
//! the Planckian locus by Kang et al. (2002), valid for roughly 1667 K
//! to 25000 K:
//!
//!   Kang, B., Moon, O., Hong, C., Lee, H., Cho, B., & Kim, Y. (2002).
//!   Design of advanced color temperature control system for HDTV
//!   applications. Journal of the Korean Physical Society, 41(6).

use crate::color::Chromaticity;

/// Convert a reciprocal color temperature in mireds to Kelvin.
///
/// `Kelvin = 1_000_000 / mired`; the 0 sentinel maps to 0.0.
///
/// # Example
/// ```
/// use led_gamut::cct::mired_to_kelvin;
/// assert_eq!(mired_to_kelvin(250), 4000.0);
/// assert_eq!(mired_to_kelvin(0), 0.0);
/// ```
#[inline]
#[must_use]
pub fn mired_to_kelvin(mired: u16) -> f32 {
    if mired == 0 {
        0.0
    } else {
        1_000_000.0 / f32::from(mired)
    }
}

/// Convert a temperature in Kelvin to mireds.
///
/// Inverse of [`mired_to_kelvin`]; non-positive temperatures map to the
/// 0 sentinel, and temperatures below ~15.26 K saturate at 65535.
#[inline]
#[must_use]
pub fn kelvin_to_mired(kelvin: f32) -> u16 {
    if kelvin <= 0.0 {
        0
    } else {
        (1_000_000.0 / kelvin) as u16
    }
}

// Kang2002 cubic coefficients, highest power first.
#[rustfmt::skip]
const X_BELOW_4000K: [f32; 4] = [-0.2661239, -0.2343580, 0.8776956,  0.179910];
#[rustfmt::skip]
const X_ABOVE_4000K: [f32; 4] = [-3.0258469,  2.1070379, 0.2226347,  0.240390];
#[rustfmt::skip]
const Y_BELOW_2222K: [f32; 4] = [-1.1063814, -1.34811020, 2.18555832, -0.20219683];
#[rustfmt::skip]
const Y_BELOW_4000K: [f32; 4] = [-0.9549476, -1.37418593, 2.09137015, -0.16748867];
#[rustfmt::skip]
const Y_ABOVE_4000K: [f32; 4] = [ 3.0817580, -5.87338670, 3.75112997, -0.37001483];

/// Evaluate a cubic with coefficients ordered highest power first.
#[inline]
fn cubic(t: f32, c: [f32; 4]) -> f32 {
    c[0].mul_add(t, c[1]).mul_add(t, c[2]).mul_add(t, c[3])
}

/// Approximate the Planckian locus chromaticity for a mired value.
///
/// The x coordinate is a cubic in `u = 1000 / T` with one polynomial for
/// `T <= 4000 K` and another above; the y coordinate is a cubic in x
/// with breaks at 2222 K and 4000 K. Both coordinates are clamped to
/// 0.0..=1.0 before quantizing to the 16-bit fixed-point form, so even
/// temperatures far outside the fit range produce an in-range (if
/// meaningless) pair.
///
/// A mired of 0 short-circuits to the (0, 0) sentinel.
///
/// # Example
/// ```
/// use led_gamut::cct::mired_to_xy;
/// // 154 mired is ~6494 K, in the D65 neighborhood of the locus.
/// let xy = mired_to_xy(154);
/// assert!((i32::from(xy.x) - 20550).abs() < 100);
/// assert!((i32::from(xy.y) - 21220).abs() < 100);
/// ```
#[must_use]
pub fn mired_to_xy(mired: u16) -> Chromaticity {
    let t = mired_to_kelvin(mired);
    if t == 0.0 {
        return Chromaticity::new(0, 0);
    }

    let u = 1000.0 / t;
    let x = if t <= 4000.0 {
        cubic(u, X_BELOW_4000K)
    } else {
        cubic(u, X_ABOVE_4000K)
    };

    let y = if t <= 2222.0 {
        cubic(x, Y_BELOW_2222K)
    } else if t <= 4000.0 {
        cubic(x, Y_BELOW_4000K)
    } else {
        cubic(x, Y_ABOVE_4000K)
    };

    Chromaticity::from_normalized(x, y)
}
