//! The 8-bit RGB triple handed to LED hardware.

use super::srgb::Srgb;

/// An 8-bit-per-channel RGB color, the final externally visible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    /// Red channel, 0..=255
    pub red: u8,
    /// Green channel, 0..=255
    pub green: u8,
    /// Blue channel, 0..=255
    pub blue: u8,
}

impl Rgb8 {
    /// Create a color from raw channel values.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Scale all channels by a brightness percentage.
    ///
    /// Integer arithmetic, truncating: `channel * brightness / 100`.
    /// Percentages above 100 are treated as 100.
    ///
    /// # Example
    /// ```
    /// use led_gamut::Rgb8;
    /// let half = Rgb8::new(255, 100, 10).scaled(50);
    /// assert_eq!(half, Rgb8::new(127, 50, 5));
    /// ```
    #[inline]
    #[must_use]
    pub fn scaled(self, brightness: u8) -> Self {
        let brightness = u16::from(brightness.min(100));
        let scale = |channel: u8| (u16::from(channel) * brightness / 100) as u8;
        Self {
            red: scale(self.red),
            green: scale(self.green),
            blue: scale(self.blue),
        }
    }
}

impl From<Srgb> for Rgb8 {
    /// Clamp each channel to 0.0..=1.0, then quantize.
    ///
    /// Quantization rounds half-up: scale by 255, add 0.5, truncate. The
    /// clamp also absorbs any out-of-range residue the gamut mapper's
    /// iteration cap left behind.
    fn from(srgb: Srgb) -> Self {
        #[inline]
        fn quantize(value: f32) -> u8 {
            (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
        }

        Self {
            red: quantize(srgb.r),
            green: quantize(srgb.g),
            blue: quantize(srgb.b),
        }
    }
}
