//! Argument parsing helpers and the output record for the lumen CLI.

use led_gamut::{Chromaticity, Rgb8};
use serde::Serialize;
use thiserror::Error;

/// Failure to parse an "x,y" chromaticity argument.
#[derive(Debug, Error)]
pub enum ParseXyError {
    #[error("expected \"x,y\" with two comma-separated coordinates")]
    MissingComponent,

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] std::num::ParseIntError),
}

/// Parse a chromaticity given as a scaled "x,y" pair (each 0-65535).
pub fn parse_xy(input: &str) -> Result<Chromaticity, ParseXyError> {
    let (x, y) = input
        .split_once(',')
        .ok_or(ParseXyError::MissingComponent)?;
    Ok(Chromaticity::new(x.trim().parse()?, y.trim().parse()?))
}

/// Result record for one conversion, also the `--json` output shape.
#[derive(Debug, Serialize)]
pub struct Conversion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mired: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kelvin: Option<f32>,
    /// Scaled CIE x coordinate (0-65535)
    pub x: u16,
    /// Scaled CIE y coordinate (0-65535)
    pub y: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb: Option<[u8; 3]>,
}

impl Conversion {
    pub fn with_rgb(mut self, rgb: Rgb8) -> Self {
        self.rgb = Some([rgb.red, rgb.green, rgb.blue]);
        self
    }

    /// Print the record, either as pretty JSON or as readable text.
    pub fn emit(&self, json: bool) -> anyhow::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }

        if let Some(kelvin) = self.kelvin {
            println!("temperature: {kelvin:.1} K");
        }
        println!("chromaticity: x={} y={}", self.x, self.y);
        if let Some([r, g, b]) = self.rgb {
            println!("rgb: #{r:02X}{g:02X}{b:02X} ({r}, {g}, {b})");
        }
        Ok(())
    }
}
