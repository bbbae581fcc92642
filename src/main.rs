use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use led_gamut::cct;
use led_gamut::Rgb8;

mod cli;

use cli::Conversion;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Convert light-source color specifications (mired / CIE xy) to RGB")]
struct Cli {
    /// Emit results as JSON instead of readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Realize a white point from a color temperature
    White {
        /// Reciprocal color temperature in mireds (0 = undefined)
        #[arg(short, long)]
        mired: u16,

        /// Brightness percentage applied to the result (0-100)
        #[arg(short, long)]
        brightness: Option<u8>,
    },
    /// Realize a color point from a chromaticity pair
    Color {
        /// Chromaticity as a scaled "x,y" pair (each 0-65535)
        #[arg(long)]
        xy: String,

        /// Brightness percentage applied to the result (0-100)
        #[arg(short, long)]
        brightness: Option<u8>,
    },
    /// Look up the Planckian-locus chromaticity for a color temperature
    Locus {
        /// Reciprocal color temperature in mireds (0 = undefined)
        #[arg(short, long)]
        mired: u16,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumen=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::White { mired, brightness } => {
            let kelvin = cct::mired_to_kelvin(mired);
            let xy = cct::mired_to_xy(mired);
            let rgb = apply_brightness(Rgb8::from(xy), brightness);
            debug!(mired, kelvin, ?rgb, "realized white point");

            Conversion {
                mired: Some(mired),
                kelvin: Some(kelvin),
                x: xy.x,
                y: xy.y,
                rgb: None,
            }
            .with_rgb(rgb)
            .emit(cli.json)
        }
        Commands::Color { xy, brightness } => {
            let xy = cli::parse_xy(&xy)?;
            let rgb = apply_brightness(Rgb8::from(xy), brightness);
            debug!(xy.x, xy.y, ?rgb, "realized color point");

            Conversion {
                mired: None,
                kelvin: None,
                x: xy.x,
                y: xy.y,
                rgb: None,
            }
            .with_rgb(rgb)
            .emit(cli.json)
        }
        Commands::Locus { mired } => {
            let kelvin = cct::mired_to_kelvin(mired);
            let xy = cct::mired_to_xy(mired);
            debug!(mired, kelvin, "looked up locus chromaticity");

            Conversion {
                mired: Some(mired),
                kelvin: Some(kelvin),
                x: xy.x,
                y: xy.y,
                rgb: None,
            }
            .emit(cli.json)
        }
    }
}

fn apply_brightness(rgb: Rgb8, brightness: Option<u8>) -> Rgb8 {
    match brightness {
        Some(percent) => rgb.scaled(percent),
        None => rgb,
    }
}
