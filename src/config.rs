// Command-line options, parsed with clap and then checked into a typed Config.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Error;
use crate::history::DEFAULT_LIMIT;
use crate::toolbar::MIN_WIDTH;

const MAX_SIDE: usize = 8192;
const MIN_HEIGHT: usize = 100;

#[derive(Debug, Parser)]
#[command(name = "sketchpad", about = "Freehand raster drawing with undo/redo and PNG export")]
pub struct Args {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Directory exported PNGs are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Number of canvas states kept for undo
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub history_limit: usize,

    /// Initial brush color as RRGGBB hex
    #[arg(long, default_value = "000000")]
    pub color: String,

    /// Initial brush width in pixels
    #[arg(long, default_value_t = 5.0)]
    pub brush: f32,

    /// Canvas background as RRGGBB hex
    #[arg(long, default_value = "ffffff")]
    pub background: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub out_dir: PathBuf,
    pub history_limit: usize,
    pub color: u32,
    pub brush: f32,
    pub background: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            out_dir: PathBuf::from("."),
            history_limit: DEFAULT_LIMIT,
            color: 0x00_00_00_00,
            brush: 5.0,
            background: 0x00_FF_FF_FF,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self, Error> {
        if !(MIN_WIDTH..=MAX_SIDE).contains(&args.width) {
            return Err(Error::Config(format!("width must be in {MIN_WIDTH}..={MAX_SIDE}, got {}", args.width)));
        }
        if !(MIN_HEIGHT..=MAX_SIDE).contains(&args.height) {
            return Err(Error::Config(format!("height must be in {MIN_HEIGHT}..={MAX_SIDE}, got {}", args.height)));
        }
        if args.history_limit == 0 {
            return Err(Error::Config("history limit must be at least 1".into()));
        }
        if !(args.brush.is_finite() && args.brush > 0.0 && args.brush <= 200.0) {
            return Err(Error::Config(format!("brush width must be in (0, 200], got {}", args.brush)));
        }
        Ok(Self {
            width: args.width,
            height: args.height,
            out_dir: args.out_dir,
            history_limit: args.history_limit,
            color: parse_hex_color(&args.color)?,
            brush: args.brush,
            background: parse_hex_color(&args.background)?,
        })
    }
}

/// "RRGGBB" or "#RRGGBB" -> 0x00RRGGBB.
pub fn parse_hex_color(s: &str) -> Result<u32, Error> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::Config(format!("color must be 6 hex digits, got {s:?}")));
    }
    u32::from_str_radix(hex, 16).map_err(|_| Error::Config(format!("not a hex color: {s:?}")))
}
