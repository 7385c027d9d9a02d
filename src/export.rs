// Saves the canvas as a PNG next to wherever the user asked (`--out-dir`).
// Visual: nothing changes on screen; a `drawing-<millis>.png` file appears on disk.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use image::{ImageFormat, RgbaImage};

use crate::error::Error;
use crate::types::FrameBuffer;

/// `drawing-<milliseconds since the Unix epoch>.png`
pub fn export_filename(at: DateTime<Utc>) -> String {
    format!("drawing-{}.png", at.timestamp_millis())
}

/// Encode the frame as an opaque RGBA PNG.
pub fn encode_png(frame: &FrameBuffer) -> Result<Vec<u8>, Error> {
    let mut rgba = Vec::with_capacity(frame.pixels.len() * 4);
    for &px in &frame.pixels {
        // 0x00RRGGBB -> R, G, B, A
        rgba.extend_from_slice(&[(px >> 16) as u8, (px >> 8) as u8, px as u8, 0xFF]);
    }
    let img = RgbaImage::from_raw(frame.width as u32, frame.height as u32, rgba).ok_or_else(|| {
        Error::FrameSize(format!("{}x{} frame holds a different number of pixels", frame.width, frame.height))
    })?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Encode the frame and write it into `dir`; returns the path written.
pub fn save_png(frame: &FrameBuffer, dir: &Path, at: DateTime<Utc>) -> Result<PathBuf, Error> {
    let bytes = encode_png(frame)?;
    let path = dir.join(export_filename(at));
    std::fs::write(&path, &bytes).map_err(|source| Error::Write { path: path.clone(), source })?;
    log::info!("exported {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}
