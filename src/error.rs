// One error type for the whole program.
// Every variant states *where* things went wrong.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Pushing the pixel buffer to the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),
    /// Command-line values that make no sense (zero-sized canvas, bad hex color, ...)
    #[error("Config error: {0}")]
    Config(String),
    /// A frame whose pixel count disagrees with width * height
    #[error("Frame size error: {0}")]
    FrameSize(String),
    /// PNG encoding of the canvas failed
    #[error("Export encode error: {0}")]
    Encode(#[from] image::ImageError),
    /// Writing the exported file failed
    #[error("Export write error ({}): {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
