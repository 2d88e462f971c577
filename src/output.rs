//! PNG file I/O for the icon set

use image::RgbaImage;
use std::io;
use std::path::Path;

/// Error type for PNG file operations
#[derive(Debug)]
pub enum OutputError {
    /// IO error during file operations
    Io(io::Error),
    /// Image encoding or decoding error
    Image(image::ImageError),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "IO error: {}", e),
            OutputError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Image(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

/// Save an RGBA image to a PNG file.
///
/// Parent directories are created if they don't exist.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    Ok(())
}

/// Load a PNG file from disk as an RGBA image.
pub fn load_png(path: &Path) -> Result<RgbaImage, OutputError> {
    let image = image::open(path)?;
    Ok(image.to_rgba8())
}
