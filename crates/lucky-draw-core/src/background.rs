//! Background image decoding

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::RgbImage;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A decoded background image
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    path: PathBuf,
    pixels: RgbImage,
}

impl BackgroundImage {
    /// Decode the image at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|e| Error::Image {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), width = decoded.width(), height = decoded.height(), "Decoded background");
        Ok(Self {
            path: path.to_path_buf(),
            pixels: decoded.to_rgb8(),
        })
    }

    /// Decode `path`, or `None` (logged) when it is not a readable image
    pub fn try_open(path: impl AsRef<Path>) -> Option<Self> {
        match Self::open(path) {
            Ok(image) => Some(image),
            Err(e) => {
                warn!(error = %e, "Background image unavailable");
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Width and height in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Stretch the image to exactly `width` x `height` pixels
    pub fn scaled(&self, width: u32, height: u32) -> RgbImage {
        image::imageops::resize(&self.pixels, width.max(1), height.max(1), FilterType::Triangle)
    }
}

/// Check that `path` decodes as an image, for validating a chosen file
pub fn check_image(path: impl AsRef<Path>) -> Result<(u32, u32)> {
    BackgroundImage::open(path).map(|image| image.dimensions())
}
