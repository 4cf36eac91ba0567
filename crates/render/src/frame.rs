//! Captured pixel data and image-file output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

use tracer::Color;

/// A finished capture: one color per pixel, row-major from the top-left.
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Frame {
    /// # Panics
    ///
    /// Panics if the pixel count does not match the dimensions; the
    /// renderer produces exactly one color per camera ray.
    #[must_use]
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel buffer does not match frame dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[must_use]
    pub fn to_image(&self) -> RgbImage {
        let mut image = RgbImage::new(self.width, self.height);
        for (index, color) in self.pixels.iter().enumerate() {
            let x = index as u32 % self.width;
            let y = index as u32 / self.width;
            image.put_pixel(x, y, Rgb([color.r, color.g, color.b]));
        }
        image
    }

    /// Write the frame as a PNG file.
    ///
    /// # Errors
    ///
    /// Fails if the output directory cannot be created or the file cannot
    /// be written.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create output directory {}", parent.display()))?;
            }
        }
        self.to_image()
            .save(path)
            .with_context(|| format!("failed to save capture to {}", path.display()))?;
        tracing::info!(path = %path.display(), "capture saved");
        Ok(())
    }

    /// A timestamped capture path under `directory`, so repeated runs never
    /// overwrite each other.
    #[must_use]
    pub fn timestamped_path(directory: &Path) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S%.3f");
        directory.join(format!("capture_{stamp}.png"))
    }
}
