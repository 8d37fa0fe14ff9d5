//! Progressive output image.
//!
//! `ArrayOutput` keeps a running weighted sum per pixel, so it can be read
//! (and saved) between render passes while more samples are still coming.

use std::path::Path;

use crate::Color;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Cannot write an empty {0}x{1} image")]
    EmptyImage(u32, u32),
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Per-pixel weighted average accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayOutput {
    width: u32,
    height: u32,
    sums: Vec<Color>,
    weights: Vec<f64>,
}

impl ArrayOutput {
    /// Create a new accumulator with no samples.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            sums: vec![Color::ZERO; len],
            weights: vec![0.0; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Fold `color` into pixel (x, y) with the given weight.
    pub fn add_weighted_sample(&mut self, x: u32, y: u32, color: Color, weight: f64) {
        let index = self.index(x, y);
        self.sums[index] += color * weight;
        self.weights[index] += weight;
    }

    /// Current weighted mean at (x, y); black until the pixel has samples.
    pub fn pixel_at(&self, x: u32, y: u32) -> Color {
        let index = self.index(x, y);
        let weight = self.weights[index];
        if weight > 0.0 {
            self.sums[index] / weight
        } else {
            Color::ZERO
        }
    }

    /// Total weight accumulated at (x, y).
    pub fn samples_at(&self, x: u32, y: u32) -> f64 {
        self.weights[self.index(x, y)]
    }

    /// Convert to RGBA bytes (for display or saving), row-major from the top.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.sums.len() * 4);
        for y in 0..self.height {
            for x in 0..self.width {
                bytes.extend_from_slice(&color_to_rgba(self.pixel_at(x, y)));
            }
        }
        bytes
    }

    /// Write the current state as an 8-bit PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> OutputResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(OutputError::EmptyImage(self.width, self.height));
        }
        let image = image::RgbaImage::from_raw(self.width, self.height, self.to_rgba())
            .ok_or(OutputError::EmptyImage(self.width, self.height))?;
        image.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.as_ref().display());
        Ok(())
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to gamma-corrected 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let to_byte = |c: f64| (255.0 * linear_to_gamma(c).clamp(0.0, 1.0)).round() as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z), 255]
}
