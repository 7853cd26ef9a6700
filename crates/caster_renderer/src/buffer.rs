//! Pixel buffer for render output.

use caster_core::Color;

/// A row-major 2D grid of RGB colors, sized exactly to the scene's pixel
/// resolution. Created fresh per render call and handed to the caller;
/// presentation (display, encoding) is an external concern.
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to packed RGB bytes, clamping each channel to [0, 1] before
    /// quantizing to 8 bits.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            let c = color.clamp(Color::ZERO, Color::ONE);
            bytes.push((c.x * 255.0) as u8);
            bytes.push((c.y * 255.0) as u8);
            bytes.push((c.z * 255.0) as u8);
        }
        bytes
    }
}
