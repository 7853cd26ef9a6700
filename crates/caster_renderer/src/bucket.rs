//! Bucket-based tile rendering.
//!
//! Divides the image into rectangular tiles (buckets) that are rendered
//! independently and in parallel. Pixels are order-independent, so buckets
//! stay in scan order and their results can be assembled in any order.

use crate::shading::render_pixel;
use caster_core::{Color, Scene};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// X coordinate of the bucket's top-left corner
    pub x: u32,
    /// Y coordinate of the bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate the bucket grid for an image, in scan order. Buckets at the
/// right and bottom edges are clipped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Render a single bucket.
///
/// Returns pixel colors in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, background: Color) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            pixels.push(render_pixel(scene, global_x, global_y, background));
        }
    }

    pixels
}
