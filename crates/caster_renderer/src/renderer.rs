//! The render entry point: one call, one pixel buffer.

use crate::bucket::{generate_buckets, render_bucket, Bucket, DEFAULT_BUCKET_SIZE};
use crate::buffer::PixelBuffer;
use caster_core::{Color, Scene};
use rayon::prelude::*;

/// Render configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Color for rays that hit nothing
    pub background: Color,
    /// Tile edge length in pixels for the parallel bucket loop
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::ZERO,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Render the scene into a fresh pixel buffer.
///
/// The image is split into buckets rendered in parallel on rayon's thread
/// pool; each bucket writes its own disjoint pixels, so assembly needs no
/// locking. The buffer is sized exactly `columns x rows` and ownership
/// passes to the caller.
pub fn render(scene: &Scene, config: &RenderConfig) -> PixelBuffer {
    let start = std::time::Instant::now();
    let bucket_size = config.bucket_size.max(1);
    let buckets = generate_buckets(scene.columns(), scene.rows(), bucket_size);

    let results: Vec<(Bucket, Vec<Color>)> = buckets
        .par_iter()
        .map(|bucket| (*bucket, render_bucket(bucket, scene, config.background)))
        .collect();

    let mut image = PixelBuffer::new(scene.columns(), scene.rows());
    for (bucket, pixels) in results {
        let mut i = 0;
        for y in bucket.y..bucket.y + bucket.height {
            for x in bucket.x..bucket.x + bucket.width {
                image.set(x, y, pixels[i]);
                i += 1;
            }
        }
    }

    log::info!(
        "rendered {}x{} ({} shapes, {} lights) in {:?}",
        scene.columns(),
        scene.rows(),
        scene.shapes().len(),
        scene.light_count(),
        start.elapsed()
    );

    image
}
