//! Caster renderer - CPU ray casting with local Phong illumination.
//!
//! One primary ray per pixel, closest-hit resolution against the scene's
//! shapes, and ambient + diffuse + specular shading with hard shadows and
//! distance attenuation. No bounces: reflection, refraction, and global
//! illumination are out of scope.
//!
//! Per-pixel shading is pure and independent, so the image is split into
//! rectangular buckets rendered in parallel with rayon.

mod bucket;
mod buffer;
mod renderer;
mod shading;

pub use bucket::{generate_buckets, render_bucket, Bucket, DEFAULT_BUCKET_SIZE};
pub use buffer::PixelBuffer;
pub use renderer::{render, RenderConfig};
pub use shading::{closest_impact, render_pixel, trace, MAX_AMBIENT_INTENSITY, MAX_DIFFUSE_INTENSITY};

/// Re-export the scene model and math types
pub use caster_core::{Attenuation, Color, Impact, Light, Plane, Scene, SceneError, Shape, Sphere, Surface};
pub use caster_math::{Ray, Vec3};
