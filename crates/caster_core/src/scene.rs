//! Immutable per-frame scene snapshot with a precomputed primary-ray grid.
//!
//! A `Scene` is built once per frame and is read-only for the duration of a
//! render. Animating (say, a moving light) means building a new `Scene`
//! rather than mutating one in flight, so an in-progress render can never
//! race with the setup of the next frame.
//!
//! Coordinate frame, inherited from the legacy camera model: the observer
//! sits behind the screen looking toward +X, the screen's horizontal axis
//! is world +Y, and its vertical axis is world -Z (pixel row 0 at the top).

use crate::shape::Shape;
use caster_math::{Ray, Vec3};
use thiserror::Error;

/// Scene construction failure. Identifies the parameter that failed
/// validation; raised before any ray is cast.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("screen width must be positive and finite (got {0})")]
    ScreenWidth(f32),
    #[error("screen height must be positive and finite (got {0})")]
    ScreenHeight(f32),
    #[error("pixel column count must be positive")]
    PixelColumns,
    #[error("pixel row count must be positive")]
    PixelRows,
}

/// An immutable snapshot of camera and geometry for one render.
pub struct Scene {
    observer: Vec3,
    screen_origin: Vec3,
    screen_width: f32,
    screen_height: f32,
    columns: u32,
    rows: u32,
    shapes: Vec<Shape>,
    /// Indices into `shapes` of the light variants
    lights: Vec<usize>,
    /// Primary rays, row-major, one per pixel
    rays: Vec<Ray>,
}

impl Scene {
    /// Build a scene.
    ///
    /// * `observer` - eye position the primary rays start from
    /// * `screen_origin` - world position of the top-left screen corner
    /// * `screen_size` - physical (width, height) of the screen
    /// * `resolution` - pixel (columns, rows)
    /// * `shapes` - geometry, moved into the scene as an owned snapshot;
    ///   light variants are indexed separately for the shading loop
    ///
    /// Fails fast with a [`SceneError`] on non-positive screen dimensions
    /// or pixel counts. The grid of normalized primary rays is precomputed
    /// here, amortizing normalization across repeated renders of the same
    /// camera configuration.
    pub fn new(
        observer: Vec3,
        screen_origin: Vec3,
        screen_size: (f32, f32),
        resolution: (u32, u32),
        shapes: Vec<Shape>,
    ) -> Result<Self, SceneError> {
        let (screen_width, screen_height) = screen_size;
        let (columns, rows) = resolution;

        if screen_width <= 0.0 || !screen_width.is_finite() {
            return Err(SceneError::ScreenWidth(screen_width));
        }
        if screen_height <= 0.0 || !screen_height.is_finite() {
            return Err(SceneError::ScreenHeight(screen_height));
        }
        if columns == 0 {
            return Err(SceneError::PixelColumns);
        }
        if rows == 0 {
            return Err(SceneError::PixelRows);
        }

        let lights: Vec<usize> = shapes
            .iter()
            .enumerate()
            .filter(|(_, shape)| shape.is_light())
            .map(|(i, _)| i)
            .collect();

        let pixel_width = screen_width / columns as f32;
        let pixel_height = screen_height / rows as f32;
        let mut rays = Vec::with_capacity((columns * rows) as usize);
        for y in 0..rows {
            for x in 0..columns {
                let screen_point = screen_origin
                    + Vec3::Y * (x as f32 * pixel_width)
                    - Vec3::Z * (y as f32 * pixel_height);
                rays.push(Ray::between(observer, screen_point));
            }
        }

        log::debug!(
            "scene: {}x{} pixels, {} shapes ({} lights)",
            columns,
            rows,
            shapes.len(),
            lights.len()
        );

        Ok(Self {
            observer,
            screen_origin,
            screen_width,
            screen_height,
            columns,
            rows,
            shapes,
            lights,
            rays,
        })
    }

    /// Eye position.
    pub fn observer(&self) -> Vec3 {
        self.observer
    }

    /// Top-left screen corner in world space.
    pub fn screen_origin(&self) -> Vec3 {
        self.screen_origin
    }

    /// Physical screen size (width, height).
    pub fn screen_size(&self) -> (f32, f32) {
        (self.screen_width, self.screen_height)
    }

    /// Pixel columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Pixel rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// All shapes, lights included.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The light shapes, in scene order.
    pub fn lights(&self) -> impl Iterator<Item = &Shape> {
        self.lights.iter().map(|&i| &self.shapes[i])
    }

    /// Number of light shapes.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// The precomputed primary ray for pixel (x, y).
    #[inline]
    pub fn primary_ray(&self, x: u32, y: u32) -> &Ray {
        debug_assert!(x < self.columns && y < self.rows);
        &self.rays[(y * self.columns + x) as usize]
    }
}
