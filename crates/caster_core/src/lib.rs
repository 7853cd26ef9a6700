//! Caster core - scene model for the CPU ray caster.
//!
//! This crate provides:
//!
//! - **Surface model**: `Surface` reflectance parameters and `Attenuation`
//!   light falloff coefficients
//! - **Geometry**: the closed `Shape` enum (sphere, plane, emissive light)
//!   with ray intersection and surface normals, and the `Impact` hit record
//! - **Scene**: an immutable per-frame snapshot of camera and shapes with a
//!   precomputed primary-ray grid
//!
//! # Example
//!
//! ```ignore
//! use caster_core::{Scene, Shape, Sphere, Surface};
//! use caster_math::Vec3;
//!
//! let shapes = vec![Shape::Sphere(Sphere::new(
//!     Vec3::new(20.0, 0.0, 0.0),
//!     2.0,
//!     Surface::default(),
//! ))];
//! let scene = Scene::new(
//!     Vec3::new(-13.0, 0.0, 0.0),
//!     Vec3::new(-10.0, -2.0, 1.5),
//!     (4.0, 3.0),
//!     (800, 600),
//!     shapes,
//! )?;
//! ```

pub mod scene;
pub mod shape;
pub mod surface;

// Re-export commonly used types
pub use scene::{Scene, SceneError};
pub use shape::{Impact, Light, Plane, Shape, Sphere};
pub use surface::{Attenuation, Color, Surface};
