// Re-export glam for convenience
pub use glam::*;

// Caster math types
mod ray;
pub use ray::Ray;
