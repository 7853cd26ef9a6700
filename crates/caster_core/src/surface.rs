//! Surface reflectance and light attenuation parameters.

use caster_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Reflectance properties of a shape, attached at construction time.
///
/// Coefficients are expected (not enforced) to lie in [0, 1]; the specular
/// exponent controls highlight tightness, with larger values giving smaller,
/// sharper highlights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    /// Base color (RGB, 0-1)
    pub color: Color,
    /// Ambient reflection coefficient
    pub ambient: f32,
    /// Diffuse reflection coefficient
    pub diffuse: f32,
    /// Specular reflection coefficient
    pub specular: f32,
    /// Specular exponent (highlight tightness)
    pub shininess: f32,
}

impl Surface {
    /// Create a new surface.
    pub fn new(color: Color, ambient: f32, diffuse: f32, specular: f32, shininess: f32) -> Self {
        Self {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Create a matte surface with full ambient/diffuse response and no
    /// specular highlight.
    pub fn matte(color: Color) -> Self {
        Self::new(color, 1.0, 1.0, 0.0, 1.0)
    }
}

impl Default for Surface {
    fn default() -> Self {
        // Light gray, fully reflective in every term
        Self::new(Vec3::new(0.75, 0.75, 0.75), 1.0, 1.0, 1.0, 50.0)
    }
}

/// Distance falloff coefficients for a light source.
///
/// The illumination a light contributes to a surface point is scaled by
/// `min(1, 1 / (constant + linear*d + quadratic*d^2))` where `d` is the
/// distance between the light and the point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// Create a new attenuation triple.
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Falloff factor for a surface point at `distance` from the light.
    ///
    /// Always in [0, 1]: the inverse polynomial is capped at 1 so a very
    /// close light never amplifies the surface response.
    pub fn factor(&self, distance: f32) -> f32 {
        let denom = self.constant + self.linear * distance + self.quadratic * distance * distance;
        (1.0 / denom).min(1.0)
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self::new(0.0, 0.1, 0.00005)
    }
}
