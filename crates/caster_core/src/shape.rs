//! Geometric primitives and ray intersection.
//!
//! `Shape` is a closed enum over the primitives the renderer understands:
//! spheres, planes, and lights. A light is a shape decorator: it keeps the
//! geometry of its wrapped shape but changes shading semantics (it is
//! luminous, rendered unshaded, and illuminates other shapes).

use crate::surface::{Attenuation, Color, Surface};
use caster_math::{Ray, Vec3};

/// Result of a successful ray-shape intersection.
///
/// Carries a back-reference to the hit shape so the shading step can query
/// its surface and normal. A miss is represented by `Option::None`, never
/// by an error.
#[derive(Clone, Copy, Debug)]
pub struct Impact<'a> {
    /// Point of intersection
    pub point: Vec3,
    /// Distance along the ray (always >= 0 for a valid hit)
    pub distance: f32,
    /// The shape that was hit
    pub shape: &'a Shape,
}

impl<'a> Impact<'a> {
    /// Squared hit distance, for comparisons that can skip the square root.
    #[inline]
    pub fn distance_squared(&self) -> f32 {
        self.distance * self.distance
    }
}

/// A sphere primitive.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    radius_sq: f32,
    surface: Surface,
}

impl Sphere {
    /// Create a new sphere. `radius` must be > 0 for meaningful hits.
    pub fn new(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self {
            center,
            radius,
            radius_sq: radius * radius,
            surface,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Solve `|O + tD - C|^2 = r^2` for the smallest non-negative root.
    ///
    /// With a unit ray direction the quadratic reduces to a=1,
    /// `b = 2 D.(O-C)`, `c = |O-C|^2 - r^2`. A negative discriminant or a
    /// sphere entirely behind the ray origin is a miss. A tangent ray
    /// (discriminant zero) yields one valid root and counts as a hit.
    fn hit(&self, ray: &Ray) -> Option<(Vec3, f32)> {
        let oc = ray.origin() - self.center;
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius_sq;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t0 = (-b - sqrtd) / 2.0;
        let t1 = (-b + sqrtd) / 2.0;

        // Smallest non-negative root; both negative means the sphere is
        // behind the ray origin.
        let t = if t0 >= 0.0 {
            t0
        } else if t1 >= 0.0 {
            t1
        } else {
            return None;
        };

        Some((ray.at(t), t))
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

/// An infinite plane primitive.
#[derive(Clone, Debug)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    surface: Surface,
}

impl Plane {
    /// Create a new plane from a point on it and its normal.
    /// The normal is normalized before being stored.
    pub fn new(point: Vec3, normal: Vec3, surface: Surface) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            surface,
        }
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// `t = N.(P - O) / (D.N)`.
    ///
    /// A parallel ray (`D.N == 0`) is a miss, including the degenerate case
    /// of a ray lying exactly in the plane: a single representative hit
    /// point is not computable there, so both sub-cases report no hit.
    fn hit(&self, ray: &Ray) -> Option<(Vec3, f32)> {
        let denom = ray.direction().dot(self.normal);
        if denom == 0.0 {
            return None;
        }

        let t = self.normal.dot(self.point - ray.origin()) / denom;
        if t < 0.0 {
            return None;
        }

        Some((ray.at(t), t))
    }
}

/// An emissive light wrapping a concrete shape (almost always a sphere).
///
/// The light keeps the geometric identity of the wrapped shape but its
/// reflection coefficients are fixed at unit values: a light is itself
/// luminous and is never locally shaded, the renderer returns its raw color
/// on a direct hit. The attenuation triple parameterizes the falloff this
/// light applies when illuminating *other* shapes, not how it looks when
/// viewed directly.
#[derive(Clone, Debug)]
pub struct Light {
    inner: Box<Shape>,
    attenuation: Attenuation,
    surface: Surface,
}

impl Light {
    /// Wrap a shape as a light source.
    pub fn new(inner: Shape, attenuation: Attenuation) -> Self {
        let surface = Surface {
            ambient: 1.0,
            diffuse: 1.0,
            specular: 1.0,
            ..*inner.surface()
        };
        Self {
            inner: Box::new(inner),
            attenuation,
            surface,
        }
    }

    pub fn inner(&self) -> &Shape {
        &self.inner
    }

    pub fn attenuation(&self) -> Attenuation {
        self.attenuation
    }
}

/// A geometric primitive the renderer can intersect rays with.
#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Light(Light),
}

impl Shape {
    /// Test the ray against this shape.
    ///
    /// Returns the nearest intersection in front of the ray origin, or
    /// `None` for all geometric non-events (miss, parallel plane, shape
    /// behind the origin). A light delegates to its wrapped shape and
    /// relabels the impact as itself so shading can short-circuit on it.
    pub fn intersect<'a>(&'a self, ray: &Ray) -> Option<Impact<'a>> {
        let (point, distance) = match self {
            Shape::Sphere(sphere) => sphere.hit(ray)?,
            Shape::Plane(plane) => plane.hit(ray)?,
            Shape::Light(light) => {
                let inner = light.inner.intersect(ray)?;
                (inner.point, inner.distance)
            }
        };
        Some(Impact {
            point,
            distance,
            shape: self,
        })
    }

    /// Surface normal at a point on the shape.
    ///
    /// For a plane the point is ignored; the stored normal is returned.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.normal_at(point),
            Shape::Plane(plane) => plane.normal,
            Shape::Light(light) => light.inner.normal_at(point),
        }
    }

    /// The shape's reflectance parameters. For a light these have unit
    /// coefficients with the wrapped shape's color.
    pub fn surface(&self) -> &Surface {
        match self {
            Shape::Sphere(sphere) => &sphere.surface,
            Shape::Plane(plane) => &plane.surface,
            Shape::Light(light) => &light.surface,
        }
    }

    /// The shape's base color.
    #[inline]
    pub fn color(&self) -> Color {
        self.surface().color
    }

    /// Representative center point: sphere center, plane reference point,
    /// or the wrapped shape's center for a light. Shadow rays aim here.
    pub fn center(&self) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.center,
            Shape::Plane(plane) => plane.point,
            Shape::Light(light) => light.inner.center(),
        }
    }

    /// Whether this shape is an emissive light source.
    #[inline]
    pub fn is_light(&self) -> bool {
        matches!(self, Shape::Light(_))
    }
}
