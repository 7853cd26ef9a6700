//! Per-pixel shading: closest-hit resolution, hard shadows, and the
//! ambient/diffuse/specular illumination model.
//!
//! No cross-pixel state: a pixel's color depends only on the immutable
//! scene and its primary ray, which is what makes the render loop
//! embarrassingly parallel.

use caster_core::{Color, Impact, Scene, Shape};
use caster_math::{Ray, Vec3};

/// Fixed intensity ceiling of the ambient term.
pub const MAX_AMBIENT_INTENSITY: f32 = 0.1;

/// Fixed intensity ceiling of the accumulated diffuse term. Complements the
/// ambient ceiling so the two sum to 1.0.
pub const MAX_DIFFUSE_INTENSITY: f32 = 1.0 - MAX_AMBIENT_INTENSITY;

/// Find the nearest intersection of `ray` among `shapes`.
///
/// Lights are tested like any other shape since they are directly visible.
/// Ties are broken by iteration order (first shape wins on a strict `<`).
pub fn closest_impact<'a>(shapes: &'a [Shape], ray: &Ray) -> Option<Impact<'a>> {
    let mut closest: Option<Impact<'a>> = None;
    for shape in shapes {
        if let Some(impact) = shape.intersect(ray) {
            if closest
                .as_ref()
                .map_or(true, |c| impact.distance < c.distance)
            {
                closest = Some(impact);
            }
        }
    }
    closest
}

/// Whether `light` is blocked from reaching the impact point.
///
/// Casts a shadow ray from the light's center toward the point and looks
/// for any *other* shape strictly closer than the point. The light itself
/// and the shaded shape are excluded from the test; comparisons use squared
/// distances to keep square roots out of the inner loop.
fn occluded(scene: &Scene, light: &Shape, impact: &Impact<'_>) -> bool {
    let shadow_ray = Ray::between(light.center(), impact.point);
    let dist_sq = light.center().distance_squared(impact.point);

    for shape in scene.shapes() {
        if std::ptr::eq(shape, light) || std::ptr::eq(shape, impact.shape) {
            continue;
        }
        if let Some(hit) = shape.intersect(&shadow_ray) {
            if hit.distance_squared() < dist_sq {
                return true;
            }
        }
    }
    false
}

/// Reflect `v` about the unit normal `n`.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Local Phong illumination at an impact point.
///
/// Ambient plus, for each visible light: a diffuse term weighted by the
/// incidence angle and distance attenuation, and a specular highlight from
/// the reflected view direction. The accumulated diffuse weight is capped
/// at [`MAX_DIFFUSE_INTENSITY`]; the final color is clamped per channel.
fn shade(scene: &Scene, ray: &Ray, impact: &Impact<'_>) -> Color {
    let surface = impact.shape.surface();
    let normal = impact.shape.normal_at(impact.point);

    let ambient = surface.color * (surface.ambient * MAX_AMBIENT_INTENSITY);
    let mut diffuse_weight = 0.0_f32;
    let mut specular = Color::ZERO;

    for light_shape in scene.lights() {
        let Shape::Light(light) = light_shape else {
            continue;
        };
        if occluded(scene, light_shape, impact) {
            continue;
        }

        let to_light = light_shape.center() - impact.point;
        let distance = to_light.length();
        if distance == 0.0 {
            continue;
        }
        let light_dir = to_light / distance;
        let attenuation = light.attenuation().factor(distance);

        // Diffuse: zero when the light is behind the surface
        let theta = normal.dot(light_dir);
        if theta > 0.0 {
            diffuse_weight = (diffuse_weight
                + surface.diffuse * theta * attenuation * MAX_DIFFUSE_INTENSITY)
                .min(MAX_DIFFUSE_INTENSITY);
        }

        // Specular: reflected view direction against the light direction.
        // Light color is white in this model.
        let alignment = reflect(ray.direction(), normal).dot(light_dir);
        if alignment > 0.0 && surface.specular > 0.0 {
            specular +=
                Color::ONE * (surface.specular * attenuation * alignment.powf(surface.shininess));
        }
    }

    (ambient + surface.color * diffuse_weight + specular).clamp(Color::ZERO, Color::ONE)
}

/// Compute the color seen by a ray.
///
/// Closest hit over every shape; a miss is the background color, a light is
/// returned unshaded (it is itself luminous), anything else gets local
/// illumination.
pub fn trace(scene: &Scene, ray: &Ray, background: Color) -> Color {
    match closest_impact(scene.shapes(), ray) {
        None => background,
        Some(impact) if impact.shape.is_light() => impact.shape.color(),
        Some(impact) => shade(scene, ray, &impact),
    }
}

/// Color of pixel (x, y) through its precomputed primary ray.
#[inline]
pub fn render_pixel(scene: &Scene, x: u32, y: u32, background: Color) -> Color {
    trace(scene, scene.primary_ray(x, y), background)
}

#[cfg(test)]
mod tests {
    use super::*;
    use caster_core::{Attenuation, Light, Sphere, Surface};

    fn gray_sphere(center: Vec3, radius: f32) -> Shape {
        Shape::Sphere(Sphere::new(center, radius, Surface::default()))
    }

    fn white_light(center: Vec3, radius: f32) -> Shape {
        Shape::Light(Light::new(
            Shape::Sphere(Sphere::new(
                center,
                radius,
                Surface::new(Vec3::ONE, 1.0, 1.0, 1.0, 50.0),
            )),
            Attenuation::default(),
        ))
    }

    fn test_scene(shapes: Vec<Shape>) -> Scene {
        Scene::new(
            Vec3::new(-13.0, 0.0, 0.0),
            Vec3::new(-10.0, -2.0, 1.5),
            (4.0, 3.0),
            (8, 6),
            shapes,
        )
        .unwrap()
    }

    #[test]
    fn test_closest_hit_picks_nearer_sphere() {
        let shapes = vec![
            gray_sphere(Vec3::new(10.0, 0.0, 0.0), 1.0),
            gray_sphere(Vec3::new(5.0, 0.0, 0.0), 1.0),
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let impact = closest_impact(&shapes, &ray).expect("ray runs through both spheres");
        assert!((impact.distance - 4.0).abs() < 1e-4);
        assert!(std::ptr::eq(impact.shape, &shapes[1]));
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = test_scene(vec![]);
        let background = Vec3::new(0.0, 0.0, 0.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(trace(&scene, &ray, background), background);
    }

    #[test]
    fn test_light_short_circuit() {
        // The light is the closest hit: its raw color comes back unshaded,
        // regardless of the sphere behind it or other lights.
        let shapes = vec![
            white_light(Vec3::new(5.0, 0.0, 0.0), 1.0),
            gray_sphere(Vec3::new(10.0, 0.0, 0.0), 1.0),
            white_light(Vec3::new(0.0, 20.0, 0.0), 1.0),
        ];
        let scene = test_scene(shapes);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(trace(&scene, &ray, Color::ZERO), Vec3::ONE);
    }

    #[test]
    fn test_shadow_occlusion() {
        // Surface sphere at x=10, light above it at z=10, occluder between.
        let ray = Ray::between(Vec3::new(0.0, 0.0, 10.0), Vec3::new(10.0, 0.0, 0.0));

        let open = test_scene(vec![
            gray_sphere(Vec3::new(10.0, 0.0, 0.0), 1.0),
            white_light(Vec3::new(10.0, 0.0, 10.0), 0.5),
        ]);
        let blocked = test_scene(vec![
            gray_sphere(Vec3::new(10.0, 0.0, 0.0), 1.0),
            white_light(Vec3::new(10.0, 0.0, 10.0), 0.5),
            gray_sphere(Vec3::new(10.0, 0.0, 5.0), 0.5),
        ]);

        let lit = trace(&open, &ray, Color::ZERO);
        let shadowed = trace(&blocked, &ray, Color::ZERO);

        // Fully occluded: the light contributes nothing, only ambient is left
        assert!(shadowed.x < lit.x);
        assert!(shadowed.y < lit.y);
        assert!(shadowed.z < lit.z);
        let ambient_only = Surface::default().color * MAX_AMBIENT_INTENSITY;
        assert!((shadowed - ambient_only).length() < 1e-5);
    }

    #[test]
    fn test_light_behind_surface_contributes_nothing() {
        // Light directly behind the sphere relative to the hit point
        let scene = test_scene(vec![
            gray_sphere(Vec3::new(10.0, 0.0, 0.0), 1.0),
            white_light(Vec3::new(20.0, 0.0, 0.0), 0.5),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let color = trace(&scene, &ray, Color::ZERO);
        let ambient_only = Surface::default().color * MAX_AMBIENT_INTENSITY;
        assert!((color - ambient_only).length() < 1e-5);
    }

    #[test]
    fn test_output_always_clamped() {
        // Pile several close lights onto a hot specular surface; every
        // channel must still land in [0, 1].
        let hot = Shape::Sphere(Sphere::new(
            Vec3::new(10.0, 0.0, 0.0),
            1.0,
            Surface::new(Vec3::ONE, 1.0, 1.0, 50.0, 1.0),
        ));
        let mut shapes = vec![hot];
        for i in 0..4 {
            shapes.push(white_light(
                Vec3::new(7.0, i as f32 - 1.5, 0.0),
                0.2,
            ));
        }
        let scene = test_scene(shapes);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let color = trace(&scene, &ray, Color::ZERO);
        for channel in [color.x, color.y, color.z] {
            assert!((0.0..=1.0).contains(&channel), "channel {channel} out of range");
        }
    }

    #[test]
    fn test_diffuse_weight_capped() {
        // Two strong unattenuated lights: the diffuse term saturates at its
        // ceiling instead of doubling.
        let sphere = Shape::Sphere(Sphere::new(
            Vec3::new(10.0, 0.0, 0.0),
            1.0,
            Surface::new(Vec3::ONE, 0.0, 1.0, 0.0, 1.0),
        ));
        let flat = Attenuation::new(1.0, 0.0, 0.0);
        let light = |center| {
            Shape::Light(Light::new(
                Shape::Sphere(Sphere::new(center, 0.1, Surface::default())),
                flat,
            ))
        };
        let scene = test_scene(vec![
            sphere,
            light(Vec3::new(5.0, 0.0, 2.0)),
            light(Vec3::new(5.0, 0.0, -2.0)),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let color = trace(&scene, &ray, Color::ZERO);
        // theta ~= 0.89 for each light, so each alone contributes ~0.8 and
        // the pair would exceed the ceiling without the cap
        assert!(color.x <= MAX_DIFFUSE_INTENSITY + 1e-5);
        assert!((color.x - MAX_DIFFUSE_INTENSITY).abs() < 1e-3);
    }

    #[test]
    fn test_specular_highlight_present() {
        // Mirror-facing geometry: light sits along the reflected view
        // direction, so the specular term fires.
        let shiny = Shape::Sphere(Sphere::new(
            Vec3::new(10.0, 0.0, 0.0),
            1.0,
            Surface::new(Vec3::new(0.2, 0.2, 0.2), 0.0, 0.0, 1.0, 10.0),
        ));
        let matte = Shape::Sphere(Sphere::new(
            Vec3::new(10.0, 0.0, 0.0),
            1.0,
            Surface::new(Vec3::new(0.2, 0.2, 0.2), 0.0, 0.0, 0.0, 10.0),
        ));
        let light = white_light(Vec3::new(5.0, 0.0, 1.0), 0.2);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let with_spec = trace(&test_scene(vec![shiny, light.clone()]), &ray, Color::ZERO);
        let without = trace(&test_scene(vec![matte, light]), &ray, Color::ZERO);

        assert!(with_spec.x > without.x);
        // The highlight is white: all channels rise equally
        assert!((with_spec.x - with_spec.y).abs() < 1e-6);
        assert!((with_spec.x - with_spec.z).abs() < 1e-6);
    }
}
