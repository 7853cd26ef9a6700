//! Phong ray caster demo.
//!
//! Builds the showcase scene (gray ground plane, five colored spheres, two
//! light spheres), renders it, and saves a PNG. A second frame with one
//! light moved shows the scene-per-frame lifecycle: animation builds a new
//! immutable scene instead of mutating the one just rendered.

use anyhow::{Context, Result};
use caster_renderer::{
    render, Attenuation, Light, Plane, RenderConfig, Scene, Shape, Sphere, Surface, Vec3,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let config = RenderConfig::default();

    println!("Caster - Phong demo");
    println!("===================");
    println!("Rendering {}x{}...", WIDTH, HEIGHT);

    let start = std::time::Instant::now();
    let scene = build_scene(Vec3::new(15.0, -3.0, 0.0))?;
    let image = render(&scene, &config);
    println!("Frame 1 in {:?}", start.elapsed());
    save_png(&image, "frame1.png")?;

    // Move the first light for the next frame: a new scene, not a mutation
    let start = std::time::Instant::now();
    let scene = build_scene(Vec3::new(15.0, 3.0, -1.0))?;
    let image = render(&scene, &config);
    println!("Frame 2 in {:?}", start.elapsed());
    save_png(&image, "frame2.png")?;

    Ok(())
}

fn build_scene(light_position: Vec3) -> Result<Scene> {
    let white = Vec3::ONE;
    let shapes = vec![
        Shape::Plane(Plane::new(
            Vec3::new(0.0, 0.0, -4.0),
            Vec3::Z,
            Surface::new(Vec3::new(0.75, 0.75, 0.75), 0.2, 1.0, 0.2, 50.0),
        )),
        Shape::Sphere(Sphere::new(
            Vec3::new(20.0, -1.0, 1.5),
            2.0,
            Surface::new(Vec3::new(1.0, 0.0, 0.0), 1.0, 1.0, 0.8, 5.0),
        )),
        Shape::Sphere(Sphere::new(
            Vec3::new(22.0, 2.5, 2.5),
            2.0,
            Surface::new(Vec3::new(0.0, 0.0, 1.0), 1.0, 0.5, 1.0, 50.0),
        )),
        Shape::Sphere(Sphere::new(
            Vec3::new(18.0, 0.2, 0.0),
            0.5,
            Surface::new(Vec3::new(0.0, 1.0, 0.0), 1.0, 1.0, 0.0, 50.0),
        )),
        Shape::Sphere(Sphere::new(
            Vec3::new(24.0, 2.5, 0.0),
            1.5,
            Surface::new(Vec3::new(1.0, 0.78, 0.0), 1.0, 0.5, 0.5, 1.0),
        )),
        Shape::Sphere(Sphere::new(
            Vec3::new(17.0, 0.5, 2.0),
            0.5,
            Surface::new(Vec3::new(0.75, 0.75, 0.75), 1.0, 1.0, 1.0, 500.0),
        )),
        Shape::Light(Light::new(
            Shape::Sphere(Sphere::new(
                light_position,
                0.5,
                Surface::new(white, 1.0, 1.0, 1.0, 50.0),
            )),
            Attenuation::default(),
        )),
        Shape::Light(Light::new(
            Shape::Sphere(Sphere::new(
                Vec3::new(15.0, 3.0, 4.0),
                0.5,
                Surface::new(Vec3::new(1.0, 0.0, 0.0), 1.0, 1.0, 1.0, 50.0),
            )),
            Attenuation::default(),
        )),
    ];

    let scene = Scene::new(
        Vec3::new(-13.0, 0.0, 0.0),
        Vec3::new(-10.0, -2.0, 1.5),
        (4.0, 3.0),
        (WIDTH, HEIGHT),
        shapes,
    )?;
    Ok(scene)
}

fn save_png(image: &caster_renderer::PixelBuffer, path: &str) -> Result<()> {
    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .context("pixel buffer does not match image dimensions")?;
    rgb.save(path).with_context(|| format!("saving {path}"))?;
    println!("Saved {path}");
    Ok(())
}
