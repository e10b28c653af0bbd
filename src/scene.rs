//! Ready-made worlds.

use std::str::FromStr;
use std::sync::Arc;

use fastrand::Rng;
use log::trace;
use nalgebra::{point, Point3};

use crate::camera::CameraSettings;
use crate::material::Material;
use crate::object::{Object, SceneError, Sphere};
use crate::picture::Color;
use crate::sampling::{random_color, random_in};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    /// Three spheres (diffuse, glass, metal) resting on a large ground sphere.
    Basic,
    /// Cover picture: a field of small random spheres around three big ones.
    Random,
}

impl FromStr for SceneKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(SceneKind::Basic),
            "random" => Ok(SceneKind::Random),
            _ => Err(()),
        }
    }
}

impl SceneKind {
    pub fn build(self, rng: &mut Rng) -> Result<Object, SceneError> {
        match self {
            SceneKind::Basic => basic(),
            SceneKind::Random => random(rng),
        }
    }

    /// Where the camera should stand to frame the scene.
    pub fn camera(self, aspect_ratio: f32) -> CameraSettings {
        match self {
            SceneKind::Basic => CameraSettings {
                look_from: point![-2.0, 2.0, 1.0],
                look_at: point![0.0, 0.0, -1.0],
                vertical_fov: 40.0,
                aspect_ratio,
                aperture: 0.0,
                focus_distance: 1.0,
                ..CameraSettings::default()
            },
            SceneKind::Random => CameraSettings {
                aspect_ratio,
                ..CameraSettings::default()
            },
        }
    }
}

fn sphere(center: Point3<f32>, radius: f32, material: &Arc<Material>) -> Result<Sphere, SceneError> {
    Sphere::new(center, radius, material.clone())
}

pub fn basic() -> Result<Object, SceneError> {
    let ground = Arc::new(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
    let center = Arc::new(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
    let left = Arc::new(Material::dielectric(1.5));
    let right = Arc::new(Material::metal(Color::new(0.8, 0.6, 0.2), 0.0));

    Ok(Object::List(vec![
        sphere(point![0.0, -100.5, -1.0], 100.0, &ground)?.into(),
        sphere(point![0.0, 0.0, -1.0], 0.5, &center)?.into(),
        sphere(point![-1.0, 0.0, -1.0], 0.5, &left)?.into(),
        sphere(point![1.0, 0.0, -1.0], 0.5, &right)?.into(),
    ]))
}

pub fn random(rng: &mut Rng) -> Result<Object, SceneError> {
    let mut world = Object::default();

    let ground = Arc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5)));
    world.push(sphere(point![0.0, -1000.0, 0.0], 1000.0, &ground)?);

    // small spheres share one glass material
    let glass = Arc::new(Material::dielectric(1.5));
    let clearing = point![4.0, 0.2, 0.0];

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = rng.f32();
            let center = point![a as f32 + 0.9 * rng.f32(), 0.2, b as f32 + 0.9 * rng.f32()];
            if (center - clearing).magnitude() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                let albedo = random_color(rng, 0.0, 1.0) * random_color(rng, 0.0, 1.0);
                Arc::new(Material::lambertian(albedo))
            } else if choose_mat < 0.95 {
                let albedo = random_color(rng, 0.5, 1.0);
                let fuzz = random_in(rng, 0.0, 0.5);
                Arc::new(Material::metal(albedo, fuzz))
            } else {
                glass.clone()
            };
            world.push(sphere(center, 0.2, &material)?);
        }
    }

    world.push(sphere(point![0.0, 1.0, 0.0], 1.0, &glass)?);
    let diffuse = Arc::new(Material::lambertian(Color::new(0.4, 0.2, 0.1)));
    world.push(sphere(point![-4.0, 1.0, 0.0], 1.0, &diffuse)?);
    let metal = Arc::new(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0));
    world.push(sphere(point![4.0, 1.0, 0.0], 1.0, &metal)?);

    trace!(target: "app", "Generated random scene with {} spheres", world.len());
    Ok(world)
}
