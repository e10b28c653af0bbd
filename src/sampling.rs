//! Random draws used by scattering, lens sampling and scene generation.
//!
//! All helpers take the generator explicitly so that a render (or a test)
//! seeded with the same value always produces the same picture.

use std::iter::repeat_with;

use fastrand::Rng;
use nalgebra::{vector, Vector3};

use crate::picture::Color;

/// Uniform draw in `[min, max)`.
pub fn random_in(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.f32()
}

pub fn random_vec_in_range(rng: &mut Rng, min: f32, max: f32) -> Vector3<f32> {
    vector![random_in(rng, min, max), random_in(rng, min, max), random_in(rng, min, max)]
}

pub fn random_vec_in_unit_sphere(rng: &mut Rng) -> Vector3<f32> {
    repeat_with(|| random_vec_in_range(rng, -1.0, 1.0))
        .find(|vec| vec.magnitude_squared() < 1.0)
        .unwrap_or_else(Vector3::zeros)
}

pub fn random_unit_vec(rng: &mut Rng) -> Vector3<f32> {
    repeat_with(|| random_vec_in_unit_sphere(rng))
        .find(|vec| vec.magnitude_squared() > 1e-12)
        .map(|vec| vec.normalize())
        .unwrap_or_else(Vector3::y)
}

pub fn random_vec_in_unit_disk(rng: &mut Rng) -> Vector3<f32> {
    repeat_with(|| vector![random_in(rng, -1.0, 1.0), random_in(rng, -1.0, 1.0), 0.0])
        .find(|vec| vec.magnitude_squared() < 1.0)
        .unwrap_or_else(Vector3::zeros)
}

pub fn random_color(rng: &mut Rng, min: f32, max: f32) -> Color {
    Color::new(random_in(rng, min, max), random_in(rng, min, max), random_in(rng, min, max))
}
