use std::ops::Neg;

use fastrand::Rng;
use nalgebra::Vector3;

use crate::picture::Color;
use crate::ray::{Hit, Ray};
use crate::sampling::{random_unit_vec, random_vec_in_unit_sphere};

/// Below this magnitude (per component) a diffuse scatter direction is
/// replaced by the surface normal.
const NEAR_ZERO: f32 = 1e-8;

#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    Lambertian { albedo: Color },
    Metal { albedo: Color, fuzz: f32 },
    Dielectric { refractive_index: f32 },
}

/// Outcome of a ray that was not absorbed.
#[derive(Clone, Copy, Debug)]
pub struct Scatter {
    pub attenuation: Color,
    pub scattered: Ray,
}

pub fn reflect(v: &Vector3<f32>, n: &Vector3<f32>) -> Vector3<f32> {
    v - 2.0 * v.dot(n) * n
}

/// Snell's law for a unit incident direction `uv` and unit normal `n`.
pub fn refract(uv: &Vector3<f32>, n: &Vector3<f32>, etai_over_etat: f32) -> Vector3<f32> {
    let cos_theta = f32::min((-uv).dot(n), 1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = (1.0 - r_out_perp.magnitude_squared()).abs().sqrt().neg() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation. Matched indices form no interface and never
/// reflect.
pub fn reflectance(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    if r0 == 0.0 {
        return 0.0;
    }
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

fn near_zero(v: &Vector3<f32>) -> bool {
    v.iter().all(|c| c.abs() < NEAR_ZERO)
}

/// Diffuse bounce direction `normal + offset`, falling back to the normal
/// when the offset cancels it.
fn diffuse_direction(normal: &Vector3<f32>, offset: Vector3<f32>) -> Vector3<f32> {
    let direction = normal + offset;
    if near_zero(&direction) {
        *normal
    } else {
        direction
    }
}

impl Material {
    /// Returns `None` when the ray is absorbed.
    pub fn scatter(&self, ray: &Ray, hit: &Hit, rng: &mut Rng) -> Option<Scatter> {
        match self {
            Material::Lambertian { albedo } => {
                let direction = diffuse_direction(&hit.normal, random_unit_vec(rng));
                Some(Scatter {
                    attenuation: *albedo,
                    scattered: Ray::new(hit.point, direction),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(&ray.direction.normalize(), &hit.normal);
                let direction = if *fuzz > 0.0 {
                    reflected + *fuzz * random_vec_in_unit_sphere(rng)
                } else {
                    reflected
                };
                if direction.dot(&hit.normal) <= 0.0 {
                    return None;
                }
                Some(Scatter {
                    attenuation: *albedo,
                    scattered: Ray::new(hit.point, direction),
                })
            }
            Material::Dielectric { refractive_index } => {
                let refraction_ratio = if hit.front_face() {
                    1.0 / refractive_index
                } else {
                    *refractive_index
                };

                let unit_direction = ray.direction.normalize();

                let cos_theta = unit_direction.neg().dot(&hit.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                let cannot_refract = refraction_ratio * sin_theta > 1.0;
                let direction = if cannot_refract || reflectance(cos_theta, refraction_ratio) > rng.f32() {
                    reflect(&unit_direction, &hit.normal)
                } else {
                    refract(&unit_direction, &hit.normal, refraction_ratio)
                };

                Some(Scatter {
                    attenuation: Color::WHITE,
                    scattered: Ray::new(hit.point, direction),
                })
            }
        }
    }

    pub fn lambertian(albedo: Color) -> Material {
        Material::Lambertian { albedo }
    }

    pub fn metal(albedo: Color, fuzz: f32) -> Material {
        Material::Metal { albedo, fuzz: fuzz.clamp(0.0, 1.0) }
    }

    pub fn dielectric(refractive_index: f32) -> Material {
        Material::Dielectric { refractive_index }
    }
}
