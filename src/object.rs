use std::ops::RangeInclusive;
use std::sync::Arc;

use nalgebra::Point3;
use thiserror::Error;

use crate::material::Material;
use crate::ray::{Hit, Ray};

#[derive(Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
}

/// Sphere sharing its material with any number of other spheres.
#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Point3<f32>,
    pub radius: f32,
    pub material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: Point3<f32>, radius: f32, material: Arc<Material>) -> Result<Self, SceneError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Sphere { center, radius, material })
    }

    /// `ray.direction` must be non-zero.
    pub fn hit(&self, ray: &Ray, t_rng: RangeInclusive<f32>) -> Option<Hit<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.magnitude_squared();
        let half_b = oc.dot(&ray.direction);
        let c = oc.magnitude_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // find the nearest root that lies in the acceptable range.
        let mut root = (-half_b - sqrtd) / a;
        if !t_rng.contains(&root) {
            root = (-half_b + sqrtd) / a;
            if !t_rng.contains(&root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(Hit::new(ray, root, outward_normal, &self.material))
    }
}

/// A single surface or an unordered group of them. Both answer `hit` the
/// same way, so a whole scene is just another `Object`.
#[derive(Clone, Debug)]
pub enum Object {
    Sphere(Sphere),
    List(Vec<Object>),
}

impl Object {
    pub fn hit(&self, ray: &Ray, t_rng: RangeInclusive<f32>) -> Option<Hit<'_>> {
        match self {
            Object::Sphere(sphere) => sphere.hit(ray, t_rng),
            Object::List(list) => {
                let t_min = *t_rng.start();
                let mut closest_so_far = *t_rng.end();
                let mut nearest = None;
                for obj in list {
                    if let Some(hit) = obj.hit(ray, t_min..=closest_so_far) {
                        closest_so_far = hit.t;
                        nearest = Some(hit);
                    }
                }
                nearest
            }
        }
    }

    /// Number of spheres, counting through nested lists.
    pub fn len(&self) -> usize {
        match self {
            Object::Sphere(_) => 1,
            Object::List(list) => list.iter().map(Object::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds to a list; a lone sphere is first turned into a list holding it.
    pub fn push(&mut self, obj: impl Into<Object>) {
        if let Object::Sphere(_) = self {
            let sphere = std::mem::replace(self, Object::List(Vec::new()));
            *self = Object::List(vec![sphere]);
        }
        if let Object::List(list) = self {
            list.push(obj.into());
        }
    }
}

impl From<Sphere> for Object {
    fn from(value: Sphere) -> Self {
        Object::Sphere(value)
    }
}

impl Default for Object {
    fn default() -> Self {
        Object::List(Vec::new())
    }
}
