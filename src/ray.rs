use nalgebra::{Point3, Vector3};

use crate::material::Material;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// Nearest intersection of a ray with a surface.
///
/// `normal` is unit length and always points against the incoming ray;
/// `face` records which side of the surface was struck.
#[derive(Clone, Debug)]
pub struct Hit<'a> {
    pub point: Point3<f32>,
    pub normal: Vector3<f32>,
    pub face: Face,
    pub t: f32,
    pub material: &'a Material,
}

impl<'a> Hit<'a> {
    pub fn new(ray: &Ray, t: f32, outward_normal: Vector3<f32>, material: &'a Material) -> Self {
        let (face, normal) = if ray.direction.dot(&outward_normal) < 0.0 {
            (Face::Front, outward_normal)
        } else {
            (Face::Back, -outward_normal)
        };
        Hit {
            point: ray.at(t),
            normal,
            face,
            t,
            material,
        }
    }

    pub fn front_face(&self) -> bool {
        self.face == Face::Front
    }
}
