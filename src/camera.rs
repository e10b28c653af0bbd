use fastrand::Rng;
use nalgebra::{point, vector, Point3, Vector3};

use crate::ray::Ray;
use crate::sampling::random_vec_in_unit_disk;

#[derive(Clone, Debug, PartialEq)]
pub struct CameraSettings {
    pub look_from: Point3<f32>,
    pub look_at: Point3<f32>,
    pub vup: Vector3<f32>,
    /// Vertical field of view in degrees.
    pub vertical_fov: f32,
    pub aspect_ratio: f32,
    pub aperture: f32,
    pub focus_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            look_from: point![13.0, 2.0, 3.0],
            look_at: Point3::origin(),
            vup: vector![0.0, 1.0, 0.0],
            vertical_fov: 20.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.1,
            focus_distance: 10.0,
        }
    }
}

/// Thin-lens camera. `ray(s, t)` maps viewport coordinates in `[0, 1]`,
/// with `(0, 0)` at the lower left corner, to a primary ray.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    origin: Point3<f32>,
    lower_left_corner: Point3<f32>,
    horizontal: Vector3<f32>,
    vertical: Vector3<f32>,
    u: Vector3<f32>,
    v: Vector3<f32>,
    lens_radius: f32,
}

impl Camera {
    pub fn new(settings: &CameraSettings) -> Self {
        let theta = settings.vertical_fov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = settings.aspect_ratio * viewport_height;

        let w = (settings.look_from - settings.look_at).normalize();
        let u = settings.vup.cross(&w).normalize();
        let v = w.cross(&u);

        let horizontal = settings.focus_distance * viewport_width * u;
        let vertical = settings.focus_distance * viewport_height * v;
        let lower_left_corner = settings.look_from - horizontal / 2.0 - vertical / 2.0 - settings.focus_distance * w;

        Camera {
            origin: settings.look_from,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: settings.aperture / 2.0,
        }
    }

    pub fn ray(&self, s: f32, t: f32, rng: &mut Rng) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_vec_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vector3::zeros()
        };
        let origin = self.origin + offset;
        Ray::new(
            origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - origin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn pinhole() -> CameraSettings {
        CameraSettings {
            look_from: Point3::origin(),
            look_at: point![0.0, 0.0, -1.0],
            vup: vector![0.0, 1.0, 0.0],
            vertical_fov: 90.0,
            aspect_ratio: 2.0,
            aperture: 0.0,
            focus_distance: 1.0,
        }
    }

    #[test]
    fn center_ray_looks_at_target() {
        let camera = Camera::new(&pinhole());
        let mut rng = Rng::with_seed(0);

        let ray = camera.ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin, Point3::origin());
        assert!((ray.direction - vector![0.0, 0.0, -1.0]).magnitude() < EPS);
    }

    #[test]
    fn corners_span_the_viewport() {
        let camera = Camera::new(&pinhole());
        let mut rng = Rng::with_seed(0);

        // 90 degree fov at focus distance 1 gives a viewport 2 high, 4 wide
        let lower_left = camera.ray(0.0, 0.0, &mut rng);
        assert!((lower_left.direction - vector![-2.0, -1.0, -1.0]).magnitude() < EPS);
        let upper_right = camera.ray(1.0, 1.0, &mut rng);
        assert!((upper_right.direction - vector![2.0, 1.0, -1.0]).magnitude() < EPS);
    }

    #[test]
    fn lens_rays_converge_on_focus_plane() {
        let settings = CameraSettings { aperture: 2.0, focus_distance: 5.0, ..pinhole() };
        let camera = Camera::new(&settings);
        let mut rng = Rng::with_seed(21);

        for _ in 0..100 {
            let ray = camera.ray(0.5, 0.5, &mut rng);
            assert!(ray.origin.coords.magnitude() <= 1.0 + EPS);
            assert!((ray.at(1.0) - point![0.0, 0.0, -5.0]).magnitude() < EPS);
        }
    }
}
