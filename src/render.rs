use std::time::Instant;

use fastrand::Rng;
use log::{debug, info};

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::object::Object;
use crate::picture::{Color, Picture, Rgb8};
use crate::ray::Ray;

/// Closest accepted hit distance. Keeps bounced rays from re-hitting the
/// surface they start on (shadow acne).
pub const T_MIN: f32 = 0.001;

const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// White at the bottom, blue at the top.
pub fn sky_color(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    Color::lerp(Color::WHITE, SKY_BLUE, t)
}

/// Light arriving along `ray` after at most `bounces_left` scatter events.
pub fn ray_color(ray: &Ray, world: &Object, bounces_left: u32, rng: &mut Rng) -> Color {
    if bounces_left == 0 {
        return Color::BLACK;
    }

    match world.hit(ray, T_MIN..=f32::INFINITY) {
        Some(hit) => match hit.material.scatter(ray, &hit, rng) {
            Some(scatter) => scatter.attenuation * ray_color(&scatter.scattered, world, bounces_left - 1, rng),
            None => Color::BLACK,
        },
        None => sky_color(ray),
    }
}

/// Sum (not average) of `samples_per_pixel` jittered samples through pixel
/// `(x, y)`, where `y = 0` is the bottom row.
pub fn render_pixel(x: u32, y: u32, camera: &Camera, world: &Object, config: &RenderConfig, rng: &mut Rng) -> Color {
    let width = config.image_width;
    let height = config.image_height();
    let mut pixel_color = Color::BLACK;
    for _ in 0..config.samples_per_pixel {
        let u = (x as f32 + rng.f32()) / (width.max(2) - 1) as f32;
        let v = (y as f32 + rng.f32()) / (height.max(2) - 1) as f32;
        let ray = camera.ray(u, v, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }
    pixel_color
}

pub fn render(camera: &Camera, world: &Object, config: &RenderConfig, rng: &mut Rng) -> Picture {
    let width = config.image_width;
    let height = config.image_height();
    let mut picture = Picture::new((width, height));

    info!(target: "app", "Starting render: {}x{}, {} samples, depth {}", width, height, config.samples_per_pixel, config.max_depth);
    let start = Instant::now();
    for y in (0..height).rev() {
        debug!(target: "app", "Scanlines remaining: {}", y);
        for x in 0..width {
            let sum = render_pixel(x, y, camera, world, config, rng);
            *picture.pixel_mut(x, y) = Rgb8::from_samples(sum, config.samples_per_pixel);
        }
    }
    let elapsed = start.elapsed();
    info!(target: "app", "Finished rendering. Took {:?}", elapsed);

    picture
}
