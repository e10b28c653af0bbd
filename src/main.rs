//! Monte Carlo path tracer for spheres, following the
//! [Ray Tracing in One Weekend](https://raytracing.github.io/) book.
//!
//! Renders one of the built-in scenes and writes it as a plain-text PPM,
//! either to stdout or to the file given with `--output`.

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{bail, Context, Result};
use fastrand::Rng;
use log::info;

use crate::camera::Camera;
use crate::config::RenderConfig;

mod camera;
mod config;
mod material;
mod object;
mod picture;
mod ray;
mod render;
mod sampling;
mod scene;

fn main() -> Result<()> {
    env_logger::builder().target(env_logger::Target::Stderr).init();

    let config = RenderConfig::from_args(std::env::args().skip(1)).context("invalid arguments")?;
    let mut rng = Rng::with_seed(config.seed);

    let world = config.scene.build(&mut rng).context("building scene")?;
    if world.is_empty() {
        bail!("{:?} scene has no spheres", config.scene);
    }
    info!(target: "app", "Built {:?} scene with {} spheres", config.scene, world.len());
    let camera = Camera::new(&config.scene.camera(config.aspect_ratio));

    let picture = render::render(&camera, &world, &config, &mut rng);

    match &config.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            picture.write_ppm(&mut BufWriter::new(file))
                .with_context(|| format!("writing {}", path.display()))?;
            info!(target: "app", "Wrote {}", path.display());
        }
        None => {
            picture.write_ppm(&mut BufWriter::new(io::stdout().lock())).context("writing to stdout")?;
        }
    }
    Ok(())
}
