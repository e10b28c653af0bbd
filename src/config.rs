use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::scene::SceneKind;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("{0} must be at least 1")]
    Zero(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub image_width: u32,
    pub aspect_ratio: f32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub seed: u64,
    pub scene: SceneKind,
    /// `None` writes the picture to stdout.
    pub output: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
            scene: SceneKind::Random,
            output: None,
        }
    }
}

fn parse_value<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_owned()))?;
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_owned(),
        value,
    })
}

impl RenderConfig {
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f32 / self.aspect_ratio) as u32).max(1)
    }

    /// Parses command line flags (without the program name) on top of the
    /// defaults.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
        where I: IntoIterator<Item=String> {
        let mut config = RenderConfig::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--width" => config.image_width = parse_value(&flag, args.next())?,
                "--samples" => config.samples_per_pixel = parse_value(&flag, args.next())?,
                "--depth" => config.max_depth = parse_value(&flag, args.next())?,
                "--seed" => config.seed = parse_value(&flag, args.next())?,
                "--scene" => config.scene = parse_value(&flag, args.next())?,
                "--output" => config.output = Some(parse_value(&flag, args.next())?),
                _ => return Err(ConfigError::UnknownArgument(flag)),
            }
        }

        if config.image_width == 0 {
            return Err(ConfigError::Zero("--width"));
        }
        if config.samples_per_pixel == 0 {
            return Err(ConfigError::Zero("--samples"));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn defaults_match_tutorial_image() {
        let config = RenderConfig::from_args(Vec::new()).unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.image_height(), 225);
    }

    #[test]
    fn flags_override_defaults() {
        let config = RenderConfig::from_args(args("--width 200 --samples 8 --depth 5 --seed 42 --scene basic --output out.ppm")).unwrap();
        assert_eq!(config.image_width, 200);
        assert_eq!(config.image_height(), 112);
        assert_eq!(config.samples_per_pixel, 8);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.seed, 42);
        assert_eq!(config.scene, SceneKind::Basic);
        assert_eq!(config.output, Some(PathBuf::from("out.ppm")));
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert_eq!(RenderConfig::from_args(args("--fast")), Err(ConfigError::UnknownArgument("--fast".into())));
        assert_eq!(RenderConfig::from_args(args("--depth")), Err(ConfigError::MissingValue("--depth".into())));
        assert_eq!(
            RenderConfig::from_args(args("--samples many")),
            Err(ConfigError::InvalidValue { flag: "--samples".into(), value: "many".into() }),
        );
        assert_eq!(RenderConfig::from_args(args("--scene cornell")).unwrap_err().to_string(), "invalid value for --scene: cornell");
        assert_eq!(RenderConfig::from_args(args("--width 0")), Err(ConfigError::Zero("--width")));
    }

    #[test]
    fn tiny_images_keep_one_row() {
        let config = RenderConfig { image_width: 1, ..RenderConfig::default() };
        assert_eq!(config.image_height(), 1);
    }
}
