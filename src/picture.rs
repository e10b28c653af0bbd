use std::io::{self, Write};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Linear RGB color. Components are not clamped, so sums of many samples
/// can be carried around until the picture is encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// `t = 0` gives `from`, `t = 1` gives `to`.
    pub fn lerp(from: Color, to: Color, t: f32) -> Self {
        (1.0 - t) * from + t * to
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Color::BLACK, Add::add)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Self) -> Self::Output {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Self::Output {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn encode(value: f32, scale: f32) -> u8 {
    // gamma 2
    let value = (value * scale).max(0.0).sqrt();
    (256.0 * value.clamp(0.0, 0.999)) as u8
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }

    /// Encodes an unnormalized sum of `samples` linear colors.
    pub fn from_samples(sum: Color, samples: u32) -> Self {
        let scale = 1.0 / samples.max(1) as f32;
        Rgb8::new(encode(sum.r, scale), encode(sum.g, scale), encode(sum.b, scale))
    }
}

/// Pixel buffer addressed with `y = 0` at the bottom row.
pub struct Picture {
    pixels: Vec<Rgb8>,
    size: (u32, u32),
}

impl Picture {
    pub fn new(size: (u32, u32)) -> Self {
        let pixels = vec![Rgb8::default(); size.0 as usize * size.1 as usize];
        Picture { pixels, size }
    }

    pub fn width(&self) -> u32 {
        self.size.0
    }

    pub fn height(&self) -> u32 {
        self.size.1
    }

    fn to_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width() as usize + x as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> &Rgb8 {
        &self.pixels[self.to_index(x, y)]
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut Rgb8 {
        let index = self.to_index(x, y);
        &mut self.pixels[index]
    }

    /// Writes the picture as plain-text PPM, top row first.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", self.width(), self.height())?;
        writeln!(out, "255")?;
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let pixel = self.pixel(x, y);
                writeln!(out, "{} {} {}", pixel.r, pixel.g, pixel.b)?;
            }
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_multiply_componentwise() {
        let a = Color::new(0.5, 0.25, 1.0);
        let b = Color::new(0.5, 2.0, 0.0);
        assert_eq!(a * b, Color::new(0.25, 0.5, 0.0));
        assert_eq!(2.0 * a, Color::new(1.0, 0.5, 2.0));
    }

    #[test]
    fn lerp_hits_both_ends() {
        let sky = Color::new(0.5, 0.7, 1.0);
        assert_eq!(Color::lerp(Color::WHITE, sky, 0.0), Color::WHITE);
        assert_eq!(Color::lerp(Color::WHITE, sky, 1.0), sky);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut acc = Color::BLACK;
        acc += Color::new(0.25, 0.5, 1.0);
        acc += Color::new(0.25, 0.5, 1.0);
        assert_eq!(acc, Color::new(0.5, 1.0, 2.0));
    }

    #[test]
    fn sum_starts_from_black() {
        let total: Color = std::iter::repeat(Color::new(0.25, 0.5, 1.0)).take(4).sum();
        assert_eq!(total, Color::new(1.0, 2.0, 4.0));
        assert_eq!(std::iter::empty::<Color>().sum::<Color>(), Color::BLACK);
    }

    #[test]
    fn samples_are_averaged_gamma_corrected_and_clamped() {
        // 4 samples of 0.25 average to 0.25, gamma 2 gives 0.5
        assert_eq!(Rgb8::from_samples(Color::new(1.0, 0.0, 400.0), 4), Rgb8::new(128, 0, 255));
        assert_eq!(Rgb8::from_samples(Color::new(-1.0, 1.0, 1.0), 1), Rgb8::new(0, 255, 255));
    }

    #[test]
    fn ppm_is_written_top_row_first() {
        let mut picture = Picture::new((2, 2));
        *picture.pixel_mut(0, 1) = Rgb8::new(1, 2, 3);
        *picture.pixel_mut(1, 0) = Rgb8::new(4, 5, 6);

        let mut out = Vec::new();
        picture.write_ppm(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 2\n255\n1 2 3\n0 0 0\n0 0 0\n4 5 6\n");
    }
}
