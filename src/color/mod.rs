mod resample;

use smart_leds::RGB8;

use crate::error::{Error, Result};

pub use resample::resample_into;

/// 8-bit wire color
pub type Rgb = RGB8;

/// Linear RGBA color with channels nominally in `[0, 1]`
///
/// Alpha is the shape opacity / envelope weight. It is never transmitted,
/// the encoder pre-multiplies it into RGB.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Build a color from 3 (RGB, opaque) or 4 (RGBA) channels
    pub fn from_slice(channels: &[f32]) -> Result<Self> {
        let color = match *channels {
            [r, g, b] => Self::rgb(r, g, b),
            [r, g, b, a] => Self::new(r, g, b, a),
            _ => return Err(Error::Validation("color must have 3 or 4 channels")),
        };
        if !color.is_finite() {
            return Err(Error::Validation("color channels must be finite"));
        }
        Ok(color)
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    /// RGB scaled by alpha
    #[must_use]
    pub fn premultiplied(self) -> Self {
        Self::new(self.r * self.a, self.g * self.a, self.b * self.a, 1.0)
    }

    /// Every channel clamped to at most 1
    #[must_use]
    pub fn saturated(self) -> Self {
        Self::new(
            self.r.min(1.0),
            self.g.min(1.0),
            self.b.min(1.0),
            self.a.min(1.0),
        )
    }

    /// Same color with alpha scaled by `weight`
    #[must_use]
    pub fn with_weight(self, weight: f32) -> Self {
        Self::new(self.r, self.g, self.b, self.a * weight)
    }

    pub fn max_channel(self) -> f32 {
        self.r.max(self.g).max(self.b).max(self.a)
    }

    /// Channel-wise linear blend, `t = 0` gives `self`, `t = 1` gives `other`
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl core::ops::AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
        self.a += rhs.a;
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::rgb(
            f32::from(rgb.r) / 255.0,
            f32::from(rgb.g) / 255.0,
            f32::from(rgb.b) / 255.0,
        )
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}
