//! Light shapes with a closed set of variants
//!
//! Shapes are built against a [`Layout`] (LED count plus calibration) and
//! resolve their geometry once, at construction. Rendering is a pure
//! function of that geometry, so the same shape can be composited any
//! number of times.

mod dot;
mod gaussian;
mod line;
mod pixel_array;
mod tukey;

pub use dot::Dot;
pub use gaussian::{DEFAULT_THRESHOLD, Gaussian};
pub use line::Line;
pub use pixel_array::PixelArray;
pub use tukey::Tukey;

use crate::calibration::{Calibration, Unit, check_value};
use crate::color::Color;
use crate::error::{Error, Result};

/// Strip geometry shapes are built against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub led_count: usize,
    pub calibration: Calibration,
}

impl Layout {
    pub const fn new(led_count: usize, calibration: Calibration) -> Self {
        Self {
            led_count,
            calibration,
        }
    }

    /// Resolve a position to the nearest LED index
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn resolve_index(&self, value: f32, unit: Unit) -> Result<isize> {
        check_value(value, unit)?;
        Ok(match unit {
            Unit::Index => value as isize,
            Unit::Degrees => self.calibration.degrees_to_index(value),
        })
    }

    /// Resolve a `[start, stop]` pair to ascending LED indices
    ///
    /// The pair must be given in ascending order in its own unit. Degree
    /// ranges are reordered after conversion since the calibration may
    /// run against the index direction.
    pub(crate) fn resolve_range(&self, range: [f32; 2], unit: Unit) -> Result<(isize, isize)> {
        let [start, stop] = range;
        let start_index = self.resolve_index(start, unit)?;
        let stop_index = self.resolve_index(stop, unit)?;
        if start > stop {
            return Err(Error::Range {
                start: start_index,
                end: stop_index,
                led_count: self.led_count,
            });
        }
        Ok((start_index.min(stop_index), start_index.max(stop_index)))
    }
}

/// Common interface of every shape variant
pub trait Shape {
    /// Write the contribution into `leds`
    ///
    /// `leds` is zeroed and exactly as long as the layout the shape was
    /// built for.
    fn render(&self, leds: &mut [Color]);

    /// Number of LEDs of the layout the shape was built for
    fn led_count(&self) -> usize;
}

pub(crate) fn check_color(color: Color) -> Result<Color> {
    if color.is_finite() {
        Ok(color)
    } else {
        Err(Error::Validation("color channels must be finite"))
    }
}

/// Shape slot - enum containing all possible shapes
#[derive(Debug, Clone)]
pub enum LightShape<'a> {
    /// Single LED
    Dot(Dot),
    /// Solid run of LEDs
    Line(Line),
    /// Gaussian envelope with a hard cutoff
    Gaussian(Gaussian),
    /// Tapered cosine window
    Tukey(Tukey),
    /// Arbitrary colors stretched over a range
    PixelArray(PixelArray<'a>),
}

impl LightShape<'_> {
    pub fn led_count(&self) -> usize {
        match self {
            Self::Dot(shape) => shape.led_count(),
            Self::Line(shape) => shape.led_count(),
            Self::Gaussian(shape) => shape.led_count(),
            Self::Tukey(shape) => shape.led_count(),
            Self::PixelArray(shape) => shape.led_count(),
        }
    }

    /// Fill color the shape was built with, if it has a single one
    pub fn fill_color(&self) -> Option<Color> {
        match self {
            Self::Dot(shape) => Some(shape.color()),
            Self::Line(shape) => Some(shape.color()),
            Self::Gaussian(shape) => Some(shape.color()),
            Self::Tukey(shape) => Some(shape.color()),
            Self::PixelArray(_) => None,
        }
    }

    /// Render the full contribution buffer into `leds`
    ///
    /// Entries without opacity are written as black so that every blend
    /// mode agrees on uncovered LEDs.
    pub fn render_into(&self, leds: &mut [Color]) -> Result<()> {
        if leds.len() != self.led_count() {
            return Err(Error::Size {
                expected: self.led_count(),
                actual: leds.len(),
            });
        }
        leds.fill(Color::BLACK);

        match self {
            Self::Dot(shape) => shape.render(leds),
            Self::Line(shape) => shape.render(leds),
            Self::Gaussian(shape) => shape.render(leds),
            Self::Tukey(shape) => shape.render(leds),
            Self::PixelArray(shape) => shape.render(leds),
        }

        for led in leds.iter_mut().filter(|led| led.a.is_nan() || led.a <= 0.0) {
            *led = Color::BLACK;
        }
        Ok(())
    }
}

impl From<Dot> for LightShape<'_> {
    fn from(shape: Dot) -> Self {
        Self::Dot(shape)
    }
}

impl From<Line> for LightShape<'_> {
    fn from(shape: Line) -> Self {
        Self::Line(shape)
    }
}

impl From<Gaussian> for LightShape<'_> {
    fn from(shape: Gaussian) -> Self {
        Self::Gaussian(shape)
    }
}

impl From<Tukey> for LightShape<'_> {
    fn from(shape: Tukey) -> Self {
        Self::Tukey(shape)
    }
}

impl<'a> From<PixelArray<'a>> for LightShape<'a> {
    fn from(shape: PixelArray<'a>) -> Self {
        Self::PixelArray(shape)
    }
}
