//! Gaussian envelope
//!
//! Opacity follows `exp(-(x - pos)^2 / (2 * width^2))` over the whole strip.
//! Entries whose envelope falls below the threshold are cut to black, so
//! the bell has finite support instead of an endless dim tail.

use super::{Layout, Shape, check_color};
use crate::calibration::Unit;
use crate::color::Color;
use crate::error::{Error, Result};

/// Envelope value below which LEDs stay dark
pub const DEFAULT_THRESHOLD: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    led_count: usize,
    /// Center as a fractional LED index
    center: f32,
    /// Standard deviation in LEDs
    width: f32,
    threshold: f32,
    color: Color,
}

impl Gaussian {
    /// Create a Gaussian centered at `pos` with standard deviation `width`
    ///
    /// In degrees, `width` is an angular width converted to a number of LEDs.
    pub fn new(
        layout: &Layout,
        color: Color,
        pos: f32,
        width: f32,
        unit: Unit,
    ) -> Result<Self> {
        let color = check_color(color)?;
        let center = layout.calibration.resolve_position(pos, unit)?;
        if !width.is_finite() {
            return Err(Error::Validation("width must be finite"));
        }
        let width = match unit {
            Unit::Index => width,
            Unit::Degrees => layout.calibration.degrees_to_span(width),
        };
        if width <= 0.0 {
            return Err(Error::Validation("width must be positive"));
        }

        Ok(Self {
            led_count: layout.led_count,
            center,
            width,
            threshold: DEFAULT_THRESHOLD,
            color,
        })
    }

    /// Set the envelope cutoff
    pub fn with_threshold(mut self, threshold: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::Validation("threshold must be within [0, 1]"));
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub const fn center(&self) -> f32 {
        self.center
    }

    pub const fn width(&self) -> f32 {
        self.width
    }

    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    /// Envelope value at a LED
    #[allow(clippy::cast_precision_loss)]
    pub fn envelope(&self, index: usize) -> f32 {
        let distance = index as f32 - self.center;
        libm::expf(-(distance * distance) / (2.0 * self.width * self.width))
    }
}

impl Shape for Gaussian {
    fn render(&self, leds: &mut [Color]) {
        for (i, led) in leds.iter_mut().enumerate() {
            let envelope = self.envelope(i);
            if envelope >= self.threshold {
                *led = self.color.with_weight(envelope);
            }
        }
    }

    fn led_count(&self) -> usize {
        self.led_count
    }
}
