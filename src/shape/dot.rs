//! Single-LED shape

use super::{Layout, Shape, check_color};
use crate::bounds::Span;
use crate::calibration::Unit;
use crate::color::Color;
use crate::error::Result;

/// One LED set to the fill color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    led_count: usize,
    index: usize,
    color: Color,
}

impl Dot {
    /// Create a dot at `pos`
    ///
    /// Degree positions are rounded to the nearest LED.
    pub fn new(layout: &Layout, color: Color, pos: f32, unit: Unit) -> Result<Self> {
        let color = check_color(color)?;
        let index = layout.resolve_index(pos, unit)?;
        let span = Span::checked(index, index.saturating_add(1), layout.led_count)?;
        Ok(Self {
            led_count: layout.led_count,
            index: span.start,
            color,
        })
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn color(&self) -> Color {
        self.color
    }
}

impl Shape for Dot {
    fn render(&self, leds: &mut [Color]) {
        leds[self.index] = self.color;
    }

    fn led_count(&self) -> usize {
        self.led_count
    }
}
