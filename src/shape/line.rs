//! Solid run of LEDs

use super::{Layout, Shape, check_color};
use crate::bounds::{Span, bounded};
use crate::calibration::Unit;
use crate::color::Color;
use crate::error::Result;

/// LEDs in `[start, stop)` set to the fill color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    led_count: usize,
    span: Span,
    color: Color,
}

impl Line {
    /// Create a line covering `[pos[0], pos[1])`
    pub fn new(layout: &Layout, color: Color, pos: [f32; 2], unit: Unit) -> Result<Self> {
        let color = check_color(color)?;
        let (start, stop) = layout.resolve_range(pos, unit)?;
        Ok(Self {
            led_count: layout.led_count,
            span: Span::checked(start, stop, layout.led_count)?,
            color,
        })
    }

    pub const fn span(&self) -> Span {
        self.span
    }

    pub const fn color(&self) -> Color {
        self.color
    }
}

impl Shape for Line {
    fn render(&self, leds: &mut [Color]) {
        bounded(leds, self.span).fill(self.color);
    }

    fn led_count(&self) -> usize {
        self.led_count
    }
}
