//! Arbitrary per-LED colors placed over a range

use super::{Layout, Shape, check_color};
use crate::bounds::{Span, bounded};
use crate::calibration::Unit;
use crate::color::{Color, resample_into};
use crate::error::{Error, Result};

/// Borrowed colors stretched over `[extent[0], extent[1])`
///
/// When the color count differs from the extent length the colors are
/// linearly resampled; otherwise they are placed as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelArray<'a> {
    led_count: usize,
    span: Span,
    colors: &'a [Color],
}

impl<'a> PixelArray<'a> {
    pub fn new(layout: &Layout, colors: &'a [Color], extent: [f32; 2], unit: Unit) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::Validation("pixel array needs at least one color"));
        }
        for color in colors {
            check_color(*color)?;
        }
        let (start, stop) = layout.resolve_range(extent, unit)?;
        Ok(Self {
            led_count: layout.led_count,
            span: Span::checked(start, stop, layout.led_count)?,
            colors,
        })
    }

    pub const fn span(&self) -> Span {
        self.span
    }

    pub const fn colors(&self) -> &'a [Color] {
        self.colors
    }
}

impl Shape for PixelArray<'_> {
    fn render(&self, leds: &mut [Color]) {
        resample_into(self.colors, bounded(leds, self.span));
    }

    fn led_count(&self) -> usize {
        self.led_count
    }
}
