//! Tukey (tapered cosine) window
//!
//! A flat top covering `1 - alpha` of the window with cosine tapers on
//! both sides. `alpha = 0` is a rectangle, `alpha = 1` a Hann window.

use core::f32::consts::PI;

use super::{Layout, Shape, check_color};
use crate::bounds::{Span, bounded};
use crate::calibration::{Unit, check_value};
use crate::color::Color;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tukey {
    led_count: usize,
    span: Span,
    alpha: f32,
    color: Color,
}

impl Tukey {
    /// Create a window of `width` LEDs centered at `pos`
    ///
    /// The window covers `[pos - width / 2, pos - width / 2 + width)`. In
    /// degrees, `width` is converted to the nearest whole number of LEDs.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn new(
        layout: &Layout,
        color: Color,
        pos: f32,
        width: f32,
        alpha: f32,
        unit: Unit,
    ) -> Result<Self> {
        let color = check_color(color)?;
        let center = layout.calibration.resolve_position(pos, unit)?;
        if !alpha.is_finite() {
            return Err(Error::Validation("tukey alpha must be finite"));
        }
        let width = match unit {
            Unit::Index => {
                check_value(width, Unit::Index)?;
                width
            }
            Unit::Degrees => {
                check_value(width, Unit::Degrees)?;
                libm::roundf(layout.calibration.degrees_to_span(width))
            }
        };
        if width < 1.0 {
            return Err(Error::Validation("width must cover at least one LED"));
        }

        // Float casts saturate, so far-off positions surface as range errors.
        let start = libm::floorf(center - width / 2.0) as isize;
        let end = start.saturating_add(width as isize);
        Ok(Self {
            led_count: layout.led_count,
            span: Span::checked(start, end, layout.led_count)?,
            alpha: alpha.clamp(0.0, 1.0),
            color,
        })
    }

    pub const fn span(&self) -> Span {
        self.span
    }

    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    pub const fn color(&self) -> Color {
        self.color
    }
}

/// Window weight of sample `k` in a window of `len` samples
#[allow(clippy::cast_precision_loss)]
pub(crate) fn tukey_weight(k: usize, len: usize, alpha: f32) -> f32 {
    if len <= 1 || alpha <= 0.0 {
        return 1.0;
    }

    let t = k as f32 / (len - 1) as f32;
    let taper = alpha / 2.0;
    if t < taper {
        0.5 * (1.0 + libm::cosf(PI * (2.0 * t / alpha - 1.0)))
    } else if t > 1.0 - taper {
        0.5 * (1.0 + libm::cosf(PI * (2.0 * t / alpha - 2.0 / alpha + 1.0)))
    } else {
        1.0
    }
}

impl Shape for Tukey {
    fn render(&self, leds: &mut [Color]) {
        let len = self.span.len();
        for (k, led) in bounded(leds, self.span).iter_mut().enumerate() {
            *led = self.color.with_weight(tukey_weight(k, len, self.alpha));
        }
    }

    fn led_count(&self) -> usize {
        self.led_count
    }
}
