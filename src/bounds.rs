use crate::color::Color;
use crate::error::{Error, Result};

/// Half-open range of LEDs covered by a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Validate a signed range against the strip length
    ///
    /// Inverted ranges and ranges reaching outside `[0, led_count)` fail.
    pub fn checked(start: isize, end: isize, led_count: usize) -> Result<Self> {
        let range_error = Error::Range {
            start,
            end,
            led_count,
        };
        if start > end || start < 0 {
            return Err(range_error);
        }
        #[allow(clippy::cast_sign_loss)]
        let span = Self {
            start: start as usize,
            end: end as usize,
        };
        if span.end > led_count {
            return Err(range_error);
        }
        Ok(span)
    }

    /// Get the number of LEDs in the span
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub const fn contains(self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Get a slice of the LEDs within the span
pub(crate) fn bounded(leds: &mut [Color], span: Span) -> &mut [Color] {
    &mut leds[span.start..span.end]
}
