//! Wire frame encoding
//!
//! A frame is a 4-byte zero start marker, one 4-byte word per LED and a
//! zero end marker of `ceil((N / 2 + 1) / 8)` bytes. Each LED word is a
//! brightness byte `0b111x_xxxx` carrying a 5-bit level, followed by the
//! color bytes in B, G, R order.
//!
//! The level is chosen per LED so that `color * level / 31` reproduces the
//! gamma-corrected intensity, which keeps 8 bits of color resolution for
//! dim pixels instead of collapsing them into the bottom few codes.

use crate::color::{Color, Rgb};
use crate::error::{Error, Result};
use crate::gamma::GammaTable;

/// Zero bytes opening every frame
pub const START_MARKER_LEN: usize = 4;
/// Bytes per LED word
pub const PIXEL_LEN: usize = 4;
/// Highest 5-bit brightness level
pub const MAX_LEVEL: u8 = 31;
/// Lowest level ever emitted; a zero level is reserved for the markers
pub const MIN_LEVEL: u8 = 1;
/// High bits set on every brightness byte
pub const BRIGHTNESS_PREFIX: u8 = 0b1110_0000;
const LEVEL_MASK: u8 = 0b0001_1111;

/// Channel count of the flat sample layout accepted by [`FrameEncoder::encode_samples`]
pub const CHANNELS: usize = 4;

/// Length of the end marker for a strip of `led_count` LEDs
pub const fn end_marker_len(led_count: usize) -> usize {
    // ceil((n / 2 + 1) / 8) == ceil((n + 2) / 16)
    (led_count + 2).div_ceil(16)
}

/// Total frame length for a strip of `led_count` LEDs
pub const fn frame_len(led_count: usize) -> usize {
    START_MARKER_LEN + PIXEL_LEN * led_count + end_marker_len(led_count)
}

/// Smallest level whose full-scale output still reaches `peak`
///
/// Full scale is level 31, so a saturated channel encodes as level 31 with
/// color byte 255.
fn quantize_level(peak: u8) -> u32 {
    let max = u32::from(MAX_LEVEL);
    (u32::from(peak) * max).div_ceil(255).clamp(u32::from(MIN_LEVEL), max)
}

/// Rescale a gamma-corrected channel so that `value * level / 31` holds
#[allow(clippy::cast_possible_truncation)]
fn scale_channel(value: u8, level: u32) -> u8 {
    if level == 0 {
        return 0;
    }
    let max = u32::from(MAX_LEVEL);
    // Rounded division, half away from zero.
    ((2 * u32::from(value) * max + level) / (2 * level)).min(255) as u8
}

/// Encode a single LED into its wire word
///
/// Alpha is pre-multiplied, then every channel goes through the gamma
/// table before quantization.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_pixel(color: Color) -> [u8; PIXEL_LEN] {
    let color = color.premultiplied();
    let r = GammaTable::lookup(color.r);
    let g = GammaTable::lookup(color.g);
    let b = GammaTable::lookup(color.b);

    let level = quantize_level(r.max(g).max(b));
    [
        BRIGHTNESS_PREFIX | level as u8,
        scale_channel(b, level),
        scale_channel(g, level),
        scale_channel(r, level),
    ]
}

/// Split a wire word back into its level and color bytes
pub fn decode_pixel(word: [u8; PIXEL_LEN]) -> (u8, Rgb) {
    let [brightness, b, g, r] = word;
    (brightness & LEVEL_MASK, Rgb { r, g, b })
}

/// Turns a color buffer into a wire frame for a fixed strip length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameEncoder {
    led_count: usize,
}

impl FrameEncoder {
    pub const fn new(led_count: usize) -> Self {
        Self { led_count }
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    /// Length of every frame this encoder produces
    pub const fn frame_len(&self) -> usize {
        frame_len(self.led_count)
    }

    /// Encode one color per LED into `out`
    ///
    /// Returns the number of bytes written, always [`Self::frame_len`].
    pub fn encode_into(&self, colors: &[Color], out: &mut [u8]) -> Result<usize> {
        if colors.len() != self.led_count {
            return Err(Error::Size {
                expected: self.led_count,
                actual: colors.len(),
            });
        }
        self.write_frame(colors.iter().copied(), out)
    }

    /// Encode a flat, interleaved sample buffer (`led_count * channels` values)
    pub fn encode_samples(&self, samples: &[f32], channels: usize, out: &mut [u8]) -> Result<usize> {
        if channels != CHANNELS {
            return Err(Error::Shape { channels });
        }
        if samples.len() != self.led_count * CHANNELS {
            return Err(Error::Size {
                expected: self.led_count * CHANNELS,
                actual: samples.len(),
            });
        }
        let colors = samples
            .chunks_exact(CHANNELS)
            .map(|c| Color::new(c[0], c[1], c[2], c[3]));
        self.write_frame(colors, out)
    }

    /// Write markers and pixel words; `pixels` must yield exactly `led_count` items
    pub(crate) fn write_frame(
        &self,
        pixels: impl Iterator<Item = Color>,
        out: &mut [u8],
    ) -> Result<usize> {
        let len = self.frame_len();
        if out.len() < len {
            return Err(Error::Size {
                expected: len,
                actual: out.len(),
            });
        }

        let frame = &mut out[..len];
        frame.fill(0);

        let body_end = START_MARKER_LEN + PIXEL_LEN * self.led_count;
        let body = &mut frame[START_MARKER_LEN..body_end];
        let mut written = 0;
        for (word, color) in body.chunks_exact_mut(PIXEL_LEN).zip(pixels) {
            word.copy_from_slice(&encode_pixel(color));
            written += 1;
        }
        if written != self.led_count {
            return Err(Error::Size {
                expected: self.led_count,
                actual: written,
            });
        }

        Ok(len)
    }
}
