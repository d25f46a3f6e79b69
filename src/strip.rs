//! The strip: accumulated color buffer plus its current wire frame

use heapless::Vec;
use log::{debug, trace, warn};

use crate::FrameSink;
use crate::calibration::Calibration;
use crate::color::Color;
use crate::compositor::{self, BlendMode};
use crate::encoder::{FrameEncoder, frame_len};
use crate::error::{Error, Result};
use crate::shape::{Layout, LightShape};

/// Default transport fragment size
pub const DEFAULT_PACKET_SIZE: usize = 1500;
/// Largest fragment the transport accepts
pub const MAX_PACKET_SIZE: usize = 1634;

/// Configuration for the LED strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    pub led_count: usize,
    /// Transport fragmentation hint, not used by the encoder
    pub packet_size: usize,
    /// Use the mounting-offset calibration
    pub offset: bool,
}

impl StripConfig {
    pub const fn new(led_count: usize) -> Self {
        Self {
            led_count,
            packet_size: DEFAULT_PACKET_SIZE,
            offset: false,
        }
    }

    #[must_use]
    pub const fn with_packet_size(mut self, packet_size: usize) -> Self {
        self.packet_size = packet_size;
        self
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: bool) -> Self {
        self.offset = offset;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.led_count == 0 {
            return Err(Error::Validation("led_count must be positive"));
        }
        if self.packet_size == 0 || self.packet_size > MAX_PACKET_SIZE {
            return Err(Error::Validation("packet_size must be within 1..=1634"));
        }
        Ok(())
    }
}

/// LED strip - owns the color buffer and the encoded frame
///
/// `MAX_LEDS` bounds the LED count and `FRAME_CAP` the frame length; use
/// [`frame_len`] for the latter, e.g. `LedStrip<60, { frame_len(60) }>`.
/// Only [`LedStrip::apply`] and [`LedStrip::clear`] mutate the buffer and
/// both leave the frame in sync with it.
pub struct LedStrip<const MAX_LEDS: usize, const FRAME_CAP: usize> {
    // Configuration
    config: StripConfig,
    calibration: Calibration,
    encoder: FrameEncoder,

    // Internal state
    colors: Vec<Color, MAX_LEDS>,
    frame: Vec<u8, FRAME_CAP>,
    scratch: Vec<Color, MAX_LEDS>,
}

impl<const MAX_LEDS: usize, const FRAME_CAP: usize> LedStrip<MAX_LEDS, FRAME_CAP> {
    /// Create a cleared strip
    pub fn new(config: &StripConfig) -> Result<Self> {
        config.validate()?;
        if config.led_count > MAX_LEDS {
            return Err(Error::Size {
                expected: MAX_LEDS,
                actual: config.led_count,
            });
        }
        let len = frame_len(config.led_count);
        if len > FRAME_CAP {
            return Err(Error::Size {
                expected: len,
                actual: FRAME_CAP,
            });
        }

        let mut colors = Vec::new();
        let mut scratch = Vec::new();
        let mut frame = Vec::new();
        let over_capacity = |()| Error::Size {
            expected: MAX_LEDS,
            actual: config.led_count,
        };
        colors
            .resize(config.led_count, Color::BLACK)
            .map_err(over_capacity)?;
        scratch
            .resize(config.led_count, Color::BLACK)
            .map_err(over_capacity)?;
        frame.resize(len, 0).map_err(|()| Error::Size {
            expected: len,
            actual: FRAME_CAP,
        })?;

        let mut strip = Self {
            config: *config,
            calibration: Calibration::new(config.offset),
            encoder: FrameEncoder::new(config.led_count),
            colors,
            frame,
            scratch,
        };
        strip.encode()?;

        debug!(
            "[LedStrip.new] {} LEDs, frame {} bytes in {} segment(s)",
            config.led_count,
            len,
            strip.segment_count()
        );
        Ok(strip)
    }

    /// Zero the color buffer and re-encode the all-off frame
    pub fn clear(&mut self) -> Result<()> {
        trace!("[LedStrip.clear]");
        self.colors.fill(Color::BLACK);
        self.encode()?;
        Ok(())
    }

    /// Composite a shape onto the buffer and re-encode
    ///
    /// Add composites that push a channel past 1 log a warning; the
    /// buffer keeps the raw sum and the frame is encoded from its
    /// saturated copy.
    pub fn apply(&mut self, shape: &LightShape<'_>, mode: BlendMode) -> Result<()> {
        shape.render_into(&mut self.scratch)?;
        let over = compositor::composite(&mut self.colors, &self.scratch, mode);
        if over && mode == BlendMode::Add {
            warn!("buffer values exceed 1, color distortion may occur");
        }
        trace!("[LedStrip.apply] composited with {}", mode.as_str());

        self.encode()?;
        Ok(())
    }

    /// Recompute the frame from the buffer, saturating every channel at 1
    pub fn encode(&mut self) -> Result<&[u8]> {
        let pixels = self.colors.iter().map(|color| color.saturated());
        let len = self.encoder.write_frame(pixels, &mut self.frame)?;
        Ok(&self.frame[..len])
    }

    /// Hand the current frame to the transport
    pub fn send<S: FrameSink>(&self, sink: &mut S) -> core::result::Result<(), S::Error> {
        sink.transmit(self.frame())
    }

    /// Current wire frame
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    /// Accumulated colors, unclamped
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn exceeds_unity(&self) -> bool {
        compositor::exceeds_unity(&self.colors)
    }

    /// Frame split into transport-sized fragments
    pub fn segments(&self) -> core::slice::Chunks<'_, u8> {
        self.frame.chunks(self.config.packet_size)
    }

    pub fn segment_count(&self) -> usize {
        self.frame.len().div_ceil(self.config.packet_size)
    }

    pub const fn led_count(&self) -> usize {
        self.config.led_count
    }

    pub const fn packet_size(&self) -> usize {
        self.config.packet_size
    }

    pub const fn config(&self) -> &StripConfig {
        &self.config
    }

    pub const fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Geometry to build shapes against
    pub const fn layout(&self) -> Layout {
        Layout::new(self.config.led_count, self.calibration)
    }
}
