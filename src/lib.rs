#![no_std]

pub mod bounds;
pub mod calibration;
pub mod color;
pub mod compositor;
pub mod encoder;
pub mod error;
pub mod gamma;
pub mod shape;
pub mod strip;

pub use bounds::Span;
pub use calibration::{Calibration, Unit};
pub use color::{Color, Rgb};
pub use compositor::BlendMode;
pub use encoder::{FrameEncoder, decode_pixel, encode_pixel, frame_len};
pub use error::{Error, Result};
pub use gamma::{GAMMA_LUT, GammaTable};
pub use shape::{Dot, Gaussian, Layout, LightShape, Line, PixelArray, Shape, Tukey};
pub use strip::{DEFAULT_PACKET_SIZE, LedStrip, MAX_PACKET_SIZE, StripConfig};

/// Abstract frame transport
///
/// Implement this trait for the socket (or bus) that carries frames to
/// the strip controller. Its errors are passed back to the caller as-is.
pub trait FrameSink {
    type Error;

    /// Transmit one complete frame
    fn transmit(&mut self, frame: &[u8]) -> core::result::Result<(), Self::Error>;
}
