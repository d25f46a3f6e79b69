//! Error types shared by the encoder, the shapes and the strip.

use core::fmt;

/// Errors raised synchronously by the contract that was violated.
///
/// Nothing in the crate performs I/O, so none of these are transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Malformed constructor argument
    Validation(&'static str),
    /// Flat sample buffer whose channel count is not RGBA
    Shape { channels: usize },
    /// Buffer length does not match the configured LED count (or capacity)
    Size { expected: usize, actual: usize },
    /// Geometry that does not fit into `[0, led_count)`
    Range {
        start: isize,
        end: isize,
        led_count: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(reason) => write!(f, "invalid argument: {reason}"),
            Self::Shape { channels } => {
                write!(f, "expected 4 color channels (RGBA), got {channels}")
            }
            Self::Size { expected, actual } => {
                write!(f, "expected buffer of length {expected}, got {actual}")
            }
            Self::Range {
                start,
                end,
                led_count,
            } => write!(
                f,
                "range [{start}, {end}) does not fit a strip of {led_count} LEDs"
            ),
        }
    }
}

impl core::error::Error for Error {}
