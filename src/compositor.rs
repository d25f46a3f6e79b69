//! Blend policies for merging a shape contribution into the strip buffer

use crate::color::Color;

const BLEND_NAME_ADD: &str = "add";
const BLEND_NAME_MAX: &str = "max";
const BLEND_NAME_OCCLUDE: &str = "occlude";

/// How a new contribution combines with what is already drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Translucent: channels are summed and may exceed 1
    #[default]
    Add,
    /// Whichever is more opaque wins, per LED
    Max,
    /// Opaque: any covered LED is replaced
    Occlude,
}

impl BlendMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => BLEND_NAME_ADD,
            Self::Max => BLEND_NAME_MAX,
            Self::Occlude => BLEND_NAME_OCCLUDE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            BLEND_NAME_ADD => Some(Self::Add),
            BLEND_NAME_MAX => Some(Self::Max),
            BLEND_NAME_OCCLUDE => Some(Self::Occlude),
            _ => None,
        }
    }
}

/// Merge `contribution` into `buffer` in place
///
/// Both slices must have the same length. Values are not clamped here;
/// returns whether any channel of the buffer now exceeds 1.
pub fn composite(buffer: &mut [Color], contribution: &[Color], mode: BlendMode) -> bool {
    debug_assert_eq!(buffer.len(), contribution.len());

    for (led, new) in buffer.iter_mut().zip(contribution) {
        match mode {
            BlendMode::Add => *led += *new,
            BlendMode::Max => {
                if new.a > led.a {
                    *led = *new;
                }
            }
            BlendMode::Occlude => {
                if new.a > 0.0 {
                    *led = *new;
                }
            }
        }
    }

    exceeds_unity(buffer)
}

/// Whether any channel is above 1
pub fn exceeds_unity(buffer: &[Color]) -> bool {
    buffer.iter().any(|led| led.max_channel() > 1.0)
}
