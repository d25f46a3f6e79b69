//! Mapping between LED index and azimuth in degrees
//!
//! The strip is mounted along an arc of loudspeakers. Four LEDs were
//! measured against known azimuths; a single least-squares line through
//! those anchors is used in both directions, so converting an index to
//! degrees and back is exact up to rounding.

use crate::error::{Error, Result};

/// LED indices of the measured anchors
pub const ANCHOR_INDICES: [f32; 4] = [246.0, 493.0, 740.0, 1008.0];
/// Azimuth (degrees) of the measured anchors
pub const ANCHOR_DEGREES: [f32; 4] = [58.0, 10.0, -38.0, -90.0];
/// Mounting offset added to every anchor azimuth in the offset variant
pub const MOUNTING_OFFSET_DEG: f32 = 2.0;

/// Angular spacing between neighbouring speakers
pub const SPEAKER_SPACING_DEG: f32 = 4.0;
/// Speaker sitting at 0 degrees
pub const CENTER_SPEAKER: i32 = 26;

/// Coordinate unit of shape positions and widths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
    /// Linear LED index; positions must be integral
    #[default]
    Index,
    /// Azimuth in degrees; may be fractional
    Degrees,
}

/// Affine fit `degrees = slope * index + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    slope: f32,
    intercept: f32,
    offset: bool,
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Calibration {
    /// Fit the line through the anchors, shifted by the mounting offset if `offset`
    pub fn new(offset: bool) -> Self {
        let shift = if offset { MOUNTING_OFFSET_DEG } else { 0.0 };
        let mut degrees = ANCHOR_DEGREES;
        for deg in &mut degrees {
            *deg += shift;
        }
        let (slope, intercept) = fit_line(&ANCHOR_INDICES, &degrees);
        Self {
            slope,
            intercept,
            offset,
        }
    }

    pub const fn slope(&self) -> f32 {
        self.slope
    }

    pub const fn intercept(&self) -> f32 {
        self.intercept
    }

    pub const fn is_offset(&self) -> bool {
        self.offset
    }

    const fn offset_deg(&self) -> f32 {
        if self.offset { MOUNTING_OFFSET_DEG } else { 0.0 }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn index_to_degrees(&self, index: isize) -> f32 {
        self.position_to_degrees(index as f32)
    }

    /// Fractional index to degrees
    pub fn position_to_degrees(&self, position: f32) -> f32 {
        self.slope * position + self.intercept
    }

    /// Unrounded index for an azimuth
    pub fn degrees_to_position(&self, degrees: f32) -> f32 {
        (degrees - self.intercept) / self.slope
    }

    /// Nearest LED index for an azimuth
    #[allow(clippy::cast_possible_truncation)]
    pub fn degrees_to_index(&self, degrees: f32) -> isize {
        libm::roundf(self.degrees_to_position(degrees)) as isize
    }

    /// Number of LEDs covering an angular width
    pub fn degrees_to_span(&self, width: f32) -> f32 {
        libm::fabsf(width / self.slope)
    }

    /// Convert a position between units
    pub fn convert(&self, value: f32, from: Unit, to: Unit) -> f32 {
        match (from, to) {
            (Unit::Index, Unit::Degrees) => self.position_to_degrees(value),
            (Unit::Degrees, Unit::Index) => self.degrees_to_position(value),
            _ => value,
        }
    }

    /// Speaker closest to an azimuth (or to the azimuth of an LED index)
    #[allow(clippy::cast_possible_truncation)]
    pub fn nearest_speaker(&self, azimuth: f32, unit: Unit) -> Result<i32> {
        let degrees = self.resolve_degrees(azimuth, unit)? - self.offset_deg();
        Ok(libm::roundf(degrees / SPEAKER_SPACING_DEG) as i32 + CENTER_SPEAKER)
    }

    /// Azimuth of a speaker, or the LED position in front of it
    #[allow(clippy::cast_precision_loss)]
    pub fn speaker_location(&self, speaker: i32, unit: Unit) -> f32 {
        let degrees = (speaker - CENTER_SPEAKER) as f32 * SPEAKER_SPACING_DEG;
        self.convert(degrees, Unit::Degrees, unit)
    }

    /// Resolve a position in `unit` to a fractional LED index
    pub(crate) fn resolve_position(&self, value: f32, unit: Unit) -> Result<f32> {
        check_value(value, unit)?;
        Ok(self.convert(value, unit, Unit::Index))
    }

    fn resolve_degrees(&self, value: f32, unit: Unit) -> Result<f32> {
        check_value(value, unit)?;
        Ok(self.convert(value, unit, Unit::Degrees))
    }
}

/// Reject non-finite values and fractional LED indices
pub(crate) fn check_value(value: f32, unit: Unit) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::Validation("position must be finite"));
    }
    if unit == Unit::Index && libm::truncf(value) != value {
        return Err(Error::Validation("index positions must be integral"));
    }
    Ok(())
}

/// Least-squares line through `(x, y)` pairs, returned as `(slope, intercept)`
#[allow(clippy::cast_precision_loss)]
fn fit_line(xs: &[f32], ys: &[f32]) -> (f32, f32) {
    let n = xs.len() as f32;
    let mean_x = xs.iter().sum::<f32>() / n;
    let mean_y = ys.iter().sum::<f32>() / n;

    let mut cov = 0.0;
    let mut var = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        cov += (x - mean_x) * (y - mean_y);
        var += (x - mean_x) * (x - mean_x);
    }

    let slope = cov / var;
    (slope, mean_y - slope * mean_x)
}
