use crate::color::Color;

/// Stretch or squeeze `source` onto `target` with linear interpolation
///
/// The first and last samples land exactly on the first and last target
/// LEDs. Equal lengths are copied without interpolation.
#[allow(clippy::cast_precision_loss)]
pub fn resample_into(source: &[Color], target: &mut [Color]) {
    if source.is_empty() || target.is_empty() {
        return;
    }

    if source.len() == target.len() {
        target.copy_from_slice(source);
        return;
    }

    let last_source = source.len() - 1;
    let last_target = target.len() - 1;
    if last_target == 0 {
        target[0] = source[0];
        return;
    }

    let step = last_source as f32 / last_target as f32;
    for (i, led) in target.iter_mut().enumerate() {
        let pos = i as f32 * step;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lower = (libm::floorf(pos) as usize).min(last_source);
        let upper = (lower + 1).min(last_source);
        let frac = pos - lower as f32;
        *led = source[lower].lerp(source[upper], frac);
    }
}
