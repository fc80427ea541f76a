use tracing::trace;

use crate::curve::kelvin_to_rgb;
use crate::quantize::float_to_u16;
use crate::{KELVIN_MAX, KELVIN_MIN};

/// Bracket width at which the search stops.
const EPSILON: f64 = 0.4;

/// Converts a color into the closest color temperature in Kelvin.
///
/// Bisects `KELVIN_MIN..KELVIN_MAX` on the blue/red ratio, which the curve
/// fit keeps non-decreasing with temperature. Green does not take part. A
/// color with no red has no finite ratio and maps to `KELVIN_MAX`.
///
/// The result never exceeds `KELVIN_MAX`: a search that runs into the top of
/// the range would otherwise round its last midpoint to `KELVIN_MAX + 1`.
pub fn rgb_to_kelvin(r: u8, g: u8, b: u8) -> u16 {
    if r == 0 {
        trace!(b, "no red channel, saturating to {KELVIN_MAX}K");
        return KELVIN_MAX;
    }
    let target = f32::from(b) / f32::from(r);

    let mut lo = f64::from(KELVIN_MIN);
    let mut hi = f64::from(KELVIN_MAX);
    let mut temperature = 0.0;
    while hi - lo > EPSILON {
        temperature = (hi + lo) * 0.5;
        let c = kelvin_to_rgb(float_to_u16(temperature));
        if f32::from(c.b) / f32::from(c.r) >= target {
            hi = temperature;
        } else {
            lo = temperature;
        }
    }

    // The last midpoint can round one past the top of the range.
    let kelvin = float_to_u16(temperature).min(KELVIN_MAX);
    trace!(r, g, b, kelvin, "inverse search done");
    kelvin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn white() {
        assert_eq!(rgb_to_kelvin(255, 255, 255), 6473);
    }

    #[test]
    fn red_zero_saturates() {
        assert_eq!(rgb_to_kelvin(0, 0, 0), KELVIN_MAX);
        assert_eq!(rgb_to_kelvin(0, 120, 255), KELVIN_MAX);
    }

    #[test]
    fn no_blue_sits_at_the_bottom() {
        assert_eq!(rgb_to_kelvin(255, 59, 0), 1001);
        assert_eq!(rgb_to_kelvin(255, 140, 0), 1001);
    }

    #[test]
    fn green_is_ignored() {
        assert_eq!(rgb_to_kelvin(214, 0, 255), rgb_to_kelvin(214, 255, 255));
    }

    #[test]
    fn bluer_is_hotter() {
        let warm = rgb_to_kelvin(255, 200, 150);
        let neutral = rgb_to_kelvin(255, 230, 220);
        let cool = rgb_to_kelvin(200, 220, 255);
        assert!(warm < neutral && neutral < cool, "{warm} {neutral} {cool}");
    }

    #[test]
    fn round_trip_mid_range() {
        for k in (2500..=14000).step_by(500) {
            let Rgb { r, g, b } = kelvin_to_rgb(k);
            let back = rgb_to_kelvin(r, g, b);
            assert!(back.abs_diff(k) <= 300, "{k}K came back as {back}K");
        }
    }

    #[test]
    fn pure_blue_tops_out() {
        assert_eq!(rgb_to_kelvin(1, 255, 255), KELVIN_MAX);
    }

    #[test]
    fn stays_in_search_range() {
        for v in [0u8, 1, 64, 128, 254, 255] {
            let k = rgb_to_kelvin(255, 255, v);
            assert!((KELVIN_MIN..=KELVIN_MAX).contains(&k));
            let k = rgb_to_kelvin(v.max(1), 255, 255);
            assert!((KELVIN_MIN..=KELVIN_MAX).contains(&k));
        }
    }
}
