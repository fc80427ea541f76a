//! Curve-fit conversion from a color temperature to RGB.
//!
//! Each channel is a fit of the form `a + b*x + c*ln(x)` over a sparse set of
//! Kelvin to RGB samples with the white point (255, 255, 255) at 6500K. Good
//! enough for photo manipulation and display tinting, nothing more.

#![allow(clippy::excessive_precision)]

use tracing::trace;

use crate::color::Rgb;
use crate::quantize::float_to_u8;
use crate::{KELVIN_MAX, KELVIN_MIN, WHITE_POINT_KELVIN};

fn clamp_kelvin(kelvin: u16) -> u16 {
    let clamped = kelvin.clamp(KELVIN_MIN, KELVIN_MAX);
    if clamped != kelvin {
        trace!(kelvin, clamped, "temperature outside curve-fit range");
    }
    clamped
}

#[inline]
fn log_fit(a: f64, b: f64, c: f64, x: f64) -> u8 {
    float_to_u8(a + b * x + c * x.ln())
}

/// Returns the RGB representation of a temperature in Kelvin.
///
/// Inputs outside `KELVIN_MIN..=KELVIN_MAX` are clamped first; 6500K is
/// pinned to white.
pub fn kelvin_to_rgb(kelvin: u16) -> Rgb {
    if kelvin == WHITE_POINT_KELVIN {
        return Rgb::WHITE;
    }
    let kelvin = clamp_kelvin(kelvin);
    let t = f64::from(kelvin) * 0.01;

    if kelvin < WHITE_POINT_KELVIN {
        let g = log_fit(
            -155.25485562709179,
            -0.44596950469579133,
            104.49216199393888,
            t - 2.0,
        );
        let b = if kelvin > 2000 {
            log_fit(
                -254.76935184120902,
                0.8274096064007395,
                115.67994401066147,
                t - 10.0,
            )
        } else {
            0
        };
        return Rgb::new(255, g, b);
    }

    let r = log_fit(
        351.97690566805693,
        0.114206453784165,
        -40.25366309332127,
        t - 55.0,
    );
    let g = log_fit(
        325.4494125711974,
        0.07943456536662342,
        -28.0852963507957,
        t - 50.0,
    );
    Rgb::new(r, g, 255)
}

/// Tanner Helland's original fit. Slower than [`kelvin_to_rgb`] and a bit
/// further off the reference table; kept for comparison.
pub fn kelvin_to_rgb_helland(kelvin: u16) -> Rgb {
    if kelvin == WHITE_POINT_KELVIN {
        return Rgb::WHITE;
    }
    let kelvin = clamp_kelvin(kelvin);
    let t = f64::from(kelvin) * 0.01;

    if kelvin < WHITE_POINT_KELVIN {
        let g = float_to_u8(99.4708025861 * t.ln() - 161.1195681661);
        let b = if kelvin > 1900 {
            float_to_u8(138.5177312231 * (t - 10.0).ln() - 305.0447927307)
        } else {
            0
        };
        return Rgb::new(255, g, b);
    }

    let x = t - 60.0;
    let r = float_to_u8(329.698727446 * x.powf(-0.1332047592));
    let g = float_to_u8(288.1221695283 * x.powf(-0.0755148492));
    Rgb::new(r, g, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_point_is_exact() {
        assert_eq!(kelvin_to_rgb(6500), Rgb::WHITE);
        assert_eq!(kelvin_to_rgb_helland(6500), Rgb::WHITE);
    }

    #[test]
    fn red_saturated_below_white_point() {
        for k in 1000..6500 {
            assert_eq!(kelvin_to_rgb(k).r, 255, "{k}K");
        }
    }

    #[test]
    fn blue_saturated_above_white_point() {
        for k in 6501..=40000 {
            assert_eq!(kelvin_to_rgb(k).b, 255, "{k}K");
        }
    }

    #[test]
    fn no_blue_at_or_below_2000k() {
        for k in 1000..=2000 {
            assert_eq!(kelvin_to_rgb(k).b, 0, "{k}K");
        }
        assert_ne!(kelvin_to_rgb(2100).b, 0);
    }

    #[test]
    fn literal_points() {
        assert_eq!(kelvin_to_rgb(1000).to_string(), "FF3B00");
        assert_eq!(kelvin_to_rgb(2000).to_string(), "FF8C00");
        assert_eq!(kelvin_to_rgb(6499).to_string(), "FFFBFF");
        assert_eq!(kelvin_to_rgb(6501).to_string(), "FFFCFF");
        assert_eq!(kelvin_to_rgb(9000).to_string(), "D6E2FF");
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(kelvin_to_rgb(0), kelvin_to_rgb(1000));
        assert_eq!(kelvin_to_rgb(150), kelvin_to_rgb(1000));
        assert_eq!(kelvin_to_rgb(999), kelvin_to_rgb(1000));
        assert_eq!(kelvin_to_rgb(u16::MAX), kelvin_to_rgb(40000));
        assert_eq!(kelvin_to_rgb_helland(0), kelvin_to_rgb_helland(1000));
        assert_eq!(kelvin_to_rgb_helland(u16::MAX), kelvin_to_rgb_helland(40000));
    }

    #[test]
    fn clamping_is_traced() {
        assert_eq!(crate::count_events(|| kelvin_to_rgb(500)), 1);
        assert_eq!(crate::count_events(|| kelvin_to_rgb_helland(45000)), 1);
        assert_eq!(crate::count_events(|| kelvin_to_rgb(3000)), 0);
    }

    #[test]
    fn repeatable() {
        for k in (0..=u16::MAX).step_by(97) {
            assert_eq!(kelvin_to_rgb(k), kelvin_to_rgb(k));
            assert_eq!(kelvin_to_rgb_helland(k), kelvin_to_rgb_helland(k));
        }
    }

    #[test]
    fn helland_low_blue_cutoff() {
        assert_eq!(kelvin_to_rgb_helland(1900).b, 0);
        assert_eq!(kelvin_to_rgb_helland(1000).to_string(), "FF4500");
        assert_eq!(kelvin_to_rgb_helland(9000).to_string(), "D3E0FF");
    }
}
