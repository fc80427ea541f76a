use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An 8-bit per channel color, red/green/blue in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Packs the color as `0xRRGGBB`.
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpacks `0xRRGGBB`; the top byte is ignored.
    pub const fn from_u32(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Closest color temperature, see [`rgb_to_kelvin`](crate::rgb_to_kelvin).
    pub fn kelvin(self) -> u16 {
        crate::rgb_to_kelvin(self.r, self.g, self.b)
    }

    /// Largest per-channel absolute difference.
    pub fn max_channel_delta(self, other: Rgb) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRgbError {
    #[error("expected 6 hex digits (RRGGBB), got {0} characters")]
    Length(usize),
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(ParseRgbError::Length(hex.chars().count()));
        }
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseRgbError::Digit(s.to_string()));
        }
        let v = u32::from_str_radix(hex, 16).map_err(|_| ParseRgbError::Digit(s.to_string()))?;
        Ok(Self::from_u32(v))
    }
}

/// Fills a planar gamma ramp (all red, then green, then blue) scaled by `wp`.
///
/// # Panics
/// If `buf` holds fewer than `3 * ramp_size` entries.
pub fn fill_gamma_ramp(buf: &mut [u16], ramp_size: usize, wp: Rgb, gamma: f64) {
    assert!(
        ramp_size.checked_mul(3).is_some_and(|n| buf.len() >= n),
        "gamma ramp buffer holds {} entries, need 3 * {ramp_size}",
        buf.len()
    );
    if ramp_size == 0 {
        return;
    }
    let denom = (ramp_size as f64 - 1.0).max(1.0);
    let inv_gamma = 1.0 / gamma as f32;
    let channel = |val: f64, c: u8| {
        let corrected = ((val * c as f64 / 255.0) as f32).powf(inv_gamma);
        (corrected.clamp(0.0, 1.0) as f64 * u16::MAX as f64).round() as u16
    };

    for i in 0..ramp_size {
        let val = i as f64 / denom;
        buf[i] = channel(val, wp.r());
        buf[i + ramp_size] = channel(val, wp.g());
        buf[i + 2 * ramp_size] = channel(val, wp.b());
    }
}
