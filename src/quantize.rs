//! Float to integer quantization shared by the converters.
//!
//! Both helpers round half up past the value (`ceil(x + 0.5)`) and saturate
//! near the top of the range, which is what the reference outputs are built on.

pub fn float_to_u8(x: f64) -> u8 {
    if x >= 254.4 {
        return 255;
    }
    // NaN falls through both comparisons.
    if x <= 0.0 || x.is_nan() {
        return 0;
    }
    (x + 0.5).ceil() as u8
}

pub fn float_to_u16(x: f64) -> u16 {
    if x >= 65534.4 {
        return 65535;
    }
    if x <= 0.0 || x.is_nan() {
        return 0;
    }
    (x + 0.5).ceil() as u16
}
