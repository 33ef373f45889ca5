//! Color math: direct conversions on normalized f64 tuples.
//!
//! Hue is in degrees, every other component is nominally 0.0–1.0.

use crate::constants::{CHANNEL_MAX, HUE_TURN, LAST_SEXTANT, SEXTANT_DEGREES};

/// RGB → HSV. Returns (h in degrees, s, v).
///
/// Max and min are picked red first, then green, then blue, so a tie between
/// channels always resolves to the earlier one.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let mut max = r;
    if g > max {
        max = g;
    }
    if b > max {
        max = b;
    }
    let mut min = r;
    if g < min {
        min = g;
    }
    if b < min {
        min = b;
    }

    let v = max;
    let chroma = max - min;
    if chroma == 0.0 {
        return (0.0, 0.0, v);
    }

    let mut h = if r == max {
        SEXTANT_DEGREES * (g - b) / chroma
    } else if g == max {
        2.0 * SEXTANT_DEGREES + SEXTANT_DEGREES * (b - r) / chroma
    } else {
        4.0 * SEXTANT_DEGREES + SEXTANT_DEGREES * (r - g) / chroma
    };
    // The red branch spans -60..=60, one turn is enough.
    if h < 0.0 {
        h += HUE_TURN;
    }

    (h, chroma / v, v)
}

/// HSV → RGB. Hue is wrapped into 0–360, saturation and value are clamped.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = normalize_hue(h);
    let s = clamp_unit(s);
    let v = clamp_unit(v);

    let chroma = s * v;
    let min = v - chroma;
    if chroma == 0.0 {
        return (min, min, min);
    }

    let h6 = h / SEXTANT_DEGREES;
    let sextant = (h6.floor() as u32).min(LAST_SEXTANT);
    let frac = h6 - sextant as f64;
    let max = chroma + min;
    let rising = min + chroma * frac;
    let falling = min + chroma * (1.0 - frac);

    match sextant {
        0 => (max, rising, min),
        1 => (falling, max, min),
        2 => (min, max, rising),
        3 => (min, falling, max),
        4 => (rising, min, max),
        _ => (max, min, falling),
    }
}

/// Wrap a hue in degrees into `[0, 360)`.
///
/// Negative input yields the nonnegative remainder. Non-finite input has no
/// remainder and maps to 0.
pub(crate) fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        log::trace!("non-finite hue {h} treated as 0");
        return 0.0;
    }
    let wrapped = h.rem_euclid(HUE_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= HUE_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Clamp into 0.0–1.0. NaN maps to 0.
pub(crate) fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Convert a 0.0–1.0 channel to 0–255, rounding ties away from zero.
///
/// Out-of-range input saturates at 0 or 255 and NaN becomes 0.
pub(crate) fn quantize_channel(x: f64) -> u8 {
    if !(0.0..=1.0).contains(&x) {
        log::trace!("channel {x} outside 0.0–1.0, quantization saturates");
    }
    (x * CHANNEL_MAX).round() as u8
}
