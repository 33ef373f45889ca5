//! # solid-hsv
//!
//! The color math behind an HSB color picker: RGB ↔ HSV conversion and
//! quantization to 8-bit packed colors.
//!
//! Every function is pure and total. Hue is in degrees; all other components
//! are normalized to 0.0–1.0. [`hsv_to_rgb`] wraps hue and clamps saturation
//! and value before converting, so slider input can be passed straight in.
//! [`rgb_to_hsv`] and [`quantize_to_packed_color`] do not clamp; call
//! [`Rgb::clamped`] first if the value may be out of range.
//!
//! ## Usage
//!
//! ```rust
//! use solid_hsv::{hsv_to_rgb, quantize_to_packed_color, rgb_to_hsv, Hsv, Rgb};
//!
//! let hsv = rgb_to_hsv(Rgb::new(1.0, 0.0, 0.0));
//! assert_eq!(hsv, Hsv::new(0.0, 1.0, 1.0));
//!
//! let rgb = hsv_to_rgb(Hsv::new(120.0, 1.0, 1.0));
//! let packed = quantize_to_packed_color(rgb, 1.0);
//! assert_eq!(packed.to_hex(), "00FF00");
//! ```

mod color;
mod constants;
mod math;

pub use color::{Hsv, PackedColor, Rgb};
pub use constants::OPAQUE;

/// Convert RGB to HSV.
///
/// Achromatic input (all channels equal) yields hue 0 and saturation 0.
/// Hue is in [0, 360) for in-range input.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (h, s, v) = math::rgb_to_hsv(rgb.r, rgb.g, rgb.b);
    Hsv { h, s, v }
}

/// Convert HSV to RGB.
///
/// Hue may be any finite number and is wrapped into [0, 360); a non-finite
/// hue is treated as 0. Saturation and value are clamped into [0, 1], so the
/// result is always in range.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let (r, g, b) = math::hsv_to_rgb(hsv.h, hsv.s, hsv.v);
    Rgb { r, g, b }
}

/// Quantize normalized RGB and alpha to 8 bits per channel.
///
/// Each channel becomes `round(x * 255)` with ties away from zero. Inputs are
/// expected in 0.0–1.0; anything outside saturates to 0 or 255 and NaN
/// becomes 0.
pub fn quantize_to_packed_color(rgb: Rgb, alpha: f64) -> PackedColor {
    PackedColor {
        a: math::quantize_channel(alpha),
        r: math::quantize_channel(rgb.r),
        g: math::quantize_channel(rgb.g),
        b: math::quantize_channel(rgb.b),
    }
}

/// [`quantize_to_packed_color`] with a fully opaque alpha.
pub fn quantize_opaque(rgb: Rgb) -> PackedColor {
    quantize_to_packed_color(rgb, OPAQUE)
}
