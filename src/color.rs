//! Color value types: normalized RGB, HSV and the 8-bit packed form.
//!
//! All three are plain `Copy` values. Range conventions are documented on
//! each field but not enforced; the conversion functions normalize at their
//! own boundaries.

use std::fmt;

use crate::constants::CHANNEL_MAX;
use crate::math;

/// RGB color with components nominally in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Achromatic color with every channel set to `x`.
    pub const fn gray(x: f64) -> Self {
        Self { r: x, g: x, b: x }
    }

    /// Create from 0–255 channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / CHANNEL_MAX,
            g: g as f64 / CHANNEL_MAX,
            b: b as f64 / CHANNEL_MAX,
        }
    }

    /// Clamp every channel into 0.0–1.0 (NaN becomes 0.0).
    ///
    /// Use before [`Rgb::quantize`] when the value may have drifted out of
    /// range.
    pub fn clamped(self) -> Self {
        Self {
            r: math::clamp_unit(self.r),
            g: math::clamp_unit(self.g),
            b: math::clamp_unit(self.b),
        }
    }

    pub fn to_hsv(self) -> Hsv {
        crate::rgb_to_hsv(self)
    }

    /// Quantize with the given normalized alpha.
    pub fn quantize(self, alpha: f64) -> PackedColor {
        crate::quantize_to_packed_color(self, alpha)
    }

    pub fn from_vector(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn to_vector(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// HSV color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hsv {
    /// Degrees, nominally [0, 360) (any number)
    pub h: f64,
    /// [0, 1]
    pub s: f64,
    /// [0, 1]
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// The form [`Hsv::to_rgb`] actually converts: hue wrapped into
    /// [0, 360), saturation and value clamped into [0, 1].
    pub fn normalized(self) -> Self {
        Self {
            h: math::normalize_hue(self.h),
            s: math::clamp_unit(self.s),
            v: math::clamp_unit(self.v),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        crate::hsv_to_rgb(self)
    }

    /// Build from an `[h, s, v]` vector, e.g. the output of an interpolator.
    pub fn from_vector(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Flatten to `[h, s, v]`.
    pub fn to_vector(self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }
}

/// 8-bit-per-channel color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedColor {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for PackedColor {
    fn default() -> Self {
        Self::opaque(0, 0, 0)
    }
}

impl PackedColor {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Pack as `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Unpack from `0xAARRGGBB`.
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { a, r, g, b }
    }

    /// Normalized RGB channels, alpha dropped.
    pub fn to_rgb(self) -> Rgb {
        Rgb::from_rgb8(self.r, self.g, self.b)
    }

    /// Alpha component (0.0–1.0).
    pub fn alpha(self) -> f64 {
        self.a as f64 / CHANNEL_MAX
    }

    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA and needs the `alpha` feature.
    /// 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&stripped[i..i + 2], 16).ok();
        match stripped.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&stripped[i..i + 1], 16).ok();
                Some(Self::opaque(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17))
            }
            6 => Some(Self::opaque(byte(0)?, byte(2)?, byte(4)?)),
            #[cfg(feature = "alpha")]
            8 => Some(Self::new(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) when opaque, 8 chars (RRGGBBAA) otherwise.
    /// Without the `alpha` feature the alpha byte is never written.
    pub fn to_hex(&self) -> String {
        if cfg!(feature = "alpha") && !self.is_opaque() {
            format!("{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        } else {
            format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
    }
}

impl From<Rgb> for PackedColor {
    fn from(rgb: Rgb) -> Self {
        crate::quantize_opaque(rgb)
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb8_normalizes() {
        assert_eq!(Rgb::from_rgb8(255, 0, 51), Rgb::new(1.0, 0.0, 0.2));
    }

    #[test]
    fn clamped_pulls_channels_into_range() {
        let rgb = Rgb::new(-0.5, 0.3, 1.5).clamped();
        assert_eq!(rgb, Rgb::new(0.0, 0.3, 1.0));
        assert_eq!(Rgb::new(f64::NAN, 1.0, 1.0).clamped().r, 0.0);
    }

    #[test]
    fn hsv_normalized() {
        let hsv = Hsv::new(-90.0, 1.5, -0.25).normalized();
        assert_eq!(hsv, Hsv::new(270.0, 1.0, 0.0));
    }

    #[test]
    fn vector_forms() {
        let hsv = Hsv::new(210.0, 0.5, 0.25);
        assert_eq!(hsv.to_vector(), [210.0, 0.5, 0.25]);
        assert_eq!(Hsv::from_vector([210.0, 0.5, 0.25]), hsv);
        assert_eq!(Rgb::from_vector([0.1, 0.2, 0.3]).to_vector(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn argb_layout() {
        let c = PackedColor::new(0x80, 0x11, 0x22, 0x33);
        assert_eq!(c.to_argb(), 0x8011_2233);
        assert_eq!(PackedColor::from_argb(0xFF3B_82F6), PackedColor::opaque(0x3B, 0x82, 0xF6));
    }

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(PackedColor::default(), PackedColor::new(255, 0, 0, 0));
    }

    #[test]
    fn from_hex_lengths() {
        assert_eq!(PackedColor::from_hex("#3B82F6"), Some(PackedColor::opaque(0x3B, 0x82, 0xF6)));
        assert_eq!(PackedColor::from_hex("3b82f6"), Some(PackedColor::opaque(0x3B, 0x82, 0xF6)));
        assert_eq!(PackedColor::from_hex("F80"), Some(PackedColor::opaque(0xFF, 0x88, 0x00)));
    }

    #[cfg(feature = "alpha")]
    #[test]
    fn from_hex_with_alpha() {
        assert_eq!(
            PackedColor::from_hex("3B82F680"),
            Some(PackedColor::new(0x80, 0x3B, 0x82, 0xF6))
        );
    }

    #[test]
    fn from_hex_rejects_malformed() {
        assert_eq!(PackedColor::from_hex(""), None);
        assert_eq!(PackedColor::from_hex("#12"), None);
        assert_eq!(PackedColor::from_hex("GGGGGG"), None);
        assert_eq!(PackedColor::from_hex("12345"), None);
        assert_eq!(PackedColor::from_hex("##123456"), None);
        assert_eq!(PackedColor::from_hex("+12345"), None);
    }

    #[test]
    fn to_hex_opaque() {
        assert_eq!(PackedColor::opaque(0x3B, 0x82, 0xF6).to_hex(), "3B82F6");
        assert_eq!(PackedColor::opaque(0, 0, 0).to_string(), "#000000");
    }

    #[cfg(feature = "alpha")]
    #[test]
    fn to_hex_translucent() {
        assert_eq!(PackedColor::new(0x80, 0x3B, 0x82, 0xF6).to_hex(), "3B82F680");
        // Black keeps its alpha too
        assert_eq!(PackedColor::new(0, 0, 0, 0).to_hex(), "00000000");
    }

    #[test]
    fn packed_to_rgb() {
        let c = PackedColor::new(51, 255, 0, 51);
        assert_eq!(c.to_rgb(), Rgb::new(1.0, 0.0, 0.2));
        assert_eq!(c.alpha(), 0.2);
    }
}
