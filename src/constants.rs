//! Numeric conventions shared by the conversions.

/// Degrees in a full turn of the hue wheel
pub const HUE_TURN: f64 = 360.0;

/// Degrees covered by one sextant of the hue wheel
pub const SEXTANT_DEGREES: f64 = 60.0;

/// Index of the last sextant (300–360°)
pub const LAST_SEXTANT: u32 = 5;

/// Largest 8-bit channel value, the scale factor for quantization
pub const CHANNEL_MAX: f64 = 255.0;

/// Normalized alpha of a fully opaque color
pub const OPAQUE: f64 = 1.0;
