//! Color codec: hex string ↔ RGB ↔ packed ARGB ↔ HLS conversions.
//!
//! All conversions are total for well-formed 6-digit hex input; a malformed
//! string is a caller error surfaced as [`Error::InvalidHex`] at parse time.
//! The hex → HLS → hex round trip is exact within ±1 per channel (the
//! intermediate representation is floating point).

use palette::{Hsl, IntoColor, Srgb};

use crate::error::Error;

// ============================================================================
// Rgb
// ============================================================================

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a 6-digit hex color, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(hex.to_owned()));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        Ok(Self {
            r: channel(0).map_err(|_| Error::InvalidHex(hex.to_owned()))?,
            g: channel(2).map_err(|_| Error::InvalidHex(hex.to_owned()))?,
            b: channel(4).map_err(|_| Error::InvalidHex(hex.to_owned()))?,
        })
    }

    /// Extracts the RGB channels of a packed `0xAARRGGBB` integer.
    ///
    /// The alpha byte is ignored; the perceptual theme generator always
    /// emits fully opaque colors.
    pub fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xff) as u8,
            g: ((argb >> 8) & 0xff) as u8,
            b: (argb & 0xff) as u8,
        }
    }

    /// Packs into a `0xAARRGGBB` integer with full alpha.
    pub fn to_argb(self) -> u32 {
        0xff00_0000 | (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts to hue/lightness/saturation.
    pub fn to_hls(self) -> Hls {
        let srgb = Srgb::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        );
        let hsl: Hsl = srgb.into_color();
        Hls {
            hue: f64::from(hsl.hue.into_positive_degrees()),
            lightness: f64::from(hsl.lightness),
            saturation: f64::from(hsl.saturation),
        }
    }

    /// Converts back from hue/lightness/saturation.
    pub fn from_hls(hls: Hls) -> Self {
        let hsl = Hsl::new(
            hls.hue as f32,
            hls.saturation as f32,
            hls.lightness as f32,
        );
        let srgb: Srgb = hsl.into_color();
        Self {
            r: (srgb.red * 255.0).round() as u8,
            g: (srgb.green * 255.0).round() as u8,
            b: (srgb.blue * 255.0).round() as u8,
        }
    }
}

// ============================================================================
// Hls
// ============================================================================

/// A hue/lightness/saturation triple.
///
/// Hue is in degrees `[0, 360)`; lightness and saturation are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hls {
    pub hue: f64,
    pub lightness: f64,
    pub saturation: f64,
}

// ============================================================================
// HexColor
// ============================================================================

/// A validated hex color that retains its original text form.
///
/// The theme generator's hex output is passed through to rendered templates
/// verbatim (`@{role.hex}` substitutes the exact string the palette was
/// built from), while the parsed [`Rgb`] value backs the numeric placeholder
/// forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor {
    text: String,
    rgb: Rgb,
}

impl HexColor {
    /// Validates and wraps a 6-digit hex string.
    ///
    /// A missing leading `#` is added so [`as_str`](Self::as_str) is always
    /// in `#rrggbb` form.
    pub fn parse(hex: &str) -> Result<Self, Error> {
        let rgb = Rgb::from_hex(hex)?;
        let text = if hex.starts_with('#') {
            hex.to_owned()
        } else {
            format!("#{hex}")
        };
        Ok(Self { text, rgb })
    }

    /// Builds from a packed ARGB integer, formatting lowercase hex.
    pub fn from_argb(argb: u32) -> Self {
        let rgb = Rgb::from_argb(argb);
        Self {
            text: rgb.to_hex(),
            rgb,
        }
    }

    /// The `#rrggbb` text form.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The hex digits without the leading `#`.
    pub fn stripped(&self) -> &str {
        &self.text[1..]
    }

    /// The parsed channel values.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// Tests
// ============================================================================
