//! RGBA colour values and the `#rgb` / `#rrggbb` hex codec.
//!
//! This module provides the [`Color`] type, a concrete 8-bit-per-channel RGBA
//! value, and [`ColorValue`], which adds the [`ColorValue::NotSet`] sentinel used
//! for attribute values that deliberately carry no paint.
//!
//! # Supported Formats
//!
//! - Hex strings: `#RGB` (digit replication) and `#RRGGBB`
//! - Packed `0xAARRGGBB` integers
//! - `(r, g, b)` and `(r, g, b, a)` byte tuples
//!
//! # Examples
//!
//! ```
//! use svg_color::color::Color;
//!
//! let orange = Color::from_hex("#fb0").unwrap();
//! assert_eq!(orange, Color::rgb(0xFF, 0xBB, 0x00));
//! assert_eq!(orange.to_hex(), "#FFBB00");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FormatFault;

/// An RGBA colour with 8-bit channels.
///
/// Every channel is in `0..=255` by construction, and `a` = 255 is fully opaque.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component (0 = transparent, 255 = opaque).
    pub a: u8,
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "Color::rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::rgba({}, {}, {}, {})",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ============================================================================
// Common color constants
// ============================================================================

impl Color {
    /// Fully transparent black (alpha = 0).
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque black (#000000).
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white (#FFFFFF).
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

// ============================================================================
// Constructors
// ============================================================================

impl Color {
    /// Creates a color from RGBA components.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with the alpha channel first, the order most paint
    /// APIs use.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns true when alpha is 255.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

// ============================================================================
// Hex parsing and formatting
// ============================================================================

impl Color {
    /// Parses `#rgb` or `#rrggbb`.
    ///
    /// The three-digit form replicates each digit (`#fb0` is `#ffbb00`), it
    /// never pads with zeros. The result is always opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use svg_color::color::Color;
    ///
    /// assert_eq!(Color::from_hex("#fb0"), Color::from_hex("#ffbb00"));
    /// assert!(Color::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, FormatFault> {
        let digits = hex.strip_prefix('#').ok_or(FormatFault::InvalidHexDigit)?;

        let len = digits.chars().count();
        if len != 3 && len != 6 {
            return Err(FormatFault::HexLength(len));
        }

        let mut nibbles = [0u8; 6];
        for (slot, ch) in nibbles.iter_mut().zip(digits.chars()) {
            *slot = ch.to_digit(16).ok_or(FormatFault::InvalidHexDigit)? as u8;
        }

        let (r, g, b) = if len == 3 {
            (nibbles[0] * 0x11, nibbles[1] * 0x11, nibbles[2] * 0x11)
        } else {
            (
                (nibbles[0] << 4) | nibbles[1],
                (nibbles[2] << 4) | nibbles[3],
                (nibbles[4] << 4) | nibbles[5],
            )
        };

        Ok(Self::rgb(r, g, b))
    }

    /// Formats the color as `#RRGGBB` with uppercase digits.
    ///
    /// Alpha has no place in this notation and is dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ============================================================================
// Packed conversion
// ============================================================================

impl Color {
    /// Packs the color as `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpacks a `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb_u32(value: u32) -> Self {
        Self::from_argb(
            ((value >> 24) & 0xFF) as u8,
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

// ============================================================================
// ColorValue
// ============================================================================

/// The outcome of parsing a colour attribute.
///
/// `NotSet` means "no paint" and is distinct from every concrete colour,
/// transparent black included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorValue {
    /// No paint was specified.
    #[default]
    NotSet,
    /// A concrete colour.
    Rgba(Color),
}

impl ColorValue {
    /// Returns true for a concrete colour.
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Rgba(_))
    }

    /// Returns the concrete colour, if any.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Rgba(color) => Some(*color),
            Self::NotSet => None,
        }
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        Self::Rgba(color)
    }
}
