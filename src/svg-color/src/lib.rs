#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::uninlined_format_args,
    clippy::doc_markdown
)]
//! SVG colour attribute conversion.
//!
//! Turns the colour text found in SVG presentation attributes into an RGBA
//! value, and turns RGBA values back into canonical text.
//!
//! # Accepted input
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)` with integer or percentage channels
//! - `hsl(h, s%, l%)`
//! - `#rgb` and `#rrggbb`
//! - CSS2 system colour keywords (`ButtonFace`, `ThreeDDarkShadow`, ...)
//! - named colours, including the `grey` spellings
//! - plain integers, which mean "not set"
//!
//! # Dispatch
//!
//! ```text
//! trimmed input
//!   │
//!   ├─ starts with "rgb" ──► rgb decoder ──► colour | FormatError
//!   ├─ starts with "hsl" ──► hsl decoder ──► colour | FormatError
//!   ├─ "#" + 3 or 6 chars ─► hex decoder ──► colour | FormatError
//!   ├─ system keyword ─────────────────────► colour
//!   ├─ 32-bit integer ─────────────────────► NotSet
//!   ├─ ends with "grey" ──► "...gray" ─┐
//!   └─ anything else ──────────────────┴──► named colour | Unrecognized
//! ```
//!
//! # Examples
//!
//! ```
//! use svg_color::{Color, ColorValue};
//!
//! assert_eq!(svg_color::parse("#fb0").unwrap(), svg_color::parse("#ffbb00").unwrap());
//! assert_eq!(svg_color::parse("42").unwrap(), ColorValue::NotSet);
//! assert_eq!(svg_color::serialize(Color::rgb(211, 211, 211).into()), "lightgrey");
//! ```

#[cfg(test)]
mod tests;

pub mod args;
pub mod color;
pub mod config;
pub mod converter;
pub mod error;
pub mod hsl;
pub mod lexer;
pub mod named;
pub mod rgb;
pub mod system;

use once_cell::sync::Lazy;

pub use color::{Color, ColorValue};
pub use config::ConverterConfig;
pub use converter::{ColorCodec, ColorConverter};
pub use error::{ColorParseError, ConfigError, FormatFault, Result};
pub use named::{CssNamedColors, NamedColorResolver};
pub use system::{SystemColor, SystemPalette};

static DEFAULT_CONVERTER: Lazy<ColorConverter> = Lazy::new(ColorConverter::new);

/// Parses colour text with the default converter.
pub fn parse(text: &str) -> Result<ColorValue> {
    DEFAULT_CONVERTER.parse(text)
}

/// Serializes a colour with the default converter.
pub fn serialize(value: ColorValue) -> String {
    DEFAULT_CONVERTER.serialize(value)
}
