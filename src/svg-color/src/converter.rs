//! Text to colour and colour to text.
//!
//! [`ColorConverter`] owns the two read-only tables the conversion needs (the
//! system palette and a named-colour resolver) and implements [`ColorCodec`].
//! It holds no mutable state, so one instance can serve any number of threads.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::args::function_arguments;
use crate::color::{Color, ColorValue};
use crate::config::ConverterConfig;
use crate::error::{ColorParseError, ConfigError, FormatFault, Result};
use crate::lexer::Token;
use crate::named::{CssNamedColors, NamedColorResolver};
use crate::system::SystemPalette;
use crate::{hsl, rgb};

/// Two-way conversion between attribute text and [`ColorValue`].
pub trait ColorCodec {
    /// Parses attribute text. Plain integers yield [`ColorValue::NotSet`].
    fn parse(&self, text: &str) -> Result<ColorValue>;

    /// Produces canonical text. Never fails; `NotSet` becomes `""`.
    fn serialize(&self, value: ColorValue) -> String;
}

type Decoder = fn(&[Token<'_>]) -> std::result::Result<Color, FormatFault>;

/// The colour converter.
///
/// Rules are tried in a fixed order: `rgb` notation, `hsl` notation, `#` hex,
/// system keywords, plain integers, the `grey` rewrite, then named colours.
#[derive(Debug, Clone, Default)]
pub struct ColorConverter<R = CssNamedColors> {
    palette: SystemPalette,
    named: R,
}

impl ColorConverter {
    /// A converter with the default palette and the CSS name table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A converter whose system palette comes from configuration.
    pub fn from_config(config: &ConverterConfig) -> std::result::Result<Self, ConfigError> {
        Ok(Self::new().with_palette(config.palette()?))
    }
}

impl<R: NamedColorResolver> ColorConverter<R> {
    /// A converter that falls back to a host-supplied name table.
    pub fn with_resolver(named: R) -> Self {
        Self {
            palette: SystemPalette::default(),
            named,
        }
    }

    /// Builder: replace the system palette.
    #[must_use]
    pub fn with_palette(mut self, palette: SystemPalette) -> Self {
        self.palette = palette;
        self
    }

    /// The system palette in use.
    pub fn palette(&self) -> &SystemPalette {
        &self.palette
    }

    /// The named-colour resolver in use.
    pub fn resolver(&self) -> &R {
        &self.named
    }

    fn resolve_named(&self, input: &str, name: &str) -> Result<ColorValue> {
        if name.is_empty() {
            return Ok(ColorValue::NotSet);
        }
        match self.named.resolve(name) {
            Some(color) => Ok(color.into()),
            None => {
                debug!(input, "unrecognized colour");
                Err(ColorParseError::Unrecognized(input.to_string()))
            }
        }
    }
}

impl<R: NamedColorResolver> ColorCodec for ColorConverter<R> {
    fn parse(&self, text: &str) -> Result<ColorValue> {
        let input = text.trim();

        if starts_with_ignore_ascii_case(input, "rgb") {
            trace!(input, "rgb notation");
            return decode_function(input, rgb::decode);
        }

        if starts_with_ignore_ascii_case(input, "hsl") {
            trace!(input, "hsl notation");
            return decode_function(input, hsl::decode);
        }

        if input.starts_with('#') && matches!(input.chars().count(), 4 | 7) {
            trace!(input, "hex notation");
            return Color::from_hex(input)
                .map(ColorValue::Rgba)
                .map_err(|fault| reject(input, fault));
        }

        if let Some(color) = self.palette.resolve(input) {
            trace!(input, "system colour");
            return Ok(color.into());
        }

        // Plain integers are placeholders, not colours.
        if input.parse::<i32>().is_ok() {
            trace!(input, "integer treated as not set");
            return Ok(ColorValue::NotSet);
        }

        if let Some(gray) = rewrite_grey(input) {
            debug!(input, rewritten = %gray, "grey spelling rewritten");
            return self.resolve_named(input, &gray);
        }

        self.resolve_named(input, input)
    }

    fn serialize(&self, value: ColorValue) -> String {
        let ColorValue::Rgba(color) = value else {
            return String::new();
        };

        match self.named.name_of(color) {
            Some(name) if name.eq_ignore_ascii_case("lightgray") => "lightgrey".to_string(),
            Some(name) => name.to_ascii_lowercase(),
            None => color.to_hex(),
        }
    }
}

fn decode_function(input: &str, decode: Decoder) -> Result<ColorValue> {
    function_arguments(input)
        .and_then(|args| decode(&args))
        .map(ColorValue::Rgba)
        .map_err(|fault| reject(input, fault))
}

fn reject(input: &str, fault: FormatFault) -> ColorParseError {
    debug!(input, %fault, "malformed colour");
    ColorParseError::invalid_format(input, fault)
}

fn starts_with_ignore_ascii_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// `...grey` becomes `...gray`, keeping the case of the `g`.
fn rewrite_grey(input: &str) -> Option<String> {
    let split = input.len().checked_sub(4)?;
    let (stem, tail) = (input.get(..split)?, input.get(split..)?);
    if !tail.eq_ignore_ascii_case("grey") {
        return None;
    }
    let gray = if tail.starts_with('G') { "Gray" } else { "gray" };
    Some(format!("{stem}{gray}"))
}

impl FromStr for ColorValue {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize(*self))
    }
}
