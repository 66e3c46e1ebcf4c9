//! `rgb(...)` / `rgba(...)` decoding.

use crate::color::Color;
use crate::error::FormatFault;
use crate::lexer::{self, Token};

/// Channel units, fixed by the red channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChannelMode {
    Integer,
    Percent,
}

/// Decodes red, green, blue and an optional alpha.
///
/// Red decides whether all three colour channels are percentages; green and
/// blue must agree. Alpha is a plain number: at most 1 is a fraction, anything
/// larger is taken as an already-scaled byte. Missing alpha is opaque.
pub fn decode(args: &[Token<'_>]) -> Result<Color, FormatFault> {
    let (channels, alpha) = match args {
        [r, g, b] => ([r, g, b], None),
        [r, g, b, a] => ([r, g, b], Some(a)),
        _ => {
            return Err(FormatFault::ArgumentCount {
                expected: "3 or 4",
                found: args.len(),
            });
        }
    };

    let mode = if channels[0].is_percent() {
        ChannelMode::Percent
    } else {
        ChannelMode::Integer
    };

    let mut rgb = [0u8; 3];
    for (slot, token) in rgb.iter_mut().zip(channels) {
        *slot = channel(token, mode)?;
    }

    let a = match alpha {
        Some(token) if token.is_percent() => {
            return Err(FormatFault::UnexpectedPercentage(token.text().to_string()));
        }
        Some(token) => lexer::alpha_from_decimal(token.decimal()?),
        None => 255,
    };

    Ok(Color::rgba(rgb[0], rgb[1], rgb[2], a))
}

fn channel(token: &Token<'_>, mode: ChannelMode) -> Result<u8, FormatFault> {
    match (mode, token.is_percent()) {
        (ChannelMode::Percent, true) => Ok(lexer::channel_from_percent(token.single()?)),
        (ChannelMode::Integer, false) => Ok(lexer::channel_from_integer(token.integer()?)),
        _ => Err(FormatFault::MixedChannelUnits),
    }
}
