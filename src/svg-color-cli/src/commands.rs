//! Subcommand handlers.
//!
//! Each handler writes results to `out` and per-value failures to `err`, and
//! returns whether every value succeeded.

use std::io::Write;

use anyhow::{Context, bail};
use serde_json::json;

use svg_color::{Color, ColorCodec, ColorValue};

/// `parse`: one line per value, `none` for NotSet.
pub fn parse_text<C: ColorCodec>(
    codec: &C,
    values: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut all_ok = true;
    for value in values {
        match codec.parse(value) {
            Ok(ColorValue::NotSet) => writeln!(out, "none")?,
            Ok(parsed) => writeln!(out, "{}", codec.serialize(parsed))?,
            Err(e) => {
                writeln!(err, "error: {e}")?;
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

/// `parse --json`: one JSON object per value.
pub fn parse_json<C: ColorCodec>(
    codec: &C,
    values: &[String],
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut all_ok = true;
    for value in values {
        let line = match codec.parse(value) {
            Ok(parsed) => json!({
                "input": value,
                "value": parsed,
                "text": codec.serialize(parsed),
            }),
            Err(e) => {
                all_ok = false;
                json!({
                    "input": value,
                    "error": e.to_string(),
                    "kind": if e.is_format_error() { "invalid_format" } else { "unrecognized" },
                })
            }
        };
        writeln!(out, "{}", serde_json::to_string(&line)?)?;
    }
    Ok(all_ok)
}

/// `serialize`: canonical text for each packed value.
pub fn serialize<C: ColorCodec>(
    codec: &C,
    values: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut all_ok = true;
    for value in values {
        match parse_argb(value) {
            Ok(color) => writeln!(out, "{}", codec.serialize(color.into()))?,
            Err(e) => {
                writeln!(err, "error: {e:#}")?;
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

/// `system`: every keyword with its effective colour.
pub fn system<R>(
    converter: &svg_color::ColorConverter<R>,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    R: svg_color::NamedColorResolver,
{
    for (key, color) in converter.palette().iter() {
        writeln!(out, "{:<20} {}", key.keyword(), color.to_hex())?;
    }
    Ok(())
}

/// Parses `AARRGGBB` or `RRGGBB` hex. The six-digit form is opaque.
pub fn parse_argb(text: &str) -> anyhow::Result<Color> {
    let digits = text
        .strip_prefix('#')
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("'{text}' is not hexadecimal");
    }
    let packed = u32::from_str_radix(digits, 16)
        .with_context(|| format!("'{text}' is not a packed colour"))?;

    match digits.len() {
        8 => Ok(Color::from_argb_u32(packed)),
        6 => Ok(Color::from_argb_u32(0xFF00_0000 | packed)),
        n => bail!("'{text}' has {n} hex digits, expected 6 or 8"),
    }
}
