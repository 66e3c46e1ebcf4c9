//! `hsl(...)` decoding and HSL to RGB conversion.

use crate::color::Color;
use crate::error::FormatFault;
use crate::lexer::{self, Token};

/// Hue, saturation and lightness, each normalised to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslTriple {
    /// Hue as a fraction of a full turn, in `[0, 1)`.
    pub h: f64,
    /// Saturation fraction.
    pub s: f64,
    /// Lightness fraction.
    pub l: f64,
}

impl HslTriple {
    /// Normalises hue in degrees and saturation/lightness in percent.
    pub fn from_degrees_percent(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            h: normalize_hue(hue) / 360.0,
            s: saturation.clamp(0.0, 100.0) / 100.0,
            l: lightness.clamp(0.0, 100.0) / 100.0,
        }
    }

    /// Converts to an opaque RGB colour.
    ///
    /// Hue is split into six 60° sextants; the sextant picks which channel is
    /// the maximum `v`, which is the minimum `m`, and which one ramps between.
    #[allow(clippy::many_single_char_names)]
    pub fn to_color(self) -> Color {
        let Self { h, s, l } = self;

        let v = if l <= 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };

        let (r, g, b) = if v > 0.0 {
            let m = l + l - v;
            let sv = (v - m) / v;
            let scaled = h * 6.0;
            // h < 1, but h * 6 can still round up to 6.0
            let sextant = scaled.floor().min(5.0);
            let fract = scaled - sextant;
            let vsf = v * sv * fract;
            let mid1 = m + vsf;
            let mid2 = v - vsf;

            match sextant as u8 {
                0 => (v, mid1, m),
                1 => (mid2, v, m),
                2 => (m, v, mid1),
                3 => (m, mid2, v),
                4 => (mid1, m, v),
                _ => (v, m, mid2),
            }
        } else {
            (l, l, l)
        };

        Color::rgb(
            lexer::round_to_byte(r * 255.0),
            lexer::round_to_byte(g * 255.0),
            lexer::round_to_byte(b * 255.0),
        )
    }
}

/// Wraps degrees into `[0, 360)`.
pub fn normalize_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round a tiny negative input up to exactly 360.
    if h >= 360.0 { 0.0 } else { h }
}

/// Decodes `hue, saturation%, lightness%`. The result is always opaque.
pub fn decode(args: &[Token<'_>]) -> Result<Color, FormatFault> {
    let [hue, saturation, lightness] = args else {
        return Err(FormatFault::ArgumentCount {
            expected: "3",
            found: args.len(),
        });
    };

    if hue.is_percent() {
        return Err(FormatFault::UnexpectedPercentage(hue.text().to_string()));
    }
    for token in [saturation, lightness] {
        if !token.is_percent() {
            return Err(FormatFault::ExpectedPercentage(token.text().to_string()));
        }
    }

    // An infinite hue has no position on the wheel.
    let degrees = hue.decimal()?;
    if !degrees.is_finite() {
        return Err(FormatFault::InvalidNumber(hue.text().to_string()));
    }

    let triple = HslTriple::from_degrees_percent(
        degrees,
        saturation.decimal()?,
        lightness.decimal()?,
    );
    Ok(triple.to_color())
}
