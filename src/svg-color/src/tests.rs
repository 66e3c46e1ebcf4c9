//! Tests for colour attribute conversion.
//!
//! Coverage:
//! 1. Rule priority in the dispatcher
//! 2. Functional, hex, system and named notations end to end
//! 3. NotSet handling for plain integers
//! 4. Error classification
//! 5. Serialization

use super::*;

fn rgba(r: u8, g: u8, b: u8, a: u8) -> ColorValue {
    Color::rgba(r, g, b, a).into()
}

fn rgb(r: u8, g: u8, b: u8) -> ColorValue {
    Color::rgb(r, g, b).into()
}

// ============================================================================
// Functional notation
// ============================================================================

mod functional_tests {
    use super::*;

    #[test]
    fn test_rgb_integer_and_percent_agree() {
        let expected = rgba(255, 0, 0, 255);
        assert_eq!(parse("rgb(255,0,0)").unwrap(), expected);
        assert_eq!(parse("rgb(100%,0%,0%)").unwrap(), expected);
        assert_eq!(parse("  rgb( 255 , 0 , 0 )  ").unwrap(), expected);
    }

    #[test]
    fn test_rgba_alpha_forms() {
        assert_eq!(parse("rgba(0,0,0,0.5)").unwrap(), rgba(0, 0, 0, 128));
        assert_eq!(parse("rgba(0,0,0,128)").unwrap(), rgba(0, 0, 0, 128));
        assert_eq!(parse("rgba(0 0 0 .5)").unwrap(), rgba(0, 0, 0, 128));
    }

    #[test]
    fn test_rgb_prefix_is_case_insensitive() {
        assert_eq!(parse("RGB(1,2,3)").unwrap(), rgb(1, 2, 3));
        assert_eq!(parse("Rgba(1,2,3,1)").unwrap(), rgb(1, 2, 3));
    }

    #[test]
    fn test_rgb_ignores_text_after_close_paren() {
        assert_eq!(parse("rgb(1,2,3) !important").unwrap(), rgb(1, 2, 3));
    }

    #[test]
    fn test_huge_magnitudes_saturate() {
        assert_eq!(parse("rgb(99999999999999999999,0,0)").unwrap(), rgb(255, 0, 0));
        assert_eq!(parse("rgb(1e999%,0%,0%)").unwrap(), rgb(255, 0, 0));
        assert_eq!(parse("rgba(0,0,0,1e999)").unwrap(), rgb(0, 0, 0));
        assert_eq!(
            parse("hsl(0,1e999%,50%)").unwrap(),
            parse("hsl(0,100%,50%)").unwrap()
        );
        assert!(parse("hsl(1e999,100%,50%)").unwrap_err().is_format_error());
    }

    #[test]
    fn test_hsl() {
        assert_eq!(parse("hsl(0,100%,50%)").unwrap(), rgb(255, 0, 0));
        assert_eq!(parse("HSL(120, 100%, 25%)").unwrap(), rgb(0, 128, 0));
    }

    #[test]
    fn test_hsl_hue_wraparound() {
        assert_eq!(
            parse("hsl(360,100%,50%)").unwrap(),
            parse("hsl(0,100%,50%)").unwrap()
        );
        assert_eq!(
            parse("hsl(-30,50%,50%)").unwrap(),
            parse("hsl(330,50%,50%)").unwrap()
        );
    }
}

// ============================================================================
// Hex notation
// ============================================================================

mod hex_tests {
    use super::*;

    #[test]
    fn test_short_form_replicates_digits() {
        assert_eq!(parse("#fb0").unwrap(), parse("#ffbb00").unwrap());
        assert_eq!(parse("#FB0").unwrap(), rgb(0xFF, 0xBB, 0x00));
    }

    #[test]
    fn test_bad_digits_are_format_errors() {
        let err = parse("#ggg").unwrap_err();
        assert!(err.is_format_error());
        assert_eq!(err.input(), "#ggg");

        let err = parse("#12345z").unwrap_err();
        assert!(matches!(
            err,
            ColorParseError::InvalidFormat {
                fault: FormatFault::InvalidHexDigit,
                ..
            }
        ));
    }

    #[test]
    fn test_other_lengths_fall_through() {
        // Not decoded as hex; nothing later matches either.
        let err = parse("#12345").unwrap_err();
        assert_eq!(err, ColorParseError::Unrecognized("#12345".to_string()));

        let err = parse("#FF800080").unwrap_err();
        assert!(!err.is_format_error());

        assert!(matches!(parse("#"), Err(ColorParseError::Unrecognized(_))));
    }
}

// ============================================================================
// Keywords
// ============================================================================

mod keyword_tests {
    use super::*;

    #[test]
    fn test_system_colors_case_insensitive() {
        let lower = parse("activeborder").unwrap();
        assert_eq!(parse("ActiveBorder").unwrap(), lower);
        assert_eq!(parse("ACTIVEBORDER").unwrap(), lower);
        assert_eq!(lower, SystemColor::ActiveBorder.default_color().into());
    }

    #[test]
    fn test_system_color_beats_named_color() {
        // "background" and "menu" are system keywords, not CSS names.
        assert_eq!(
            parse("Background").unwrap(),
            SystemColor::Background.default_color().into()
        );
        assert_eq!(
            parse("threeddarkshadow").unwrap(),
            rgb(0x69, 0x69, 0x69)
        );
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(parse("red").unwrap(), rgb(255, 0, 0));
        assert_eq!(parse("CornflowerBlue").unwrap(), rgb(100, 149, 237));
        assert_eq!(parse("transparent").unwrap(), rgba(0, 0, 0, 0));
    }

    #[test]
    fn test_grey_and_gray_agree() {
        let expected = rgb(211, 211, 211);
        assert_eq!(parse("LightGrey").unwrap(), expected);
        assert_eq!(parse("LightGray").unwrap(), expected);
        assert_eq!(parse("lightgray").unwrap(), expected);
        assert_eq!(parse("lightgrey").unwrap(), expected);
        assert_eq!(parse("grey").unwrap(), rgb(128, 128, 128));
        assert_eq!(parse("DarkSlateGrey").unwrap(), rgb(47, 79, 79));
    }

    #[test]
    fn test_grey_rewrite_of_unknown_name() {
        let err = parse("bluegrey").unwrap_err();
        assert_eq!(err, ColorParseError::Unrecognized("bluegrey".to_string()));
    }

    #[test]
    fn test_unrecognized() {
        let err = parse("notacolor").unwrap_err();
        assert!(!err.is_format_error());
        assert_eq!(err.to_string(), "unrecognized colour: 'notacolor'");
    }
}

// ============================================================================
// NotSet
// ============================================================================

mod not_set_tests {
    use super::*;

    #[test]
    fn test_integers_are_not_set() {
        assert_eq!(parse("42").unwrap(), ColorValue::NotSet);
        assert_eq!(parse("-7").unwrap(), ColorValue::NotSet);
        assert_eq!(parse("+7").unwrap(), ColorValue::NotSet);
        assert_eq!(parse(" 0 ").unwrap(), ColorValue::NotSet);
    }

    #[test]
    fn test_integer_outside_i32_is_not_a_placeholder() {
        assert!(matches!(
            parse("99999999999"),
            Err(ColorParseError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_decimals_are_not_placeholders() {
        assert!(parse("1.5").is_err());
    }

    #[test]
    fn test_empty_is_not_set() {
        assert_eq!(parse("").unwrap(), ColorValue::NotSet);
        assert_eq!(parse("   ").unwrap(), ColorValue::NotSet);
    }

    #[test]
    fn test_not_set_differs_from_transparent() {
        assert_ne!(parse("0").unwrap(), parse("transparent").unwrap());
    }
}

// ============================================================================
// Errors
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_mixed_units() {
        let err = parse("rgb(10%,5,5)").unwrap_err();
        assert_eq!(
            err,
            ColorParseError::InvalidFormat {
                input: "rgb(10%,5,5)".to_string(),
                fault: FormatFault::MixedChannelUnits,
            }
        );
    }

    #[test]
    fn test_too_few_channels() {
        let err = parse("rgb(1,2)").unwrap_err();
        assert!(err.is_format_error());
        assert_eq!(err.to_string(), "colour is in an invalid format: 'rgb(1,2)'");
    }

    #[test]
    fn test_empty_argument_list() {
        assert!(parse("rgb()").unwrap_err().is_format_error());
        assert!(parse("hsl()").unwrap_err().is_format_error());
    }

    #[test]
    fn test_missing_parentheses() {
        let err = parse("rgb 1 2 3").unwrap_err();
        assert!(matches!(
            err,
            ColorParseError::InvalidFormat {
                fault: FormatFault::MissingParentheses,
                ..
            }
        ));
        assert!(parse("hsl(0,100%,50%").unwrap_err().is_format_error());
    }

    #[test]
    fn test_format_errors_do_not_fall_through() {
        // "rgbcolor" would never be a named colour, but the prefix commits.
        assert!(parse("rgbcolor").unwrap_err().is_format_error());
        assert!(parse("hsla(0,100%,50%,0.5)").unwrap_err().is_format_error());
    }

    #[test]
    fn test_error_carries_trimmed_input() {
        let err = parse("   rgb(a,b,c)  ").unwrap_err();
        assert_eq!(err.input(), "rgb(a,b,c)");
        assert!(matches!(
            err,
            ColorParseError::InvalidFormat {
                fault: FormatFault::InvalidNumber(ref token),
                ..
            } if token == "a"
        ));
    }

    #[test]
    fn test_error_source_is_the_fault() {
        use std::error::Error as _;

        let err = parse("hsl(0,50,50%)").unwrap_err();
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("expected a percentage, found '50'"));
    }
}

// ============================================================================
// Serialization
// ============================================================================

mod serialize_tests {
    use super::*;

    #[test]
    fn test_named_values() {
        assert_eq!(serialize(rgb(211, 211, 211)), "lightgrey");
        assert_eq!(serialize(rgb(255, 0, 0)), "red");
        assert_eq!(serialize(rgb(0, 255, 255)), "aqua");
        assert_eq!(serialize(rgba(0, 0, 0, 0)), "transparent");
    }

    #[test]
    fn test_unnamed_values_are_uppercase_hex() {
        assert_eq!(serialize(rgba(1, 2, 3, 255)), "#010203");
        assert_eq!(serialize(rgb(0xAB, 0xCD, 0xEF)), "#ABCDEF");
    }

    #[test]
    fn test_alpha_blocks_name_match_and_is_dropped() {
        assert_eq!(serialize(rgba(255, 0, 0, 128)), "#FF0000");
    }

    #[test]
    fn test_not_set_is_empty() {
        assert_eq!(serialize(ColorValue::NotSet), "");
    }

    #[test]
    fn test_hex_roundtrip_for_unnamed_colors() {
        for hex in ["#010203", "#ABCDEF", "#123456", "#FEDCBA"] {
            assert_eq!(serialize(parse(hex).unwrap()), hex);
            assert_eq!(serialize(parse(&hex.to_lowercase()).unwrap()), hex);
        }
    }

    #[test]
    fn test_display_and_from_str() {
        let value: ColorValue = "LightGrey".parse().unwrap();
        assert_eq!(value.to_string(), "lightgrey");
        assert_eq!(ColorValue::NotSet.to_string(), "");
    }
}

// ============================================================================
// Converter construction
// ============================================================================

mod converter_tests {
    use super::*;

    struct Brand;

    impl NamedColorResolver for Brand {
        fn resolve(&self, name: &str) -> Option<Color> {
            name.eq_ignore_ascii_case("brandblue")
                .then_some(Color::rgb(0, 0x55, 0xAA))
        }

        fn name_of(&self, color: Color) -> Option<&str> {
            (color == Color::rgb(0, 0x55, 0xAA)).then_some("BrandBlue")
        }
    }

    #[test]
    fn test_custom_resolver() {
        let converter = ColorConverter::with_resolver(Brand);
        assert_eq!(converter.parse("BRANDBLUE").unwrap(), rgb(0, 0x55, 0xAA));
        assert_eq!(converter.serialize(rgb(0, 0x55, 0xAA)), "brandblue");
        assert!(converter.parse("red").is_err());
        assert_eq!(converter.serialize(rgb(255, 0, 0)), "#FF0000");
        // Notations and system colours do not depend on the resolver.
        assert_eq!(converter.parse("#f00").unwrap(), rgb(255, 0, 0));
        assert!(converter.parse("menu").unwrap().is_set());
    }

    #[test]
    fn test_custom_palette() {
        let palette = SystemPalette::new().with_color(SystemColor::Window, Color::rgb(30, 30, 30));
        let converter = ColorConverter::new().with_palette(palette);
        assert_eq!(converter.parse("Window").unwrap(), rgb(30, 30, 30));
        assert_eq!(parse("Window").unwrap(), rgb(255, 255, 255));
    }

    #[test]
    fn test_from_config() {
        let config = ConverterConfig::default().with_system_color("highlight", "hsl(0,100%,50%)");
        let converter = ColorConverter::from_config(&config).unwrap();
        assert_eq!(converter.parse("highlight").unwrap(), rgb(255, 0, 0));
        assert_eq!(
            converter.palette().get(SystemColor::Highlight),
            Color::rgb(255, 0, 0)
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let converter = std::sync::Arc::new(ColorConverter::new());
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let converter = std::sync::Arc::clone(&converter);
                std::thread::spawn(move || {
                    let text = format!("rgb({i},{i},{i})");
                    converter.parse(&text).unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let i = i as u8;
            assert_eq!(handle.join().unwrap(), rgb(i, i, i));
        }
    }
}
