//! Converter configuration.
//!
//! ```toml
//! [system_colors]
//! highlight = "#3399FF"
//! window = "rgb(30, 30, 30)"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::ColorValue;
use crate::error::ConfigError;
use crate::system::{SystemColor, SystemPalette};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "SVG_COLOR_CONFIG";

/// Configuration for [`crate::ColorConverter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// System colour overrides, keyword to colour text.
    pub system_colors: BTreeMap<String, String>,
}

impl ConverterConfig {
    /// Parses TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            overrides = config.system_colors.len(),
            "loaded colour configuration"
        );
        Ok(config)
    }

    /// Builder: add one system colour override.
    #[must_use]
    pub fn with_system_color(mut self, keyword: impl Into<String>, value: impl Into<String>) -> Self {
        self.system_colors.insert(keyword.into(), value.into());
        self
    }

    /// The default palette with every override applied.
    ///
    /// Override values go through the default converter and must produce a
    /// concrete colour.
    pub fn palette(&self) -> Result<SystemPalette, ConfigError> {
        self.system_colors
            .iter()
            .try_fold(SystemPalette::default(), |palette, (keyword, value)| {
                let key = SystemColor::from_keyword(keyword.trim())
                    .ok_or_else(|| ConfigError::UnknownSystemColor(keyword.clone()))?;
                match crate::parse(value) {
                    Ok(ColorValue::Rgba(color)) => Ok(palette.with_color(key, color)),
                    _ => Err(ConfigError::InvalidColor {
                        keyword: keyword.clone(),
                        value: value.clone(),
                    }),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::color::Color;

    #[test]
    fn test_empty_config_is_default_palette() {
        let config = ConverterConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConverterConfig::default());
        assert_eq!(config.palette().unwrap(), SystemPalette::default());
    }

    #[test]
    fn test_overrides() {
        let config = ConverterConfig::from_toml_str(
            r##"
            [system_colors]
            Highlight = "#3399FF"
            window = "rgb(30, 30, 30)"
            "##,
        )
        .unwrap();
        let palette = config.palette().unwrap();
        assert_eq!(
            palette.get(SystemColor::Highlight),
            Color::rgb(0x33, 0x99, 0xFF)
        );
        assert_eq!(palette.get(SystemColor::Window), Color::rgb(30, 30, 30));
        assert_eq!(
            palette.get(SystemColor::Menu),
            SystemColor::Menu.default_color()
        );
    }

    #[test]
    fn test_unknown_keyword() {
        let config = ConverterConfig::default().with_system_color("titlebar", "red");
        assert!(matches!(
            config.palette(),
            Err(ConfigError::UnknownSystemColor(ref k)) if k == "titlebar"
        ));
    }

    #[test]
    fn test_invalid_value() {
        for value in ["rgb(1,2)", "notacolor", "42"] {
            let config = ConverterConfig::default().with_system_color("menu", value);
            assert!(
                matches!(config.palette(), Err(ConfigError::InvalidColor { .. })),
                "{value}"
            );
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            ConverterConfig::from_toml_str("colours = 1"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[system_colors]\nbuttonface = \"silver\"").unwrap();

        let config = ConverterConfig::load(file.path()).unwrap();
        assert_eq!(
            config.palette().unwrap().get(SystemColor::ButtonFace),
            Color::rgb(192, 192, 192)
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ConverterConfig::load(dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
