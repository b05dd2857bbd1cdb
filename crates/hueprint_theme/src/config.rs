//! Palette engine configuration (`hueprint.toml`)

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::palette::ColorScheme;
use crate::snippet::SnippetOptions;

/// Top-level configuration.
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub generate: GenerateOptions,
    pub snippet: SnippetOptions,
}

/// Defaults for palette generation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Fixed seed for reproducible hues; random when unset
    pub seed: Option<u64>,
    /// Scheme shown when nothing else selects one
    pub scheme: ColorScheme,
}

impl PaletteConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_uses_defaults() {
        let config = PaletteConfig::from_toml_str("").unwrap();
        assert_eq!(config, PaletteConfig::default());
        assert_eq!(config.snippet.radius, "0.5rem");
        assert_eq!(config.generate.scheme, ColorScheme::Light);
    }

    #[test]
    fn partial_overrides() {
        let src = r#"
[generate]
seed = 42
scheme = "dark"

[snippet]
radius = "1rem"
"#;
        let config = PaletteConfig::from_toml_str(src).unwrap();
        assert_eq!(config.generate.seed, Some(42));
        assert_eq!(config.generate.scheme, ColorScheme::Dark);
        assert_eq!(config.snippet.radius, "1rem");
        assert_eq!(config.snippet.light_selector, ":root");
    }

    #[test]
    fn rejects_unknown_scheme() {
        let err = PaletteConfig::from_toml_str("[generate]\nscheme = \"sepia\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn serializes_back() {
        let config = PaletteConfig {
            generate: GenerateOptions {
                seed: Some(7),
                scheme: ColorScheme::Dark,
            },
            snippet: SnippetOptions::default(),
        };
        let text = config.to_toml().unwrap();
        assert_eq!(PaletteConfig::from_toml_str(&text).unwrap(), config);
    }
}
