use thiserror::Error;

use hueprint_core::HslParseError;

use crate::role::ColorRole;

/// Failure inside the color math of palette derivation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DerivationError {
    #[error("base hue must be finite, got {0}")]
    NonFiniteHue(f32),

    #[error("cannot derive a contrast color: {0}")]
    UnparsableColor(#[from] HslParseError),
}

/// A share token that cannot be turned back into a palette pair.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("share token is empty")]
    Empty,

    #[error("share token is too large ({len} bytes, max {max})")]
    TooLarge { len: usize, max: usize },

    #[error("share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("share token does not contain UTF-8 text: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("share token does not describe a palette pair: {0}")]
    Structure(#[from] serde_json::Error),

    #[error("{side} palette is missing roles: {}", format_roles(.missing))]
    MissingRoles {
        side: &'static str,
        missing: Vec<ColorRole>,
    },
}

#[derive(Debug, Error)]
#[error("failed to serialize palette pair: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid palette config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize palette config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Any error the palette engine can report.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error(transparent)]
    Derivation(#[from] DerivationError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn format_roles(roles: &[ColorRole]) -> String {
    roles
        .iter()
        .map(|role| role.name())
        .collect::<Vec<_>>()
        .join(", ")
}
