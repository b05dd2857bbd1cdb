//! Hueprint Palette Engine
//!
//! Generates light/dark theme palettes for website mockups, shares them as
//! URL-safe tokens, and exports them as CSS custom properties.
//!
//! # Overview
//!
//! The engine provides:
//! - **Derivation**: one fixed recipe turns a base hue into a palette covering
//!   every [`ColorRole`] (`primary`, `muted`, `ring`, ...)
//! - **Generation**: light and dark palettes from one sampled hue, with the
//!   randomness behind [`HueSource`]
//! - **Emotion presets**: named base colors that seed a palette
//! - **Sharing**: `palette=<token>&dark=<flag>` query parameters
//! - **Export**: `:root { --primary: 210 60% 40%; ... }` snippets
//!
//! Engine functions are pure and synchronous. [`PaletteState`] is the one
//! stateful piece, an owned value that a front end keeps for the current
//! pair and scheme.
//!
//! # Quick Start
//!
//! ```rust
//! use hueprint_theme::{decode, derive_pair, encode, format_snippet, ColorRole, ColorScheme};
//!
//! let pair = derive_pair(210.0).unwrap();
//! assert_eq!(
//!     pair.light.get(ColorRole::Primary).unwrap().to_string(),
//!     "hsl(210, 60%, 40%)"
//! );
//!
//! // Share
//! let params = encode(&pair, ColorScheme::Dark).unwrap();
//! let (restored, scheme) = decode(&params).unwrap();
//! assert_eq!(restored, pair);
//! assert!(scheme.is_dark());
//!
//! // Export
//! let css = format_snippet(&pair);
//! assert!(css.starts_with(":root {\n  --primary: 210 60% 40%;"));
//! ```
//!
//! # Errors
//!
//! - [`DerivationError`]: non-finite hue or an unparsable color given to
//!   the contrast step
//! - [`DecodeError`]: a share token that is not base64, not a palette pair,
//!   or (for [`decode_complete`]) missing roles
//!
//! Both are recoverable. Callers fall back to the previous or an empty
//! palette, which is what [`PaletteState`] does.

pub mod config;
pub mod derive;
pub mod emotion;
pub mod error;
pub mod generate;
pub mod palette;
pub mod role;
pub mod share;
pub mod snippet;
pub mod state;

// Re-export commonly used types
pub use config::{GenerateOptions, PaletteConfig};
pub use derive::{contrast_foreground, contrast_foreground_css, derive_palette, derive_pair};
pub use emotion::{generate_pair_for_emotion, Emotion};
pub use error::{ConfigError, DecodeError, DerivationError, EncodeError, PaletteError};
pub use generate::{generate_pair, generate_random_pair, FixedHue, HueSource, RandomHues};
pub use palette::{ColorScheme, Palette, PalettePair};
pub use role::ColorRole;
pub use share::{decode, decode_complete, decode_token, encode, encode_token, ShareParams};
pub use snippet::{format_snippet, format_snippet_with, SnippetOptions};
pub use state::PaletteState;

pub use hueprint_core::{Color, HslColor, HslParseError};
