//! Hueprint Core
//!
//! Color primitives shared by the Hueprint palette engine:
//!
//! - [`Color`]: RGBA in sRGB space, with WCAG relative luminance
//! - [`HslColor`]: CSS `hsl()`/`hsla()` values that print, convert to RGB,
//!   and parse from `hsl()` or `rgb()` notation
//!
//! # Example
//!
//! ```rust
//! use hueprint_core::HslColor;
//!
//! let primary: HslColor = "hsl(210, 60%, 40%)".parse().unwrap();
//! assert_eq!(primary.channels(), "210 60% 40%");
//! assert!(primary.relative_luminance() < 0.5);
//! ```

pub mod color;
pub mod hsl;

pub use color::Color;
pub use hsl::{wrap_hue, HslColor, HslParseError};
