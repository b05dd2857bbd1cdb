//! Emotion presets: named base colors that seed a palette.

use std::fmt::{Display, Formatter};

use hueprint_core::Color;

use crate::derive::derive_pair;
use crate::error::DerivationError;
use crate::palette::PalettePair;

/// Built-in emotion catalog.
///
/// Only the hue of an emotion's base color is used; saturation and
/// lightness come from the palette recipe. The achromatic presets
/// ([`Emotion::Sophistication`] and [`Emotion::Purity`]) therefore land on
/// hue 0 and give red-tinted palettes, not grayscale ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Emotion {
    Trust,
    Energy,
    Optimism,
    Growth,
    Luxury,
    Friendliness,
    Sophistication,
    Purity,
}

impl Emotion {
    /// Stable id for config and command-line use.
    pub fn id(self) -> &'static str {
        match self {
            Self::Trust => "trust",
            Self::Energy => "energy",
            Self::Optimism => "optimism",
            Self::Growth => "growth",
            Self::Luxury => "luxury",
            Self::Friendliness => "friendliness",
            Self::Sophistication => "sophistication",
            Self::Purity => "purity",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Trust => "Trust and Stability",
            Self::Energy => "Energy and Excitement",
            Self::Optimism => "Optimism and Cheerfulness",
            Self::Growth => "Growth and Harmony",
            Self::Luxury => "Luxury and Creativity",
            Self::Friendliness => "Friendliness and Confidence",
            Self::Sophistication => "Sophistication and Elegance",
            Self::Purity => "Purity and Simplicity",
        }
    }

    /// Full catalog.
    pub fn all() -> &'static [Emotion] {
        const EMOTIONS: [Emotion; 8] = [
            Emotion::Trust,
            Emotion::Energy,
            Emotion::Optimism,
            Emotion::Growth,
            Emotion::Luxury,
            Emotion::Friendliness,
            Emotion::Sophistication,
            Emotion::Purity,
        ];
        &EMOTIONS
    }

    /// Look up by [`Emotion::id`] or display name, ignoring ASCII case.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::all().iter().copied().find(|emotion| {
            emotion.id().eq_ignore_ascii_case(id) || emotion.display_name().eq_ignore_ascii_case(id)
        })
    }

    pub fn base_color(self) -> Color {
        match self {
            Self::Trust => Color::from_hex(0x0000FF),
            Self::Energy => Color::from_hex(0xFF0000),
            Self::Optimism => Color::from_hex(0xFFFF00),
            Self::Growth => Color::from_hex(0x00FF00),
            Self::Luxury => Color::from_hex(0x800080),
            Self::Friendliness => Color::from_hex(0xFFA500),
            Self::Sophistication => Color::from_hex(0x000000),
            Self::Purity => Color::from_hex(0xFFFFFF),
        }
    }

    /// HSL hue of the base color; 0 for black and white.
    pub fn base_hue(self) -> f32 {
        self.base_color().to_hsl().hue
    }
}

impl Display for Emotion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Derive a palette pair seeded by an emotion's base hue.
pub fn generate_pair_for_emotion(emotion: Emotion) -> Result<PalettePair, DerivationError> {
    let base_hue = emotion.base_hue();
    tracing::debug!(emotion = emotion.id(), base_hue, "generating palette pair from emotion");
    derive_pair(base_hue)
}
