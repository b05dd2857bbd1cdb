//! Palettes and light/dark palette pairs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use hueprint_core::HslColor;

use crate::role::ColorRole;

/// Light or dark variant of a palette pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Flip between light and dark
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value of the `dark` query parameter
    pub fn as_flag(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}

/// Role to color assignments for one scheme.
///
/// A palette is built in one step from its entries and never changes
/// afterwards. Iteration follows insertion order, which keeps exported
/// snippets stable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: IndexMap<ColorRole, HslColor>,
}

impl Palette {
    pub fn get(&self, role: ColorRole) -> Option<HslColor> {
        self.entries.get(&role).copied()
    }

    pub fn contains(&self, role: ColorRole) -> bool {
        self.entries.contains_key(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, HslColor)> + '_ {
        self.entries.iter().map(|(role, color)| (*role, *color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every role in [`ColorRole::ALL`] has a color.
    pub fn is_complete(&self) -> bool {
        ColorRole::ALL.iter().all(|role| self.contains(*role))
    }

    /// Roles from [`ColorRole::ALL`] without a color, in canonical order.
    pub fn missing_roles(&self) -> Vec<ColorRole> {
        ColorRole::ALL
            .into_iter()
            .filter(|role| !self.contains(*role))
            .collect()
    }
}

impl FromIterator<(ColorRole, HslColor)> for Palette {
    /// Later entries for the same role replace earlier ones but keep the
    /// original position.
    fn from_iter<I: IntoIterator<Item = (ColorRole, HslColor)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Light and dark palettes derived from the same base hue
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PalettePair {
    pub light: Palette,
    pub dark: Palette,
}

impl PalettePair {
    pub fn new(light: Palette, dark: Palette) -> Self {
        Self { light, dark }
    }

    /// Get the palette for a scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &Palette {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.light.is_complete() && self.dark.is_complete()
    }
}
