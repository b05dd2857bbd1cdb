//! Color roles for palettes

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Semantic color slot of a mockup theme.
///
/// Serialized (and emitted as CSS variables) by its kebab-case name,
/// e.g. `PrimaryForeground` is `primary-foreground`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorRole {
    // Surfaces
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,

    // Fills and their text
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,

    // Outlines
    Border,
    Input,
    Ring,
}

impl ColorRole {
    /// Every role a complete palette carries.
    pub const ALL: [ColorRole; 19] = [
        ColorRole::Background,
        ColorRole::Foreground,
        ColorRole::Card,
        ColorRole::CardForeground,
        ColorRole::Popover,
        ColorRole::PopoverForeground,
        ColorRole::Primary,
        ColorRole::PrimaryForeground,
        ColorRole::Secondary,
        ColorRole::SecondaryForeground,
        ColorRole::Muted,
        ColorRole::MutedForeground,
        ColorRole::Accent,
        ColorRole::AccentForeground,
        ColorRole::Destructive,
        ColorRole::DestructiveForeground,
        ColorRole::Border,
        ColorRole::Input,
        ColorRole::Ring,
    ];

    /// Roles whose foreground is picked by contrast against the role color.
    pub const ACCENT_FAMILY: [ColorRole; 4] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Destructive,
    ];

    /// Stable kebab-case name, used for CSS variables and share tokens.
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "card-foreground",
            Self::Popover => "popover",
            Self::PopoverForeground => "popover-foreground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary-foreground",
            Self::Muted => "muted",
            Self::MutedForeground => "muted-foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent-foreground",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructive-foreground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }

    /// The text role paired with this background role, if any.
    pub fn foreground(self) -> Option<Self> {
        match self {
            Self::Background => Some(Self::Foreground),
            Self::Card => Some(Self::CardForeground),
            Self::Popover => Some(Self::PopoverForeground),
            Self::Primary => Some(Self::PrimaryForeground),
            Self::Secondary => Some(Self::SecondaryForeground),
            Self::Muted => Some(Self::MutedForeground),
            Self::Accent => Some(Self::AccentForeground),
            Self::Destructive => Some(Self::DestructiveForeground),
            _ => None,
        }
    }
}

impl Display for ColorRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
