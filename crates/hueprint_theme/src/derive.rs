//! Palette derivation from a base hue.
//!
//! One fixed recipe: the accent family (`primary`, `secondary`, `accent`)
//! sits at 0°, +30° and +60° from the base hue, `destructive` is pinned to
//! red, and the structural roles reuse the base hue at low saturation.
//! Lightness is clamped to `[5, 95]` so no role ends up pure white or black.
//!
//! Foregrounds for the accent family use a binary luminance cutoff rather
//! than a contrast-ratio search. It keeps text legible in practice but is
//! not a WCAG guarantee.

use hueprint_core::{wrap_hue, HslColor};

use crate::error::DerivationError;
use crate::palette::{ColorScheme, Palette, PalettePair};
use crate::role::ColorRole;

const MIN_LIGHTNESS: f32 = 5.0;
const MAX_LIGHTNESS: f32 = 95.0;

/// Luminance above which a background gets dark text.
pub const CONTRAST_LUMINANCE_CUTOFF: f32 = 0.5;

/// Alpha applied to `primary` to build the focus `ring`.
pub const RING_ALPHA: f32 = 0.3;

/// Hue of the `destructive` role, independent of the base hue.
pub const DESTRUCTIVE_HUE: f32 = 0.0;

/// Derive a complete palette for one scheme.
///
/// The hue is wrapped into `[0, 360)` first. Only a non-finite hue fails.
pub fn derive_palette(base_hue: f32, scheme: ColorScheme) -> Result<Palette, DerivationError> {
    if !base_hue.is_finite() {
        return Err(DerivationError::NonFiniteHue(base_hue));
    }
    let hue = wrap_hue(base_hue);
    let pick = |light: f32, dark: f32| match scheme {
        ColorScheme::Light => light,
        ColorScheme::Dark => dark,
    };

    let primary = tone(hue, 60.0, pick(40.0, 60.0));
    let secondary = tone(hue + 30.0, 50.0, pick(30.0, 70.0));
    let accent = tone(hue + 60.0, 70.0, 50.0);
    let destructive = tone(DESTRUCTIVE_HUE, 85.0, pick(40.0, 60.0));

    let background = tone(hue, 10.0, pick(95.0, 10.0));
    let foreground = tone(hue, 10.0, pick(10.0, 90.0));
    let border = tone(hue, 15.0, pick(70.0, 30.0));

    tracing::trace!(hue, ?scheme, "deriving palette");

    Ok(Palette::from_iter([
        (ColorRole::Primary, primary),
        (ColorRole::Secondary, secondary),
        (ColorRole::Accent, accent),
        (ColorRole::Destructive, destructive),
        (ColorRole::PrimaryForeground, contrast_foreground(primary, hue)),
        (ColorRole::SecondaryForeground, contrast_foreground(secondary, hue)),
        (ColorRole::AccentForeground, contrast_foreground(accent, hue)),
        (ColorRole::DestructiveForeground, contrast_foreground(destructive, hue)),
        (ColorRole::Background, background),
        (ColorRole::Foreground, foreground),
        (ColorRole::Card, tone(hue, 5.0, pick(98.0, 15.0))),
        (ColorRole::CardForeground, foreground),
        (ColorRole::Popover, background),
        (ColorRole::PopoverForeground, foreground),
        (ColorRole::Muted, tone(hue, 20.0, pick(80.0, 20.0))),
        (ColorRole::MutedForeground, tone(hue, 30.0, pick(30.0, 70.0))),
        (ColorRole::Border, border),
        (ColorRole::Input, border),
        (ColorRole::Ring, primary.with_alpha(RING_ALPHA)),
    ]))
}

/// Derive the light and dark palettes of one base hue.
pub fn derive_pair(base_hue: f32) -> Result<PalettePair, DerivationError> {
    Ok(PalettePair::new(
        derive_palette(base_hue, ColorScheme::Light)?,
        derive_palette(base_hue, ColorScheme::Dark)?,
    ))
}

/// Near-black or near-white text at `base_hue` for the given background.
pub fn contrast_foreground(background: HslColor, base_hue: f32) -> HslColor {
    if background.relative_luminance() > CONTRAST_LUMINANCE_CUTOFF {
        tone(base_hue, 10.0, 10.0)
    } else {
        tone(base_hue, 10.0, 90.0)
    }
}

/// [`contrast_foreground`] for a background given as CSS text.
pub fn contrast_foreground_css(
    background: &str,
    base_hue: f32,
) -> Result<HslColor, DerivationError> {
    if !base_hue.is_finite() {
        return Err(DerivationError::NonFiniteHue(base_hue));
    }
    let background: HslColor = background.parse()?;
    Ok(contrast_foreground(background, base_hue))
}

/// Round to whole units, wrap the hue, clamp lightness.
fn tone(hue: f32, saturation: f32, lightness: f32) -> HslColor {
    HslColor::new(
        wrap_hue(wrap_hue(hue).round()),
        saturation.round(),
        lightness.round().clamp(MIN_LIGHTNESS, MAX_LIGHTNESS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reference_light_palette_at_210() {
        let palette = derive_palette(210.0, ColorScheme::Light).unwrap();
        let css = |role| palette.get(role).unwrap().to_string();

        assert_eq!(css(ColorRole::Primary), "hsl(210, 60%, 40%)");
        assert_eq!(css(ColorRole::Secondary), "hsl(240, 50%, 30%)");
        assert_eq!(css(ColorRole::Accent), "hsl(270, 70%, 50%)");
        assert_eq!(css(ColorRole::Destructive), "hsl(0, 85%, 40%)");
        assert_eq!(css(ColorRole::PrimaryForeground), "hsl(210, 10%, 90%)");
        assert_eq!(css(ColorRole::Background), "hsl(210, 10%, 95%)");
        assert_eq!(css(ColorRole::Foreground), "hsl(210, 10%, 10%)");
        assert_eq!(css(ColorRole::Card), "hsl(210, 5%, 95%)");
        assert_eq!(css(ColorRole::Muted), "hsl(210, 20%, 80%)");
        assert_eq!(css(ColorRole::MutedForeground), "hsl(210, 30%, 30%)");
        assert_eq!(css(ColorRole::Border), "hsl(210, 15%, 70%)");
        assert_eq!(css(ColorRole::Ring), "hsla(210, 60%, 40%, 0.3)");
    }

    #[test]
    fn reference_dark_palette_at_210() {
        let palette = derive_palette(210.0, ColorScheme::Dark).unwrap();
        let css = |role| palette.get(role).unwrap().to_string();

        assert_eq!(css(ColorRole::Primary), "hsl(210, 60%, 60%)");
        assert_eq!(css(ColorRole::Secondary), "hsl(240, 50%, 70%)");
        assert_eq!(css(ColorRole::Destructive), "hsl(0, 85%, 60%)");
        assert_eq!(css(ColorRole::Background), "hsl(210, 10%, 10%)");
        assert_eq!(css(ColorRole::Foreground), "hsl(210, 10%, 90%)");
        assert_eq!(css(ColorRole::Card), "hsl(210, 5%, 15%)");
        assert_eq!(css(ColorRole::Border), "hsl(210, 15%, 30%)");
    }

    #[test]
    fn mirrored_roles_share_values() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let p = derive_palette(42.0, scheme).unwrap();
            assert_eq!(p.get(ColorRole::CardForeground), p.get(ColorRole::Foreground));
            assert_eq!(p.get(ColorRole::PopoverForeground), p.get(ColorRole::Foreground));
            assert_eq!(p.get(ColorRole::Popover), p.get(ColorRole::Background));
            assert_eq!(p.get(ColorRole::Input), p.get(ColorRole::Border));
        }
    }

    #[test]
    fn emits_roles_in_derivation_order() {
        let palette = derive_palette(0.0, ColorScheme::Light).unwrap();
        let names: Vec<&str> = palette.iter().map(|(role, _)| role.name()).collect();
        assert_eq!(
            names,
            vec![
                "primary",
                "secondary",
                "accent",
                "destructive",
                "primary-foreground",
                "secondary-foreground",
                "accent-foreground",
                "destructive-foreground",
                "background",
                "foreground",
                "card",
                "card-foreground",
                "popover",
                "popover-foreground",
                "muted",
                "muted-foreground",
                "border",
                "input",
                "ring",
            ]
        );
    }

    #[test]
    fn hue_is_wrapped() {
        assert_eq!(
            derive_palette(570.0, ColorScheme::Light).unwrap(),
            derive_palette(210.0, ColorScheme::Light).unwrap()
        );
        assert_eq!(
            derive_palette(-150.0, ColorScheme::Dark).unwrap(),
            derive_palette(210.0, ColorScheme::Dark).unwrap()
        );
        let near_full_turn = derive_palette(359.7, ColorScheme::Light).unwrap();
        assert_eq!(near_full_turn.get(ColorRole::Primary).unwrap().hue, 0.0);
    }

    #[test]
    fn rejects_non_finite_hue() {
        assert_eq!(
            derive_palette(f32::INFINITY, ColorScheme::Light),
            Err(DerivationError::NonFiniteHue(f32::INFINITY))
        );
        assert!(matches!(
            derive_pair(f32::NAN),
            Err(DerivationError::NonFiniteHue(_))
        ));
    }

    #[test]
    fn contrast_picks_dark_text_on_light_fill() {
        let yellow = HslColor::new(60.0, 100.0, 50.0);
        assert_eq!(
            contrast_foreground(yellow, 60.0),
            HslColor::new(60.0, 10.0, 10.0)
        );
        let navy = HslColor::new(240.0, 60.0, 20.0);
        assert_eq!(
            contrast_foreground(navy, 240.0),
            HslColor::new(240.0, 10.0, 90.0)
        );
    }

    #[test]
    fn contrast_css_reports_unparsable_input() {
        assert_eq!(
            contrast_foreground_css("hsl(60, 100%, 50%)", 60.0),
            Ok(HslColor::new(60.0, 10.0, 10.0))
        );
        assert!(matches!(
            contrast_foreground_css("#ffff00", 60.0),
            Err(DerivationError::UnparsableColor(_))
        ));
    }
}
