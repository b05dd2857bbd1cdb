//! RGBA color and luminance helpers

use crate::hsl::HslColor;

/// RGBA color with f32 components (0.0 to 1.0) in sRGB space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB)
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// WCAG relative luminance (0.0 = black, 1.0 = white). Alpha is ignored.
    pub fn relative_luminance(&self) -> f32 {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Convert to HSL. Achromatic colors report a hue of 0.
    pub fn to_hsl(&self) -> HslColor {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let lightness = (max + min) / 2.0;
        let delta = max - min;

        if delta <= f32::EPSILON {
            return HslColor::new(0.0, 0.0, lightness * 100.0);
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
        let hue = if max == self.r {
            60.0 * ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };

        HslColor::new(hue.rem_euclid(360.0), saturation * 100.0, lightness * 100.0)
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn luminance_bounds() {
        assert!(close(Color::BLACK.relative_luminance(), 0.0));
        assert!(close(Color::WHITE.relative_luminance(), 1.0));
    }

    #[test]
    fn luminance_weights_green_over_blue() {
        let green = Color::from_hex(0x00FF00).relative_luminance();
        let blue = Color::from_hex(0x0000FF).relative_luminance();
        assert!(close(green, 0.7152));
        assert!(close(blue, 0.0722));
    }

    #[test]
    fn hex_to_hsl_primaries() {
        assert!(close(Color::from_hex(0xFF0000).to_hsl().hue, 0.0));
        assert!(close(Color::from_hex(0x00FF00).to_hsl().hue, 120.0));
        assert!(close(Color::from_hex(0x0000FF).to_hsl().hue, 240.0));

        let purple = Color::from_hex(0x800080).to_hsl();
        assert!(close(purple.hue, 300.0));
        assert!(close(purple.saturation, 100.0));
    }

    #[test]
    fn achromatic_hue_is_zero() {
        let white = Color::WHITE.to_hsl();
        assert_eq!(white.hue, 0.0);
        assert_eq!(white.saturation, 0.0);
        assert!(close(white.lightness, 100.0));
        assert_eq!(Color::BLACK.to_hsl().hue, 0.0);
    }

    #[test]
    fn rgba8_round_trip() {
        let c = Color::from_hex(0xFFA500).with_alpha(0.5);
        assert_eq!(c.to_rgba8(), [255, 165, 0, 128]);
    }
}
