//! HSL(A) color values in CSS notation

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// A color in HSL space, as written in CSS.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness are percentages
/// `[0, 100]`. Alpha is `None` for an opaque `hsl(...)` value and `Some`
/// for `hsla(...)`.
///
/// The value serializes as its CSS text, e.g. `"hsl(210, 60%, 40%)"`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HslColor {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: Option<f32>,
}

impl HslColor {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: None,
        }
    }

    /// Same color with an alpha channel.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }

    /// Bare component list for HSL-channel custom properties:
    /// `210 60% 40%`, or `210 60% 40% / 0.3` when alpha is present.
    pub fn channels(&self) -> String {
        match self.alpha {
            Some(alpha) => format!(
                "{} {}% {}% / {}",
                self.hue, self.saturation, self.lightness, alpha
            ),
            None => format!("{} {}% {}%", self.hue, self.saturation, self.lightness),
        }
    }

    /// Convert to sRGB.
    pub fn to_color(&self) -> Color {
        let h = wrap_hue(self.hue) / 360.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);
        let a = self.alpha.unwrap_or(1.0);

        if s == 0.0 {
            return Color::new(l, l, l, a);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Color::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
            a,
        )
    }

    /// WCAG relative luminance of the opaque color.
    pub fn relative_luminance(&self) -> f32 {
        self.to_color().relative_luminance()
    }
}

/// Wrap a hue into `[0, 360)`, folding negative zero to zero.
pub fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped + 0.0
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl Display for HslColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.alpha {
            Some(alpha) => write!(
                f,
                "hsla({}, {}%, {}%, {})",
                self.hue, self.saturation, self.lightness, alpha
            ),
            None => write!(
                f,
                "hsl({}, {}%, {}%)",
                self.hue, self.saturation, self.lightness
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HslParseError {
    #[error("`{0}` is not an hsl(), hsla(), rgb() or rgba() color")]
    Unsupported(String),

    #[error("expected 3 or 4 color components, found {0}")]
    ComponentCount(usize),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("{component} {value} is out of range")]
    OutOfRange { component: &'static str, value: f32 },
}

impl FromStr for HslColor {
    type Err = HslParseError;

    /// Accepts `hsl(...)` and `hsla(...)` with comma, space, or slash
    /// separated components. `%` is optional on saturation and lightness.
    ///
    /// `rgb(...)` and `rgba(...)` are read too and converted to HSL rounded
    /// to whole units, keeping alpha as given.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let trimmed = src.trim();
        let lower = trimmed.to_ascii_lowercase();
        let unsupported = || HslParseError::Unsupported(trimmed.to_string());

        let (function, body) = lower
            .strip_suffix(')')
            .and_then(|rest| rest.split_once('('))
            .ok_or_else(unsupported)?;
        let is_rgb = match function.trim_end() {
            "hsl" | "hsla" => false,
            "rgb" | "rgba" => true,
            _ => return Err(unsupported()),
        };

        let parts: Vec<&str> = body
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        if !(3..=4).contains(&parts.len()) {
            return Err(HslParseError::ComponentCount(parts.len()));
        }

        let alpha = match parts.get(3) {
            Some(raw) => {
                let value = match raw.strip_suffix('%') {
                    Some(pct) => parse_number(pct)? / 100.0,
                    None => parse_number(raw)?,
                };
                Some(in_range("alpha", value, 1.0)?)
            }
            None => None,
        };

        if is_rgb {
            let hsl = Color::rgb(
                parse_channel("red", parts[0])?,
                parse_channel("green", parts[1])?,
                parse_channel("blue", parts[2])?,
            )
            .to_hsl();
            return Ok(Self {
                hue: wrap_hue(hsl.hue.round()),
                saturation: hsl.saturation.round(),
                lightness: hsl.lightness.round(),
                alpha,
            });
        }

        let hue = parse_number(parts[0].strip_suffix("deg").unwrap_or(parts[0]))?;
        let saturation = in_range("saturation", parse_percent(parts[1])?, 100.0)?;
        let lightness = in_range("lightness", parse_percent(parts[2])?, 100.0)?;

        Ok(Self {
            hue: wrap_hue(hue),
            saturation,
            lightness,
            alpha,
        })
    }
}

fn parse_number(raw: &str) -> Result<f32, HslParseError> {
    match raw.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(HslParseError::InvalidNumber(raw.to_string())),
    }
}

fn parse_percent(raw: &str) -> Result<f32, HslParseError> {
    parse_number(raw.strip_suffix('%').unwrap_or(raw))
}

/// An RGB channel as `0..=255` or a percentage, scaled to `[0, 1]`.
fn parse_channel(component: &'static str, raw: &str) -> Result<f32, HslParseError> {
    match raw.strip_suffix('%') {
        Some(pct) => Ok(in_range(component, parse_number(pct)?, 100.0)? / 100.0),
        None => Ok(in_range(component, parse_number(raw)?, 255.0)? / 255.0),
    }
}

fn in_range(component: &'static str, value: f32, max: f32) -> Result<f32, HslParseError> {
    if (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(HslParseError::OutOfRange { component, value })
    }
}

impl From<HslColor> for String {
    fn from(color: HslColor) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for HslColor {
    type Error = HslParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
