//! CSS custom-property export

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::palette::{Palette, PalettePair};

/// Layout of an exported stylesheet snippet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetOptions {
    /// Selector scoping the light palette
    pub light_selector: String,
    /// Selector scoping the dark palette
    pub dark_selector: String,
    /// Value of the `--radius` line in the light section
    pub radius: String,
    /// Spaces before each declaration
    pub indent: usize,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            light_selector: ":root".to_string(),
            dark_selector: ".dark".to_string(),
            radius: "0.5rem".to_string(),
            indent: 2,
        }
    }
}

/// Format a pair as CSS variables with the default layout.
pub fn format_snippet(pair: &PalettePair) -> String {
    format_snippet_with(pair, &SnippetOptions::default())
}

/// Format a pair as CSS variables.
///
/// Roles follow palette order. Values are bare HSL channels
/// (`210 60% 40%`), ready for `hsl(var(--primary))`.
pub fn format_snippet_with(pair: &PalettePair, options: &SnippetOptions) -> String {
    let indent = " ".repeat(options.indent);
    let light = CssBlock {
        selector: &options.light_selector,
        palette: &pair.light,
        indent: &indent,
        radius: Some(options.radius.as_str()),
    };
    let dark = CssBlock {
        selector: &options.dark_selector,
        palette: &pair.dark,
        indent: &indent,
        radius: None,
    };

    let out = format!("{light}\n{dark}");
    tracing::trace!(bytes = out.len(), "formatted css snippet");
    out
}

/// One selector block of custom properties
struct CssBlock<'a> {
    selector: &'a str,
    palette: &'a Palette,
    indent: &'a str,
    radius: Option<&'a str>,
}

impl Display for CssBlock<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let indent = self.indent;
        writeln!(f, "{} {{", self.selector)?;
        for (role, color) in self.palette.iter() {
            writeln!(f, "{indent}--{role}: {};", color.channels())?;
        }
        if let Some(radius) = self.radius {
            writeln!(f, "{indent}--radius: {radius};")?;
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::ColorRole;
    use hueprint_core::HslColor;
    use pretty_assertions::assert_eq;

    fn sample_pair() -> PalettePair {
        PalettePair::new(
            Palette::from_iter([
                (ColorRole::Primary, HslColor::new(220.0, 60.0, 40.0)),
                (
                    ColorRole::Ring,
                    HslColor::new(220.0, 60.0, 40.0).with_alpha(0.3),
                ),
            ]),
            Palette::from_iter([(ColorRole::Primary, HslColor::new(220.0, 60.0, 60.0))]),
        )
    }

    #[test]
    fn default_layout() {
        let expected = "\
:root {
  --primary: 220 60% 40%;
  --ring: 220 60% 40% / 0.3;
  --radius: 0.5rem;
}

.dark {
  --primary: 220 60% 60%;
}
";
        assert_eq!(format_snippet(&sample_pair()), expected);
    }

    #[test]
    fn custom_layout() {
        let options = SnippetOptions {
            light_selector: "[data-theme=light]".to_string(),
            dark_selector: "[data-theme=dark]".to_string(),
            radius: "0.75rem".to_string(),
            indent: 4,
        };
        let snippet = format_snippet_with(&sample_pair(), &options);
        assert!(snippet.starts_with("[data-theme=light] {\n    --primary: 220 60% 40%;\n"));
        assert!(snippet.contains("    --radius: 0.75rem;\n"));
        assert!(snippet.contains("\n[data-theme=dark] {\n"));
    }

    #[test]
    fn empty_pair_still_has_radius() {
        let snippet = format_snippet(&PalettePair::default());
        assert_eq!(snippet, ":root {\n  --radius: 0.5rem;\n}\n\n.dark {\n}\n");
    }
}
