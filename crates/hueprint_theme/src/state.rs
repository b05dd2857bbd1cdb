//! Caller-side palette session.
//!
//! `PaletteState` holds what a front end shows: the current pair (if any)
//! and the active scheme. It is an ordinary owned value; engine functions
//! stay pure and the state only changes when an operation succeeds.

use crate::emotion::{generate_pair_for_emotion, Emotion};
use crate::error::{DerivationError, EncodeError};
use crate::generate::{generate_pair, HueSource};
use crate::palette::{ColorScheme, Palette, PalettePair};
use crate::share::{decode_complete, encode, ShareParams};
use crate::snippet::{format_snippet_with, SnippetOptions};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteState {
    pair: Option<PalettePair>,
    scheme: ColorScheme,
}

impl PaletteState {
    pub fn new(scheme: ColorScheme) -> Self {
        Self { pair: None, scheme }
    }

    /// Restore a shared palette from a query string or URL.
    ///
    /// Without a `palette` parameter, or when the token does not decode to a
    /// pair carrying every role, no palette is loaded and `preferred` becomes
    /// the scheme.
    pub fn from_query(query: &str, preferred: ColorScheme) -> Self {
        let Some(params) = ShareParams::from_query(query) else {
            return Self::new(preferred);
        };

        match decode_complete(&params) {
            Ok((pair, scheme)) => {
                tracing::debug!(?scheme, "loaded shared palette");
                Self {
                    pair: Some(pair),
                    scheme,
                }
            }
            Err(err) => {
                tracing::warn!("ignoring shared palette: {err}");
                Self::new(preferred)
            }
        }
    }

    pub fn pair(&self) -> Option<&PalettePair> {
        self.pair.as_ref()
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Palette for the active scheme.
    pub fn active_palette(&self) -> Option<&Palette> {
        self.pair.as_ref().map(|pair| pair.for_scheme(self.scheme))
    }

    /// Switch schemes. The pair is kept as is; the hue is never resampled.
    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        if self.scheme != scheme {
            tracing::debug!(from = ?self.scheme, to = ?scheme, "switching scheme");
            self.scheme = scheme;
        }
    }

    pub fn toggle_scheme(&mut self) {
        self.set_scheme(self.scheme.toggle());
    }

    /// Generate a fresh pair. On error the previous pair is kept.
    pub fn regenerate<H: HueSource + ?Sized>(
        &mut self,
        hues: &mut H,
    ) -> Result<&PalettePair, DerivationError> {
        let pair = generate_pair(hues)?;
        Ok(&*self.pair.insert(pair))
    }

    /// Replace the pair with one seeded by an emotion preset.
    pub fn apply_emotion(&mut self, emotion: Emotion) -> Result<&PalettePair, DerivationError> {
        let pair = generate_pair_for_emotion(emotion)?;
        Ok(&*self.pair.insert(pair))
    }

    /// Share parameters for the current pair and scheme.
    pub fn share_params(&self) -> Result<Option<ShareParams>, EncodeError> {
        self.pair
            .as_ref()
            .map(|pair| encode(pair, self.scheme))
            .transpose()
    }

    /// `palette=...&dark=...` for the current pair, if one is loaded.
    pub fn share_query(&self) -> Result<Option<String>, EncodeError> {
        Ok(self.share_params()?.map(|params| params.to_query()))
    }

    pub fn css_snippet(&self, options: &SnippetOptions) -> Option<String> {
        self.pair
            .as_ref()
            .map(|pair| format_snippet_with(pair, options))
    }
}
