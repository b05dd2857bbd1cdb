//! Palette pair generation from a sampled base hue

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::derive::derive_pair;
use crate::error::DerivationError;
use crate::palette::PalettePair;

/// Source of base hues for generation
pub trait HueSource {
    /// Next hue in degrees, expected in `[0, 360)`.
    fn next_hue(&mut self) -> f32;
}

/// Uniform hues drawn from a random number generator
#[derive(Clone, Debug)]
pub struct RandomHues<R> {
    rng: R,
}

impl<R: Rng> RandomHues<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomHues<ThreadRng> {
    /// Hues from the thread-local generator
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomHues<StdRng> {
    /// Reproducible hues for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HueSource for RandomHues<R> {
    fn next_hue(&mut self) -> f32 {
        self.rng.random_range(0.0..360.0)
    }
}

/// Always yields the same hue
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedHue(pub f32);

impl HueSource for FixedHue {
    fn next_hue(&mut self) -> f32 {
        self.0
    }
}

/// Sample one base hue and derive both schemes from it.
///
/// Light and dark share the hue, so switching schemes never resamples.
pub fn generate_pair<H: HueSource + ?Sized>(hues: &mut H) -> Result<PalettePair, DerivationError> {
    let base_hue = hues.next_hue();
    tracing::debug!(base_hue, "generating palette pair");
    derive_pair(base_hue)
}

/// [`generate_pair`] with the thread-local generator.
pub fn generate_random_pair() -> Result<PalettePair, DerivationError> {
    generate_pair(&mut RandomHues::thread())
}
