//! Ports to the outside world: text generation and digit casting.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GenerationError;
use crate::lines::LINE_COUNT;

/// Turns a prompt into interpretation text.
///
/// Timeouts and retries are the implementor's business.
pub trait TextGenerator {
    /// Generate text for `prompt`.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> Result<String, GenerationError>,
{
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self(prompt)
    }
}

/// Supplies six-digit strings when the user does not pick their own.
pub trait DigitSource {
    /// Six ASCII digits, each in `1`-`9`.
    fn next_digits(&mut self) -> String;
}

/// [`DigitSource`] backed by a seedable RNG.
pub struct RngDigitSource {
    rng: StdRng,
}

impl RngDigitSource {
    /// Deterministic source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl DigitSource for RngDigitSource {
    fn next_digits(&mut self) -> String {
        (0..LINE_COUNT)
            .map(|_| char::from(b'0' + self.rng.random_range(1..=9u8)))
            .collect()
    }
}
