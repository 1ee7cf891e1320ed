//! Configuration for a diviner.

/// Configuration for a [`Diviner`](crate::Diviner).
#[derive(Debug, Clone, Default)]
pub struct DivinerConfig {
    /// RNG seed for reproducible casting. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl DivinerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
