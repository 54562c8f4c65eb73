use tavern_core::roster::{MAX_PARTY_SIZE, MIN_PARTY_SIZE};

/// Configuration for an adventure run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for the default dice.
    pub seed: u64,
    /// Smallest party allowed to set out.
    pub min_party_size: usize,
    /// Largest party allowed to set out.
    pub max_party_size: usize,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            min_party_size: MIN_PARTY_SIZE,
            max_party_size: MAX_PARTY_SIZE,
            max_events: 0,
        }
    }
}

impl EngineConfig {
    /// Set the dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the allowed party size range. The bounds are swapped if reversed.
    pub fn with_party_size(mut self, min: usize, max: usize) -> Self {
        self.min_party_size = min.min(max);
        self.max_party_size = max.max(min);
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }
}
