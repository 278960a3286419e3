//! Simulation configuration.

/// Seed used when none is given, so repeated runs reproduce the same report.
pub const DEFAULT_SEED: u64 = 42;

/// Number of draws from the first trial kept for the report.
pub const DEFAULT_PREVIEW_LEN: usize = 5;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of draw-until-repeat trials to perform
    pub num_trials: u32,

    /// Seed for the ChaCha8 draw source
    pub seed: u64,

    /// How many draws of the first trial to record
    pub preview_len: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_trials: 100_000,
            seed: DEFAULT_SEED,
            preview_len: DEFAULT_PREVIEW_LEN,
        }
    }
}

impl SimConfig {
    /// Quick config for smoke tests against small catalogs
    pub fn quick(num_trials: u32) -> Self {
        Self {
            num_trials,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.num_trials, 100_000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.preview_len, 5);
    }

    #[test]
    fn test_quick_keeps_seed() {
        let config = SimConfig::quick(10);
        assert_eq!(config.num_trials, 10);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.preview_len, DEFAULT_PREVIEW_LEN);
    }
}
