use std::env;

use serde::{Deserialize, Serialize};

fn default_recent_capacity() -> usize {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of recent searches kept
    #[serde(default = "default_recent_capacity")]
    pub recent_capacity: usize,
    /// Pre-fill recents with the sample words
    #[serde(default)]
    pub seed_samples: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recent_capacity: default_recent_capacity(),
            seed_samples: false,
        }
    }
}

impl HistoryConfig {
    pub fn from_env() -> Self {
        let recent_capacity = env::var("LEXI_RECENT_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|capacity: &usize| *capacity > 0)
            .unwrap_or_else(default_recent_capacity);

        let seed_samples = env::var("LEXI_SEED_SAMPLES")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            recent_capacity,
            seed_samples,
        }
    }
}
