//! Core configuration.

use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_CAPACITY;

/// Tunable knobs for the analysis core.
///
/// The risk thresholds are part of the meaning of the risk levels and stay
/// fixed; the history capacity is the explicit configuration point, with
/// the original front end's value as the default.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CoreConfig {
    /// Maximum number of analyses the history retains.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_history_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(CoreConfig::default().history_capacity, 50);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: CoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.history_capacity, 50);
    }
}
