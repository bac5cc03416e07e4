use crate::error::{Result, ShadowError};
use crate::types::Amount;
use serde::{Deserialize, Serialize};

/// Key the player snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "ShadowBetsAppState";

pub const DEFAULT_STARTING_BALANCE: Amount = Amount::from_units(1000);

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Balance for a fresh profile and the value `reset` restores.
    pub starting_balance: Amount,
    pub history_capacity: usize,
    pub snapshot_key: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            snapshot_key: SNAPSHOT_KEY.to_string(),
        }
    }
}

impl ProfileConfig {
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(ShadowError::config("History capacity must be greater than 0"));
        }

        if self.snapshot_key.is_empty() {
            return Err(ShadowError::config("Snapshot key cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProfileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.starting_balance.to_units(), 1000);
        assert_eq!(config.history_capacity, 50);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = ProfileConfig {
            history_capacity: 0,
            ..ProfileConfig::default()
        };
        assert!(matches!(config.validate(), Err(ShadowError::Config(_))));
    }
}
