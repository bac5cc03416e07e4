pub mod memory_store;
pub mod sqlite_store;

pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;

use crate::config::DEFAULT_STARTING_BALANCE;
use crate::error::Result;
use crate::types::{Amount, GameRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BOT: &str = "Alex_777";

/// Opaque key-value blob store the player snapshot lives in.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    async fn save(&self, key: &str, blob: &[u8]) -> Result<()>;
}

/// Everything persisted for a player, encoded as one JSON blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub balance: Amount,
    #[serde(default)]
    pub game_history: Vec<GameRecord>,
    #[serde(default = "default_bot")]
    pub selected_bot: String,
    #[serde(default = "enabled")]
    pub sound_enabled: bool,
    #[serde(default = "enabled")]
    pub haptics_enabled: bool,
}

fn default_bot() -> String {
    DEFAULT_BOT.to_string()
}

fn enabled() -> bool {
    true
}

impl Snapshot {
    pub fn new(balance: Amount) -> Self {
        Self {
            balance,
            game_history: Vec::new(),
            selected_bot: default_bot(),
            sound_enabled: true,
            haptics_enabled: true,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn decode(blob: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(blob)?)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BALANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameMode, GameResult};

    #[test]
    fn test_snapshot_field_names() {
        let mut snapshot = Snapshot::default();
        snapshot.game_history.push(GameRecord::new(
            GameMode::Dice,
            Amount::from_units(25),
            Amount::ZERO,
            GameResult::Loss,
        ));

        let value: serde_json::Value =
            serde_json::from_slice(&snapshot.encode().unwrap()).unwrap();
        assert_eq!(value["balance"], 1000);
        assert_eq!(value["selectedBot"], "Alex_777");
        assert_eq!(value["soundEnabled"], true);
        assert_eq!(value["hapticsEnabled"], true);
        assert_eq!(value["gameHistory"][0]["result"], "Bot Wins!");
    }

    #[test]
    fn test_decode_minimal_snapshot() {
        let snapshot = Snapshot::decode(br#"{"balance": 740.0}"#).unwrap();
        assert_eq!(snapshot.balance, Amount::from_units(740));
        assert!(snapshot.game_history.is_empty());
        assert_eq!(snapshot.selected_bot, DEFAULT_BOT);
        assert!(snapshot.sound_enabled);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(Snapshot::decode(b"not json").is_err());
        assert!(Snapshot::decode(br#"{"balance": -1}"#).is_err());
    }
}
