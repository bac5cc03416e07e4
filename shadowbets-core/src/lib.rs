//! Shadow Bets core - wallet, history and persistence for the wager simulator
//!
//! One [`PlayerProfile`] is opened per process. It restores the persisted snapshot
//! and hands out the shared [`WalletLedger`] and [`HistoryLog`] that every game
//! session mutates.

pub mod config;
pub mod error;
pub mod history;
pub mod ledger;
pub mod profile;
pub mod rng;
pub mod storage;
pub mod types;

pub use config::ProfileConfig;
pub use error::{Result, ShadowError};
pub use history::{HistoryLog, Stats};
pub use ledger::WalletLedger;
pub use profile::{PlayerProfile, Preferences};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use storage::{MemoryStore, PersistenceGateway, Snapshot, SqliteStore};
pub use types::{Amount, GameMode, GameRecord, GameResult};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_profile_creation() {
        let temp_dir = tempdir().unwrap();
        let store = SqliteStore::open(&temp_dir.path().join("shadowbets.db"))
            .await
            .unwrap();
        let profile = PlayerProfile::open_default(Arc::new(store)).await.unwrap();

        assert_eq!(profile.ledger().balance(), Amount::from_units(1000));
        assert_eq!(profile.history().capacity(), 50);
    }
}
