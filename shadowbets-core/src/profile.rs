use crate::config::ProfileConfig;
use crate::error::Result;
use crate::history::{HistoryLog, Stats};
use crate::ledger::WalletLedger;
use crate::storage::{PersistenceGateway, Snapshot};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Snapshot shared by the ledger and history handles.
///
/// Every mutation runs under `writer`, so snapshots reach the gateway in the same
/// order the mutations happened.
pub(crate) struct ProfileState {
    snapshot: Mutex<Snapshot>,
    writer: tokio::sync::Mutex<()>,
    gateway: Arc<dyn PersistenceGateway>,
    config: ProfileConfig,
}

impl ProfileState {
    pub(crate) fn config(&self) -> &ProfileConfig {
        &self.config
    }

    pub(crate) fn read<T>(&self, f: impl FnOnce(&Snapshot) -> T) -> T {
        f(&self.snapshot.lock())
    }

    /// Apply `mutate` and write the full snapshot before returning.
    ///
    /// An `Err` from `mutate` must leave the snapshot untouched; nothing is written.
    pub(crate) async fn commit<T>(
        &self,
        mutate: impl FnOnce(&mut Snapshot) -> Result<T>,
    ) -> Result<T> {
        let _writer = self.writer.lock().await;

        let (value, blob) = {
            let mut snapshot = self.snapshot.lock();
            let value = mutate(&mut snapshot)?;
            (value, snapshot.encode())
        };

        let written = match blob {
            Ok(blob) => self.gateway.save(&self.config.snapshot_key, &blob).await,
            Err(e) => Err(e),
        };
        match written {
            Ok(()) => tracing::debug!("Persisted snapshot '{}'", self.config.snapshot_key),
            Err(e) => tracing::warn!("Failed to persist snapshot, keeping it in memory: {}", e),
        }

        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub selected_bot: String,
    pub sound_enabled: bool,
    pub haptics_enabled: bool,
}

/// The player's wallet, history and preferences, restored from one snapshot.
pub struct PlayerProfile {
    state: Arc<ProfileState>,
    ledger: WalletLedger,
    history: HistoryLog,
}

impl PlayerProfile {
    /// Load the snapshot once. A missing or unreadable snapshot starts a fresh profile.
    pub async fn open(gateway: Arc<dyn PersistenceGateway>, config: ProfileConfig) -> Result<Self> {
        config.validate()?;

        let snapshot = match gateway.load(&config.snapshot_key).await {
            Ok(Some(blob)) => match Snapshot::decode(&blob) {
                Ok(mut snapshot) => {
                    snapshot.game_history.truncate(config.history_capacity);
                    tracing::info!(
                        "Restored profile: balance {}, {} games",
                        snapshot.balance,
                        snapshot.game_history.len()
                    );
                    snapshot
                }
                Err(e) => {
                    tracing::warn!("Stored snapshot is undecodable, starting fresh: {}", e);
                    Snapshot::new(config.starting_balance)
                }
            },
            Ok(None) => {
                tracing::info!("No stored profile, starting with {}", config.starting_balance);
                Snapshot::new(config.starting_balance)
            }
            Err(e) => {
                tracing::warn!("Failed to load snapshot, starting fresh: {}", e);
                Snapshot::new(config.starting_balance)
            }
        };

        let state = Arc::new(ProfileState {
            snapshot: Mutex::new(snapshot),
            writer: tokio::sync::Mutex::new(()),
            gateway,
            config,
        });

        Ok(Self {
            ledger: WalletLedger::new(state.clone()),
            history: HistoryLog::new(state.clone()),
            state,
        })
    }

    pub async fn open_default(gateway: Arc<dyn PersistenceGateway>) -> Result<Self> {
        Self::open(gateway, ProfileConfig::default()).await
    }

    pub fn ledger(&self) -> WalletLedger {
        self.ledger.clone()
    }

    pub fn history(&self) -> HistoryLog {
        self.history.clone()
    }

    pub fn config(&self) -> &ProfileConfig {
        self.state.config()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.read(|snapshot| snapshot.clone())
    }

    pub fn stats(&self) -> Stats {
        self.history.stats()
    }

    pub fn preferences(&self) -> Preferences {
        self.state.read(|snapshot| Preferences {
            selected_bot: snapshot.selected_bot.clone(),
            sound_enabled: snapshot.sound_enabled,
            haptics_enabled: snapshot.haptics_enabled,
        })
    }

    pub async fn set_sound_enabled(&self, enabled: bool) -> Result<()> {
        self.state
            .commit(|snapshot| {
                snapshot.sound_enabled = enabled;
                Ok(())
            })
            .await
    }

    pub async fn set_haptics_enabled(&self, enabled: bool) -> Result<()> {
        self.state
            .commit(|snapshot| {
                snapshot.haptics_enabled = enabled;
                Ok(())
            })
            .await
    }

    pub async fn set_selected_bot(&self, bot: &str) -> Result<()> {
        let bot = bot.trim().to_string();
        self.state
            .commit(move |snapshot| {
                snapshot.selected_bot = bot;
                Ok(())
            })
            .await
    }

    /// Restore the starting balance and clear history. Preferences are kept.
    pub async fn reset(&self) -> Result<()> {
        let starting_balance = self.state.config().starting_balance;
        self.state
            .commit(|snapshot| {
                snapshot.balance = starting_balance;
                snapshot.game_history.clear();
                Ok(())
            })
            .await?;

        tracing::info!("Profile reset to {}", starting_balance);
        Ok(())
    }
}
