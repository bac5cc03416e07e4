use crate::error::Result;
use crate::profile::ProfileState;
use crate::types::{Amount, GameRecord, GameResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Bounded log of completed wagers, newest first.
#[derive(Clone)]
pub struct HistoryLog {
    state: Arc<ProfileState>,
}

impl HistoryLog {
    pub(crate) fn new(state: Arc<ProfileState>) -> Self {
        Self { state }
    }

    pub fn capacity(&self) -> usize {
        self.state.config().history_capacity
    }

    /// Insert at the head, evicting the oldest entries beyond capacity.
    pub async fn append(&self, record: GameRecord) -> Result<()> {
        let capacity = self.capacity();
        let id = record.id;
        self.state
            .commit(|snapshot| {
                snapshot.game_history.insert(0, record);
                snapshot.game_history.truncate(capacity);
                Ok(())
            })
            .await?;

        tracing::debug!("Recorded game {}", id);
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        self.state
            .commit(|snapshot| {
                snapshot.game_history.clear();
                Ok(())
            })
            .await
    }

    pub fn snapshot(&self) -> Vec<GameRecord> {
        self.state.read(|snapshot| snapshot.game_history.clone())
    }

    pub fn len(&self) -> usize {
        self.state.read(|snapshot| snapshot.game_history.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> Stats {
        self.state
            .read(|snapshot| Stats::from_records(&snapshot.game_history))
    }
}

impl std::fmt::Debug for HistoryLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryLog")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Aggregates over a history snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub total_staked: Amount,
    pub total_won: Amount,
}

impl Stats {
    pub fn from_records(records: &[GameRecord]) -> Self {
        records.iter().fold(Stats::default(), |mut stats, record| {
            stats.games += 1;
            match record.result {
                GameResult::Win => stats.wins += 1,
                GameResult::Loss => stats.losses += 1,
                GameResult::Draw => stats.draws += 1,
            }
            stats.total_staked = stats.total_staked.saturating_add(record.bet_amount);
            stats.total_won = stats.total_won.saturating_add(record.pot_won);
            stats
        })
    }

    /// Wins as a percentage of games played, 0 with no games.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64 * 100.0
    }

    pub fn net(&self) -> i128 {
        i128::from(self.total_won.to_units()) - i128::from(self.total_staked.to_units())
    }
}
