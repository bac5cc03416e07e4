use crate::engine::{BetStatus, Deferred, SessionPhase, Settlement, Step, WagerEngine};
use crate::scheduler::Scheduler;
use crate::variant::Guess;
use crate::Result;

/// Drives a [`WagerEngine`] through its deferred steps with a [`Scheduler`].
pub struct GameTable<S: Scheduler> {
    engine: WagerEngine,
    scheduler: S,
}

impl<S: Scheduler> GameTable<S> {
    pub fn new(engine: WagerEngine, scheduler: S) -> Self {
        Self { engine, scheduler }
    }

    pub fn engine(&self) -> &WagerEngine {
        &self.engine
    }

    /// Place the bet and, when it was staked, wait out the opponent reveal.
    pub async fn bet(&mut self) -> Result<BetStatus> {
        let status = self.engine.place_bet().await?;
        if let BetStatus::Staked { next } = status {
            self.resume(next).await?;
        }
        Ok(status)
    }

    /// Submit the player's guess and settle after the variant's resolution delay.
    pub async fn guess(&mut self, guess: Guess) -> Result<Settlement> {
        let next = self.engine.make_guess(guess)?;
        self.scheduler.defer(next.delay).await;
        self.engine.settle().await
    }

    pub fn new_round(&mut self) -> Result<()> {
        self.engine.new_round()
    }

    /// One full round. `None` when the wallet cannot cover the stake.
    pub async fn play(&mut self, guess: Guess) -> Result<Option<Settlement>> {
        if self.engine.phase() == SessionPhase::Settled {
            self.engine.new_round()?;
        }

        match self.bet().await? {
            BetStatus::Staked { .. } => self.guess(guess).await.map(Some),
            BetStatus::InsufficientFunds { .. } => Ok(None),
        }
    }

    async fn resume(&mut self, deferred: Deferred) -> Result<()> {
        self.scheduler.defer(deferred.delay).await;
        match deferred.step {
            Step::RevealOpponent => {
                self.engine.reveal_opponent()?;
            }
            Step::Settle => {
                self.engine.settle().await?;
            }
        }
        Ok(())
    }
}
