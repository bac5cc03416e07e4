use crate::opponent::Opponent;
use crate::variant::{GameVariantConfig, Guess, Outcome};
use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use shadowbets_core::{
    Amount, GameRecord, GameResult, HistoryLog, PlayerProfile, RandomSource, ShadowError,
    WalletLedger,
};
use std::fmt;
use std::time::Duration;

/// Pause before the opponent's flavor guess appears.
pub const OPPONENT_DELAY: Duration = Duration::from_millis(1800);

/// Life cycle of one wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    Staked,
    AwaitingOpponent,
    AwaitingResolution,
    Settled,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Staked => "staked",
            SessionPhase::AwaitingOpponent => "awaiting the opponent",
            SessionPhase::AwaitingResolution => "awaiting resolution",
            SessionPhase::Settled => "settled",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionResult {
    None,
    Win,
    Loss,
}

impl SessionResult {
    pub fn as_game_result(&self) -> Option<GameResult> {
        match self {
            SessionResult::None => None,
            SessionResult::Win => Some(GameResult::Win),
            SessionResult::Loss => Some(GameResult::Loss),
        }
    }
}

/// Observable state of the current round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WagerSession {
    pub pot: Amount,
    pub player_guess: Option<Guess>,
    pub opponent_guess: Option<Guess>,
    pub outcome: Option<Outcome>,
    pub result: SessionResult,
    pub payout: Amount,
    pub phase: SessionPhase,
}

impl Default for WagerSession {
    fn default() -> Self {
        Self {
            pot: Amount::ZERO,
            player_guess: None,
            opponent_guess: None,
            outcome: None,
            result: SessionResult::None,
            payout: Amount::ZERO,
            phase: SessionPhase::Idle,
        }
    }
}

/// Continuation the caller must run after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    RevealOpponent,
    Settle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub step: Step,
    /// Presentational only; correctness depends on ordering, not duration.
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetStatus {
    Staked { next: Deferred },
    /// Nothing changed: the bet stays available once the balance covers it.
    InsufficientFunds { need: Amount, available: Amount },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub result: SessionResult,
    pub outcome: Outcome,
    pub payout: Amount,
    pub balance: Amount,
    pub record: GameRecord,
}

/// One game screen's wager session, driven through
/// `place_bet → reveal_opponent → make_guess → settle → new_round`.
///
/// The ledger and history are shared with every other engine of the same profile.
pub struct WagerEngine {
    config: GameVariantConfig,
    ledger: WalletLedger,
    history: HistoryLog,
    rng: Box<dyn RandomSource>,
    session: WagerSession,
    opponent: Option<Opponent>,
}

impl WagerEngine {
    pub fn new(
        config: GameVariantConfig,
        ledger: WalletLedger,
        history: HistoryLog,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            config,
            ledger,
            history,
            rng,
            session: WagerSession::default(),
            opponent: None,
        }
    }

    pub fn for_profile(
        config: GameVariantConfig,
        profile: &PlayerProfile,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self::new(config, profile.ledger(), profile.history(), rng)
    }

    pub fn config(&self) -> &GameVariantConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase
    }

    pub fn session(&self) -> &WagerSession {
        &self.session
    }

    pub fn opponent(&self) -> Option<&Opponent> {
        self.opponent.as_ref()
    }

    pub fn opponent_message(&self) -> Option<String> {
        self.opponent.as_ref().map(Opponent::message)
    }

    pub fn balance(&self) -> Amount {
        self.ledger.balance()
    }

    pub fn can_place_bet(&self) -> bool {
        self.session.phase == SessionPhase::Idle && self.ledger.can_afford(self.config.stake)
    }

    pub fn can_guess(&self) -> bool {
        self.session.phase == SessionPhase::AwaitingOpponent
    }

    fn require(&self, operation: &'static str, allowed: &[SessionPhase]) -> Result<()> {
        if allowed.contains(&self.session.phase) {
            return Ok(());
        }

        tracing::warn!(
            "{}: rejected '{}' while {}",
            self.config.mode,
            operation,
            self.session.phase
        );
        Err(GameError::InvalidPhase {
            operation,
            phase: self.session.phase,
        })
    }

    /// Stake the variant's bet from the shared wallet.
    pub async fn place_bet(&mut self) -> Result<BetStatus> {
        self.require("place a bet", &[SessionPhase::Idle])?;
        // A pot the variant could never pay out is refused before anything is debited.
        self.config.validate()?;

        let stake = self.config.stake;
        let balance = match self.ledger.try_debit(stake).await {
            Ok(balance) => balance,
            Err(ShadowError::InsufficientFunds { need, available }) => {
                tracing::info!(
                    "{}: bet ignored, need {} but have {}",
                    self.config.mode,
                    need,
                    available
                );
                return Ok(BetStatus::InsufficientFunds {
                    need: Amount::from_units(need),
                    available: Amount::from_units(available),
                });
            }
            Err(e) => return Err(e.into()),
        };

        self.session.pot = stake;
        self.session.phase = SessionPhase::Staked;
        self.opponent = Some(Opponent::draw(self.rng.as_mut(), self.config.flavor));

        tracing::info!(
            "{}: staked {}, balance now {}",
            self.config.mode,
            stake,
            balance
        );

        Ok(BetStatus::Staked {
            next: Deferred {
                step: Step::RevealOpponent,
                delay: OPPONENT_DELAY,
            },
        })
    }

    /// Opponent-flavor continuation: the bot announces a guess that never affects settlement.
    pub fn reveal_opponent(&mut self) -> Result<Guess> {
        self.require("reveal the opponent", &[SessionPhase::Staked])?;

        let guesses = self.config.guesses;
        let flavor = self.config.flavor;
        let opponent = self
            .opponent
            .get_or_insert_with(|| Opponent::draw(self.rng.as_mut(), flavor));
        let guess = opponent
            .choose(guesses, self.rng.as_mut())
            .ok_or_else(|| GameError::Internal(format!("{} offers no guesses", self.config.mode)))?;

        self.session.opponent_guess = Some(guess);
        self.session.phase = SessionPhase::AwaitingOpponent;

        tracing::debug!("{}: {}", self.config.mode, opponent.message());
        Ok(guess)
    }

    /// Record the player's guess and draw the outcome; settlement follows after the delay.
    pub fn make_guess(&mut self, guess: Guess) -> Result<Deferred> {
        self.require("make a guess", &[SessionPhase::AwaitingOpponent])?;

        if !self.config.offers(&guess) {
            return Err(GameError::GuessNotOffered {
                guess: guess.label().to_string(),
                game: self.config.mode.to_string(),
            });
        }

        let outcome = self.config.sample_outcome(self.rng.as_mut());
        self.session.player_guess = Some(guess);
        self.session.outcome = Some(outcome);
        self.session.phase = SessionPhase::AwaitingResolution;

        tracing::debug!("{}: player picked {}, {}", self.config.mode, guess, outcome);

        Ok(Deferred {
            step: Step::Settle,
            delay: self.config.resolution_delay,
        })
    }

    /// Settlement continuation. Runs once per round; later calls are rejected.
    pub async fn settle(&mut self) -> Result<Settlement> {
        self.require("settle", &[SessionPhase::AwaitingResolution])?;

        let (guess, outcome) = match (self.session.player_guess, self.session.outcome) {
            (Some(guess), Some(outcome)) => (guess, outcome),
            _ => {
                return Err(GameError::Internal(
                    "resolution reached without a guess and outcome".to_string(),
                ))
            }
        };

        let won = self.config.wins(&guess, &outcome);
        let payout = if won {
            self.config.payout(self.session.pot)?
        } else {
            Amount::ZERO
        };
        let result = if won {
            SessionResult::Win
        } else {
            SessionResult::Loss
        };

        // Phase flips before any await, so a round can never pay out twice.
        self.session.result = result;
        self.session.payout = payout;
        self.session.phase = SessionPhase::Settled;

        let game_result = if won { GameResult::Win } else { GameResult::Loss };
        if won {
            self.ledger.credit(payout).await?;
        }

        let record = GameRecord::new(self.config.mode, self.config.stake, payout, game_result);
        self.history.append(record.clone()).await?;

        let balance = self.ledger.balance();
        tracing::info!(
            "{}: {} ({}), paid {}, balance {}",
            self.config.mode,
            game_result,
            outcome,
            payout,
            balance
        );

        Ok(Settlement {
            result,
            outcome,
            payout,
            balance,
            record,
        })
    }

    /// Start over with a fresh idle session.
    pub fn new_round(&mut self) -> Result<()> {
        self.require("start a new round", &[SessionPhase::Settled, SessionPhase::Idle])?;

        self.session = WagerSession::default();
        self.opponent = None;
        Ok(())
    }
}

impl Drop for WagerEngine {
    fn drop(&mut self) {
        // The stake was debited at bet time and no record is ever written for it.
        if matches!(
            self.session.phase,
            SessionPhase::Staked | SessionPhase::AwaitingOpponent | SessionPhase::AwaitingResolution
        ) {
            tracing::debug!(
                "{}: abandoned while {}, stake {} forfeited without a record",
                self.config.mode,
                self.session.phase,
                self.session.pot
            );
        }
    }
}

impl fmt::Debug for WagerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WagerEngine")
            .field("mode", &self.config.mode)
            .field("session", &self.session)
            .field("opponent", &self.opponent)
            .finish()
    }
}
