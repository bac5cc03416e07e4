//! Shadow Bets games
//!
//! A single [`WagerEngine`] state machine runs every variant. What differs between
//! dice, roulette, cards, coins and the horse race lives in a [`GameVariantConfig`]:
//! the guess domain, how the outcome is drawn, and the win predicate.

pub mod engine;
pub mod error;
pub mod opponent;
pub mod scheduler;
pub mod table;
pub mod variant;

pub use engine::{
    BetStatus, Deferred, SessionPhase, SessionResult, Settlement, Step, WagerEngine,
    WagerSession, OPPONENT_DELAY,
};
pub use error::{GameError, Result};
pub use opponent::{Opponent, BOT_NAMES};
pub use scheduler::{ImmediateScheduler, Scheduler, TokioScheduler};
pub use table::GameTable;
pub use variant::{GameVariantConfig, Guess, Outcome};

use shadowbets_core::{GameMode, PlayerProfile, ThreadRandom};

/// Engine for `mode` bound to the profile's wallet and history, using live randomness.
pub fn create_engine(mode: GameMode, profile: &PlayerProfile) -> WagerEngine {
    WagerEngine::for_profile(
        GameVariantConfig::for_mode(mode),
        profile,
        Box::new(ThreadRandom),
    )
}

#[cfg(test)]
mod integration_tests;
