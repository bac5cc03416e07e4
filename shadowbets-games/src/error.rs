use crate::engine::SessionPhase;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Shadow Bets core error: {0}")]
    Core(#[from] shadowbets_core::ShadowError),

    #[error("Cannot {operation} while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: SessionPhase,
    },

    #[error("{guess} is not a valid guess in {game}")]
    GuessNotOffered { guess: String, game: String },

    #[error("Invalid guess: {0}")]
    UnknownGuess(String),

    #[error("Payout overflow: {0}")]
    PayoutOverflow(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
