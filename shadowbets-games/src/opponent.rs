use crate::variant::Guess;
use serde::{Deserialize, Serialize};
use shadowbets_core::storage::DEFAULT_BOT;
use shadowbets_core::RandomSource;

pub const BOT_NAMES: [&str; 3] = ["Alex_777", "CryptoCat", "NeonGhost"];

/// The cosmetic bot sitting across the table.
///
/// Its guess only feeds the flavor text; settlement never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opponent {
    name: String,
    /// Emoji closing the bot's announcement; differs per game.
    flavor: String,
    guess: Option<Guess>,
}

impl Opponent {
    pub fn draw(rng: &mut dyn RandomSource, flavor: &str) -> Self {
        let name = rng.pick(&BOT_NAMES).copied().unwrap_or(DEFAULT_BOT);
        Self {
            name: name.to_string(),
            flavor: flavor.to_string(),
            guess: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn guess(&self) -> Option<Guess> {
        self.guess
    }

    pub fn is_typing(&self) -> bool {
        self.guess.is_none()
    }

    pub(crate) fn choose(&mut self, guesses: &[Guess], rng: &mut dyn RandomSource) -> Option<Guess> {
        self.guess = rng.pick(guesses).copied();
        self.guess
    }

    pub fn message(&self) -> String {
        match self.guess {
            None => format!("{} is typing...", self.name),
            Some(guess) => format!("{} bets on {}! {}", self.name, guess.label(), self.flavor),
        }
    }
}
