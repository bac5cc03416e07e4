pub mod rules;

pub use rules::{
    CoinSide, Guess, Lane, Outcome, OutcomeRule, Parity, PocketColor, Suit, WinPredicate,
};

use crate::{GameError, Result};
use shadowbets_core::{Amount, GameMode, RandomSource};
use std::time::Duration;

pub const DEFAULT_STAKE: Amount = Amount::from_units(25);

/// Every variant currently pays 10x the pot, whatever the guess label advertises.
pub const DEFAULT_PAYOUT_MULTIPLIER: u32 = 10;

const DICE_GUESSES: &[Guess] = &[Guess::Parity(Parity::Even), Guess::Parity(Parity::Odd)];

const ROULETTE_GUESSES: &[Guess] = &[
    Guess::Color(PocketColor::Red),
    Guess::Color(PocketColor::Black),
    Guess::Color(PocketColor::Green),
];

const CARD_GUESSES: &[Guess] = &[
    Guess::Suit(Suit::Hearts),
    Guess::Suit(Suit::Spades),
    Guess::Suit(Suit::Diamonds),
    Guess::Suit(Suit::Clubs),
];

const COIN_GUESSES: &[Guess] = &[Guess::Coin(CoinSide::Heads), Guess::Coin(CoinSide::Tails)];

const RACE_GUESSES: &[Guess] = &[
    Guess::Lane(Lane::One),
    Guess::Lane(Lane::Two),
    Guess::Lane(Lane::Three),
];

/// Static description of one game variant; the engine reads everything
/// variant-specific from here.
#[derive(Debug, Clone)]
pub struct GameVariantConfig {
    pub mode: GameMode,
    pub stake: Amount,
    pub guesses: &'static [Guess],
    pub outcome_rule: OutcomeRule,
    pub win_predicate: WinPredicate,
    pub payout_multiplier: u32,
    /// Presentational pause between the guess and settlement.
    pub resolution_delay: Duration,
    /// Emoji the opponent signs its announcement with.
    pub flavor: &'static str,
}

impl GameVariantConfig {
    fn base(
        mode: GameMode,
        guesses: &'static [Guess],
        outcome_rule: OutcomeRule,
        win_predicate: WinPredicate,
        resolution_delay: Duration,
        flavor: &'static str,
    ) -> Self {
        Self {
            mode,
            stake: DEFAULT_STAKE,
            guesses,
            outcome_rule,
            win_predicate,
            payout_multiplier: DEFAULT_PAYOUT_MULTIPLIER,
            resolution_delay,
            flavor,
        }
    }

    pub fn dice() -> Self {
        Self::base(
            GameMode::Dice,
            DICE_GUESSES,
            OutcomeRule::TwoDice,
            rules::parity_matches,
            Duration::from_millis(1200),
            "💪",
        )
    }

    pub fn roulette() -> Self {
        Self::base(
            GameMode::Roulette,
            ROULETTE_GUESSES,
            OutcomeRule::Wheel,
            rules::color_matches,
            Duration::from_millis(2500),
            "🎡",
        )
    }

    pub fn cards() -> Self {
        Self::base(
            GameMode::Cards,
            CARD_GUESSES,
            OutcomeRule::SuitDraw,
            rules::suit_matches,
            Duration::from_millis(1500),
            "🃏",
        )
    }

    pub fn coins() -> Self {
        Self::base(
            GameMode::Coins,
            COIN_GUESSES,
            OutcomeRule::CoinFlip,
            rules::side_matches,
            Duration::from_millis(1200),
            "🪙",
        )
    }

    pub fn race() -> Self {
        Self::base(
            GameMode::Race,
            RACE_GUESSES,
            OutcomeRule::Race,
            rules::lane_matches,
            Duration::from_millis(3000),
            "🏁",
        )
    }

    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Dice => Self::dice(),
            GameMode::Roulette => Self::roulette(),
            GameMode::Cards => Self::cards(),
            GameMode::Coins => Self::coins(),
            GameMode::Race => Self::race(),
        }
    }

    pub fn all() -> Vec<Self> {
        GameMode::ALL.into_iter().map(Self::for_mode).collect()
    }

    pub fn with_stake(mut self, stake: Amount) -> Self {
        self.stake = stake;
        self
    }

    pub fn with_payout_multiplier(mut self, multiplier: u32) -> Self {
        self.payout_multiplier = multiplier;
        self
    }

    /// Rejects a stake/multiplier pair whose winning payout would not fit in an `Amount`.
    pub fn validate(&self) -> Result<()> {
        self.payout(self.stake).map(|_| ())
    }

    pub fn offers(&self, guess: &Guess) -> bool {
        self.guesses.contains(guess)
    }

    /// Resolve a guess by short name, label, or 1-based position in the guess list.
    pub fn parse_guess(&self, input: &str) -> Result<Guess> {
        let wanted = input.trim().trim_start_matches('#');

        if let Some(guess) = self.guesses.iter().find(|guess| {
            guess.name().eq_ignore_ascii_case(wanted) || guess.label().eq_ignore_ascii_case(wanted)
        }) {
            return Ok(*guess);
        }

        wanted
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| self.guesses.get(index))
            .copied()
            .ok_or_else(|| {
                let options: Vec<&str> = self.guesses.iter().map(|guess| guess.name()).collect();
                GameError::UnknownGuess(format!(
                    "'{}' for {}, expected one of: {}",
                    input,
                    self.mode,
                    options.join(", ")
                ))
            })
    }

    pub fn sample_outcome(&self, rng: &mut dyn RandomSource) -> Outcome {
        self.outcome_rule.sample(rng)
    }

    pub fn wins(&self, guess: &Guess, outcome: &Outcome) -> bool {
        (self.win_predicate)(guess, outcome)
    }

    /// Amount credited for a winning pot.
    pub fn payout(&self, pot: Amount) -> Result<Amount> {
        pot.checked_mul(self.payout_multiplier).ok_or_else(|| {
            GameError::PayoutOverflow(format!("{} x {}", pot, self.payout_multiplier))
        })
    }
}
