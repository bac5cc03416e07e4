//! Guess and outcome vocabulary shared by the five variants, plus the win predicates.

use serde::{Deserialize, Serialize};
use shadowbets_core::RandomSource;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(value: u8) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PocketColor {
    Red,
    Black,
    Green,
}

impl PocketColor {
    /// 0 is green, odd pockets are red, even pockets are black.
    pub fn of(pocket: u8) -> Self {
        if pocket == 0 {
            PocketColor::Green
        } else if pocket % 2 == 1 {
            PocketColor::Red
        } else {
            PocketColor::Black
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

    pub fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Spades => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Suit::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinSide {
    Heads,
    Tails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    One,
    Two,
    Three,
}

impl Lane {
    pub fn number(self) -> u8 {
        match self {
            Lane::One => 1,
            Lane::Two => 2,
            Lane::Three => 3,
        }
    }

    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Lane::One),
            2 => Some(Lane::Two),
            3 => Some(Lane::Three),
            _ => None,
        }
    }
}

/// A player's (or the opponent's) pick in one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guess {
    Parity(Parity),
    Color(PocketColor),
    Suit(Suit),
    Coin(CoinSide),
    Lane(Lane),
}

impl Guess {
    /// Short name accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Guess::Parity(Parity::Even) => "even",
            Guess::Parity(Parity::Odd) => "odd",
            Guess::Color(PocketColor::Red) => "red",
            Guess::Color(PocketColor::Black) => "black",
            Guess::Color(PocketColor::Green) => "green",
            Guess::Suit(Suit::Hearts) => "hearts",
            Guess::Suit(Suit::Spades) => "spades",
            Guess::Suit(Suit::Diamonds) => "diamonds",
            Guess::Suit(Suit::Clubs) => "clubs",
            Guess::Coin(CoinSide::Heads) => "heads",
            Guess::Coin(CoinSide::Tails) => "tails",
            Guess::Lane(Lane::One) => "1",
            Guess::Lane(Lane::Two) => "2",
            Guess::Lane(Lane::Three) => "3",
        }
    }

    /// Display label shown to the player.
    ///
    /// The multipliers in these labels are not what a win pays: every variant pays
    /// `GameVariantConfig::payout_multiplier` regardless of the pick.
    pub fn label(&self) -> &'static str {
        match self {
            Guess::Parity(Parity::Even) => "Even",
            Guess::Parity(Parity::Odd) => "Odd",
            Guess::Color(PocketColor::Red) => "Red x2",
            Guess::Color(PocketColor::Black) => "Black x2",
            Guess::Color(PocketColor::Green) => "Green x14",
            Guess::Suit(Suit::Hearts) => "♥️ Hearts x4",
            Guess::Suit(Suit::Spades) => "♠️ Spades x4",
            Guess::Suit(Suit::Diamonds) => "♦️ Diamonds x4",
            Guess::Suit(Suit::Clubs) => "♣️ Clubs x4",
            Guess::Coin(CoinSide::Heads) => "👑 Heads x2",
            Guess::Coin(CoinSide::Tails) => "📈 Tails x2",
            Guess::Lane(Lane::One) => "🐎 #1 x4",
            Guess::Lane(Lane::Two) => "🐎 #2 x4",
            Guess::Lane(Lane::Three) => "🐎 #3 x4",
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The randomly drawn result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Sum of two six-sided dice.
    DiceSum(u8),
    /// Roulette pocket 0..=36.
    Pocket(u8),
    Card(Suit),
    Coin(CoinSide),
    /// Winning lane of the race.
    Lane(Lane),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::DiceSum(sum) => write!(f, "rolled {} ({:?})", sum, Parity::of(*sum)),
            Outcome::Pocket(pocket) => write!(f, "ball on {} ({:?})", pocket, PocketColor::of(*pocket)),
            Outcome::Card(suit) => write!(f, "drew {:?}", suit),
            Outcome::Coin(side) => write!(f, "landed {:?}", side),
            Outcome::Lane(lane) => write!(f, "horse #{} finished first", lane.number()),
        }
    }
}

/// How a variant draws its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeRule {
    /// Two independent draws in 1..=6, summed.
    TwoDice,
    /// One draw in 0..=36.
    Wheel,
    /// One of the four suits.
    SuitDraw,
    /// 0 is heads, 1 is tails.
    CoinFlip,
    /// Winning lane in 1..=3.
    Race,
}

impl OutcomeRule {
    pub fn sample(&self, rng: &mut dyn RandomSource) -> Outcome {
        match self {
            OutcomeRule::TwoDice => {
                let first = rng.uniform_int(1, 6);
                let second = rng.uniform_int(1, 6);
                Outcome::DiceSum((first + second) as u8)
            }
            OutcomeRule::Wheel => Outcome::Pocket(rng.uniform_int(0, 36) as u8),
            OutcomeRule::SuitDraw => {
                let index = rng.uniform_int(0, 3) as usize;
                Outcome::Card(Suit::from_index(index).unwrap_or(Suit::Hearts))
            }
            OutcomeRule::CoinFlip => match rng.uniform_int(0, 1) {
                0 => Outcome::Coin(CoinSide::Heads),
                _ => Outcome::Coin(CoinSide::Tails),
            },
            OutcomeRule::Race => {
                Outcome::Lane(Lane::from_number(rng.uniform_int(1, 3)).unwrap_or(Lane::One))
            }
        }
    }
}

/// Decides a round from the player's guess and the drawn outcome only.
pub type WinPredicate = fn(&Guess, &Outcome) -> bool;

pub fn parity_matches(guess: &Guess, outcome: &Outcome) -> bool {
    match (guess, outcome) {
        (Guess::Parity(parity), Outcome::DiceSum(sum)) => *parity == Parity::of(*sum),
        _ => false,
    }
}

pub fn color_matches(guess: &Guess, outcome: &Outcome) -> bool {
    match (guess, outcome) {
        (Guess::Color(color), Outcome::Pocket(pocket)) => *color == PocketColor::of(*pocket),
        _ => false,
    }
}

pub fn suit_matches(guess: &Guess, outcome: &Outcome) -> bool {
    match (guess, outcome) {
        (Guess::Suit(guessed), Outcome::Card(drawn)) => guessed.index() == drawn.index(),
        _ => false,
    }
}

pub fn side_matches(guess: &Guess, outcome: &Outcome) -> bool {
    match (guess, outcome) {
        (Guess::Coin(guessed), Outcome::Coin(landed)) => guessed == landed,
        _ => false,
    }
}

pub fn lane_matches(guess: &Guess, outcome: &Outcome) -> bool {
    match (guess, outcome) {
        (Guess::Lane(guessed), Outcome::Lane(winner)) => guessed.number() == winner.number(),
        _ => false,
    }
}
