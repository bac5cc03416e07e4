use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Whole units of virtual currency. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    pub const fn to_units(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    pub fn checked_mul(self, factor: u32) -> Option<Amount> {
        self.0.checked_mul(u64::from(factor)).map(Amount)
    }

    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

// Older snapshots store balances as floating point numbers (`1000.0`).
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value < 0.0 {
            return Err(de::Error::custom(format!("invalid amount: {}", value)));
        }
        Ok(Amount(value.round() as u64))
    }
}

/// The five game variants offered by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "Shadow Dice")]
    Dice,
    #[serde(rename = "Shadow Roulette")]
    Roulette,
    #[serde(rename = "Shadow Cards")]
    Cards,
    #[serde(rename = "Shadow Coins")]
    Coins,
    #[serde(rename = "Shadow Race")]
    Race,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::Dice,
        GameMode::Roulette,
        GameMode::Cards,
        GameMode::Coins,
        GameMode::Race,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            GameMode::Dice => "Shadow Dice",
            GameMode::Roulette => "Shadow Roulette",
            GameMode::Cards => "Shadow Cards",
            GameMode::Coins => "Shadow Coins",
            GameMode::Race => "Shadow Race",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            GameMode::Dice => "dice",
            GameMode::Roulette => "roulette",
            GameMode::Cards => "cards",
            GameMode::Coins => "coins",
            GameMode::Race => "race",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GameMode::ALL
            .into_iter()
            .find(|mode| {
                mode.short_name().eq_ignore_ascii_case(wanted)
                    || mode.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                format!(
                    "unknown game '{}', expected one of: dice, roulette, cards, coins, race",
                    s
                )
            })
    }
}

/// Final result of a wager as recorded in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "You Win!")]
    Win,
    #[serde(rename = "Bot Wins!")]
    Loss,
    /// Reserved; no variant currently produces a draw.
    #[serde(rename = "Draw")]
    Draw,
}

impl GameResult {
    pub fn label(&self) -> &'static str {
        match self {
            GameResult::Win => "You Win!",
            GameResult::Loss => "Bot Wins!",
            GameResult::Draw => "Draw",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One completed wager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub game_mode: GameMode,
    pub bet_amount: Amount,
    pub pot_won: Amount,
    pub result: GameResult,
}

impl GameRecord {
    pub fn new(game_mode: GameMode, bet_amount: Amount, pot_won: Amount, result: GameResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            game_mode,
            bet_amount,
            pot_won,
            result,
        }
    }
}
