use crate::config::CliConfig;
use anyhow::{bail, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use dialoguer::Select;
use shadowbets_core::{GameMode, PlayerProfile};
use shadowbets_games::{
    create_engine, BetStatus, GameTable, GameVariantConfig, Guess, ImmediateScheduler, Scheduler,
    SessionPhase, SessionResult, Settlement, TokioScheduler,
};

pub async fn play(
    profile: &PlayerProfile,
    config: &CliConfig,
    game: GameMode,
    guess: Option<&str>,
    rounds: u32,
) -> Result<()> {
    if rounds == 0 {
        bail!("Rounds must be at least 1");
    }

    // A bad guess fails before anything is staked
    let variant = GameVariantConfig::for_mode(game);
    let fixed_guess = guess.map(|g| variant.parse_guess(g)).transpose()?;

    let engine = create_engine(game, profile);
    let settled = if config.fast {
        run_rounds(GameTable::new(engine, ImmediateScheduler), fixed_guess, rounds).await?
    } else {
        run_rounds(GameTable::new(engine, TokioScheduler), fixed_guess, rounds).await?
    };

    tracing::debug!("Played {} of {} rounds of {}", settled, rounds, game);
    Ok(())
}

/// Returns how many rounds were settled.
async fn run_rounds<S: Scheduler>(
    mut table: GameTable<S>,
    fixed_guess: Option<Guess>,
    rounds: u32,
) -> Result<u32> {
    let variant = table.engine().config().clone();
    println!(
        "{} - stake {}, balance {}",
        variant.mode,
        variant.stake,
        table.engine().balance()
    );

    let mut settled = 0;
    for round in 1..=rounds {
        if table.engine().phase() == SessionPhase::Settled {
            table.new_round()?;
        }
        if rounds > 1 {
            println!();
            println!("Round {}/{}", round, rounds);
        }

        if let BetStatus::InsufficientFunds { need, available } = table.bet().await? {
            println!("Not enough funds: need {}, have {}.", need, available);
            println!("Use 'shadowbets reset' to start over.");
            break;
        }

        if let Some(message) = table.engine().opponent_message() {
            println!("{}", message);
        }

        let guess = match fixed_guess {
            Some(guess) => guess,
            None => prompt_guess(&variant)?,
        };
        println!("You bet on {}...", guess);

        let settlement = table.guess(guess).await?;
        print_settlement(&settlement);
        settled += 1;
    }

    Ok(settled)
}

fn prompt_guess(variant: &GameVariantConfig) -> Result<Guess> {
    let labels: Vec<&str> = variant.guesses.iter().map(|guess| guess.label()).collect();
    let selection = Select::new()
        .with_prompt("Place your guess")
        .items(&labels)
        .default(0)
        .interact()?;

    match variant.guesses.get(selection) {
        Some(guess) => Ok(*guess),
        None => bail!("No guess at position {}", selection),
    }
}

fn print_settlement(settlement: &Settlement) {
    println!("Result: {}", settlement.outcome);
    match settlement.result {
        SessionResult::Win => println!("🎉 You Win! +{}", settlement.payout),
        SessionResult::Loss => println!("Bot Wins!"),
        SessionResult::None => {}
    }
    println!("Balance: {}", settlement.balance);
}

pub fn list_games() -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Game", "Command", "Stake", "Win pays", "Guesses", "Resolves in"]);

    for variant in GameVariantConfig::all() {
        let guesses: Vec<String> = variant
            .guesses
            .iter()
            .map(|guess| format!("{} ({})", guess.label(), guess.name()))
            .collect();
        table.add_row(vec![
            variant.mode.display_name().to_string(),
            variant.mode.short_name().to_string(),
            variant.stake.to_string(),
            format!("x{}", variant.payout_multiplier),
            guesses.join(", "),
            format!("{:.1}s", variant.resolution_delay.as_secs_f64()),
        ]);
    }

    println!("{}", table);
    println!("Every win pays the multiplier above, whatever the guess label shows.");
    Ok(())
}
