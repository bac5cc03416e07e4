use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use dialoguer::Confirm;
use shadowbets_core::PlayerProfile;
use shadowbets_games::variant::DEFAULT_STAKE;

pub fn show_balance(profile: &PlayerProfile) -> Result<()> {
    let ledger = profile.ledger();
    println!("Balance: {}", ledger.balance());

    if !ledger.can_afford(DEFAULT_STAKE) {
        println!("Not enough for a {} stake. Use 'shadowbets reset' to start over.", DEFAULT_STAKE);
    }
    Ok(())
}

pub fn show_history(profile: &PlayerProfile, limit: Option<usize>, json: bool) -> Result<()> {
    let mut records = profile.history().snapshot();
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No games played yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Date", "Game", "Bet", "Won", "Result"]);

    for record in &records {
        table.add_row(vec![
            record.date.format("%Y-%m-%d %H:%M:%S").to_string(),
            record.game_mode.display_name().to_string(),
            record.bet_amount.to_string(),
            record.pot_won.to_string(),
            record.result.label().to_string(),
        ]);
    }

    println!("{}", table);
    Ok(())
}

pub fn show_stats(profile: &PlayerProfile) -> Result<()> {
    let stats = profile.stats();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Stat", "Value"]);
    table.add_row(vec!["Games".to_string(), stats.games.to_string()]);
    table.add_row(vec!["Wins".to_string(), stats.wins.to_string()]);
    table.add_row(vec!["Losses".to_string(), stats.losses.to_string()]);
    table.add_row(vec!["Win rate".to_string(), format!("{:.1}%", stats.win_rate())]);
    table.add_row(vec!["Staked".to_string(), stats.total_staked.to_string()]);
    table.add_row(vec!["Won".to_string(), stats.total_won.to_string()]);
    table.add_row(vec!["Net".to_string(), format!("{:+}", stats.net())]);

    println!("{}", table);
    println!(
        "Covers the last {} games kept in history.",
        profile.history().capacity()
    );
    Ok(())
}

pub async fn reset_profile(profile: &PlayerProfile, yes: bool) -> Result<()> {
    if !yes {
        let confirm = Confirm::new()
            .with_prompt(format!(
                "Reset balance to {} and clear all game history?",
                profile.config().starting_balance
            ))
            .default(false)
            .interact()?;

        if !confirm {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    profile.reset().await?;
    println!("Profile reset. Balance: {}", profile.ledger().balance());
    Ok(())
}
