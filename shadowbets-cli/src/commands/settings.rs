use anyhow::{bail, Result};
use clap::builder::BoolishValueParser;
use clap::Subcommand;
use shadowbets_core::PlayerProfile;
use shadowbets_games::BOT_NAMES;

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current preferences
    Show,
    /// Turn sound effects on or off
    Sound {
        #[arg(value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
    /// Turn haptic feedback on or off
    Haptics {
        #[arg(value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
    /// Choose the preferred bot
    Bot {
        /// One of Alex_777, CryptoCat, NeonGhost
        name: String,
    },
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

pub async fn handle_settings_command(cmd: SettingsCommands, profile: &PlayerProfile) -> Result<()> {
    match cmd {
        SettingsCommands::Show => {
            let prefs = profile.preferences();
            println!("Settings:");
            println!("  Bot: {}", prefs.selected_bot);
            println!("  Sound: {}", on_off(prefs.sound_enabled));
            println!("  Haptics: {}", on_off(prefs.haptics_enabled));
        }

        SettingsCommands::Sound { enabled } => {
            profile.set_sound_enabled(enabled).await?;
            println!("Sound {}.", on_off(enabled));
        }

        SettingsCommands::Haptics { enabled } => {
            profile.set_haptics_enabled(enabled).await?;
            println!("Haptics {}.", on_off(enabled));
        }

        SettingsCommands::Bot { name } => {
            let Some(bot) = BOT_NAMES
                .iter()
                .find(|bot| bot.eq_ignore_ascii_case(name.trim()))
            else {
                bail!("Unknown bot '{}', expected one of: {}", name, BOT_NAMES.join(", "));
            };

            profile.set_selected_bot(bot).await?;
            println!("Selected bot: {}", bot);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadowbets_core::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_settings_update_preferences() {
        let profile = PlayerProfile::open_default(Arc::new(MemoryStore::new()))
            .await
            .unwrap();

        handle_settings_command(SettingsCommands::Sound { enabled: false }, &profile)
            .await
            .unwrap();
        handle_settings_command(
            SettingsCommands::Bot {
                name: "neonghost".to_string(),
            },
            &profile,
        )
        .await
        .unwrap();
        assert!(handle_settings_command(
            SettingsCommands::Bot {
                name: "Nobody".to_string(),
            },
            &profile,
        )
        .await
        .is_err());

        let prefs = profile.preferences();
        assert!(!prefs.sound_enabled);
        assert!(prefs.haptics_enabled);
        assert_eq!(prefs.selected_bot, "NeonGhost");
    }
}
