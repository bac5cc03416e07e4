mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use shadowbets_core::{GameMode, PlayerProfile, ShadowError, SqliteStore};
use shadowbets_games::GameError;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shadowbets")]
#[command(about = "Shadow Bets - single-player wager simulator with virtual currency")]
#[command(version)]
struct Cli {
    /// Data directory for the saved profile
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Skip the pauses between game steps
    #[arg(long, global = true)]
    fast: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one or more rounds of a game
    Play {
        /// Game to play (dice, roulette, cards, coins, race)
        game: GameMode,
        /// Your guess; prompted for when omitted
        guess: Option<String>,
        /// Number of rounds to play
        #[arg(short, long, default_value_t = 1)]
        rounds: u32,
    },
    /// Show the wallet balance
    Balance,
    /// Show recent games, newest first
    History {
        /// Maximum number of games to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show win/loss statistics
    Stats,
    /// List the available games
    Games,
    /// Player preferences
    #[command(subcommand)]
    Settings(commands::SettingsCommands),
    /// Restore the starting balance and clear history
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let defaults = CliConfig::default();
    let config = CliConfig {
        data_dir: cli.data_dir.unwrap_or(defaults.data_dir),
        verbose: cli.verbose,
        fast: cli.fast,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_filter()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Ensure data directory exists
    tokio::fs::create_dir_all(&config.data_dir).await?;

    // Restore the saved profile
    let store = SqliteStore::open(&config.db_path()).await?;
    let profile = PlayerProfile::open_default(Arc::new(store)).await?;

    // Execute command
    let result = match cli.command {
        Commands::Play {
            game,
            guess,
            rounds,
        } => commands::play(&profile, &config, game, guess.as_deref(), rounds).await,
        Commands::Balance => commands::show_balance(&profile),
        Commands::History { limit, json } => commands::show_history(&profile, limit, json),
        Commands::Stats => commands::show_stats(&profile),
        Commands::Games => commands::list_games(),
        Commands::Settings(cmd) => commands::handle_settings_command(cmd, &profile).await,
        Commands::Reset { yes } => commands::reset_profile(&profile, yes).await,
    };

    if let Err(e) = result {
        if let Some(game_error) = e.downcast_ref::<GameError>() {
            match game_error {
                GameError::UnknownGuess(detail) => {
                    eprintln!("Error: Unknown guess {}", detail);
                    eprintln!("Use 'shadowbets games' to see every game's guesses");
                }
                GameError::Core(ShadowError::InsufficientFunds { need, available }) => {
                    eprintln!("Error: Insufficient funds");
                    eprintln!("Need: {}, Available: {}", need, available);
                }
                _ => eprintln!("Error: {}", game_error),
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
