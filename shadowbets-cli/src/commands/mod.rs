pub mod play;
pub mod profile;
pub mod settings;

pub use play::{list_games, play};
pub use profile::{reset_profile, show_balance, show_history, show_stats};
pub use settings::{handle_settings_command, SettingsCommands};
