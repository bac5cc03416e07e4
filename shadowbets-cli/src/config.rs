use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DB_FILE: &str = "shadowbets.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub verbose: bool,
    /// Skip the pauses between game steps.
    pub fast: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("shadowbets"),
            verbose: false,
            fast: false,
        }
    }
}

impl CliConfig {
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    pub fn log_filter(&self) -> String {
        let level = if self.verbose { "debug" } else { "info" };
        format!(
            "shadowbets={},shadowbets_core={},shadowbets_games={}",
            level, level, level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_filter() {
        let config = CliConfig {
            data_dir: PathBuf::from("/tmp/sb"),
            verbose: true,
            fast: true,
        };
        assert_eq!(config.db_path(), PathBuf::from("/tmp/sb/shadowbets.db"));
        assert!(config.log_filter().contains("shadowbets_games=debug"));
        assert!(CliConfig::default().log_filter().starts_with("shadowbets=info"));
    }
}
