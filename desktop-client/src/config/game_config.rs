use common::config::Validate;
use common::games::tictactoe::TicTacToeSessionSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    /// Clear the board as soon as a game ends instead of waiting for "Reset Game".
    pub auto_reset: bool,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { auto_reset: true }
    }
}

impl From<&GameConfig> for TicTacToeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            auto_reset: config.auto_reset,
        }
    }
}
