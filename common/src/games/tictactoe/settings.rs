use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::bot_controller::Difficulty;
use super::types::{GameMode, Mark};

pub const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    pub mode: GameMode,
    /// Mark played by the human in single player mode. X always opens.
    pub human_mark: Mark,
    pub difficulty: Difficulty,
    pub bot_move_delay_ms: u64,
    pub end_of_round_delay_ms: u64,
}

impl TicTacToeSettings {
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must not exceed {} (got {})",
                MAX_DELAY_MS, self.bot_move_delay_ms
            ));
        }
        if self.end_of_round_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "end_of_round_delay_ms must not exceed {} (got {})",
                MAX_DELAY_MS, self.end_of_round_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::SinglePlayer,
            human_mark: Mark::X,
            difficulty: Difficulty::Easy,
            bot_move_delay_ms: 500,
            end_of_round_delay_ms: 500,
        }
    }
}
