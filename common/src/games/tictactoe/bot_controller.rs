use std::fmt;

use serde::{Deserialize, Serialize};

use crate::games::MoveRandom;
use super::board::{Board, get_available_moves};
use super::heuristic::calculate_heuristic_move;
use super::minimax::calculate_minimax_move;
use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// `"easy"` and `"medium"` pick those tiers, any other name is `Hard`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    NoEmptyCells,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoEmptyCells => write!(f, "No empty cells left on the board"),
        }
    }
}

impl std::error::Error for MoveError {}

pub fn calculate_move<R: MoveRandom>(
    difficulty: Difficulty,
    board: &Board,
    computer_mark: Mark,
    human_mark: Mark,
    rng: &mut R,
) -> Result<usize, MoveError> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => calculate_heuristic_move(board, computer_mark, human_mark, rng),
        Difficulty::Hard => calculate_minimax_move(board, human_mark),
    }
}

pub fn calculate_random_move<R: MoveRandom>(board: &Board, rng: &mut R) -> Result<usize, MoveError> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return Err(MoveError::NoEmptyCells);
    }
    let idx = rng.pick_index(available_moves.len());
    Ok(available_moves[idx])
}
