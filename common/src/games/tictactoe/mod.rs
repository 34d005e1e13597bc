mod board;
mod bot_controller;
mod game_state;
mod heuristic;
mod minimax;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, WINNING_LINES, get_available_moves, is_valid_move};
pub use bot_controller::{Difficulty, MoveError, calculate_move, calculate_random_move};
pub use game_state::TicTacToeGameState;
pub use heuristic::{calculate_heuristic_move, find_two_in_a_row};
pub use minimax::calculate_minimax_move;
pub use settings::{MAX_DELAY_MS, TicTacToeSettings};
pub use types::{GameMode, GameStatus, Mark, Outcome, WinningLine};
pub use win_detector::{check_draw, check_win, check_win_with_line, evaluate_outcome};
