use crate::games::MoveRandom;
use super::board::{Board, CELL_COUNT, is_valid_move};
use super::bot_controller::calculate_move;
use super::settings::TicTacToeSettings;
use super::types::{GameMode, GameStatus, Mark, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, evaluate_outcome};

/// Authoritative state of one round. Owns the board and applies every move,
/// human or bot, through `place_mark`.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub settings: TicTacToeSettings,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(settings: TicTacToeSettings) -> Self {
        Self {
            board: Board::new(),
            settings,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !is_valid_move(&self.board, index) {
            return Err(format!("Cell {} is already marked", index));
        }

        self.board.set(index, self.current_mark);
        self.last_move = Some(index);

        self.check_game_over();
        if self.is_over() {
            crate::log!("Round over: {:?}", self.status);
        }

        if self.status == GameStatus::InProgress {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(())
    }

    pub fn is_bot_turn(&self) -> bool {
        self.settings.mode == GameMode::SinglePlayer
            && self.status == GameStatus::InProgress
            && self.current_mark != self.settings.human_mark
    }

    /// Asks the configured bot for a move and applies it.
    pub fn make_bot_move<R: MoveRandom>(&mut self, rng: &mut R) -> Result<usize, String> {
        if !self.is_bot_turn() {
            return Err("Not the computer's turn".to_string());
        }

        let index = calculate_move(
            self.settings.difficulty,
            &self.board,
            self.settings.computer_mark(),
            self.settings.human_mark,
            rng,
        )
        .map_err(|e| e.to_string())?;

        self.place_mark(index)?;
        crate::log!(
            "Bot ({}) played {} at cell {}",
            self.settings.difficulty.name(),
            self.settings.computer_mark(),
            index
        );
        Ok(index)
    }

    /// Rematch: same settings, empty board, X to move.
    pub fn reset(&mut self) {
        *self = Self::new(self.settings);
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    fn check_game_over(&mut self) {
        self.status = match evaluate_outcome(&self.board) {
            Outcome::Win(mark) => {
                self.winning_line = check_win_with_line(&self.board);
                GameStatus::won_by(mark)
            }
            Outcome::Draw => GameStatus::Draw,
            Outcome::InProgress => GameStatus::InProgress,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::tictactoe::bot_controller::Difficulty;

    fn multiplayer() -> TicTacToeGameState {
        TicTacToeGameState::new(TicTacToeSettings {
            mode: GameMode::MultiPlayer,
            ..TicTacToeSettings::default()
        })
    }

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            state.place_mark(index).unwrap();
        }
    }

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut state = multiplayer();
        assert_eq!(state.current_mark, Mark::X);
        state.place_mark(4).unwrap();
        assert_eq!(state.board.get(4), Some(Mark::X));
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(4));
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut state = multiplayer();
        state.place_mark(0).unwrap();
        assert!(state.place_mark(0).is_err());
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut state = multiplayer();
        assert!(state.place_mark(9).is_err());
    }

    #[test]
    fn test_winning_move_ends_round_without_switching_turn() {
        let mut state = multiplayer();
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.winning_line.unwrap().cells, [0, 1, 2]);
        assert!(state.place_mark(8).is_err());
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let mut state = multiplayer();
        // X completes the 0-4-8 diagonal with the ninth mark.
        play(&mut state, &[0, 1, 2, 5, 3, 6, 4, 7, 8]);
        assert!(state.board.is_full());
        assert_eq!(state.status, GameStatus::XWon);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = multiplayer();
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winner(), None);
        assert!(state.winning_line.is_none());
    }

    #[test]
    fn test_reset_keeps_settings() {
        let mut state = multiplayer();
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.reset();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.settings.mode, GameMode::MultiPlayer);
    }

    #[test]
    fn test_bot_opens_when_human_plays_o() {
        let mut state = TicTacToeGameState::new(TicTacToeSettings {
            human_mark: Mark::O,
            difficulty: Difficulty::Hard,
            ..TicTacToeSettings::default()
        });
        let mut rng = SessionRng::new(5);
        assert!(state.is_bot_turn());
        let index = state.make_bot_move(&mut rng).unwrap();
        assert_eq!(state.board.get(index), Some(Mark::X));
        assert!(!state.is_bot_turn());
        assert!(state.make_bot_move(&mut rng).is_err());
    }

    #[test]
    fn test_multiplayer_never_has_bot_turn() {
        let mut state = multiplayer();
        assert!(!state.is_bot_turn());
        state.place_mark(0).unwrap();
        assert!(!state.is_bot_turn());
    }

    #[test]
    fn test_hard_bot_never_loses_full_round() {
        let mut rng = SessionRng::new(17);
        for _ in 0..50 {
            let mut state = TicTacToeGameState::new(TicTacToeSettings {
                difficulty: Difficulty::Hard,
                ..TicTacToeSettings::default()
            });
            while !state.is_over() {
                if state.is_bot_turn() {
                    state.make_bot_move(&mut rng).unwrap();
                } else {
                    let moves = crate::games::tictactoe::get_available_moves(&state.board);
                    let pick = rng.pick_index(moves.len());
                    state.place_mark(moves[pick]).unwrap();
                }
            }
            assert_ne!(state.winner(), Some(Mark::X));
        }
    }
}
