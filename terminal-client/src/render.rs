use common::games::tictactoe::{GameMode, GameStatus, Mark, TicTacToeGameState};

/// Empty cells show their index so the player knows what to type. Cells of a
/// completed line are wrapped in brackets.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let symbol = match state.board.get(index) {
                    Some(mark) => mark.to_string(),
                    None => index.to_string(),
                };
                match state.winning_line {
                    Some(line) if line.contains(index) => format!("[{}]", symbol),
                    _ => format!(" {} ", symbol),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

pub fn render_status(state: &TicTacToeGameState) -> String {
    match state.status {
        GameStatus::InProgress => {
            if state.is_bot_turn() {
                format!("Current turn: {} (computer)", state.current_mark)
            } else {
                format!("Current turn: {}", state.current_mark)
            }
        }
        GameStatus::XWon => winner_line(state, Mark::X),
        GameStatus::OWon => winner_line(state, Mark::O),
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}

fn winner_line(state: &TicTacToeGameState, mark: Mark) -> String {
    match state.settings.mode {
        GameMode::SinglePlayer if mark == state.settings.human_mark => {
            format!("{} wins! Congratulations for winning the game!", mark)
        }
        GameMode::SinglePlayer => format!("{} wins! The computer takes this round.", mark),
        GameMode::MultiPlayer => format!("{} wins!", mark),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::TicTacToeSettings;

    fn multiplayer() -> TicTacToeGameState {
        TicTacToeGameState::new(TicTacToeSettings {
            mode: GameMode::MultiPlayer,
            ..TicTacToeSettings::default()
        })
    }

    #[test]
    fn test_empty_board_shows_indices() {
        let rendered = render_board(&multiplayer());
        assert_eq!(
            rendered,
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 \n"
        );
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let mut state = multiplayer();
        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }
        let first_row = render_board(&state).lines().next().unwrap().to_string();
        assert_eq!(first_row, "[X]|[X]|[X]");
        assert_eq!(render_status(&state), "X wins!");
    }

    #[test]
    fn test_status_marks_computer_turn() {
        let state = TicTacToeGameState::new(TicTacToeSettings {
            human_mark: Mark::O,
            ..TicTacToeSettings::default()
        });
        assert_eq!(render_status(&state), "Current turn: X (computer)");
    }
}
