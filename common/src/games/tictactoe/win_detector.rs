use super::board::{Board, WINNING_LINES};
use super::types::{Mark, Outcome, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First completed line in `WINNING_LINES` order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for [a, b, c] in WINNING_LINES {
        if let Some(mark) = board.get(a)
            && board.get(b) == Some(mark)
            && board.get(c) == Some(mark)
        {
            return Some(WinningLine::new(mark, [a, b, c]));
        }
    }
    None
}

/// True when no empty cell is left. Does not look for a winner, so callers
/// must consult `check_win` first.
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_win(board) {
        return Outcome::Win(mark);
    }
    if check_draw(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_line(line: [usize; 3], mark: Mark) -> Board {
        let mut board = Board::new();
        for index in line {
            board.set(index, mark);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&Board::new()), None);
        assert!(!check_draw(&Board::new()));
        assert_eq!(evaluate_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_every_line_wins_in_isolation() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with_line(line, mark);
                assert_eq!(check_win(&board), Some(mark), "line {:?}", line);
                assert_eq!(check_win_with_line(&board).unwrap().cells, line);
            }
        }
    }

    #[test]
    fn test_every_line_wins_with_noise_in_other_cells() {
        for line in WINNING_LINES {
            let mut board = board_with_line(line, Mark::X);
            let others: Vec<usize> = (0..9).filter(|i| !line.contains(i)).collect();
            // Two opponent marks elsewhere never complete a second line.
            board.set(others[0], Mark::O);
            board.set(others[others.len() - 1], Mark::O);
            assert_eq!(check_win(&board), Some(Mark::X), "line {:?}", line);
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = Board::from_layout("XX. OO. ...").unwrap();
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_layout("XOX ... ...").unwrap();
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_layout("XOX XOO OXX").unwrap();
        assert_eq!(check_win(&board), None);
        assert!(check_draw(&board));
        assert_eq!(evaluate_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_reports_winner() {
        let board = Board::from_layout("XXX OOX XOO").unwrap();
        assert!(check_draw(&board));
        assert_eq!(evaluate_outcome(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_partial_board_is_not_draw() {
        let board = Board::from_layout("XOX XOO OX.").unwrap();
        assert!(!check_draw(&board));
    }
}
