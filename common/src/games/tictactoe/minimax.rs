use super::board::{Board, get_available_moves};
use super::bot_controller::MoveError;
use super::types::Mark;
use super::win_detector::{check_draw, check_win};

const WIN_SCORE: i32 = 10;

/// Optimal move for the side playing against `human_mark`. Works on a copy,
/// the caller's board is never touched.
pub fn calculate_minimax_move(board: &Board, human_mark: Mark) -> Result<usize, MoveError> {
    let bot_mark = human_mark.opponent();
    let available_moves = get_available_moves(board);

    if available_moves.is_empty() {
        return Err(MoveError::NoEmptyCells);
    }

    let mut board = *board;

    if let Some(index) = find_winning_move(&mut board, bot_mark, &available_moves) {
        return Ok(index);
    }

    if let Some(index) = find_winning_move(&mut board, human_mark, &available_moves) {
        return Ok(index);
    }

    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    for &index in &available_moves {
        board.set(index, bot_mark);
        let score = minimax(&mut board, 0, false, bot_mark, human_mark, i32::MIN, i32::MAX);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = index;
        }
    }

    Ok(best_move)
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board.set(index, mark);
        let winner = check_win(board);
        board.clear(index);

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}

/// Score from the bot's side: `10 - depth` for a bot win, `depth - 10` for a
/// loss, 0 for a draw.
pub fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    human_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match check_win(board) {
        Some(winner) if winner == bot_mark => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None => {}
    }
    if check_draw(board) {
        return 0;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.set(index, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark, human_mark, alpha, beta);
            board.clear(index);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board.set(index, human_mark);
            let eval = minimax(board, depth + 1, true, bot_mark, human_mark, alpha, beta);
            board.clear(index);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
