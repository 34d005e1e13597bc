use crate::games::MoveRandom;
use super::board::{Board, CENTER, CORNERS, EDGES, WINNING_LINES, get_available_moves};
use super::bot_controller::MoveError;
use super::types::Mark;

/// Rule bot: win, block, center, random corner, random edge.
pub fn calculate_heuristic_move<R: MoveRandom>(
    board: &Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    rng: &mut R,
) -> Result<usize, MoveError> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return Err(MoveError::NoEmptyCells);
    }

    if let Some(index) = find_two_in_a_row(board, bot_mark) {
        return Ok(index);
    }

    if let Some(index) = find_two_in_a_row(board, opponent_mark) {
        return Ok(index);
    }

    if board.is_empty_at(CENTER) {
        return Ok(CENTER);
    }

    if let Some(index) = pick_empty(board, &CORNERS, rng) {
        return Ok(index);
    }

    if let Some(index) = pick_empty(board, &EDGES, rng) {
        return Ok(index);
    }

    Ok(available_moves[0])
}

/// Empty cell of the first line holding exactly two `mark`s and one gap.
pub fn find_two_in_a_row(board: &Board, mark: Mark) -> Option<usize> {
    for line in WINNING_LINES {
        let owned = line.iter().filter(|&&i| board.get(i) == Some(mark)).count();
        let gap = line.iter().copied().find(|&i| board.is_empty_at(i));
        if owned == 2
            && let Some(index) = gap
        {
            return Some(index);
        }
    }
    None
}

fn pick_empty<R: MoveRandom>(board: &Board, candidates: &[usize], rng: &mut R) -> Option<usize> {
    let empty: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&i| board.is_empty_at(i))
        .collect();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.pick_index(empty.len())])
}
