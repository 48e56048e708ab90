//! Exhaustive minimax for the computer player.
//!
//! Every reachable continuation is searched to the end of the game. Wins, draws and
//! losses are worth the same no matter how far away they are, so among equally scored
//! moves the engine has no preference for a quicker win; the lowest cell index wins ties.

use super::board::{Board, get_available_moves};
use super::types::{COMPUTER_MARK, HUMAN_MARK, Mark};
use super::win_detector::{has_won, is_full};

pub const WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub positions_evaluated: u64,
    pub max_depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvaluation {
    pub position: usize,
    pub score: i32,
    pub stats: SearchStats,
}

/// Cell the computer should play, or `None` when the board has no empty cell.
pub fn best_move(board: &Board) -> Option<usize> {
    calculate_minimax_move(board).map(|evaluation| evaluation.position)
}

pub fn calculate_minimax_move(board: &Board) -> Option<MoveEvaluation> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }

    let mut board = *board;
    let mut stats = SearchStats::default();
    let mut best_position = None;
    let mut best_score = i32::MIN;

    for position in available_moves {
        board[position] = COMPUTER_MARK;
        let score = search(&mut board, 0, false, &mut stats);
        board[position] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_position = Some(position);
        }
    }

    best_position.map(|position| MoveEvaluation {
        position,
        score: best_score,
        stats,
    })
}

/// Outcome of `board` under perfect play from both sides, from the computer's side.
///
/// `board` is restored before returning. `depth` only feeds the search statistics.
pub fn minimax(board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
    let mut stats = SearchStats::default();
    search(board, depth, is_maximizing, &mut stats)
}

fn search(board: &mut Board, depth: usize, is_maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.positions_evaluated += 1;
    stats.max_depth = stats.max_depth.max(depth);

    if has_won(board, COMPUTER_MARK) {
        return WIN_SCORE;
    }
    if has_won(board, HUMAN_MARK) {
        return LOSS_SCORE;
    }
    if is_full(board) {
        return DRAW_SCORE;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in moves {
            board[position] = COMPUTER_MARK;
            let eval = search(board, depth + 1, false, stats);
            board[position] = Mark::Empty;

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in moves {
            board[position] = HUMAN_MARK;
            let eval = search(board, depth + 1, true, stats);
            board[position] = Mark::Empty;

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
