use super::board::Board;
use super::types::{Mark, Position, WinningLine};

/// Rows, columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// `mark` must be X or O; the answer for `Mark::Empty` is meaningless.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board[index] == mark))
}

pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Mark::Empty)
}

pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Mark::X) || has_won(board, Mark::O) || is_full(board)
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for [a, b, c] in WIN_LINES {
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            return Some(WinningLine::new(
                mark,
                Position::from_index(a),
                Position::from_index(c),
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from;

    #[test]
    fn test_every_line_wins_for_its_owner_only() {
        for line in WIN_LINES {
            for (mark, other) in [(Mark::X, Mark::O), (Mark::O, Mark::X)] {
                let mut board = Board::new();
                for index in line {
                    board[index] = mark;
                }
                assert!(has_won(&board, mark), "{:?} should win on {:?}", mark, line);
                assert!(!has_won(&board, other), "{:?} should not win on {:?}", other, line);
                assert!(is_terminal(&board));
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board_from("XX OO    ");
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_is_full_requires_every_cell() {
        assert!(is_full(&board_from("XOXXOOOXX")));
        assert!(!is_full(&board_from("XOXXOOOX ")));
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_full_board_without_winner_is_terminal() {
        let board = board_from("XOXXOOOXX");
        assert_eq!(check_win(&board), None);
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_check_win_with_line_reports_endpoints() {
        let board = board_from("X O XO  X");
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 2));

        let board = board_from("XXO XOX O");
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.start, Position::new(2, 0));
        assert_eq!(line.end, Position::new(2, 2));
    }

    #[test]
    fn test_anti_diagonal_line() {
        let board = board_from("XXO O OXX");
        assert!(has_won(&board, Mark::O));
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.start, Position::new(2, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }
}
