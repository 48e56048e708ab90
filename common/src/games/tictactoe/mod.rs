mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, get_available_moves, is_valid_move};
pub use bot_controller::{
    DRAW_SCORE, LOSS_SCORE, MoveEvaluation, SearchStats, WIN_SCORE, best_move,
    calculate_minimax_move, minimax,
};
pub use game_state::TicTacToeGameState;
pub use session::{GameSnapshot, MoveResult, ScoreTally, TicTacToeSession, TicTacToeSessionSettings};
pub use types::{COMPUTER_MARK, GameStatus, HUMAN_MARK, Mark, Position, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line, has_won, is_full, is_terminal};
