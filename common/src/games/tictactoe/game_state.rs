use super::board::{Board, CELL_COUNT, is_valid_move};
use super::types::{GameStatus, HUMAN_MARK, Mark, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line, is_full};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: HUMAN_MARK,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err(format!("Not {}'s turn", mark.symbol()));
        }

        if index >= CELL_COUNT {
            return Err(format!("Position {} out of bounds", index));
        }

        if !is_valid_move(&self.board, index) {
            return Err(format!("Cell {} is already marked", index));
        }

        self.board[index] = mark;
        self.last_move = Some(Position::from_index(index));

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = if winner_mark == HUMAN_MARK {
                GameStatus::HumanWon
            } else {
                GameStatus::ComputerWon
            };
            return;
        }

        if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            let mark = state.current_mark;
            state.place_mark(mark, index).unwrap();
        }
    }

    #[test]
    fn test_new_game_starts_with_human() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[4]);
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(Position::new(1, 1)));
        play(&mut state, &[0]);
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_rejects_wrong_turn() {
        let mut state = TicTacToeGameState::new();
        assert!(state.place_mark(Mark::O, 0).is_err());
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_rejects_occupied_and_out_of_bounds() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0]);
        assert!(state.place_mark(Mark::O, 0).is_err());
        assert!(state.place_mark(Mark::O, 9).is_err());
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_human_win_is_detected() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.status, GameStatus::HumanWon);
        let line = state.winning_line().unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 0));
        assert!(state.place_mark(Mark::O, 8).is_err());
    }

    #[test]
    fn test_computer_win_is_detected() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 2, 1, 4, 8, 6]);
        assert_eq!(state.status, GameStatus::ComputerWon);
    }

    #[test]
    fn test_full_board_is_a_draw() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.reset();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.last_move, None);
    }
}
