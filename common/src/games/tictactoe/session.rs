use crate::log;
use super::board::Board;
use super::bot_controller::calculate_minimax_move;
use super::game_state::TicTacToeGameState;
use super::types::{COMPUTER_MARK, GameStatus, HUMAN_MARK, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    /// Start a fresh board as soon as a game ends.
    pub auto_reset: bool,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self { auto_reset: true }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl ScoreTally {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::HumanWon => self.human_wins += 1,
            GameStatus::ComputerWon => self.computer_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Played,
    Ignored,
}

/// What the shell needs to redraw after a request.
///
/// With auto reset enabled the snapshot of a finishing move still holds the final board
/// and status, while the session itself already holds a fresh board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub status: GameStatus,
    pub result: Option<MoveResult>,
    pub human_move: Option<usize>,
    pub computer_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
    pub score: ScoreTally,
}

impl GameSnapshot {
    pub fn announcement(&self) -> Option<&'static str> {
        self.status.announcement()
    }
}

pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    game_state: TicTacToeGameState,
    score: ScoreTally,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings) -> Self {
        log!("Starting tic-tac-toe session (auto reset: {})", settings.auto_reset);
        Self {
            settings,
            game_state: TicTacToeGameState::new(),
            score: ScoreTally::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.game_state.board
    }

    pub fn status(&self) -> GameStatus {
        self.game_state.status
    }

    pub fn score(&self) -> ScoreTally {
        self.score
    }

    pub fn settings(&self) -> TicTacToeSessionSettings {
        self.settings
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshot_with(None, None, None)
    }

    /// Plays the human's X at `position`, then the computer's reply if the game goes on.
    ///
    /// Finished games, out-of-range positions and occupied cells leave the session
    /// unchanged and report `MoveResult::Ignored`.
    pub fn submit_move(&mut self, position: usize) -> GameSnapshot {
        if let Err(e) = self.game_state.place_mark(HUMAN_MARK, position) {
            log!("Ignoring move at {}: {}", position, e);
            return self.snapshot_with(Some(MoveResult::Ignored), None, None);
        }
        log!("Human played {}", position);

        let mut computer_move = None;
        if self.game_state.status == GameStatus::InProgress {
            match calculate_minimax_move(&self.game_state.board) {
                Some(evaluation) => {
                    log!(
                        "Computer plays {} (score {}, {} positions, depth {})",
                        evaluation.position,
                        evaluation.score,
                        evaluation.stats.positions_evaluated,
                        evaluation.stats.max_depth
                    );
                    match self.game_state.place_mark(COMPUTER_MARK, evaluation.position) {
                        Ok(()) => computer_move = Some(evaluation.position),
                        Err(e) => log!("Computer move {} rejected: {}", evaluation.position, e),
                    }
                }
                None => log!("No move left for the computer"),
            }
        }

        let status = self.game_state.status;
        if status.is_over() {
            self.score.record(status);
        }

        let snapshot = self.snapshot_with(Some(MoveResult::Played), Some(position), computer_move);

        if let Some(announcement) = status.announcement() {
            log!("Game over: {}\n{}", announcement, self.game_state.board);
            if self.settings.auto_reset {
                self.game_state.reset();
            }
        }

        snapshot
    }

    pub fn reset(&mut self) -> GameSnapshot {
        log!("Resetting board");
        self.game_state.reset();
        self.snapshot()
    }

    pub fn clear_score(&mut self) {
        self.score = ScoreTally::default();
    }

    fn snapshot_with(
        &self,
        result: Option<MoveResult>,
        human_move: Option<usize>,
        computer_move: Option<usize>,
    ) -> GameSnapshot {
        GameSnapshot {
            board: self.game_state.board,
            status: self.game_state.status,
            result,
            human_move,
            computer_move,
            winning_line: self.game_state.winning_line(),
            score: self.score,
        }
    }
}
