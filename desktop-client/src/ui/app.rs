use common::games::tictactoe::{GameSnapshot, GameStatus, TicTacToeSession, check_win_with_line};

use super::game::TicTacToeGameUi;

pub struct TicTacToeApp {
    session: TicTacToeSession,
    last_snapshot: GameSnapshot,
    game_ui: TicTacToeGameUi,
}

impl TicTacToeApp {
    pub fn new(session: TicTacToeSession) -> Self {
        let last_snapshot = session.snapshot();
        Self {
            session,
            last_snapshot,
            game_ui: TicTacToeGameUi::new(),
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        match self.last_snapshot.announcement() {
            Some(announcement) => {
                ui.label(egui::RichText::new(announcement).size(22.0).strong());
            }
            None => {
                ui.label("Your move. You are X.");
            }
        }

        let score = self.last_snapshot.score;
        ui.label(
            egui::RichText::new(format!(
                "You: {}   AI: {}   Draws: {}",
                score.human_wins, score.computer_wins, score.draws
            ))
            .color(egui::Color32::GRAY),
        );
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Reset Game").clicked() {
                    self.last_snapshot = self.session.reset();
                }
                if ui.button("Clear Score").clicked() {
                    self.session.clear_score();
                    self.last_snapshot = self.session.snapshot();
                }
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Tic Tac Toe");
                ui.add_space(8.0);
                self.render_status(ui);
                ui.add_space(12.0);

                let board = *self.session.board();
                let winning_line = check_win_with_line(&board);
                let accepts_moves = self.session.status() == GameStatus::InProgress;

                if let Some(position) =
                    self.game_ui.render_board(ui, &board, winning_line, accepts_moves)
                {
                    self.last_snapshot = self.session.submit_move(position);
                    ctx.request_repaint();
                }
            });
        });
    }
}
