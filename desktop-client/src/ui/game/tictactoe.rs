use common::games::tictactoe::{BOARD_SIZE, Board, Mark, Position, WinningLine, is_valid_move};

pub struct TicTacToeGameUi {
    last_hover: Option<usize>,
}

impl TicTacToeGameUi {
    const BOARD_PADDING: f32 = 20.0;
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 160.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let available_side = (available_width - Self::BOARD_PADDING * 2.0)
            .min(available_height - Self::BOARD_PADDING * 2.0);

        (available_side / BOARD_SIZE as f32).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Cell index under `pointer`, for a board whose top-left corner is `origin`.
    fn cell_at(origin: egui::Pos2, cell_size: f32, pointer: egui::Pos2) -> Option<usize> {
        let dx = pointer.x - origin.x;
        let dy = pointer.y - origin.y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }

        let x = (dx / cell_size) as usize;
        let y = (dy / cell_size) as usize;
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }
        Some(Position::new(x, y).index())
    }

    fn cell_rect(origin: egui::Pos2, cell_size: f32, index: usize) -> egui::Rect {
        let position = Position::from_index(index);
        egui::Rect::from_min_size(
            egui::pos2(
                origin.x + position.x as f32 * cell_size,
                origin.y + position.y as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    /// Paints the board and returns the cell the player clicked, if any.
    pub fn render_board(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<WinningLine>,
        accepts_moves: bool,
    ) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_side = cell_size * BOARD_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_side, board_side), egui::Sense::click());

        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
        }

        for (index, &mark) in board.cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect.min, cell_size, index);
            match mark {
                Mark::X => self.draw_x(painter, cell_rect),
                Mark::O => self.draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(painter, rect.min, cell_size, line);
        }

        self.last_hover = None;
        if !accepts_moves {
            return None;
        }

        if let Some(hover_pos) = response.hover_pos()
            && let Some(index) = Self::cell_at(rect.min, cell_size, hover_pos)
            && is_valid_move(board, index)
        {
            painter.rect_filled(
                Self::cell_rect(rect.min, cell_size, index),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
            self.last_hover = Some(index);
        }

        if response.clicked() {
            return self.last_hover;
        }
        None
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let color = egui::Color32::from_rgb(220, 50, 50);
        let stroke = egui::Stroke::new(4.0, color);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let color = egui::Color32::from_rgb(50, 50, 220);

        painter.circle_stroke(rect.center(), radius, egui::Stroke::new(4.0, color));
    }

    fn draw_winning_line(
        &self,
        painter: &egui::Painter,
        origin: egui::Pos2,
        cell_size: f32,
        line: WinningLine,
    ) {
        let start = Self::cell_rect(origin, cell_size, line.start.index()).center();
        let end = Self::cell_rect(origin, cell_size, line.end.index()).center();
        painter.line_segment(
            [start, end],
            egui::Stroke::new(6.0, egui::Color32::from_rgb(40, 160, 60)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_is_clamped() {
        assert_eq!(TicTacToeGameUi::calculate_cell_size(100.0, 100.0), 40.0);
        assert_eq!(TicTacToeGameUi::calculate_cell_size(2000.0, 2000.0), 160.0);
        assert_eq!(TicTacToeGameUi::calculate_cell_size(340.0, 1000.0), 100.0);
    }

    #[test]
    fn test_cell_at_maps_pointer_to_index() {
        let origin = egui::pos2(10.0, 20.0);
        assert_eq!(TicTacToeGameUi::cell_at(origin, 50.0, egui::pos2(15.0, 25.0)), Some(0));
        assert_eq!(TicTacToeGameUi::cell_at(origin, 50.0, egui::pos2(115.0, 75.0)), Some(5));
        assert_eq!(TicTacToeGameUi::cell_at(origin, 50.0, egui::pos2(159.0, 169.0)), Some(8));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let origin = egui::pos2(10.0, 20.0);
        assert_eq!(TicTacToeGameUi::cell_at(origin, 50.0, egui::pos2(5.0, 25.0)), None);
        assert_eq!(TicTacToeGameUi::cell_at(origin, 50.0, egui::pos2(160.0, 25.0)), None);
        assert_eq!(TicTacToeGameUi::cell_at(origin, 50.0, egui::pos2(15.0, 170.0)), None);
    }

    #[test]
    fn test_cell_rect_matches_cell_at() {
        let origin = egui::pos2(0.0, 0.0);
        for index in 0..9 {
            let center = TicTacToeGameUi::cell_rect(origin, 60.0, index).center();
            assert_eq!(TicTacToeGameUi::cell_at(origin, 60.0, center), Some(index));
        }
    }
}
