use std::fmt;
use std::ops::{Index, IndexMut};

use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 3x3 grid stored row-major, cell `0` top-left and cell `8` bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Mark {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, index: usize) -> &mut Mark {
        &mut self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if y > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let symbols: Vec<&str> = row.iter().map(Mark::symbol).collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

/// Empty cells in ascending index order.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    index < CELL_COUNT && board[index] == Mark::Empty
}

#[cfg(test)]
pub(crate) fn board_from(layout: &str) -> Board {
    let mut board = Board::new();
    for (index, symbol) in layout.chars().enumerate() {
        board[index] = match symbol {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        };
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(Mark::Empty), CELL_COUNT);
        assert_eq!(get_available_moves(&board), (0..CELL_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_available_moves_skip_occupied_cells() {
        let board = board_from("X O  X  O");
        assert_eq!(get_available_moves(&board), vec![1, 3, 4, 6, 7]);
    }

    #[test]
    fn test_is_valid_move() {
        let board = board_from("X        ");
        assert!(!is_valid_move(&board, 0));
        assert!(is_valid_move(&board, 1));
        assert!(!is_valid_move(&board, CELL_COUNT));
    }

    #[test]
    fn test_clear_empties_every_cell() {
        let mut board = board_from("XOXOXOXOX");
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_renders_rows() {
        let board = board_from("XO  X   O");
        assert_eq!(board.to_string(), "X|O| \n-+-+-\n |X| \n-+-+-\n | |O");
    }
}
