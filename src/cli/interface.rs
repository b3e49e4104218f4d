//! Text rendering of boards and the opening banner.

use std::fmt::Write as _;

use crate::core::{Board, Cell, Coordinate};

/// Character drawn for a cell.
pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Occupied => '■',
        Cell::Hit => 'X',
        Cell::Miss => 'T',
    }
}

/// Render `board` as a grid with one-based row and column labels. Hidden
/// boards keep their ships out of the picture.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let w = size.to_string().len();
    let mut out = format!("{:w$} |", "");
    for c in 0..size {
        let _ = write!(out, " {:>w$} |", c + 1);
    }
    for r in 0..size {
        let _ = write!(out, "\n{:>w$} |", r + 1);
        for c in 0..size {
            let cell = board
                .visible_cell(Coordinate::new(r, c))
                .unwrap_or(Cell::Empty);
            let _ = write!(out, " {:>w$} |", cell_symbol(cell));
        }
    }
    out
}

/// Display the player's board (top) and the opponent's board (bottom).
pub fn print_player_view(own: &Board, opponent: &Board) {
    std::println!("{}", "-".repeat(20));
    std::println!("User board:");
    std::println!("{}", render_board(own));
    std::println!("{}", "-".repeat(20));
    std::println!("AI board:");
    std::println!("{}", render_board(opponent));
    std::println!("{}", "-".repeat(20));
}

pub fn greet() {
    std::println!("--------------------");
    std::println!("-------Welcome------");
    std::println!("-----to-the-game----");
    std::println!("-----Sea Battle-----");
    std::println!("--------------------");
    std::println!("-INSTRUCTION:-------");
    std::println!("-x - line number----");
    std::println!("-y - column number--");
    std::println!("--------------------");
}
