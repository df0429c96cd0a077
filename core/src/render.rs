//! The bridge from game state to the board's outputs.
//!
//! The engine never touches a pixel or a register. After each logic step the
//! main loop hands the board and snake to [`render_board`] and the length to
//! [`show_length`], which talk to whatever implements [`Frontend`].

use crate::board::{Board, Cell, Position};
use crate::session::Outcome;
use crate::snake::Snake;

/// Number of decimal digits the length is spread over.
pub const DIGITS: u8 = 6;

/// What a cell should look like. The frontend picks the actual colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Paint {
    Empty,
    Head,
    Body,
    Food,
}

/// End-of-game indication, e.g. an LED pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    Idle,
    Won,
    Lost,
}

impl From<Outcome> for Signal {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Signal::Won,
            Outcome::Lost => Signal::Lost,
        }
    }
}

/// Output collaborators.
pub trait Frontend {
    /// Paints one board cell.
    fn draw_cell(&mut self, pos: Position, paint: Paint);

    /// Shows `value` (0–9) on digit `index`, 0 being the units.
    fn set_digit(&mut self, index: u8, value: u8);

    fn signal(&mut self, signal: Signal);
}

/// Raw input sampling.
pub trait Inputs {
    fn read_switches(&self) -> u16;

    fn read_button(&self) -> bool;
}

/// Paints every cell, the head in its own colour.
pub fn render_board<F: Frontend + ?Sized>(board: &Board, snake: &Snake, frontend: &mut F) {
    let head = snake.head();
    for (pos, cell) in board.iter() {
        let paint = match cell {
            Cell::Empty => Paint::Empty,
            Cell::Food => Paint::Food,
            Cell::Snake if pos == head => Paint::Head,
            Cell::Snake => Paint::Body,
        };
        frontend.draw_cell(pos, paint);
    }
}

/// Spreads `len` over the [`DIGITS`] displays, units first.
pub fn show_length<F: Frontend + ?Sized>(len: usize, frontend: &mut F) {
    let mut rest = len;
    for index in 0..DIGITS {
        frontend.set_digit(index, (rest % 10) as u8);
        rest /= 10;
    }
}
