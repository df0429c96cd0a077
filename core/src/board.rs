//! Grid occupancy.
//!
//! The board is the lookup side of the game state: the movement engine asks it
//! what sits in a cell *before* moving there. It is kept in lock-step with the
//! [`Snake`](crate::snake::Snake) ring buffer by [`Session`](crate::session::Session).

use core::fmt::{Display, Formatter};

use log::warn;
use rand::Rng;
use rand_core::RngCore;

use crate::direction::Heading;

/// Cells per side.
pub const BOARD_SIZE: usize = 16;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Snake,
    Food,
}

impl Cell {
    #[inline(always)]
    const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Snake => 1,
            Cell::Food => 2,
        }
    }
}

/// A cell coordinate, always on the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Returns `None` if either coordinate is off the board.
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The neighbouring cell one step towards `heading`, or `None` when that
    /// step crosses a wall.
    pub fn step(self, heading: Heading) -> Option<Self> {
        let (dr, dc) = heading.delta();
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize)
    }
}

pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline(always)]
    pub fn mark(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    #[inline(always)]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|c| **c == cell).count()
    }

    /// Every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(col, cell)| {
                (
                    Position {
                        row: row as u8,
                        col: col as u8,
                    },
                    *cell,
                )
            })
        })
    }

    /// Drops one food item on a uniformly chosen empty cell.
    ///
    /// Candidates are drawn until an empty one turns up, so the board must have
    /// at least one; a full board returns `None` instead of spinning forever.
    pub fn spawn_food<R: RngCore>(&mut self, rng: &mut R) -> Option<Position> {
        if self.count(Cell::Empty) == 0 {
            warn!("no empty cell left for food");
            return None;
        }

        loop {
            let row = rng.gen_range(0..BOARD_SIZE);
            let col = rng.gen_range(0..BOARD_SIZE);
            let pos = Position {
                row: row as u8,
                col: col as u8,
            };
            if self.cell(pos) == Cell::Empty {
                self.mark(pos, Cell::Food);
                return Some(pos);
            }
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for row in &self.cells {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.code())?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
