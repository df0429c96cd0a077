//! One game, from the first step to a win or a loss.

use log::info;

use crate::board::{BOARD_SIZE, Board, Cell, Position};
use crate::config::Config;
use crate::direction::{Heading, Turn};
use crate::snake::Snake;

/// How a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// `Active` moves to `Won` or `Lost` and never back. A new game needs a new
/// [`Session`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    Won,
    Lost,
}

/// Food items on the board when a game starts.
pub const STARTING_FOOD: [Position; 3] = [
    Position {
        row: (BOARD_SIZE / 2 + 1) as u8,
        col: (BOARD_SIZE - BOARD_SIZE / 4 - 1) as u8,
    },
    Position {
        row: (BOARD_SIZE / 2) as u8,
        col: (BOARD_SIZE - BOARD_SIZE / 4) as u8,
    },
    Position {
        row: (BOARD_SIZE / 2 - 1) as u8,
        col: (BOARD_SIZE - BOARD_SIZE / 4 - 1) as u8,
    },
];

pub struct Session {
    pub(crate) board: Board,
    pub(crate) snake: Snake,
    phase: Phase,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let snake = Snake::new(config.start_row(), config.start_col, config.initial_length);
        let mut board = Board::new();
        for seg in snake.segments() {
            board.mark(seg, Cell::Snake);
        }
        for food in STARTING_FOOD {
            board.mark(food, Cell::Food);
        }

        info!(
            "new game: head at ({}, {}), length {}",
            snake.head().row,
            snake.head().col,
            snake.len()
        );

        Self {
            board,
            snake,
            phase: Phase::Active,
        }
    }

    /// Builds a session from an arbitrary body and food layout.
    ///
    /// `body` runs tail to head. Returns `None` if it is empty, overlaps
    /// itself or the food, or isn't a chain of neighbouring cells.
    pub fn from_parts(body: &[Position], food: &[Position], heading: Heading) -> Option<Self> {
        let snake = Snake::from_body(body, heading)?;
        let mut board = Board::new();

        for (i, &seg) in body.iter().enumerate() {
            if board.cell(seg) != Cell::Empty {
                return None;
            }
            if i > 0 {
                let prev = body[i - 1];
                if prev.row.abs_diff(seg.row) + prev.col.abs_diff(seg.col) != 1 {
                    return None;
                }
            }
            board.mark(seg, Cell::Snake);
        }
        for &f in food {
            if board.cell(f) != Cell::Empty {
                return None;
            }
            board.mark(f, Cell::Food);
        }

        Some(Self {
            board,
            snake,
            phase: Phase::Active,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Points the snake for the next step. Only the movement engine touches
    /// the body, so the board stays in lock-step with it.
    pub fn set_heading(&mut self, heading: Heading) {
        self.snake.heading = heading;
    }

    pub fn set_turn(&mut self, turn: Turn) {
        self.snake.turn = turn;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline(always)]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Active => None,
            Phase::Won => Some(Outcome::Won),
            Phase::Lost => Some(Outcome::Lost),
        }
    }

    /// Ends the game. Only the first call has any effect; it returns `true`.
    pub(crate) fn conclude(&mut self, outcome: Outcome) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.phase = match outcome {
            Outcome::Won => Phase::Won,
            Outcome::Lost => Phase::Lost,
        };
        match outcome {
            Outcome::Won => info!("you won at length {}", self.snake.len()),
            Outcome::Lost => info!("you lost at length {}", self.snake.len()),
        }
        true
    }
}
