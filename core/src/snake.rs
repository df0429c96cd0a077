//! The snake's body as a fixed-capacity ring buffer.
//!
//! Capacity is the whole board, which is also the longest a snake can get, so
//! growing never fails and nothing is ever allocated. Segments are stored
//! oldest (`tail`) to newest (`head`), wrapping modulo [`CAPACITY`].

use crate::board::{BOARD_SIZE, Position};
use crate::direction::{Heading, Turn};

pub const CAPACITY: usize = BOARD_SIZE * BOARD_SIZE;

pub struct Snake {
    segments: [Position; CAPACITY],
    head: usize,
    tail: usize,
    len: usize,
    pub heading: Heading,
    pub turn: Turn,
}

impl Snake {
    /// A straight snake of `len` segments on `row`, tail at `start_col` and
    /// head at `start_col + len - 1`, heading East.
    ///
    /// # Panics
    ///
    /// If the snake would not fit on the row.
    pub fn new(row: usize, start_col: usize, len: usize) -> Self {
        assert!(len >= 1 && start_col + len <= BOARD_SIZE && row < BOARD_SIZE);

        let mut snake = Self::empty(Heading::East);
        for col in start_col..start_col + len {
            snake.push_head(Position {
                row: row as u8,
                col: col as u8,
            });
        }
        snake
    }

    /// A snake laid along `body`, tail first. `None` if `body` is empty or
    /// longer than the board.
    pub fn from_body(body: &[Position], heading: Heading) -> Option<Self> {
        if body.is_empty() || body.len() > CAPACITY {
            return None;
        }
        let mut snake = Self::empty(heading);
        for &seg in body {
            snake.push_head(seg);
        }
        Some(snake)
    }

    // head sits one slot behind tail so the first push lands on slot 0
    const fn empty(heading: Heading) -> Self {
        Self {
            segments: [Position { row: 0, col: 0 }; CAPACITY],
            head: CAPACITY - 1,
            tail: 0,
            len: 0,
            heading,
            turn: Turn::STRAIGHT,
        }
    }

    /// Appends a new head. The caller marks the board.
    ///
    /// Returns `false` and leaves the body alone if the buffer is full, so a
    /// push can never overwrite the tail.
    #[inline]
    pub(crate) fn push_head(&mut self, pos: Position) -> bool {
        if self.len == CAPACITY {
            return false;
        }
        self.head = (self.head + 1) % CAPACITY;
        self.segments[self.head] = pos;
        self.len += 1;
        true
    }

    /// Drops the oldest segment and returns where it was. The caller clears
    /// that cell on the board.
    ///
    /// A one-segment snake may be emptied for the moment between dropping its
    /// tail and pushing its new head.
    #[inline]
    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        if self.len == 0 {
            return None;
        }
        let vacated = self.segments[self.tail];
        self.tail = (self.tail + 1) % CAPACITY;
        self.len -= 1;
        Some(vacated)
    }

    #[inline(always)]
    pub fn head(&self) -> Position {
        self.segments[self.head]
    }

    #[inline(always)]
    pub fn tail(&self) -> Position {
        self.segments[self.tail]
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len).map(move |i| self.segments[(self.tail + i) % CAPACITY])
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.segments().any(|p| p == pos)
    }
}
