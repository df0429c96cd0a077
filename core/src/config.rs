use crate::board::BOARD_SIZE;

/// Start-of-game parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Segments the snake starts with.
    pub initial_length: usize,
    /// Column of the starting tail. The snake lies on the middle row.
    pub start_col: usize,
    /// Seed for the food generator, applied once per power-up.
    pub seed: u32,
}

impl Config {
    pub const DEFAULT: Config = Config {
        initial_length: 3,
        start_col: 1,
        seed: 1_234_567_890,
    };

    pub const fn with_initial_length(mut self, initial_length: usize) -> Self {
        self.initial_length = initial_length;
        self
    }

    pub const fn with_start_col(mut self, start_col: usize) -> Self {
        self.start_col = start_col;
        self
    }

    pub const fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub const fn start_row(&self) -> usize {
        BOARD_SIZE / 2
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
