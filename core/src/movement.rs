//! The movement engine: one cell per logic step.
//!
//! The target cell is classified before the snake moves. A plain move drops
//! the tail, food keeps it (the snake grows by one) and a body segment ends the
//! game. The wall check runs after the classification, on its own, so a single
//! step can ask for a loss twice; [`Session::conclude`] only honours the first
//! request. A step that ends the game leaves the body where it was.

use log::{debug, info, trace};
use rand_core::RngCore;

use crate::board::Cell;
use crate::session::{Outcome, Session};
use crate::snake::CAPACITY;

/// Food on the board while there is room for it.
pub const FOOD_ITEMS: usize = 3;

impl Session {
    /// Advances the snake one cell along its heading.
    ///
    /// Returns the outcome if this step ended the game. Stepping a finished
    /// game does nothing.
    pub fn step<R: RngCore>(&mut self, rng: &mut R) -> Option<Outcome> {
        if !self.is_playing() {
            return None;
        }

        // `Heading` is closed over the four directions; see `Heading::from_index`
        let heading = self.snake.heading;
        let target = self.snake.head().step(heading);
        let mut ended = None;

        if let Some(target) = target {
            match self.board.cell(target) {
                Cell::Empty => {
                    if let Some(vacated) = self.snake.pop_tail() {
                        self.board.mark(vacated, Cell::Empty);
                    }
                }
                Cell::Snake => {
                    debug!("ran into own body at ({}, {})", target.row, target.col);
                    if self.conclude(Outcome::Lost) {
                        ended = Some(Outcome::Lost);
                    }
                }
                Cell::Food => {
                    let len = self.snake.len();
                    info!("ate food at ({}, {}), length {}", target.row, target.col, len + 1);
                    if len <= CAPACITY - FOOD_ITEMS {
                        if let Some(food) = self.board.spawn_food(rng) {
                            trace!("new food at ({}, {})", food.row, food.col);
                        }
                    }
                    // this bite fills the board
                    if len + 1 >= CAPACITY && self.conclude(Outcome::Won) {
                        ended = Some(Outcome::Won);
                    }
                }
            }
        }

        if target.is_none() {
            debug!("ran into the wall heading {:?}", heading);
            if self.conclude(Outcome::Lost) {
                ended = Some(Outcome::Lost);
            }
        }

        if let Some(target) = target
            && self.is_playing()
        {
            self.snake.push_head(target);
            self.board.mark(target, Cell::Snake);
            debug!(
                "head ({}, {}) heading {:?}, length {}",
                target.row,
                target.col,
                heading,
                self.snake.len()
            );
            trace!("board:\n{}", self.board);
        }

        ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, Position};
    use crate::config::Config;
    use crate::direction::{self, Heading, Turn};
    use crate::rng::Pcg32;
    use crate::session::Phase;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    /// The set of Snake cells on the board is exactly the active body.
    fn lock_step(s: &Session) {
        let mut marked: Vec<_> = s
            .board()
            .iter()
            .filter(|(_, c)| *c == Cell::Snake)
            .map(|(p, _)| p)
            .collect();
        let mut body: Vec<_> = s.snake().segments().collect();
        marked.sort_by_key(|p| (p.row, p.col));
        body.sort_by_key(|p| (p.row, p.col));
        assert_eq!(marked, body);
    }

    fn snapshot(s: &Session) -> (Vec<Position>, Vec<(Position, Cell)>) {
        (s.snake().segments().collect(), s.board().iter().collect())
    }

    #[test]
    fn first_step_moves_east_and_drops_the_tail() {
        let mut rng = Pcg32::new(1);
        let mut s = Session::new(&Config::DEFAULT);
        assert_eq!(s.board().cell(pos(8, 4)), Cell::Empty);

        assert_eq!(s.step(&mut rng), None);
        assert_eq!(s.snake().head(), pos(8, 4));
        assert_eq!(s.board().cell(pos(8, 1)), Cell::Empty);
        assert_eq!(s.snake().tail(), pos(8, 2));
        assert_eq!(s.snake().len(), 3);
        assert_eq!(s.board().count(Cell::Food), 3);
        lock_step(&s);
    }

    #[test]
    fn single_segment_snake_keeps_board_and_body_in_step() {
        let mut rng = Pcg32::new(1);
        let mut s = Session::new(&Config::DEFAULT.with_initial_length(1));
        assert_eq!(s.snake().head(), pos(8, 1));

        assert_eq!(s.step(&mut rng), None);
        assert_eq!(s.snake().len(), 1);
        assert_eq!(s.snake().head(), pos(8, 2));
        assert_eq!(s.board().cell(pos(8, 1)), Cell::Empty);
        lock_step(&s);
    }

    #[test]
    fn hitting_the_wall_loses_and_freezes_the_state() {
        let mut rng = Pcg32::new(1);
        let last = BOARD_SIZE - 1;
        let mut s = Session::from_parts(&[pos(0, last - 1), pos(0, last)], &[], Heading::East)
            .unwrap();
        let before = snapshot(&s);

        assert_eq!(s.step(&mut rng), Some(Outcome::Lost));
        assert_eq!(s.phase(), Phase::Lost);
        assert_eq!(snapshot(&s), before);
        assert_eq!(s.snake().head(), pos(0, last));

        // later steps are ignored
        assert_eq!(s.step(&mut rng), None);
        assert_eq!(snapshot(&s), before);
    }

    #[test]
    fn biting_the_body_loses_once_and_freezes_the_state() {
        let mut rng = Pcg32::new(1);
        // a hook whose head points back into its own body
        let body = [pos(5, 5), pos(5, 6), pos(5, 7), pos(4, 7), pos(4, 6)];
        let mut s = Session::from_parts(&body, &[], Heading::South).unwrap();
        let before = snapshot(&s);

        assert_eq!(s.step(&mut rng), Some(Outcome::Lost));
        assert_eq!(s.phase(), Phase::Lost);
        assert_eq!(snapshot(&s), before);
        lock_step(&s);
    }

    #[test]
    fn a_second_loss_request_in_the_same_step_is_ignored() {
        let mut s = Session::new(&Config::DEFAULT);
        assert!(s.conclude(Outcome::Lost));
        let before = snapshot(&s);
        assert!(!s.conclude(Outcome::Lost));
        assert_eq!(s.phase(), Phase::Lost);
        assert_eq!(snapshot(&s), before);
    }

    #[test]
    fn eating_grows_and_restores_the_food_count() {
        let mut rng = Pcg32::new(1_234_567_890);
        let mut s = Session::new(&Config::DEFAULT);
        // straight east into (8, 12)
        for _ in 0..8 {
            assert_eq!(s.step(&mut rng), None);
            assert_eq!(s.snake().len(), 3);
        }
        assert_eq!(s.snake().head(), pos(8, 11));
        assert_eq!(s.board().cell(pos(8, 12)), Cell::Food);

        assert_eq!(s.step(&mut rng), None);
        assert_eq!(s.snake().head(), pos(8, 12));
        assert_eq!(s.snake().len(), 4);
        assert_eq!(s.snake().tail(), pos(8, 9));
        assert_eq!(s.board().count(Cell::Food), FOOD_ITEMS);
        lock_step(&s);
    }

    #[test]
    fn filling_the_board_wins() {
        let mut rng = Pcg32::new(3);
        // boustrophedon path over every cell but the last one
        let mut path = Vec::with_capacity(CAPACITY);
        for row in 0..BOARD_SIZE {
            for i in 0..BOARD_SIZE {
                let col = if row % 2 == 0 { i } else { BOARD_SIZE - 1 - i };
                path.push(pos(row, col));
            }
        }
        let last = path.pop().unwrap();
        assert_eq!(last, pos(BOARD_SIZE - 1, 0));

        let mut s = Session::from_parts(&path, &[last], Heading::West).unwrap();
        assert_eq!(s.snake().len(), CAPACITY - 1);

        assert_eq!(s.step(&mut rng), Some(Outcome::Won));
        assert_eq!(s.phase(), Phase::Won);
        // frozen on the winning step
        assert_eq!(s.snake().len(), CAPACITY - 1);
        assert_eq!(s.board().cell(last), Cell::Food);
        lock_step(&s);
    }

    #[test]
    fn eating_short_of_capacity_does_not_win() {
        let mut rng = Pcg32::new(3);
        let mut path = Vec::with_capacity(CAPACITY);
        for row in 0..BOARD_SIZE {
            for i in 0..BOARD_SIZE {
                let col = if row % 2 == 0 { i } else { BOARD_SIZE - 1 - i };
                path.push(pos(row, col));
            }
        }
        // two cells short: the head eats one, one stays free
        let spare = path.pop().unwrap();
        let food = path.pop().unwrap();
        let mut s = Session::from_parts(&path, &[food], Heading::West).unwrap();
        assert_eq!(s.snake().len(), CAPACITY - 2);

        assert_eq!(s.step(&mut rng), None);
        assert!(s.is_playing());
        assert_eq!(s.snake().len(), CAPACITY - 1);
        // too crowded to respawn
        assert_eq!(s.board().count(Cell::Food), 0);
        assert_eq!(s.board().cell(spare), Cell::Empty);
        lock_step(&s);
    }

    #[test]
    fn board_and_body_stay_in_lock_step_over_a_long_game() {
        let mut rng = Pcg32::new(42);
        let mut s = Session::new(&Config::DEFAULT);
        // spiral-ish pattern of turns driven by the arbiter
        let turns = [
            Turn::STRAIGHT,
            Turn::STRAIGHT,
            Turn { right: true, left: false },
            Turn::STRAIGHT,
            Turn { right: true, left: true },
            Turn { right: false, left: true },
        ];
        let mut steps = 0;
        while s.is_playing() && steps < 500 {
            let turn = turns[steps % turns.len()];
            s.set_heading(direction::resolve(turn, s.snake().heading));
            s.step(&mut rng);
            lock_step(&s);
            let food = s.board().count(Cell::Food);
            assert!(food <= FOOD_ITEMS);
            steps += 1;
        }
    }
}
