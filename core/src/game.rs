//! The main loop.
//!
//! Nothing here blocks: the loop spins on the two wake conditions of the
//! [`Clock`] and does all of its work on the main-loop side of the interrupt
//! boundary.

use log::info;
use rand_core::RngCore;

use crate::clock::Clock;
use crate::config::Config;
use crate::direction;
use crate::input::Controls;
use crate::render::{self, Frontend, Inputs, Signal};
use crate::session::{Outcome, Session};

pub struct Game<'c, H, R> {
    clock: &'c Clock,
    hw: H,
    rng: R,
    config: Config,
}

impl<'c, H, R> Game<'c, H, R>
where
    H: Frontend + Inputs,
    R: RngCore,
{
    pub fn new(clock: &'c Clock, hw: H, rng: R, config: Config) -> Self {
        Self {
            clock,
            hw,
            rng,
            config,
        }
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    /// Samples the switches into the snake's turn intents and the clock's
    /// speed-up flag.
    fn apply_controls(&mut self, session: &mut Session) {
        let controls = Controls::from_switches(self.hw.read_switches());
        session.set_turn(controls.turn);
        self.clock.set_boosted(controls.speed_up);
    }

    /// Sets up a fresh game and draws it.
    pub fn start(&mut self) -> Session {
        self.hw.signal(Signal::Idle);
        let mut session = Session::new(&self.config);
        self.apply_controls(&mut session);
        render::show_length(session.snake().len(), &mut self.hw);
        render::render_board(session.board(), session.snake(), &mut self.hw);
        session
    }

    /// One pass of the main loop.
    ///
    /// Picks up new switch positions if the input latch was set, then runs a
    /// logic step if one is due. Returns the outcome when that step ended the
    /// game.
    pub fn poll(&mut self, session: &mut Session) -> Option<Outcome> {
        if self.clock.take_input_change() {
            self.apply_controls(session);
        }

        if !self.clock.take_step() {
            return None;
        }

        let snake = session.snake();
        let heading = direction::resolve(snake.turn, snake.heading);
        session.set_heading(heading);

        let ended = session.step(&mut self.rng);
        render::show_length(session.snake().len(), &mut self.hw);
        render::render_board(session.board(), session.snake(), &mut self.hw);
        if let Some(outcome) = ended {
            self.hw.signal(outcome.into());
        }
        ended
    }

    /// Plays one game to the end.
    pub fn play(&mut self) -> Outcome {
        let mut session = self.start();
        loop {
            if let Some(outcome) = self.poll(&mut session) {
                return outcome;
            }
            core::hint::spin_loop();
        }
    }

    /// Starts another game if the button is held, and plays it to the end.
    pub fn poll_restart(&mut self) -> Option<Outcome> {
        if !self.hw.read_button() {
            return None;
        }
        let outcome = self.play();
        info!("press the button to play again");
        Some(outcome)
    }

    /// Plays forever, starting a new game on each button press.
    pub fn run(&mut self) -> ! {
        self.play();
        info!("press the button to play again");
        loop {
            self.poll_restart();
            core::hint::spin_loop();
        }
    }
}
