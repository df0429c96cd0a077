//! # snake-core
//!
//! The game-state engine of an interrupt-driven Snake. Everything in here is
//! `no_std` and allocation free; the hardware lives behind the [`Frontend`] and
//! [`Inputs`] traits and behind the interrupt producers on [`Clock`].
//!
//! ```text
//!  timer irq ──► Clock::on_timer ──┐
//!  switch irq ─► Clock::on_input_change
//!                                  ▼
//!  Game::poll ── take_step ─► direction::resolve ─► Session::step ─► render
//! ```

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod clock;
pub mod config;
pub mod direction;
pub mod game;
pub mod input;
pub mod movement;
pub mod render;
pub mod rng;
pub mod session;
pub mod snake;

pub use board::{BOARD_SIZE, Board, Cell, Position};
pub use clock::{Clock, Timing};
pub use config::Config;
pub use direction::{Heading, Turn};
pub use game::Game;
pub use input::{Controls, Switches};
pub use render::{Frontend, Inputs, Paint, Signal};
pub use rng::Pcg32;
pub use session::{Outcome, Phase, Session};
pub use snake::{CAPACITY, Snake};
