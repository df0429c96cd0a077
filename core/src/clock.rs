//! Tick scheduling between interrupt context and the main loop.
//!
//! Two producers run in interrupt context: the periodic timer adds ticks to an
//! accumulator, and the switch interrupt sets an "input changed" latch. The
//! main loop is the only consumer. It polls two wake conditions,
//! [`Clock::step_due`] and [`Clock::input_changed`], and consumes each inside a
//! critical section so that an interrupt landing between the check and the
//! reset can't be lost or half-applied.
//!
//! The board's core has no atomic read-modify-write instructions, so every
//! access goes through [`critical_section`]; the firmware provides the
//! implementation by masking interrupts.
//!
//! ```ignore
//! static CLOCK: Clock = Clock::new(Timing::DEFAULT);
//!
//! // timer interrupt
//! Timer::acknowledge_raw();
//! CLOCK.on_timer();
//!
//! // main loop
//! if CLOCK.take_step() {
//!     session.step(&mut rng);
//! }
//! ```

use core::cell::Cell;

use critical_section::Mutex;
use log::trace;

/// How ticks turn into logic steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Accumulated ticks that release one logic step.
    pub step_threshold: u8,
    /// Ticks added per timer interrupt.
    pub increment: u8,
    /// Ticks added per timer interrupt while sped up.
    pub boosted_increment: u8,
}

impl Timing {
    /// 100 ms timer: a step every 500 ms, or every 300 ms sped up.
    pub const DEFAULT: Timing = Timing {
        step_threshold: 10,
        increment: 2,
        boosted_increment: 4,
    };

    pub const fn with_step_threshold(mut self, step_threshold: u8) -> Self {
        self.step_threshold = step_threshold;
        self
    }

    pub const fn with_increment(mut self, increment: u8) -> Self {
        self.increment = increment;
        self
    }

    pub const fn with_boosted_increment(mut self, boosted_increment: u8) -> Self {
        self.boosted_increment = boosted_increment;
        self
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// State shared between the interrupt handlers and the main loop.
pub struct Clock {
    ticks: Mutex<Cell<u8>>,
    boosted: Mutex<Cell<bool>>,
    input_changed: Mutex<Cell<bool>>,
    timing: Timing,
}

impl Clock {
    pub const fn new(timing: Timing) -> Self {
        Self {
            ticks: Mutex::new(Cell::new(0)),
            boosted: Mutex::new(Cell::new(false)),
            input_changed: Mutex::new(Cell::new(false)),
            timing,
        }
    }

    /// Timer interrupt producer. The caller has already acknowledged the
    /// timer's pending condition.
    #[inline]
    pub fn on_timer(&self) {
        critical_section::with(|cs| {
            let add = if self.boosted.borrow(cs).get() {
                self.timing.boosted_increment
            } else {
                self.timing.increment
            };
            let ticks = self.ticks.borrow(cs);
            // saturate rather than wrap if the main loop stalls
            ticks.set(ticks.get().saturating_add(add));
        });
    }

    /// Switch interrupt producer. The caller has already acknowledged the
    /// edge-capture condition.
    #[inline]
    pub fn on_input_change(&self) {
        critical_section::with(|cs| self.input_changed.borrow(cs).set(true));
    }

    /// Wake condition: enough ticks for a logic step.
    #[inline]
    pub fn step_due(&self) -> bool {
        critical_section::with(|cs| self.ticks.borrow(cs).get() >= self.timing.step_threshold)
    }

    /// Wake condition: the switches moved since the latch was last consumed.
    #[inline]
    pub fn input_changed(&self) -> bool {
        critical_section::with(|cs| self.input_changed.borrow(cs).get())
    }

    /// Consumes a due step, resetting the accumulator in the same critical
    /// section as the threshold check.
    pub fn take_step(&self) -> bool {
        critical_section::with(|cs| {
            let ticks = self.ticks.borrow(cs);
            if ticks.get() >= self.timing.step_threshold {
                ticks.set(0);
                true
            } else {
                false
            }
        })
    }

    /// Consumes the input latch. Returns `true` at most once per interrupt
    /// burst.
    pub fn take_input_change(&self) -> bool {
        let changed = critical_section::with(|cs| self.input_changed.borrow(cs).replace(false));
        if changed {
            trace!("input latch consumed");
        }
        changed
    }

    pub fn set_boosted(&self, boosted: bool) {
        critical_section::with(|cs| self.boosted.borrow(cs).set(boosted));
    }

    /// Current accumulator value.
    pub fn ticks(&self) -> u8 {
        critical_section::with(|cs| self.ticks.borrow(cs).get())
    }
}
