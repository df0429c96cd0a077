#![no_std]
#![no_main]

use dtekv::Peripherals;
use dtekv::timer::TIMER_PERIOD_CYCLES;
use log::info;
use snake_core::{Clock, Config, Game, Pcg32, Timing};

use crate::frontend::Hardware;

mod boot;
mod frontend;
mod logger;

/// The only state shared with the interrupt handler.
pub static CLOCK: Clock = Clock::new(Timing::DEFAULT);

/// Any switch toggle raises an interrupt.
const SWITCH_IRQ_MASK: u16 = 0x3FF;

#[unsafe(no_mangle)]
extern "C" fn main() -> ! {
    let p = unsafe { Peripherals::init() };
    logger::init(p.uart);

    let config = Config::DEFAULT;
    let rng = Pcg32::new(config.seed);

    p.timer.start_periodic(TIMER_PERIOD_CYCLES);
    p.switches.enable_interrupts(SWITCH_IRQ_MASK);
    info!("timer period {} cycles, seed {}", p.timer.period(), config.seed);
    unsafe { boot::enable_interrupts() };

    let hw = Hardware::new(p.leds, p.displays, p.vga, p.switches, p.button);
    Game::new(&CLOCK, hw, rng, config).run()
}
