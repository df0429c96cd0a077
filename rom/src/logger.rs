use core::fmt::Write;

use dtekv::uart::JtagUart;
use log::{LevelFilter, Metadata, Record};

#[cfg(feature = "verbose")]
const LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(feature = "verbose"))]
const LEVEL: LevelFilter = LevelFilter::Info;

/// Set once by [`init`], before interrupts are enabled. Only the main loop
/// logs.
static mut UART: Option<&'static mut JtagUart> = None;

struct UartLogger;

static LOGGER: UartLogger = UartLogger;

impl log::Log for UartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(uart) = unsafe { (*&raw mut UART).as_deref_mut() } {
            let _ = writeln!(uart, "[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Routes the `log` macros to the JTAG UART.
///
/// The core has no compare-and-swap, so this uses the racy setter; it runs
/// once, before interrupts are enabled.
pub fn init(uart: &'static mut JtagUart) {
    unsafe {
        UART = Some(uart);
        if log::set_logger_racy(&LOGGER).is_ok() {
            log::set_max_level_racy(LEVEL);
        }
    }
}
