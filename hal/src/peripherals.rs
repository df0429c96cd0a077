use crate::display::Displays;
use crate::input::{Button, Switches};
use crate::leds::Leds;
use crate::timer::Timer;
use crate::uart::JtagUart;
use crate::vga::Framebuffer;

/// Every peripheral on the board.
pub struct Peripherals {
    pub leds: &'static mut Leds,
    pub switches: &'static mut Switches,
    pub button: &'static mut Button,
    pub timer: &'static mut Timer,
    pub displays: &'static mut Displays,
    pub uart: &'static mut JtagUart,
    pub vga: Framebuffer<'static>,
}

impl Peripherals {
    /// Hands out the register blocks.
    ///
    /// # Safety
    ///
    /// Call this once. Every reference it returns aliases fixed MMIO, so a
    /// second set would hand out overlapping `&mut`s.
    pub unsafe fn init() -> Peripherals {
        unsafe {
            Peripherals {
                leds: Leds::new(),
                switches: Switches::new(),
                button: Button::new(),
                timer: Timer::new(),
                displays: Displays::new(),
                uart: JtagUart::new(),
                vga: Framebuffer::vga(),
            }
        }
    }
}
