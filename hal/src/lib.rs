//! # dtekv
//!
//! Register-level access to the DTEK-V board: LEDs, slide switches, the push
//! button, the interval timer, six seven-segment digits, the JTAG UART and the
//! 320×240 VGA framebuffer.
//!
//! Every peripheral is a `#[repr(C)]` block of [`volatile_register`] cells laid
//! over its MMIO address. Get them all at once with [`Peripherals::init`].
//!
//! | Peripheral          | Base           |
//! |---------------------|----------------|
//! | LEDs                | `0x0400_0000`  |
//! | Slide switches      | `0x0400_0010`  |
//! | Interval timer      | `0x0400_0020`  |
//! | JTAG UART           | `0x0400_0040`  |
//! | Seven-segment digits| `0x0400_0050`  |
//! | Push button         | `0x0400_00d0`  |
//! | VGA pixel buffer    | `0x0800_0000`  |

#![cfg_attr(not(test), no_std)]

pub mod display;
pub mod input;
pub mod interrupt;
pub mod leds;
pub mod peripherals;
pub mod timer;
pub mod uart;
pub mod vga;

pub use peripherals::Peripherals;

/// System clock feeding the interval timer.
pub const CLOCK_HZ: u32 = 30_000_000;
