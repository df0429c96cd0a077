//! Interval timer.
//!
//! A 32-bit down-counter whose period is split over two 16-bit registers.
//! With [`TimerControl::ITO`] set it raises an interrupt each time it reaches
//! zero and keeps the time-out bit of the status register set until that
//! register is written.

use core::mem::offset_of;
use core::ptr;

use bit_field::BitField;
use volatile_register::RW;

use crate::CLOCK_HZ;

bitflags::bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct TimerControl: u32 {
        /// Interrupt on time-out.
        const ITO   = 0b0001;
        /// Reload and keep counting after a time-out.
        const CONT  = 0b0010;
        const START = 0b0100;
        const STOP  = 0b1000;
    }
}

/// Counter period for a time-out every `ms` milliseconds.
pub const fn period_for_ms(ms: u32) -> u32 {
    CLOCK_HZ / 1000 * ms - 1
}

/// Game tick period: 100 ms.
pub const TIMER_PERIOD_CYCLES: u32 = period_for_ms(100);

const TIMER_BASE: usize = 0x0400_0020;

#[repr(C)]
pub struct Timer {
    status: RW<u32>,
    control: RW<u32>,
    period_low: RW<u32>,
    period_high: RW<u32>,
    _snap_low: RW<u32>,
    _snap_high: RW<u32>,
}

impl Timer {
    pub unsafe fn new() -> &'static mut Timer {
        unsafe { &mut *(TIMER_BASE as *mut Timer) }
    }

    /// Starts a free-running timer that interrupts every `period + 1` cycles.
    pub fn start_periodic(&mut self, period: u32) {
        unsafe {
            self.control.write(TimerControl::STOP.bits());
            self.period_low.write(period.get_bits(0..16));
            self.period_high.write(period.get_bits(16..32));
            self.control
                .write((TimerControl::ITO | TimerControl::CONT | TimerControl::START).bits());
        }
    }

    /// Clears the time-out. Takes no `&mut self` so the interrupt handler can
    /// call it without forming a reference to the block.
    ///
    /// # Safety
    ///
    /// Writes the interval timer's status register.
    #[inline(always)]
    pub unsafe fn acknowledge_raw() {
        unsafe { clear_time_out(TIMER_BASE as *mut Timer) };
    }

    pub fn period(&self) -> u32 {
        let mut period = 0u32;
        period.set_bits(0..16, self.period_low.read().get_bits(0..16));
        period.set_bits(16..32, self.period_high.read().get_bits(0..16));
        period
    }
}

#[inline(always)]
unsafe fn clear_time_out(block: *mut Timer) {
    unsafe {
        let reg = block.cast::<u8>().add(offset_of!(Timer, status));
        ptr::write_volatile(reg.cast::<u32>(), 0);
    }
}
