//! Slide switches and the push button.
//!
//! Both sit behind parallel I/O ports. The switch port can raise an interrupt
//! whenever a switch toggles; the edge-capture register then has to be cleared
//! or the interrupt fires again straight away.

use core::mem::offset_of;
use core::ptr;

use bit_field::BitField;
use volatile_register::{RO, RW};

/// Number of slide switches.
pub const SWITCH_COUNT: usize = 10;

const SWITCHES_BASE: usize = 0x0400_0010;

#[repr(C)]
pub struct Switches {
    data: RO<u32>,
    _direction: RW<u32>,
    interrupt_mask: RW<u32>,
    edge_capture: RW<u32>,
}

impl Switches {
    pub unsafe fn new() -> &'static mut Switches {
        unsafe { &mut *(SWITCHES_BASE as *mut Switches) }
    }

    /// Current switch positions, switch 0 in bit 0.
    #[inline(always)]
    pub fn read(&self) -> u16 {
        self.data.read().get_bits(0..SWITCH_COUNT) as u16
    }

    /// Raise an interrupt on any edge of the switches in `mask`.
    pub fn enable_interrupts(&mut self, mask: u16) {
        let mask = (mask as u32).get_bits(0..SWITCH_COUNT);
        unsafe { self.interrupt_mask.write(mask) };
    }

    /// Clears the captured edges. Takes no `&self` so the interrupt handler
    /// can call it while the main loop holds the switches.
    ///
    /// # Safety
    ///
    /// Writes the switch PIO's edge-capture register.
    #[inline(always)]
    pub unsafe fn acknowledge_raw() {
        unsafe { clear_edges(SWITCHES_BASE as *mut Switches) };
    }
}

#[inline(always)]
unsafe fn clear_edges(block: *mut Switches) {
    unsafe {
        let reg = block.cast::<u8>().add(offset_of!(Switches, edge_capture));
        ptr::write_volatile(reg.cast::<u32>(), 0);
    }
}

#[repr(C)]
pub struct Button {
    data: RO<u32>,
}

impl Button {
    pub unsafe fn new() -> &'static mut Button {
        unsafe { &mut *(0x0400_00d0 as *mut Button) }
    }

    #[inline(always)]
    pub fn is_pressed(&self) -> bool {
        self.data.read().get_bit(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_reads_are_limited_to_ten_bits() {
        let mut regs = [0xFFFF_FE05u32, 0, 0, 0];
        let sw = unsafe { &mut *(regs.as_mut_ptr() as *mut Switches) };
        assert_eq!(sw.read(), 0b10_0000_0101);
    }

    #[test]
    fn interrupt_mask_is_limited_to_ten_switches() {
        let mut regs = [0u32, 0, 0, 0b11];
        let sw = unsafe { &mut *(regs.as_mut_ptr() as *mut Switches) };
        sw.enable_interrupts(0xFFFF);
        assert_eq!(regs[2], 0x3FF);
        assert_eq!(regs[3], 0b11);
    }

    #[test]
    fn raw_acknowledge_only_touches_edge_capture() {
        let mut regs = [7u32, 7, 7, 0b101];
        unsafe { clear_edges(regs.as_mut_ptr() as *mut Switches) };
        assert_eq!(regs, [7, 7, 7, 0]);
    }

    #[test]
    fn button_is_bit_zero() {
        let mut regs = [0b10u32];
        let btn = unsafe { &mut *(regs.as_mut_ptr() as *mut Button) };
        assert!(!btn.is_pressed());
        regs[0] = 0b11;
        let btn = unsafe { &mut *(regs.as_mut_ptr() as *mut Button) };
        assert!(btn.is_pressed());
    }
}
