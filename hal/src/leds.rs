use volatile_register::RW;

bitflags::bitflags! {
    /// The ten red LEDs above the switches.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct LedMask: u16 {
        const LED0 = 1 << 0;
        const LED1 = 1 << 1;
        const LED2 = 1 << 2;
        const LED3 = 1 << 3;
        const LED4 = 1 << 4;
        const LED5 = 1 << 5;
        const LED6 = 1 << 6;
        const LED7 = 1 << 7;
        const LED8 = 1 << 8;
        const LED9 = 1 << 9;

        const ALL = 0b11_1111_1111;
        /// Every other LED, starting with LED0.
        const ALTERNATE = 0b01_0101_0101;
    }
}

#[repr(C)]
pub struct Leds {
    data: RW<u32>,
}

impl Leds {
    pub unsafe fn new() -> &'static mut Leds {
        unsafe { &mut *(0x0400_0000 as *mut Leds) }
    }

    #[inline(always)]
    pub fn set(&mut self, mask: LedMask) {
        unsafe { self.data.write(mask.bits() as u32) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_fit_in_ten_bits() {
        assert_eq!(LedMask::ALL.bits(), 0x3FF);
        assert_eq!(LedMask::ALTERNATE.bits(), 0x155);
        assert!(LedMask::ALTERNATE.contains(LedMask::LED0 | LedMask::LED8));
        assert!(!LedMask::ALTERNATE.contains(LedMask::LED9));
    }

    #[test]
    fn writes_the_mask_to_the_data_register() {
        let mut regs = [0u32; 1];
        let leds = unsafe { &mut *(regs.as_mut_ptr() as *mut Leds) };
        leds.set(LedMask::ALTERNATE);
        assert_eq!(regs[0], 0x155);
        let leds = unsafe { &mut *(regs.as_mut_ptr() as *mut Leds) };
        leds.set(LedMask::empty());
        assert_eq!(regs[0], 0);
    }
}
