use bit_field::BitField;
use volatile_register::RW;

/// JTAG UART, the board's debug console.
#[repr(C)]
pub struct JtagUart {
    data: RW<u32>,
    control: RW<u32>,
}

impl JtagUart {
    pub unsafe fn new() -> &'static mut JtagUart {
        unsafe { &mut *(0x0400_0040 as *mut JtagUart) }
    }

    /// Free slots in the transmit FIFO.
    #[inline(always)]
    pub fn write_space(&self) -> u32 {
        self.control.read().get_bits(16..32)
    }

    /// Blocks until the FIFO has room, then queues `byte`.
    pub fn write_byte(&mut self, byte: u8) {
        while self.write_space() == 0 {
            core::hint::spin_loop();
        }
        unsafe { self.data.write(byte as u32) };
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }
}

impl core::fmt::Write for JtagUart {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
