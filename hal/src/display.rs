//! The six seven-segment digits.
//!
//! Each digit has its own register, 16 bytes apart. Segments are active-low: a
//! cleared bit lights the segment.

use volatile_register::RW;

bitflags::bitflags! {
    /// Lit segments, before inversion.
    ///
    /// ```text
    ///  -A-
    /// F   B
    ///  -G-
    /// E   C
    ///  -D-  .DP
    /// ```
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Segments: u8 {
        const A  = 1 << 0;
        const B  = 1 << 1;
        const C  = 1 << 2;
        const D  = 1 << 3;
        const E  = 1 << 4;
        const F  = 1 << 5;
        const G  = 1 << 6;
        const DP = 1 << 7;
    }
}

pub const DIGIT_COUNT: usize = 6;

/// Register value with every segment dark.
pub const BLANK: u8 = 0xFF;

const GLYPHS: [Segments; 10] = [
    Segments::from_bits_retain(0b011_1111), // ABCDEF
    Segments::from_bits_retain(0b000_0110), // BC
    Segments::from_bits_retain(0b101_1011), // ABDEG
    Segments::from_bits_retain(0b100_1111), // ABCDG
    Segments::from_bits_retain(0b110_0110), // BCFG
    Segments::from_bits_retain(0b110_1101), // ACDFG
    Segments::from_bits_retain(0b111_1101), // ACDEFG
    Segments::from_bits_retain(0b000_0111), // ABC
    Segments::from_bits_retain(0b111_1111), // ABCDEFG
    Segments::from_bits_retain(0b110_0111), // ABCFG
];

/// Active-low register value for a decimal digit, `None` above 9.
pub const fn encode(digit: u8) -> Option<u8> {
    if digit < 10 {
        Some(!GLYPHS[digit as usize].bits())
    } else {
        None
    }
}

#[repr(C)]
struct Digit {
    value: RW<u32>,
    _reserved: [u32; 3],
}

#[repr(C)]
pub struct Displays {
    digits: [Digit; DIGIT_COUNT],
}

impl Displays {
    pub unsafe fn new() -> &'static mut Displays {
        unsafe { &mut *(0x0400_0050 as *mut Displays) }
    }

    /// Shows `digit` on display `index` (0 is the rightmost). Values above 9
    /// blank the display; indices past the last display are ignored.
    pub fn show(&mut self, index: usize, digit: u8) {
        if let Some(slot) = self.digits.get_mut(index) {
            let code = encode(digit).unwrap_or(BLANK);
            unsafe { slot.value.write(code as u32) };
        }
    }

    pub fn blank(&mut self) {
        for slot in &mut self.digits {
            unsafe { slot.value.write(BLANK as u32) };
        }
    }
}
