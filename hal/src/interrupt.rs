use core::fmt;

use bit_field::BitField;

/// A decoded `mcause`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trap {
    /// Asynchronous: the cause number, see [`Cause`].
    Interrupt(u32),
    /// Synchronous: illegal instruction, access fault, `ecall` and the like.
    Exception(u32),
}

impl Trap {
    #[inline(always)]
    pub fn from_mcause(mcause: u32) -> Trap {
        let code = mcause.get_bits(0..31);
        if mcause.get_bit(31) {
            Trap::Interrupt(code)
        } else {
            Trap::Exception(code)
        }
    }
}

/// Interrupt sources, by the cause number the trap handler receives.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cause {
    Timer = 16,
    Switches = 17,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownCause(pub u32);

impl fmt::Display for UnknownCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected interrupt cause {}", self.0)
    }
}

impl TryFrom<u32> for Cause {
    type Error = UnknownCause;

    fn try_from(cause: u32) -> Result<Self, Self::Error> {
        match cause {
            16 => Ok(Cause::Timer),
            17 => Ok(Cause::Switches),
            other => Err(UnknownCause(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_causes() {
        assert_eq!(Cause::try_from(16), Ok(Cause::Timer));
        assert_eq!(Cause::try_from(17), Ok(Cause::Switches));
        assert_eq!(Cause::Switches as u32, 17);
    }

    #[test]
    fn mcause_top_bit_splits_interrupts_from_exceptions() {
        assert_eq!(Trap::from_mcause(0x8000_0010), Trap::Interrupt(16));
        assert_eq!(Trap::from_mcause(0x8000_0011), Trap::Interrupt(17));
        // illegal instruction
        assert_eq!(Trap::from_mcause(2), Trap::Exception(2));
        assert_eq!(Trap::from_mcause(11), Trap::Exception(11));
    }

    #[test]
    fn unknown_causes_keep_their_number() {
        let err = Cause::try_from(18).unwrap_err();
        assert_eq!(err, UnknownCause(18));
        assert_eq!(err.to_string(), "unexpected interrupt cause 18");
    }
}
