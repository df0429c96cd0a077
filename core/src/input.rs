//! Switch decoding.

use crate::direction::Turn;

bitflags::bitflags! {
    /// Meaning of the slide switches. Higher switches are ignored.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Switches: u16 {
        const TURN_RIGHT = 0b0000_0001;
        const TURN_LEFT  = 0b0000_0010;
        const SPEED_UP   = 0b0000_0100;
    }
}

/// What the player is asking for right now.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub turn: Turn,
    pub speed_up: bool,
}

impl Controls {
    pub fn from_switches(raw: u16) -> Self {
        let sw = Switches::from_bits_truncate(raw);
        Self {
            turn: Turn {
                right: sw.contains(Switches::TURN_RIGHT),
                left: sw.contains(Switches::TURN_LEFT),
            },
            speed_up: sw.contains(Switches::SPEED_UP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_low_three_switches() {
        assert_eq!(Controls::from_switches(0), Controls::default());

        let c = Controls::from_switches(0b101);
        assert!(c.turn.right);
        assert!(!c.turn.left);
        assert!(c.speed_up);

        let c = Controls::from_switches(0b011);
        assert!(c.turn.right && c.turn.left);
        assert!(!c.speed_up);
    }

    #[test]
    fn ignores_unassigned_switches() {
        assert_eq!(Controls::from_switches(0b11_1111_1000), Controls::default());
    }
}
