//! Direction arbitration.
//!
//! The player never picks a heading directly. Two switches hold a "turn right"
//! and a "turn left" intent, and every logic step the arbiter folds those
//! intents into the current heading.

/// Compass heading, ordered clockwise.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Heading {
    North = 0,
    #[default]
    East = 1,
    South = 2,
    West = 3,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    #[inline(always)]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Wraps any index onto the compass.
    ///
    /// Every raw value lands on one of the four headings, so an out-of-range
    /// direction can't reach the movement engine and needs no fallback there.
    #[inline(always)]
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Heading::North,
            1 => Heading::East,
            2 => Heading::South,
            _ => Heading::West,
        }
    }

    /// Unit `(row, col)` step. Rows grow downwards.
    #[inline(always)]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }

    pub const fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn counter_clockwise(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

/// Raw turn intents as read off the switches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Turn {
    pub right: bool,
    pub left: bool,
}

impl Turn {
    pub const STRAIGHT: Turn = Turn {
        right: false,
        left: false,
    };
}

/// Folds the turn intents into `current`.
///
/// Both intents at once cancel out and the snake keeps going straight.
pub const fn resolve(turn: Turn, current: Heading) -> Heading {
    match (turn.right, turn.left) {
        (true, false) => current.clockwise(),
        (false, true) => current.counter_clockwise(),
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIGHT: Turn = Turn {
        right: true,
        left: false,
    };
    const LEFT: Turn = Turn {
        right: false,
        left: true,
    };
    const BOTH: Turn = Turn {
        right: true,
        left: true,
    };

    #[test]
    fn no_intent_keeps_heading() {
        assert_eq!(resolve(Turn::STRAIGHT, Heading::East), Heading::East);
        for h in Heading::ALL {
            assert_eq!(resolve(Turn::STRAIGHT, h), h);
        }
    }

    #[test]
    fn both_intents_go_straight() {
        for h in Heading::ALL {
            assert_eq!(resolve(BOTH, h), h);
        }
    }

    #[test]
    fn right_turns_clockwise_and_wraps() {
        assert_eq!(resolve(RIGHT, Heading::North), Heading::East);
        assert_eq!(resolve(RIGHT, Heading::East), Heading::South);
        assert_eq!(resolve(RIGHT, Heading::South), Heading::West);
        assert_eq!(resolve(RIGHT, Heading::West), Heading::North);
    }

    #[test]
    fn left_turns_counter_clockwise_and_wraps() {
        assert_eq!(resolve(LEFT, Heading::North), Heading::West);
        assert_eq!(resolve(LEFT, Heading::West), Heading::South);
        assert_eq!(resolve(LEFT, Heading::South), Heading::East);
        assert_eq!(resolve(LEFT, Heading::East), Heading::North);
    }

    #[test]
    fn four_turns_come_back_around() {
        for h in Heading::ALL {
            let mut r = h;
            let mut l = h;
            for _ in 0..4 {
                r = resolve(RIGHT, r);
                l = resolve(LEFT, l);
            }
            assert_eq!(r, h);
            assert_eq!(l, h);
        }
    }

    #[test]
    fn every_raw_index_is_a_unit_step() {
        for raw in 0..=u8::MAX {
            let (dr, dc) = Heading::from_index(raw).delta();
            assert_eq!(dr.abs() + dc.abs(), 1, "raw {raw}");
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Heading::from_index(4), Heading::North);
        assert_eq!(Heading::from_index(7), Heading::West);
        assert_eq!(Heading::West.index(), 3);
    }
}
