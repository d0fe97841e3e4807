// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embedding levels and directions.

use crate::Error;

/// The maximum explicit embedding level (BD2).
pub const MAX_DEPTH: u8 = 125;

/// A bidirectional embedding level.
///
/// Even levels are left-to-right, odd levels are right-to-left. Explicit levels never exceed
/// [`MAX_DEPTH`]; implicit resolution may raise a character one level above it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Level(u8);

impl Level {
    /// The left-to-right paragraph level.
    pub const LTR: Self = Self(0);

    /// The right-to-left paragraph level.
    pub const RTL: Self = Self(1);

    /// Creates an explicit level, failing if `number` exceeds [`MAX_DEPTH`].
    pub fn new(number: u8) -> Result<Self, Error> {
        if number <= MAX_DEPTH {
            Ok(Self(number))
        } else {
            Err(Error::invalid_level(number))
        }
    }

    /// Returns the numeric value of the level.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Returns true if this level represents a left-to-right sequence.
    pub fn is_ltr(self) -> bool {
        self.0 & 1 == 0
    }

    /// Returns true if this level represents a right-to-left sequence.
    pub fn is_rtl(self) -> bool {
        self.0 & 1 != 0
    }

    /// The least odd level greater than this one, if it is a valid explicit level.
    pub(crate) fn next_rtl(self) -> Option<Self> {
        let next = (self.0 + 1) | 1;
        (next <= MAX_DEPTH).then_some(Self(next))
    }

    /// The least even level greater than this one, if it is a valid explicit level.
    pub(crate) fn next_ltr(self) -> Option<Self> {
        let next = (self.0 + 2) & !1;
        (next <= MAX_DEPTH).then_some(Self(next))
    }

    pub(crate) fn raise(self, amount: u8) -> Self {
        Self(self.0 + amount)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// The overall direction of a paragraph.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Every character resolved to an even level.
    Ltr,
    /// Every character resolved to an odd level.
    Rtl,
    /// Both even and odd levels are present.
    Mixed,
}

impl Direction {
    /// Classifies a sequence of levels; an empty sequence takes the direction of `base`.
    pub fn of_levels(levels: &[Level], base: Level) -> Self {
        let has_ltr = levels.iter().any(|level| level.is_ltr());
        let has_rtl = levels.iter().any(|level| level.is_rtl());
        match (has_ltr, has_rtl) {
            (true, true) => Self::Mixed,
            (false, true) => Self::Rtl,
            (true, false) => Self::Ltr,
            (false, false) if base.is_rtl() => Self::Rtl,
            (false, false) => Self::Ltr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn parity() {
        assert!(Level::LTR.is_ltr());
        assert!(Level::RTL.is_rtl());
        assert!(Level(4).is_ltr());
        assert!(Level(7).is_rtl());
    }

    #[test]
    fn next_levels() {
        assert_eq!(Level(0).next_rtl(), Some(Level(1)));
        assert_eq!(Level(1).next_rtl(), Some(Level(3)));
        assert_eq!(Level(0).next_ltr(), Some(Level(2)));
        assert_eq!(Level(1).next_ltr(), Some(Level(2)));
        assert_eq!(Level(124).next_rtl(), Some(Level(125)));
        assert_eq!(Level(125).next_rtl(), None);
        assert_eq!(Level(123).next_ltr(), Some(Level(124)));
        assert_eq!(Level(124).next_ltr(), None);
    }

    #[test]
    fn explicit_levels_are_bounded() {
        assert_eq!(Level::new(125).map(Level::number), Ok(125));
        let err = Level::new(126).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn direction_of_levels() {
        assert_eq!(
            Direction::of_levels(&[Level(0), Level(2)], Level::LTR),
            Direction::Ltr
        );
        assert_eq!(
            Direction::of_levels(&[Level(1), Level(3)], Level::LTR),
            Direction::Rtl
        );
        assert_eq!(
            Direction::of_levels(&[Level(1), Level(2)], Level::RTL),
            Direction::Mixed
        );
        assert_eq!(Direction::of_levels(&[], Level::RTL), Direction::Rtl);
    }
}
