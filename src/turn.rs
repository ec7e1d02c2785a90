//! The turn alphabet snakes are spelled in.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// One letter of a snake: the turn taken before stepping into the next cell.
///
/// Declaration order is the letters' alphabetical order, and the derived
/// `Ord` is the order canonical forms are minimised under. The odometer counts
/// in its own digit order (see [`Lattice::ODOMETER`](crate::lattice::Lattice::ODOMETER)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Turn {
    Down,
    Left,
    Right,
    Straight,
    Up,
}

impl Turn {
    pub fn letter(self) -> char {
        match self {
            Turn::Down => 'D',
            Turn::Left => 'L',
            Turn::Right => 'R',
            Turn::Straight => 'S',
            Turn::Up => 'U',
        }
    }

    pub fn from_letter(c: char) -> Result<Self> {
        match c {
            'D' => Ok(Turn::Down),
            'L' => Ok(Turn::Left),
            'R' => Ok(Turn::Right),
            'S' => Ok(Turn::Straight),
            'U' => Ok(Turn::Up),
            other => Err(Error::UnknownTurn(other)),
        }
    }

    #[inline]
    pub fn is_turning(self) -> bool {
        self != Turn::Straight
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A whole snake, parsed from its letters.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TurnString(pub Vec<Turn>);

impl TurnString {
    pub fn as_slice(&self) -> &[Turn] {
        &self.0
    }
}

impl FromStr for TurnString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(Turn::from_letter)
            .collect::<Result<Vec<_>>>()
            .map(TurnString)
    }
}

impl fmt::Display for TurnString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_turns(f, &self.0)
    }
}

pub(crate) fn write_turns(f: &mut fmt::Formatter<'_>, turns: &[Turn]) -> fmt::Result {
    for t in turns {
        write!(f, "{}", t.letter())?;
    }
    Ok(())
}

/// Number of letters in `turns` that are not `S`.
pub fn turning_count(turns: &[Turn]) -> usize {
    turns.iter().filter(|t| t.is_turning()).count()
}

/// Is `mirror(a) < b`, letter by letter?
///
/// Comparing in place avoids building the mirrored string.
pub fn mirrored_is_less(a: &[Turn], b: &[Turn], mirror: impl Fn(Turn) -> Turn) -> bool {
    debug_assert_eq!(a.len(), b.len());
    for (&x, &y) in a.iter().zip(b) {
        let m = mirror(x);
        if m != y {
            return m < y;
        }
    }
    false
}
