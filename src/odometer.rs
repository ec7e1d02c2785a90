//! Generating candidate strings in order.

use std::{fmt, marker::PhantomData};

use crate::{lattice::Lattice, turn::Turn};

/// Counts through every canonical string of a fixed length that has no
/// doubled turn (`RR`, `LL`, `UU`, `DD`).
///
/// Digits run in the lattice's [`ODOMETER`](Lattice::ODOMETER) order, and
/// strings come out in strictly increasing order under it.
pub struct Odometer<L, const D: usize>
where
    L: Lattice<D>,
{
    digits: Vec<Turn>,
    lattice: PhantomData<L>,
}

impl<L, const D: usize> Odometer<L, D>
where
    L: Lattice<D>,
{
    /// Starts at the all-`S` string of `len` letters.
    pub fn new(len: usize) -> Self {
        Self {
            digits: vec![Turn::Straight; len],
            lattice: PhantomData,
        }
    }

    pub fn as_slice(&self) -> &[Turn] {
        &self.digits
    }

    fn last_digit() -> Turn {
        L::ODOMETER[L::ODOMETER.len() - 1]
    }

    /// Bumps a single digit, returning `true` if it wrapped around to `S`.
    fn increment(digit: &mut Turn) -> bool {
        let order = L::ODOMETER;
        let at = order
            .iter()
            .position(|t| t == digit)
            .unwrap_or_else(|| panic!("{digit:?} is not an odometer digit"));
        *digit = order[(at + 1) % order.len()];
        *digit == Turn::Straight
    }

    /// Park every digit after `i` on the last digit, so the next
    /// [`advance`](Self::advance) moves position `i` on.
    pub fn fast_forward(&mut self, i: usize) {
        let last = Self::last_digit();
        for digit in self.digits.iter_mut().skip(i + 1) {
            *digit = last;
        }
    }

    /// Step to the next string. Returns `false` once every string has been
    /// produced.
    pub fn advance(&mut self) -> bool {
        loop {
            let Some(i) = self.carry() else {
                return false;
            };

            if L::FIRST_TURN_RIGHT
                && self.digits[i] != Turn::Right
                && self.digits[..i].iter().all(|t| *t == Turn::Straight)
            {
                // The first turn is no longer `R`: `SSSSLSSSSS` becomes
                // `SSSRSSSSSS`.
                if i == 1 {
                    return false;
                }
                self.digits[i - 1] = Turn::Right;
                self.digits[i] = Turn::Straight;
                return true;
            }

            if self.digits[i] == self.digits[i - 1] && self.digits[i].is_turning() {
                // A doubled turn is a U-turn: skip everything sharing this
                // prefix.
                self.fast_forward(i);
                continue;
            }

            return true;
        }
    }

    /// Increment from the right, returning the leftmost position that changed
    /// without wrapping, or `None` if the carry reached the leading `S`.
    fn carry(&mut self) -> Option<usize> {
        let mut i = self.digits.len().checked_sub(1)?;
        loop {
            if i == 0 {
                return None;
            }
            if !Self::increment(&mut self.digits[i]) {
                return Some(i);
            }
            i -= 1;
        }
    }
}

impl<L, const D: usize> fmt::Display for Odometer<L, D>
where
    L: Lattice<D>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::turn::write_turns(f, &self.digits)
    }
}
