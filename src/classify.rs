//! Deciding what a turn string is: not a snake, an open snake or an
//! ouroboros, and whether it is the canonical spelling of that shape.

use std::{fmt, marker::PhantomData};

use crate::{
    cavity::FloodFill,
    error::{Error, Result},
    lattice::{Facing, Lattice, Pt},
    trace::trace,
    turn::{mirrored_is_less, Turn},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Two free ends.
    Open,
    /// The ends touch, closing a loop.
    Ouroboros,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chirality {
    /// The first of its mirror pair to be generated, or its own mirror image.
    Free,
    /// The second of a mirror pair. Counted only among one-sided shapes.
    OneSided,
}

/// An accepted canonical snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Snake {
    pub shape: Shape,
    pub chirality: Chirality,
    pub cavitous: bool,
}

impl fmt::Display for Snake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chirality = match self.chirality {
            Chirality::Free => "free",
            Chirality::OneSided => "one-sided",
        };
        let cavity = if self.cavitous { " cavitous" } else { "" };
        let shape = match (self.shape, self.cavitous) {
            (Shape::Open, false) => "strip",
            (Shape::Open, true) => "snake",
            (Shape::Ouroboros, _) => "ouroboros",
        };
        write!(f, "{chirality}{cavity} {shape}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Not a snake, or not the canonical spelling of one.
    Rejected,
    /// Letter `at` stepped next to an earlier cell. Every string that shares
    /// the prefix `..=at` fails the same way.
    SelfAdjoining { at: usize },
    Accepted(Snake),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Rejected => write!(f, "not a canonical snake"),
            Outcome::SelfAdjoining { at } => write!(f, "self-adjoining at letter {at}"),
            Outcome::Accepted(snake) => write!(f, "{snake}"),
        }
    }
}

/// Classifies turn strings of one fixed length.
///
/// All scratch space lives here and is reused from one call to the next.
pub struct Classifier<L, const D: usize>
where
    L: Lattice<D>,
{
    len: usize,
    path: Vec<Pt<D>>,
    rotated: Vec<Pt<D>>,
    traced: Vec<Turn>,
    fill: FloodFill<D>,
    lattice: PhantomData<L>,
}

impl<L, const D: usize> Classifier<L, D>
where
    L: Lattice<D>,
{
    /// A classifier for strings of `len` letters, that is, `len + 1` cells.
    pub fn new(len: usize) -> Result<Self> {
        if len < 2 {
            return Err(Error::TooShort { len });
        }

        Ok(Self {
            len,
            path: Vec::with_capacity(len + 1),
            rotated: Vec::with_capacity(len + 1),
            traced: Vec::with_capacity(len),
            fill: FloodFill::new(),
            lattice: PhantomData,
        })
    }

    /// Letters per string, one fewer than cells per snake.
    pub fn string_len(&self) -> usize {
        self.len
    }

    /// The cells visited by the last classified string, as far as the walk
    /// got.
    pub fn path(&self) -> &[Pt<D>] {
        &self.path
    }

    /// Classify `s`, checking that it fits this classifier and the lattice.
    pub fn classify(&mut self, s: &[Turn]) -> Result<Outcome> {
        if s.len() != self.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                found: s.len(),
            });
        }
        L::check_alphabet(s)?;
        Ok(self.classify_unchecked(s))
    }

    /// Classify `s` without validating it. `s` must have exactly
    /// [`string_len`](Self::string_len) letters from the lattice's alphabet.
    pub fn classify_unchecked(&mut self, s: &[Turn]) -> Outcome {
        debug_assert_eq!(s.len(), self.len);
        let n = s.len();

        let mut facing = L::base_facing();
        let mut back = facing.turn(Turn::Right).turn(Turn::Right);
        let mut pos = L::origin();
        self.path.clear();

        for (i, &turn) in s.iter().enumerate() {
            if turn.is_turning() {
                back = facing.undo(turn);
                facing = facing.turn(turn);
            }
            let next = facing.step(pos);

            // Only cells of the other parity can touch `next`, and cell `i`
            // is `pos` itself.
            for j in (0..i.saturating_sub(1)).rev().step_by(2) {
                if next.adjacent_to(&self.path[j]) {
                    if j == 0 && i == n - 1 {
                        self.path.push(pos);
                        self.path.push(next);
                        return self.ouroboros(s);
                    }
                    return Outcome::SelfAdjoining { at: i };
                }
            }

            self.path.push(pos);
            pos = next;
        }
        self.path.push(pos);

        self.open(s, back)
    }

    fn open(&mut self, s: &[Turn], back: L::Facing) -> Outcome {
        trace::<L, D>(self.path.iter().rev(), back, &mut self.traced);
        let reversed = &self.traced;

        if reversed.as_slice() < s {
            return Outcome::Rejected;
        }

        let chirality =
            if mirrored_is_less(s, s, L::mirror) || mirrored_is_less(reversed, s, L::mirror) {
                Chirality::OneSided
            } else {
                Chirality::Free
            };

        Outcome::Accepted(Snake {
            shape: Shape::Open,
            chirality,
            cavitous: self.fill.has_cavities::<L>(&self.path, s),
        })
    }

    fn ouroboros(&mut self, s: &[Turn]) -> Outcome {
        // Some rotation starts at a corner and so reads `SR…` or `SL…`,
        // both smaller than `SS…`.
        if s[1] == Turn::Straight {
            return Outcome::Rejected;
        }

        let mut mirrored_less = mirrored_is_less(s, s, L::mirror);

        self.rotated.clear();
        self.rotated.extend_from_slice(&self.path);
        let cells = self.rotated.len();

        for reversed in [false, true] {
            if reversed {
                self.rotated.reverse();
            }
            for _ in 0..cells {
                self.rotated.rotate_left(1);

                for facing in <L::Facing as Facing<D>>::all() {
                    if !L::starts_canonically(facing, &self.rotated) {
                        continue;
                    }
                    trace::<L, D>(&self.rotated, facing, &mut self.traced);
                    debug_assert!(L::is_canonical_form(&self.traced));

                    if self.traced.as_slice() < s {
                        return Outcome::Rejected;
                    }
                    if mirrored_is_less(&self.traced, s, L::mirror) {
                        mirrored_less = true;
                    }
                }
            }
        }

        let chirality = if mirrored_less {
            Chirality::OneSided
        } else {
            Chirality::Free
        };

        Outcome::Accepted(Snake {
            shape: Shape::Ouroboros,
            chirality,
            cavitous: L::OUROBOROS_CAVITIES && self.fill.has_cavities::<L>(&self.path, s),
        })
    }
}

pub type CubeClassifier = Classifier<crate::lattice::Cubic, 3>;
pub type SquareClassifier = Classifier<crate::lattice::Square, 2>;
