//! Lattice geometry: points, reference frames and the per-lattice rules
//! the classifier is generic over.

pub mod cubic;
pub mod square;

pub use cubic::{CubeFacing, Cubic};
pub use square::{Square, SquareFacing};

use std::fmt::Debug;

use crate::{
    error::{Error, Result},
    turn::Turn,
};

/// A lattice cell.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Pt<const D: usize>(pub [i32; D]);

pub type Pt2 = Pt<2>;
pub type Pt3 = Pt<3>;

impl<const D: usize> Pt<D> {
    /// Rook adjacency: Manhattan distance exactly 1.
    #[inline]
    pub fn adjacent_to(&self, other: &Self) -> bool {
        let mut dist = 0;
        for k in 0..D {
            dist += (self.0[k] - other.0[k]).abs();
            if dist > 1 {
                return false;
            }
        }
        dist == 1
    }

    #[inline]
    pub fn offset(mut self, axis: usize, delta: i32) -> Self {
        self.0[axis] += delta;
        self
    }
}

/// A discrete reference frame: which way is forward, and (for the cube)
/// which way is up.
pub trait Facing<const D: usize>: Copy + Eq + Debug {
    /// Number of distinct frames.
    const COUNT: u8;

    /// The frame with index `i`, for `i < COUNT`.
    fn from_index(i: u8) -> Self;

    /// Every frame, in index order.
    fn all() -> std::iter::Map<std::ops::Range<u8>, fn(u8) -> Self> {
        (0..Self::COUNT).map(Self::from_index as fn(u8) -> Self)
    }

    /// The frame after taking `turn`.
    fn turn(self, turn: Turn) -> Self;

    /// Facing `self` before `turn`: the frame that retraces the step
    /// backwards so that this turn reads as the first turn of a
    /// canonical string.
    fn undo(self, turn: Turn) -> Self;

    /// `p` moved one cell forward.
    fn step(self, p: Pt<D>) -> Pt<D>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeKind {
    Cubic,
    Square,
}

/// Everything the enumerator needs to know about one lattice.
pub trait Lattice<const D: usize> {
    type Facing: Facing<D>;

    const NAME: &'static str;
    const KIND: LatticeKind;

    /// Odometer digit order. The first digit is always `S` and the last one
    /// is where [`fast_forward`](crate::odometer::Odometer::fast_forward) parks.
    const ODOMETER: &'static [Turn];

    /// The order the tracer tries turns in. The first match wins.
    const TRACE_ORDER: &'static [Turn];

    /// Whether the first non-`S` letter of a canonical string is forced to `R`.
    const FIRST_TURN_RIGHT: bool;

    /// Whether closed loops are checked for cavities as well.
    const OUROBOROS_CAVITIES: bool;

    fn origin() -> Pt<D>;

    fn base_facing() -> Self::Facing;

    /// The reflection that leaves canonical strings canonical.
    fn mirror(turn: Turn) -> Turn;

    /// Can tracing `path` from `facing` yield a canonical string?
    fn starts_canonically(facing: Self::Facing, path: &[Pt<D>]) -> bool;

    /// Cheap test for shapes that cannot possibly wall off a cavity.
    /// `extents` is the bounding box size along each axis, each at least 3.
    fn cannot_enclose(_turns: &[Turn], _extents: &[usize; D], _cells: usize) -> bool {
        false
    }

    fn is_canonical_form(s: &[Turn]) -> bool {
        if s.first() != Some(&Turn::Straight) {
            return false;
        }
        if !Self::FIRST_TURN_RIGHT {
            return true;
        }
        match s.iter().find(|t| t.is_turning()) {
            Some(t) => *t == Turn::Right,
            None => true,
        }
    }

    /// Checks that every letter belongs to this lattice's alphabet.
    fn check_alphabet(s: &[Turn]) -> Result<()> {
        match s.iter().find(|t| !Self::ODOMETER.contains(t)) {
            Some(&turn) => Err(Error::OffLattice {
                turn,
                lattice: Self::NAME,
            }),
            None => Ok(()),
        }
    }
}

#[test]
fn adjacency_is_rook_adjacency() {
    let p = Pt([5, 5, 5]);

    assert!(p.adjacent_to(&Pt([6, 5, 5])));
    assert!(p.adjacent_to(&Pt([5, 4, 5])));
    assert!(p.adjacent_to(&Pt([5, 5, 6])));
    assert!(!p.adjacent_to(&p));
    assert!(!p.adjacent_to(&Pt([6, 6, 5])));
    assert!(!p.adjacent_to(&Pt([7, 5, 5])));
    assert!(Pt([0, 0]).adjacent_to(&Pt([0, -1])));
}
