//! The cubic lattice and its 24 rotation frames.
//!
//! Frame `v` looks along one of the six axis directions (`v / 4` picks the
//! direction) with one of four twists about it (`v % 4`).

use super::{Facing, Lattice, LatticeKind, Pt, Pt3};
use crate::turn::{Turn, Turn::*};

#[rustfmt::skip]
const LEFT: [u8; 24] = [
     4, 17, 14, 23,  8, 18,  2, 22,  12, 19,  6, 21,
     0, 16, 10, 20,  7, 11, 15,  3,   5,  1, 13,  9,
];

#[rustfmt::skip]
const DOWN: [u8; 24] = [
    20,  5, 18, 15,  23,  9, 19,  3,  22, 13, 16,  7,
    21,  1, 17, 11,   0,  4,  8, 12,  10,  6,  2, 14,
];

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct CubeFacing(u8);

impl CubeFacing {
    pub fn new(index: u8) -> Self {
        assert!(index < 24, "cube facing {index} out of range");
        CubeFacing(index)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn left(self) -> Self {
        CubeFacing(LEFT[self.0 as usize])
    }

    #[inline]
    pub fn right(self) -> Self {
        self.left().left().left()
    }

    #[inline]
    pub fn down(self) -> Self {
        CubeFacing(DOWN[self.0 as usize])
    }

    #[inline]
    pub fn up(self) -> Self {
        self.down().down().down()
    }

    #[inline]
    pub fn twist_cw(self) -> Self {
        CubeFacing((self.0 & !3) | ((self.0 + 1) & 3))
    }

    #[inline]
    pub fn twist_ccw(self) -> Self {
        self.twist_cw().twist_cw().twist_cw()
    }

    /// Facing `self` before a left turn, how to face the other way so that
    /// the turn reads as an initial right.
    #[inline]
    pub fn undo_left(self) -> Self {
        self.right()
    }

    #[inline]
    pub fn undo_right(self) -> Self {
        self.left().twist_cw().twist_cw()
    }

    #[inline]
    pub fn undo_up(self) -> Self {
        self.down().twist_cw()
    }

    #[inline]
    pub fn undo_down(self) -> Self {
        self.up().twist_ccw()
    }
}

impl Facing<3> for CubeFacing {
    const COUNT: u8 = 24;

    fn from_index(i: u8) -> Self {
        CubeFacing::new(i)
    }

    #[inline]
    fn turn(self, turn: Turn) -> Self {
        match turn {
            Straight => self,
            Left => self.left(),
            Right => self.right(),
            Up => self.up(),
            Down => self.down(),
        }
    }

    #[inline]
    fn undo(self, turn: Turn) -> Self {
        match turn {
            Straight => self,
            Left => self.undo_left(),
            Right => self.undo_right(),
            Up => self.undo_up(),
            Down => self.undo_down(),
        }
    }

    #[inline]
    fn step(self, p: Pt3) -> Pt3 {
        let v = self.0;
        let Pt([x, y, z]) = p;
        let x = x + (12..16).contains(&v) as i32 - (4..8).contains(&v) as i32;
        let y = y + (0..4).contains(&v) as i32 - (8..12).contains(&v) as i32;
        let z = z + (16..20).contains(&v) as i32 - (20..24).contains(&v) as i32;
        Pt([x, y, z])
    }
}

/// Polycube snakes.
pub struct Cubic;

impl Lattice<3> for Cubic {
    type Facing = CubeFacing;

    const NAME: &'static str = "cubic";
    const KIND: LatticeKind = LatticeKind::Cubic;
    const ODOMETER: &'static [Turn] = &[Straight, Right, Left, Up, Down];
    const TRACE_ORDER: &'static [Turn] = &[Straight, Left, Right, Up, Down];
    const FIRST_TURN_RIGHT: bool = true;
    const OUROBOROS_CAVITIES: bool = true;

    fn origin() -> Pt3 {
        Pt([0, 0, 0])
    }

    fn base_facing() -> CubeFacing {
        CubeFacing(0)
    }

    fn mirror(turn: Turn) -> Turn {
        match turn {
            Up => Down,
            Down => Up,
            t => t,
        }
    }

    fn starts_canonically(facing: CubeFacing, path: &[Pt3]) -> bool {
        path[1] == facing.step(path[0]) && path[2] == facing.right().step(path[1])
    }

    fn cannot_enclose(turns: &[Turn], extents: &[usize; 3], cells: usize) -> bool {
        // The shortest cavitous snake fits 11 cubes into a 3x3x3 box, and
        // every extra unit of extent costs at least one more cube.
        if cells < 11 || crate::turn::turning_count(turns) < 6 {
            return true;
        }
        extents.iter().any(|&e| cells - 11 < e - 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn facing_identities() {
        for f in CubeFacing::all() {
            assert_eq!(f, f.right().right().right().right());
            assert_eq!(f.left(), f.right().right().right());
            assert_eq!(f.left().left(), f.right().right());
            assert_eq!(f.left().left().left(), f.right());
            assert_eq!(f.left().left().left().left(), f);
            assert_eq!(f, f.up().up().up().up());
            assert_eq!(f.down(), f.up().up().up());
            assert_eq!(f.down().down(), f.up().up());
            assert_eq!(f.down().down().down(), f.up());
            assert_eq!(f.down().down().down().down(), f);
            assert_eq!(f, f.twist_cw().twist_cw().twist_cw().twist_cw());
            assert_eq!(f.twist_ccw(), f.twist_cw().twist_cw().twist_cw());
            assert_eq!(f.twist_ccw().twist_ccw(), f.twist_cw().twist_cw());
            assert_eq!(f.twist_ccw().twist_ccw().twist_ccw(), f.twist_cw());
            assert_eq!(f.twist_ccw().twist_ccw().twist_ccw().twist_ccw(), f);
            assert_eq!(f.down().right().right().down().right().right(), f);
        }
    }

    #[test]
    pub fn tables_are_permutations() {
        let mut left = LEFT;
        let mut down = DOWN;
        left.sort();
        down.sort();
        let expected: Vec<u8> = (0..24).collect();
        assert_eq!(left.to_vec(), expected);
        assert_eq!(down.to_vec(), expected);
    }

    #[test]
    pub fn every_turn_moves_to_a_neighbour() {
        let p = Cubic::origin();
        for f in CubeFacing::all() {
            let forward = f.step(p);
            assert!(forward.adjacent_to(&p));
            for turn in [Left, Right, Up, Down] {
                let side = f.turn(turn).step(p);
                assert!(side.adjacent_to(&p));
                assert_ne!(side, forward);
            }
        }
    }

    #[test]
    pub fn undo_reverses_the_last_step() {
        // After turning, the undo frame must point back along the new step.
        for f in CubeFacing::all() {
            for turn in [Left, Right, Up, Down] {
                let p = Cubic::origin();
                let q = f.turn(turn).step(p);
                let back = f.undo(turn);
                assert_eq!(back.step(q), p, "{f:?} {turn:?}");
            }
        }
    }

    #[test]
    pub fn enclosure_needs_cubes_to_spare_for_wider_boxes() {
        let turns = [Right; 6];

        assert!(!Cubic::cannot_enclose(&turns, &[3, 3, 3], 11));
        assert!(Cubic::cannot_enclose(&turns, &[3, 3, 3], 10));
        assert!(Cubic::cannot_enclose(&[Right; 5], &[3, 3, 3], 20));
        assert!(Cubic::cannot_enclose(&turns, &[4, 3, 3], 11));
        assert!(!Cubic::cannot_enclose(&turns, &[4, 3, 3], 12));
        assert!(Cubic::cannot_enclose(&turns, &[3, 6, 3], 13));
    }

    #[test]
    pub fn canonical_form() {
        let canon = |s: &str| {
            Cubic::is_canonical_form(&s.parse::<crate::turn::TurnString>().unwrap().0)
        };

        assert!(canon("SSS"));
        assert!(canon("SSR"));
        assert!(canon("SRLUD"));
        assert!(canon("SSRUUL"));
        assert!(!canon("SSL"));
        assert!(!canon("SU"));
        assert!(!canon("SSD"));
        assert!(!canon("RSS"));
    }
}
