//! The square lattice: four headings, no vertical turns.

use super::{Facing, Lattice, LatticeKind, Pt, Pt2};
use crate::turn::{Turn, Turn::*};

/// Heading `0` is +y, then clockwise: `1` is +x, `2` is -y, `3` is -x.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct SquareFacing(u8);

impl SquareFacing {
    pub fn new(index: u8) -> Self {
        assert!(index < 4, "square facing {index} out of range");
        SquareFacing(index)
    }

    #[inline]
    pub fn left(self) -> Self {
        SquareFacing((self.0 + 3) % 4)
    }

    #[inline]
    pub fn right(self) -> Self {
        SquareFacing((self.0 + 1) % 4)
    }
}

impl Facing<2> for SquareFacing {
    const COUNT: u8 = 4;

    fn from_index(i: u8) -> Self {
        SquareFacing::new(i)
    }

    #[inline]
    fn turn(self, turn: Turn) -> Self {
        match turn {
            Straight => self,
            Left => self.left(),
            Right => self.right(),
            Up | Down => panic!("no vertical turns on the square lattice"),
        }
    }

    #[inline]
    fn undo(self, turn: Turn) -> Self {
        match turn {
            Straight => self,
            Left => self.right(),
            Right => self.left(),
            Up | Down => panic!("no vertical turns on the square lattice"),
        }
    }

    #[inline]
    fn step(self, p: Pt2) -> Pt2 {
        let v = self.0;
        let Pt([x, y]) = p;
        let x = x + (v == 1) as i32 - (v == 3) as i32;
        let y = y + (v == 0) as i32 - (v == 2) as i32;
        Pt([x, y])
    }
}

/// Polyomino snakes.
pub struct Square;

impl Lattice<2> for Square {
    type Facing = SquareFacing;

    const NAME: &'static str = "square";
    const KIND: LatticeKind = LatticeKind::Square;
    const ODOMETER: &'static [Turn] = &[Straight, Right, Left];
    const TRACE_ORDER: &'static [Turn] = &[Straight, Left, Right];
    const FIRST_TURN_RIGHT: bool = false;
    const OUROBOROS_CAVITIES: bool = false;

    fn origin() -> Pt2 {
        Pt([0, 0])
    }

    fn base_facing() -> SquareFacing {
        SquareFacing(0)
    }

    fn mirror(turn: Turn) -> Turn {
        match turn {
            Left => Right,
            Right => Left,
            t => t,
        }
    }

    fn starts_canonically(facing: SquareFacing, path: &[Pt2]) -> bool {
        path[1] == facing.step(path[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn facing_identities() {
        for f in SquareFacing::all() {
            assert_eq!(f, f.right().right().right().right());
            assert_eq!(f.left(), f.right().right().right());
            assert_eq!(f.left().left(), f.right().right());
            assert_eq!(f.left().left().left(), f.right());
            assert_eq!(f.left().left().left().left(), f);
        }
    }

    #[test]
    pub fn steps_go_clockwise() {
        let origin = Square::origin();
        let visited: Vec<Pt2> = SquareFacing::all().map(|f| f.step(origin)).collect();
        assert_eq!(
            visited,
            vec![Pt([0, 1]), Pt([1, 0]), Pt([0, -1]), Pt([-1, 0])]
        );
    }

    #[test]
    pub fn canonical_form_only_needs_leading_straight() {
        let canon =
            |s: &str| Square::is_canonical_form(&s.parse::<crate::turn::TurnString>().unwrap().0);

        assert!(canon("SSS"));
        assert!(canon("SLR"));
        assert!(canon("SRL"));
        assert!(!canon("LSS"));
        assert!(!canon("RS"));
    }

    #[test]
    #[should_panic]
    pub fn vertical_turns_panic() {
        SquareFacing::new(0).turn(Up);
    }
}
