//! Recovering turn strings from cell paths.

use crate::{
    lattice::{Facing, Lattice, Pt},
    turn::Turn,
};

/// Rebuild the turn string that walks `path`, starting out facing `facing`.
///
/// `facing` must step from the first cell to the second. The result has one
/// letter per edge, always starting with `S`, and replaces the contents of
/// `out`. Pass `path.iter().rev()` to trace from the far end.
///
/// Panics if some step cannot be reached by a single turn, which only happens
/// if `path` did not come from a walk on this lattice.
pub fn trace<'a, L, const D: usize>(
    path: impl IntoIterator<Item = &'a Pt<D>>,
    mut facing: L::Facing,
    out: &mut Vec<Turn>,
) where
    L: Lattice<D>,
{
    out.clear();

    let mut path = path.into_iter();
    let Some(&first) = path.next() else {
        return;
    };
    let mut pos = first;

    for &next in path {
        let turn = L::TRACE_ORDER
            .iter()
            .copied()
            .find(|&t| facing.turn(t).step(pos) == next)
            .unwrap_or_else(|| panic!("no single turn from {pos:?} facing {facing:?} reaches {next:?}"));

        facing = facing.turn(turn);
        out.push(turn);
        pos = next;
    }

    debug_assert!(out.first().map_or(true, |t| *t == Turn::Straight));
}

/// Walk `turns` from the lattice origin, writing one cell per letter plus the
/// starting cell into `path`. No self-intersection checks are done here.
pub fn walk<L, const D: usize>(turns: &[Turn], path: &mut Vec<Pt<D>>)
where
    L: Lattice<D>,
{
    path.clear();
    let mut facing = L::base_facing();
    let mut pos = L::origin();
    path.push(pos);
    for &t in turns {
        facing = facing.turn(t);
        pos = facing.step(pos);
        path.push(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lattice::{Cubic, Square},
        turn::TurnString,
    };

    fn round_trip<L: Lattice<D>, const D: usize>(s: &str) {
        let turns = s.parse::<TurnString>().unwrap().0;
        let mut path = Vec::new();
        let mut out = Vec::new();

        walk::<L, D>(&turns, &mut path);
        trace::<L, D>(&path, L::base_facing(), &mut out);

        assert_eq!(TurnString(out).to_string(), s);
    }

    #[test]
    pub fn walk_then_trace_reproduces_the_string() {
        for s in ["SSS", "SRLUD", "SRSUSLD", "SRDLURDRU", "SRUUS"] {
            round_trip::<Cubic, 3>(s);
        }
        for s in ["SSS", "SLR", "SRRSLLS", "SLSLSL"] {
            round_trip::<Square, 2>(s);
        }
    }

    #[test]
    pub fn straight_line_traces_straight_both_ways() {
        let turns = "SSSS".parse::<TurnString>().unwrap().0;
        let mut path = Vec::new();
        let mut out = Vec::new();
        walk::<Cubic, 3>(&turns, &mut path);

        let back = <Cubic as Lattice<3>>::base_facing().right().right();
        trace::<Cubic, 3>(path.iter().rev(), back, &mut out);

        assert_eq!(TurnString(out).to_string(), "SSSS");
    }

    #[test]
    #[should_panic]
    pub fn unreachable_step_panics() {
        let path = [Pt([0, 0]), Pt([0, 1]), Pt([5, 5])];
        let mut out = Vec::new();
        trace::<Square, 2>(&path, <Square as Lattice<2>>::base_facing(), &mut out);
    }
}
