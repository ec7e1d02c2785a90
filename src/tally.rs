//! Per-length counts and the report table built from them.

use crate::{
    classify::{Chirality, Shape, Snake},
    lattice::LatticeKind,
};

/// Counts for one string length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Candidate strings tried, including rejected ones.
    pub strings: u64,
    counts: [[[u64; 2]; 2]; 2],
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, snake: Snake) {
        *self.slot(snake.shape, snake.chirality, snake.cavitous) += 1;
    }

    fn slot(&mut self, shape: Shape, chirality: Chirality, cavitous: bool) -> &mut u64 {
        &mut self.counts[shape as usize][chirality as usize][cavitous as usize]
    }

    pub fn get(&self, shape: Shape, chirality: Chirality, cavitous: bool) -> u64 {
        self.counts[shape as usize][chirality as usize][cavitous as usize]
    }

    /// Free shapes of `shape`, with and without cavities.
    pub fn free(&self, shape: Shape) -> u64 {
        self.get(shape, Chirality::Free, false) + self.get(shape, Chirality::Free, true)
    }

    /// Free shapes of `shape` that have cavities.
    pub fn free_cavitous(&self, shape: Shape) -> u64 {
        self.get(shape, Chirality::Free, true)
    }

    /// One-sided shapes of `shape`, counting both members of every mirror pair.
    pub fn one_sided(&self, shape: Shape) -> u64 {
        self.free(shape)
            + self.get(shape, Chirality::OneSided, false)
            + self.get(shape, Chirality::OneSided, true)
    }

    pub fn one_sided_cavitous(&self, shape: Shape) -> u64 {
        self.get(shape, Chirality::Free, true) + self.get(shape, Chirality::OneSided, true)
    }

    /// The report columns after `n` and the string count, in header order.
    pub fn columns(&self, kind: LatticeKind) -> Vec<u64> {
        use Shape::*;

        match kind {
            LatticeKind::Cubic => vec![
                self.free(Open),
                self.free_cavitous(Open),
                self.free(Ouroboros),
                self.free_cavitous(Ouroboros),
                self.one_sided(Open),
                self.one_sided_cavitous(Open),
                self.one_sided(Ouroboros),
                self.one_sided_cavitous(Ouroboros),
            ],
            LatticeKind::Square => vec![
                self.free(Open) - self.free_cavitous(Open),
                self.free(Open),
                self.free(Ouroboros),
                self.one_sided(Open) - self.one_sided_cavitous(Open),
                self.one_sided(Open),
                self.one_sided(Ouroboros),
            ],
        }
    }
}

/// Column titles matching [`Tally::columns`].
pub fn headers(kind: LatticeKind) -> &'static [&'static str] {
    match kind {
        LatticeKind::Cubic => &[
            "Free non-ouroboros snakes",
            "Free non-ouroboros snakes with cavities",
            "Free ouroboroi",
            "Free ouroboroi with cavities",
            "One-sided non-ouroboros snakes",
            "One-sided non-ouroboros snakes with cavities",
            "One-sided ouroboroi",
            "One-sided ouroboroi with cavities",
        ],
        LatticeKind::Square => &[
            "Free strip polyominoes (A333313)",
            "Free non-ouroboros snakes (A002013)",
            "Free ouroboroi",
            "One-sided strips",
            "One-sided non-ouroboros snakes (A151514)",
            "One-sided ouroboroi",
        ],
    }
}
