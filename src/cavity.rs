//! Cavity detection by flood fill.
//!
//! A cavity is a pocket of empty cells that cannot be reached from outside
//! the shape by face-adjacent moves. The fill runs over the bounding box grown
//! by one cell on every side, so its minimum corner is always empty and
//! connected to the outside.

use crate::{
    lattice::{Lattice, Pt},
    turn::Turn,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Cell {
    Empty,
    Occupied,
    Flooded,
}

/// Reusable flood-fill scratch space.
#[derive(Debug)]
pub struct FloodFill<const D: usize> {
    lo: [i32; D],
    dims: [usize; D],
    strides: [usize; D],
    grid: Vec<Cell>,
    stack: Vec<usize>,
}

impl<const D: usize> Default for FloodFill<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> FloodFill<D> {
    pub fn new() -> Self {
        Self {
            lo: [0; D],
            dims: [0; D],
            strides: [0; D],
            grid: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Does the shape occupying `path` enclose any empty cell?
    ///
    /// `turns` is the string `path` was walked from, used only by the
    /// lattice's cheap rejection test.
    pub fn has_cavities<L>(&mut self, path: &[Pt<D>], turns: &[Turn]) -> bool
    where
        L: Lattice<D>,
    {
        let Some(&first) = path.first() else {
            return false;
        };

        let mut lo = first.0;
        let mut hi = first.0;
        for p in path {
            for k in 0..D {
                lo[k] = lo[k].min(p.0[k]);
                hi[k] = hi[k].max(p.0[k]);
            }
        }

        let mut extents = [0usize; D];
        for k in 0..D {
            extents[k] = (hi[k] - lo[k] + 1) as usize;
        }

        // A cavity cell needs shape on both sides of it along every axis.
        if extents.iter().any(|&e| e < 3) {
            return false;
        }
        if L::cannot_enclose(turns, &extents, path.len()) {
            return false;
        }

        self.reset(lo, extents, path);

        if !self.has_corner_witnesses(path) {
            return false;
        }

        let flooded = self.flood();
        let empty = self.grid.len() - path.len();
        flooded < empty
    }

    fn reset(&mut self, lo: [i32; D], extents: [usize; D], path: &[Pt<D>]) {
        let mut volume = 1;
        for k in 0..D {
            self.lo[k] = lo[k] - 1;
            self.dims[k] = extents[k] + 2;
            self.strides[k] = volume;
            volume *= self.dims[k];
        }

        self.grid.clear();
        self.grid.resize(volume, Cell::Empty);
        for p in path {
            let i = self.index(p);
            self.grid[i] = Cell::Occupied;
        }
    }

    #[inline]
    fn index(&self, p: &Pt<D>) -> usize {
        let mut i = 0;
        for k in 0..D {
            i += (p.0[k] - self.lo[k]) as usize * self.strides[k];
        }
        i
    }

    /// Every cavity has, for each sign vector `σ`, an empty cell `c` with
    /// `c + σ_k e_k` occupied along every axis `k`: the cavity cell that is
    /// extreme in direction `σ`. Such cells are next to the shape, so only
    /// cells one step off a shape cell are candidates.
    fn has_corner_witnesses(&self, path: &[Pt<D>]) -> bool {
        (0..1u32 << D).all(|signs| {
            let sign = |k: usize| if signs >> k & 1 == 0 { 1 } else { -1 };

            path.iter().any(|p| {
                let c = p.offset(0, -sign(0));
                self.grid[self.index(&c)] == Cell::Empty
                    && (1..D).all(|k| self.grid[self.index(&c.offset(k, sign(k)))] == Cell::Occupied)
            })
        })
    }

    /// Fill from the minimum corner, returning the number of cells reached.
    fn flood(&mut self) -> usize {
        self.stack.clear();
        self.stack.push(0);
        self.grid[0] = Cell::Flooded;
        let mut flooded = 1;

        while let Some(i) = self.stack.pop() {
            for k in 0..D {
                let stride = self.strides[k];
                let along = (i / stride) % self.dims[k];

                if along > 0 {
                    flooded += self.visit(i - stride);
                }
                if along + 1 < self.dims[k] {
                    flooded += self.visit(i + stride);
                }
            }
        }

        flooded
    }

    #[inline]
    fn visit(&mut self, i: usize) -> usize {
        if self.grid[i] == Cell::Empty {
            self.grid[i] = Cell::Flooded;
            self.stack.push(i);
            1
        } else {
            0
        }
    }
}
