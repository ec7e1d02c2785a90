//! Enumeration of polycube and polyomino snakes.
//!
//! A snake is spelled by looking down one end and recording the turn taken
//! before each step into the next cell, so a snake of `n` cells is a string of
//! `n - 1` letters. Each shape is counted once, through its smallest spelling
//! over all rotations, reflections and reversals.

#[cfg(test)]
mod test;

pub mod cavity;
pub mod classify;
pub mod error;
pub mod lattice;
pub mod odometer;
pub mod search;
pub mod stopwatch;
pub mod tally;
pub mod trace;
pub mod turn;

pub use classify::{Chirality, Classifier, CubeClassifier, Outcome, Shape, Snake, SquareClassifier};
pub use error::{Error, Result};
pub use lattice::{Cubic, Lattice, LatticeKind, Pt, Square};
pub use odometer::Odometer;
pub use search::count_snakes;
pub use tally::Tally;
pub use turn::{Turn, TurnString};
