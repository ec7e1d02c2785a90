use thiserror::Error;

use crate::turn::Turn;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The classifier's path arena is sized for exactly one string length.
    #[error("classifier holds strings of {expected} letters, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("snakes need at least 2 letters (3 cells), got {len}")]
    TooShort { len: usize },

    #[error("unknown turn letter {0:?}")]
    UnknownTurn(char),

    #[error("turn {turn} does not exist on the {lattice} lattice")]
    OffLattice { turn: Turn, lattice: &'static str },
}
