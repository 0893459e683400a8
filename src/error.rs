//! Errors surfaced by board construction and the transition rule.

/// Why a seed cannot become a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    /// The seed has no rows, so the grid dimensions are undefined.
    #[error("seed has no rows")]
    Empty,

    /// The seed's rows hold no cells.
    #[error("seed rows hold no cells")]
    EmptyRow,

    /// The grid is wider or taller than a [`Pos`](crate::Pos) component can address.
    #[error("seed of {width}x{height} cells exceeds the {max} cells limit per side")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    /// A row differs in length from the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid seed: {0}")]
    InvalidSeed(#[from] SeedError),

    /// A neighbor count outside of `0..=8` was handed to the rule.
    #[error("invalid argument: {live_neighbors} live neighbors is outside of 0..=8")]
    InvalidArgument { live_neighbors: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
