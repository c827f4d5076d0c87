//! Errors used when building a `Board`.

use thiserror::Error;

/// Error returned when the rows given for a board do not form a valid shape for the
/// requested layout. Boards are never partially built: any of these aborts construction.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum BuildError {
    /// There were no rows, or the board would contain no cells.
    #[error("board must contain at least one cell")]
    NoRows,

    /// A row of a rectangular board did not match the width of the first row.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Required length of the row.
        expected: usize,
        /// Length the row actually had.
        actual: usize,
    },

    /// A ring of a hexagonal board did not have `6 * ring` cells (or 1 for the center).
    #[error("ring {ring} has {actual} cells, expected {expected}")]
    RingLength {
        /// Index of the offending ring, counted outward from the center.
        ring: usize,
        /// Required length of the ring.
        expected: usize,
        /// Length the ring actually had.
        actual: usize,
    },

    /// The number of letters given did not match the size of the dimensions.
    #[error("board needs {expected} letters, got {actual}")]
    LetterCount {
        /// Total size of the dimensions.
        expected: usize,
        /// Number of letters supplied.
        actual: usize,
    },

    /// The total number of cells overflows `usize`.
    #[error("board dimensions are too large")]
    TooLarge,
}
