//! Types that make up the game board.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use log::debug;

use self::grid::Grid;
pub use self::{
    dimensions::{Coordinate, Dimensions, NeighborIter, NeighborIterState, RowLayout},
    errors::BuildError,
};

pub mod common;
mod dimensions;
mod errors;
mod grid;
pub mod hexagonal;
#[cfg(feature = "rng_gen")]
mod random;
pub mod rectangular;

/// A single letter on the board along with its location.
///
/// Cells are compared, hashed and ordered by their coordinate alone. Each coordinate holds
/// exactly one letter on a given board, so the letter carries no extra identity.
#[derive(Debug, Copy, Clone)]
pub struct Cell<C> {
    /// Letter printed on this cell.
    character: char,
    /// Location of this cell on the board.
    coord: C,
}

impl<C> Cell<C> {
    /// Construct a cell holding `character` at `coord`.
    pub fn new(character: char, coord: C) -> Self {
        Self { character, coord }
    }

    /// The letter on this cell.
    pub fn character(&self) -> char {
        self.character
    }

    /// The coordinate of this cell.
    pub fn coord(&self) -> &C {
        &self.coord
    }

    /// Extract the coordinate of this cell.
    pub fn into_coord(self) -> C {
        self.coord
    }
}

impl<C: PartialEq> PartialEq for Cell<C> {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl<C: Eq> Eq for Cell<C> {}

impl<C: Hash> Hash for Cell<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state)
    }
}

impl<C: PartialOrd> PartialOrd for Cell<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.coord.partial_cmp(&other.coord)
    }
}

impl<C: Ord> Ord for Cell<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coord.cmp(&other.coord)
    }
}

/// A board of letters laid out according to some [`Dimensions`]. Immutable once built.
#[derive(Debug, Clone)]
pub struct Board<D: Dimensions> {
    /// Letters of the board.
    grid: Grid<D>,
}

impl<D: Dimensions> Board<D> {
    /// Build a board from letters given in linear order of the dimensions. Fails unless
    /// there is exactly one letter for every cell.
    pub fn new<L: IntoIterator<Item = char>>(dim: D, letters: L) -> Result<Self, BuildError> {
        Ok(Self {
            grid: Grid::new(dim, letters)?,
        })
    }

    /// Build a board from rows of text. The shape of the rows picks out the dimensions of
    /// the board, and must be valid for the layout `D`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BuildError>
    where
        D: RowLayout,
    {
        let lengths: Vec<usize> = rows.iter().map(|row| row.as_ref().chars().count()).collect();
        let dim = D::from_row_lengths(&lengths)?;
        debug!("building {:?} board from {} rows", dim, rows.len());
        Self::new(dim, rows.iter().flat_map(|row| row.as_ref().chars()))
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &D {
        &self.grid.dim
    }

    /// Total number of cells on the board.
    pub fn len(&self) -> usize {
        self.grid.letters.len()
    }

    /// Boards always have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.grid.letters.is_empty()
    }

    /// Get the cell at the given coordinate. Returns `None` if the coordinate is out of
    /// bounds. The returned cell's coordinate is the canonical form of `coord`, which may
    /// differ for layouts that wrap, such as ring positions on a hexagonal board.
    pub fn get_cell(&self, coord: &D::Coordinate) -> Option<Cell<D::Coordinate>> {
        self.dimensions()
            .try_linearize(coord)
            .map(|idx| self.cell_at(idx))
    }

    /// Get the letter at the given coordinate, if it is in bounds.
    pub fn get_letter(&self, coord: &D::Coordinate) -> Option<char> {
        self.grid.get(coord)
    }

    /// Iterate every cell on the board exactly once, in linear order.
    pub fn cells(&self) -> impl '_ + Iterator<Item = Cell<D::Coordinate>> {
        (0..self.len()).map(move |idx| self.cell_at(idx))
    }

    /// Iterate the cells adjacent to the given coordinate.
    pub fn neighbors(
        &self,
        coord: D::Coordinate,
    ) -> impl '_ + Iterator<Item = Cell<D::Coordinate>> {
        let grid = &self.grid;
        self.dimensions()
            .neighbors(coord)
            .map(move |coord| Cell::new(grid[grid.dim.linearize(&coord)], coord))
    }

    /// Get the rows of text this board would be built from.
    pub fn rows(&self) -> Vec<String>
    where
        D: RowLayout,
    {
        let mut letters = self.grid.letters.iter();
        self.dimensions()
            .row_lengths()
            .into_iter()
            .map(|len| letters.by_ref().take(len).collect())
            .collect()
    }

    /// Get the letter at a linear index. Panics if out of bounds.
    pub(crate) fn letter_at(&self, idx: usize) -> char {
        self.grid[idx]
    }

    fn cell_at(&self, idx: usize) -> Cell<D::Coordinate> {
        Cell::new(self.grid[idx], self.dimensions().un_linearize(idx))
    }
}

impl<D: RowLayout> fmt::Display for Board<D> {
    /// Writes one row per line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}
