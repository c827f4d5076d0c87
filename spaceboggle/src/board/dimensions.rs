use std::{fmt::Debug, hash::Hash};

use crate::board::BuildError;

/// Trait for the locations of cells in [`Dimensions`].
/// Requires [`Debug`] so out of bounds coordinates can be reported on panic.
/// Coordinates are copied around freely during a search, so they should be cheap to
/// clone.
pub trait Coordinate: Debug + Clone + Eq + Hash {}

/// The topology of a board: how many cells it has, how they are laid out in storage, and
/// which cells touch each other.
pub trait Dimensions: Debug {
    /// The type used to identify cells on the board.
    type Coordinate: Coordinate;

    /// Type used in the neighbor iterator.
    type NeighborIterState: NeighborIterState<Dimensions = Self>;

    /// Number of cells on a board with these dimensions.
    fn total_size(&self) -> usize;

    /// Convert a coordinate to a linear index within this dimension.
    /// Panics if the coordinate is out of range for the dimension.
    fn linearize(&self, coord: &Self::Coordinate) -> usize {
        match self.try_linearize(coord) {
            Some(v) => v,
            None => panic!("{:?} is out of bounds for {:?}", coord, self),
        }
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Returns `None` if the coordinate lies outside the board. Layouts which wrap a
    /// coordinate onto another cell return that cell's index.
    fn try_linearize(&self, coord: &Self::Coordinate) -> Option<usize>;

    /// Get back the canonical coordinate of a linear index. Linear order is the order
    /// cells are enumerated in. Panics if idx is >= total_size.
    fn un_linearize(&self, idx: usize) -> Self::Coordinate;

    /// Iterate the neighbors of the given coordinate. Each neighbor is produced at most
    /// once and a coordinate is never its own neighbor. Out of bounds coordinates have no
    /// neighbors.
    fn neighbors(&self, coord: Self::Coordinate) -> NeighborIter<'_, Self::NeighborIterState> {
        NeighborIter {
            dim: self,
            state: Self::NeighborIterState::start(self, coord),
        }
    }

    /// Return true if the given coordinates are adjacent. Walks the neighbor iterator.
    fn is_neighbor(&self, c1: &Self::Coordinate, c2: &Self::Coordinate) -> bool {
        self.neighbors(c1.clone()).any(|n| &n == c2)
    }
}

/// Trait for [`Dimensions`] which can be built from a list of rows of text, such as
/// the lines of a board file. Each row is laid out in linear order, so the letters of
/// all rows concatenated are exactly the board's cells by linear index.
pub trait RowLayout: Dimensions + Sized {
    /// Build dimensions from the lengths of each row, in characters. Fails if the rows
    /// do not form a valid shape for this layout.
    fn from_row_lengths(lengths: &[usize]) -> Result<Self, BuildError>;

    /// Get the lengths of each row of this layout. The inverse of [`from_row_lengths`].
    ///
    /// [`from_row_lengths`]: RowLayout::from_row_lengths
    fn row_lengths(&self) -> Vec<usize>;
}

/// State type for the neighbor iterator. Kept separate from the iterator so the state
/// doesn't need to borrow the dimensions it walks.
pub trait NeighborIterState {
    type Dimensions: Dimensions + ?Sized;

    /// Construct an instance of this iter state given the arguments.
    fn start(dim: &Self::Dimensions, coord: <Self::Dimensions as Dimensions>::Coordinate) -> Self;

    /// Get the next item given a reference to the parent type.
    fn next(
        &mut self,
        dim: &Self::Dimensions,
    ) -> Option<<Self::Dimensions as Dimensions>::Coordinate>;
}

/// Iterator over the neighbors of a coordinate.
pub struct NeighborIter<'a, S: NeighborIterState> {
    dim: &'a S::Dimensions,
    state: S,
}

impl<'a, S: NeighborIterState> Iterator for NeighborIter<'a, S> {
    type Item = <S::Dimensions as Dimensions>::Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.next(self.dim)
    }
}
