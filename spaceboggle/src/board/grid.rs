//! Defines the storage for the letters on a board.

use std::{borrow::Borrow, ops::Index};

use crate::board::{BuildError, Dimensions};

/// Letters of a board stored by the linear index of their cell.
#[derive(Debug, Clone)]
pub(super) struct Grid<D> {
    /// Dimensions of this board.
    pub(super) dim: D,
    /// Letters that make up this board, indexed by `dim.linearize`.
    pub(super) letters: Box<[char]>,
}

impl<D: Dimensions> Grid<D> {
    /// Lay out the given letters in linear order. Fails unless there is exactly one letter
    /// per cell.
    pub(super) fn new<L>(dim: D, letters: L) -> Result<Self, BuildError>
    where
        L: IntoIterator<Item = char>,
    {
        let letters: Box<[char]> = letters.into_iter().collect();
        let expected = dim.total_size();
        if letters.len() != expected {
            return Err(BuildError::LetterCount {
                expected,
                actual: letters.len(),
            });
        }
        Ok(Self { dim, letters })
    }

    /// Get the letter at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<D::Coordinate>>(&self, coord: B) -> Option<char> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.letters.get(i))
            .copied()
    }
}

impl<D> Index<usize> for Grid<D> {
    type Output = char;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.letters[idx]
    }
}
