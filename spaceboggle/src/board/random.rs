//! Random boards, available with the `rng_gen` feature.

use once_cell::sync::Lazy;
use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};

use crate::board::{Board, Dimensions};

/// Letters which may appear on a random board.
const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Relative frequency of each letter of [`LETTERS`] in English text, in hundredths of a
/// percent.
const FREQUENCIES: [u32; 26] = [
    817, 149, 278, 425, 1270, 223, 202, 609, 697, 15, 77, 403, 241, 675, 751, 193, 10, 599,
    633, 906, 276, 98, 236, 15, 197, 7,
];

/// Distribution over indexes into [`LETTERS`].
static LETTER_DIST: Lazy<WeightedIndex<u32>> =
    Lazy::new(|| WeightedIndex::new(&FREQUENCIES[..]).expect("letter frequencies are valid"));

impl<D: Dimensions> Board<D> {
    /// Build a board of the given dimensions filled with random uppercase letters, drawn
    /// with the frequency they appear in English.
    pub fn random<R: Rng + ?Sized>(dim: D, rng: &mut R) -> Self {
        let letters: Vec<char> = LETTERS.chars().collect();
        let drawn: Vec<char> = (0..dim.total_size())
            .map(|_| letters[LETTER_DIST.sample(rng)])
            .collect();
        match Self::new(dim, drawn) {
            Ok(board) => board,
            // One letter was drawn per cell.
            Err(_) => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::board::{hexagonal::HexDimensions, rectangular::RectDimensions, Board, Dimensions};

    #[test]
    fn random_boards_fill_every_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::random(RectDimensions::new(5, 3), &mut rng);
        assert_eq!(board.len(), 15);
        assert!(board.cells().all(|cell| cell.character().is_ascii_uppercase()));

        let board = Board::random(HexDimensions::new(3), &mut rng);
        assert_eq!(board.len(), board.dimensions().total_size());
        let lengths: Vec<usize> = board.rows().iter().map(|row| row.len()).collect();
        assert_eq!(lengths, vec![1, 6, 12]);
    }

    #[test]
    fn same_seed_gives_same_board() {
        let a = Board::random(RectDimensions::default(), &mut StdRng::seed_from_u64(42));
        let b = Board::random(RectDimensions::default(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a.rows(), b.rows());
    }
}
