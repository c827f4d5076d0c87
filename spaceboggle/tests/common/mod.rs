//! Helpers shared by the integration tests.

use rand::{rngs::StdRng, Rng, SeedableRng};
use spaceboggle::{
    board::{Board, Dimensions},
    trie::Trie,
};

/// Small alphabet so that random words are likely to appear on random boards.
pub const ALPHABET: &[char] = &['A', 'B', 'C'];

/// Seeded rng so failures are reproducible.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fill `dim` with letters drawn uniformly from [`ALPHABET`].
pub fn random_board<D: Dimensions>(dim: D, rng: &mut StdRng) -> Board<D> {
    let letters: Vec<char> = (0..dim.total_size())
        .map(|_| ALPHABET[rng.gen_range(0, ALPHABET.len())])
        .collect();
    Board::new(dim, letters).unwrap()
}

/// Random words of 1 to `max_len` letters over [`ALPHABET`].
pub fn random_words(count: usize, max_len: usize, rng: &mut StdRng) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1, max_len + 1);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0, ALPHABET.len())])
                .collect()
        })
        .collect()
}

/// Build a trie from a list of owned words.
pub fn trie(words: &[String]) -> Trie {
    words.iter().collect()
}
