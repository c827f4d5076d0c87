//! Finds the words on a board.
//!
//! Every cell is tried as the start of a path. From there the search walks the board and
//! the [`Trie`] together, one letter at a time, and abandons any path whose letters are
//! not a prefix of some dictionary word. A path never visits the same cell twice.

use std::collections::HashSet;

use log::{debug, trace};

use crate::{
    board::{Board, Dimensions},
    trie::{Trie, TrieNode},
};

/// Find every word in `trie` which can be spelled by a path of adjacent, distinct cells on
/// `board`.
pub fn solve<D: Dimensions>(board: &Board<D>, trie: &Trie) -> HashSet<String> {
    Solver::new(board, trie).solve()
}

/// Same as [`solve`], but searches from each starting cell in parallel on the rayon
/// thread pool.
#[cfg(feature = "parallel")]
pub fn solve_parallel<D>(board: &Board<D>, trie: &Trie) -> HashSet<String>
where
    D: Dimensions + Sync,
{
    Solver::new(board, trie).solve_parallel()
}

/// Configurable word search over a single board and dictionary.
#[derive(Debug)]
pub struct Solver<'a, D: Dimensions> {
    board: &'a Board<D>,
    trie: &'a Trie,
    /// Shortest word, in letters, which will be reported.
    min_length: usize,
}

impl<'a, D: Dimensions> Solver<'a, D> {
    /// Create a solver for `board` which reports words of any length.
    pub fn new(board: &'a Board<D>, trie: &'a Trie) -> Self {
        Self {
            board,
            trie,
            min_length: 1,
        }
    }

    /// Only report words of at least `len` letters. Classic Boggle only scores words of
    /// 3 or more.
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    /// Run the search from every cell and collect all the words found.
    pub fn solve(&self) -> HashSet<String> {
        let mut search = Search::new(self.board, self.min_length);
        let dim = self.board.dimensions();
        for start in 0..self.board.len() {
            search.visit(start, dim.un_linearize(start), self.trie.root());
        }
        debug!(
            "found {} words on a board of {} cells",
            search.found.len(),
            self.board.len()
        );
        search.found
    }

    /// Same as [`solve`][Solver::solve], but each starting cell is searched as a separate
    /// rayon task and the results are merged at the end.
    #[cfg(feature = "parallel")]
    pub fn solve_parallel(&self) -> HashSet<String>
    where
        D: Sync,
    {
        use rayon::prelude::*;

        let found = (0..self.board.len())
            .into_par_iter()
            .map(|start| {
                let mut search = Search::new(self.board, self.min_length);
                let coord = self.board.dimensions().un_linearize(start);
                search.visit(start, coord, self.trie.root());
                search.found
            })
            .reduce(HashSet::new, |mut all, part| {
                all.extend(part);
                all
            });
        debug!(
            "found {} words on a board of {} cells",
            found.len(),
            self.board.len()
        );
        found
    }
}

/// State of a depth first search. `used` and `prefix` always describe the current path:
/// a cell is marked when the path enters it and cleared again when the path backs out.
struct Search<'a, D: Dimensions> {
    board: &'a Board<D>,
    min_length: usize,
    /// Cells on the current path, by linear index.
    used: Vec<bool>,
    /// Letters of the current path.
    prefix: String,
    /// Number of cells on the current path. Tracked separately since `prefix` may hold
    /// multi-byte characters.
    depth: usize,
    found: HashSet<String>,
}

impl<'a, D: Dimensions> Search<'a, D> {
    fn new(board: &'a Board<D>, min_length: usize) -> Self {
        Self {
            board,
            min_length,
            used: vec![false; board.len()],
            prefix: String::new(),
            depth: 0,
            found: HashSet::new(),
        }
    }

    /// Extend the current path into the cell at `idx`, located at `coord`, with `node`
    /// being the trie node for the path so far.
    fn visit(&mut self, idx: usize, coord: D::Coordinate, node: &TrieNode) {
        let letter = self.board.letter_at(idx);
        let node = match node.child(letter) {
            Some(node) => node,
            None => return,
        };

        self.used[idx] = true;
        self.prefix.push(letter);
        self.depth += 1;

        if node.is_word_end()
            && self.depth >= self.min_length
            && !self.found.contains(&self.prefix)
        {
            trace!("found {}", self.prefix);
            self.found.insert(self.prefix.clone());
        }

        // A leaf has no continuations, so there's no point looking at the neighbors.
        if !node.is_leaf() {
            let board = self.board;
            let dim = board.dimensions();
            for neighbor in dim.neighbors(coord) {
                let next = dim.linearize(&neighbor);
                if !self.used[next] {
                    self.visit(next, neighbor, node);
                }
            }
        }

        self.depth -= 1;
        self.prefix.pop();
        self.used[idx] = false;
    }
}

/// Find a path of adjacent, distinct cells spelling `word` on `board`. Returns the
/// coordinates of the path in order, or `None` if the word can't be traced. The empty
/// word has no path.
pub fn find_path<D: Dimensions>(board: &Board<D>, word: &str) -> Option<Vec<D::Coordinate>> {
    let letters: Vec<char> = word.chars().collect();
    let first = *letters.first()?;
    let mut path = Vec::with_capacity(letters.len());
    let mut used = vec![false; board.len()];
    let dim = board.dimensions();
    for start in 0..board.len() {
        if board.letter_at(start) == first
            && trace_path(board, &letters, start, dim.un_linearize(start), &mut used, &mut path)
        {
            return Some(path);
        }
    }
    None
}

/// Try to continue `path` into the cell at `idx`, located at `coord`, which must hold
/// `letters[0]`. On success `path` holds the full route; otherwise `path` and `used` are
/// left unchanged.
fn trace_path<D: Dimensions>(
    board: &Board<D>,
    letters: &[char],
    idx: usize,
    coord: D::Coordinate,
    used: &mut [bool],
    path: &mut Vec<D::Coordinate>,
) -> bool {
    used[idx] = true;
    path.push(coord.clone());
    let rest = &letters[1..];
    let done = match rest.first() {
        None => true,
        Some(&next_letter) => {
            let dim = board.dimensions();
            dim.neighbors(coord).any(|neighbor| {
                let next = dim.linearize(&neighbor);
                !used[next]
                    && board.letter_at(next) == next_letter
                    && trace_path(board, rest, next, neighbor, used, path)
            })
        }
    };
    if !done {
        path.pop();
        used[idx] = false;
    }
    done
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{
        hexagonal::{self, HexDimensions},
        rectangular::{self, RectDimensions},
    };

    fn words(found: &HashSet<String>) -> Vec<&str> {
        let mut words: Vec<&str> = found.iter().map(String::as_str).collect();
        words.sort();
        words
    }

    #[test]
    fn finds_every_traceable_word_on_square() {
        let board: Board<RectDimensions> = Board::from_rows(&["AB", "CD"]).unwrap();
        let trie = Trie::build(&["AB", "AC", "ABD", "ABDC"]);
        assert_eq!(words(&solve(&board, &trie)), vec!["AB", "ABD", "ABDC", "AC"]);
    }

    #[test]
    fn cells_are_not_reused() {
        let board: Board<RectDimensions> = Board::from_rows(&["AB", "CD"]).unwrap();
        let trie = Trie::build(&["ABA", "AA", "DCBA", "BAB"]);
        assert_eq!(words(&solve(&board, &trie)), vec!["DCBA"]);
    }

    #[test]
    fn repeated_letters_use_distinct_cells() {
        let board: Board<RectDimensions> = Board::from_rows(&["AA", "XA"]).unwrap();
        let trie = Trie::build(&["AAA", "AAAA", "AXA"]);
        assert_eq!(words(&solve(&board, &trie)), vec!["AAA", "AXA"]);
    }

    #[test]
    fn hexagonal_center_and_ring() {
        let board: Board<HexDimensions> = Board::from_rows(&["A", "BCDEFG"]).unwrap();
        let trie = Trie::build(&["AB", "ABC", "BE", "GB", "BAE"]);
        // B and E are opposite each other on ring 1, so only reachable through the center.
        assert_eq!(words(&solve(&board, &trie)), vec!["AB", "ABC", "BAE", "GB"]);
    }

    #[test]
    fn empty_word_is_never_found() {
        let board: Board<RectDimensions> = Board::from_rows(&["A"]).unwrap();
        let trie = Trie::build(&["", "A"]);
        assert_eq!(words(&solve(&board, &trie)), vec!["A"]);
    }

    #[test]
    fn min_length_filters_short_words() {
        let board: Board<RectDimensions> = Board::from_rows(&["CAT", "XXS"]).unwrap();
        let trie = Trie::build(&["A", "AT", "CAT", "CATS"]);
        let found = Solver::new(&board, &trie).min_length(3).solve();
        assert_eq!(words(&found), vec!["CAT", "CATS"]);
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let board: Board<RectDimensions> = Board::from_rows(&["AB", "CD"]).unwrap();
        assert!(solve(&board, &Trie::new()).is_empty());
    }

    #[test]
    fn find_path_traces_word() {
        let board: Board<RectDimensions> = Board::from_rows(&["AB", "CD"]).unwrap();
        let path = find_path(&board, "ABDC").unwrap();
        assert_eq!(
            path,
            vec![
                rectangular::Coordinate::new(0, 0),
                rectangular::Coordinate::new(1, 0),
                rectangular::Coordinate::new(1, 1),
                rectangular::Coordinate::new(0, 1),
            ]
        );
        assert_eq!(find_path(&board, "ABA"), None);
        assert_eq!(find_path(&board, "AZ"), None);
        assert_eq!(find_path(&board, ""), None);
    }

    #[test]
    fn find_path_backtracks_from_dead_ends() {
        // The E to the right of the S is tried first but isn't next to the A.
        let board: Board<RectDimensions> = Board::from_rows(&["SE", "EX", "AX"]).unwrap();
        assert_eq!(
            find_path(&board, "SEA"),
            Some(vec![
                rectangular::Coordinate::new(0, 0),
                rectangular::Coordinate::new(0, 1),
                rectangular::Coordinate::new(0, 2),
            ])
        );
        let board: Board<HexDimensions> = Board::from_rows(&["A", "BCDEFG"]).unwrap();
        assert_eq!(
            find_path(&board, "EAB"),
            Some(vec![
                hexagonal::Coordinate::new(1, 3),
                hexagonal::Coordinate::CENTER,
                hexagonal::Coordinate::new(1, 0),
            ])
        );
    }

    #[test]
    fn paths_cross_the_seam_of_a_ring() {
        // R, S and H sit at positions 10, 11 and 0 of the second ring.
        let board: Board<HexDimensions> =
            Board::from_rows(&["A", "BCDEFG", "HIJKLMNOPQRS"]).unwrap();
        let trie = Trie::build(&["RSHB", "RHS"]);
        assert_eq!(words(&solve(&board, &trie)), vec!["RSHB"]);
        assert_eq!(
            find_path(&board, "RSHB"),
            Some(vec![
                hexagonal::Coordinate::new(2, 10),
                hexagonal::Coordinate::new(2, 11),
                hexagonal::Coordinate::new(2, 0),
                hexagonal::Coordinate::new(1, 0),
            ])
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let board: Board<HexDimensions> =
            Board::from_rows(&["A", "BCDEFG", "HIJKLMNOPQRS"]).unwrap();
        let trie = Trie::build(&["AB", "ABC", "BHI", "SGA", "AGS", "ZZ", "CBAEF"]);
        assert_eq!(solve(&board, &trie), solve_parallel(&board, &trie));
    }
}
