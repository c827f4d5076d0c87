use std::collections::HashSet;

use spaceboggle::{
    board::{hexagonal::HexDimensions, rectangular::RectDimensions, Board, Dimensions},
    solver::{self, find_path, Solver},
    trie::Trie,
};

mod common;

/// Check that the path is simple, stays on the board, only steps between neighbors, and
/// spells `word`.
fn assert_witness<D: Dimensions>(board: &Board<D>, word: &str, path: &[D::Coordinate]) {
    let dim = board.dimensions();
    let spelled: String = path
        .iter()
        .map(|coord| board.get_letter(coord).unwrap())
        .collect();
    assert_eq!(spelled, word);
    let distinct: HashSet<usize> = path.iter().map(|coord| dim.linearize(coord)).collect();
    assert_eq!(distinct.len(), path.len(), "path for {} repeats a cell", word);
    for step in path.windows(2) {
        assert!(
            dim.is_neighbor(&step[0], &step[1]),
            "{:?} and {:?} are not adjacent",
            step[0],
            step[1]
        );
    }
}

/// Every found word is in the dictionary and traceable; every traceable dictionary word
/// is found.
fn check_solution<D: Dimensions>(board: &Board<D>, words: &[String]) {
    let trie = common::trie(words);
    let found = solver::solve(board, &trie);
    for word in &found {
        assert!(trie.contains(word), "{} is not in the dictionary", word);
        let path = find_path(board, word).expect("found word has no path");
        assert_witness(board, word, &path);
        assert!(word.chars().count() <= board.len());
    }
    for word in words {
        assert_eq!(
            found.contains(word),
            find_path(board, word).is_some(),
            "disagreement on {}",
            word
        );
    }
}

#[test]
fn rectangular_boards_are_sound_and_complete() {
    let mut rng = common::rng(1);
    for &(w, h) in &[(1, 1), (2, 2), (3, 3), (4, 4), (5, 2), (1, 6)] {
        let board = common::random_board(RectDimensions::new(w, h), &mut rng);
        let words = common::random_words(200, 7, &mut rng);
        check_solution(&board, &words);
    }
}

#[test]
fn hexagonal_boards_are_sound_and_complete() {
    let mut rng = common::rng(2);
    for &layers in &[1, 2, 3] {
        let board = common::random_board(HexDimensions::new(layers), &mut rng);
        let words = common::random_words(200, 7, &mut rng);
        check_solution(&board, &words);
    }
}

#[test]
fn solving_twice_gives_same_words() {
    let mut rng = common::rng(3);
    let board = common::random_board(RectDimensions::new(4, 4), &mut rng);
    let trie = common::trie(&common::random_words(300, 6, &mut rng));
    assert_eq!(solver::solve(&board, &trie), solver::solve(&board, &trie));
}

#[test]
fn words_longer_than_board_are_never_found() {
    let board: Board<RectDimensions> = Board::from_rows(&["AA", "AA"]).unwrap();
    let trie = Trie::build(&["A", "AA", "AAA", "AAAA", "AAAAA", "AAAAAA"]);
    let mut found: Vec<_> = solver::solve(&board, &trie).into_iter().collect();
    found.sort();
    assert_eq!(found, vec!["A", "AA", "AAA", "AAAA"]);
}

#[test]
fn square_example() {
    let board: Board<RectDimensions> = Board::from_rows(&["AB", "CD"]).unwrap();
    let trie = Trie::build(&["AB", "AC", "ABD", "ABDC"]);
    let found = solver::solve(&board, &trie);
    let expected: HashSet<String> = ["AB", "AC", "ABD", "ABDC"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn hexagon_example() {
    let board: Board<HexDimensions> = Board::from_rows(&["A", "BCDEFG"]).unwrap();
    let trie = Trie::build(&["AB", "ABC"]);
    let found = solver::solve(&board, &trie);
    assert_eq!(found.len(), 2);
    assert!(found.contains("AB"));
    assert!(found.contains("ABC"));
}

#[test]
fn min_length_is_a_filter_on_full_solution() {
    let mut rng = common::rng(4);
    let board = common::random_board(HexDimensions::new(3), &mut rng);
    let trie = common::trie(&common::random_words(300, 6, &mut rng));
    let all = solver::solve(&board, &trie);
    let long = Solver::new(&board, &trie).min_length(4).solve();
    let expected: HashSet<String> = all
        .into_iter()
        .filter(|word| word.chars().count() >= 4)
        .collect();
    assert_eq!(long, expected);
}
