// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Finds every dictionary word that can be traced on a Boggle board.
//!
//! The board is generic over its [`Dimensions`][board::Dimensions], which decide how cells
//! are laid out and which cells are adjacent. Two topologies are provided:
//! [`rectangular`][board::rectangular] grids with the 8-cell Moore neighborhood and
//! [`hexagonal`][board::hexagonal] boards made of concentric rings around a center cell.
//!
//! Words are looked up in a [`Trie`][trie::Trie], which the [`solver`] walks one letter
//! at a time alongside the board so that any path which is not a dictionary prefix is
//! abandoned immediately.
//!
//! ```
//! use spaceboggle::{board::{rectangular::RectDimensions, Board}, solver, trie::Trie};
//!
//! let board: Board<RectDimensions> = Board::from_rows(&["AB", "CD"]).unwrap();
//! let trie: Trie = ["AB", "ABDC", "AA"].iter().collect();
//! let found = solver::solve(&board, &trie);
//! assert!(found.contains("ABDC"));
//! assert!(!found.contains("AA"));
//! ```

pub mod board;
pub mod solver;
pub mod trie;
