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

//! Implements a hexagonal board made of concentric rings around a single center cell.
//!
//! Ring 0 is the center cell. Ring `l > 0` contains `6 * l` cells, numbered `0..6l` in
//! angular order. Positions `p` where `p % l == 0` are corners, lying on the six axes
//! that separate the sides of the hexagon.

use std::fmt;

use crate::board::{
    BuildError, Coordinate as CoordinateTrait, Dimensions, NeighborIterState, RowLayout,
};

/// The coordinates of a cell in a hexagonal board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Ring containing the cell, counted outward from the center.
    pub layer: usize,
    /// Index of the cell within its ring.
    pub position: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `layer` and `position`.
    pub fn new(layer: usize, position: usize) -> Self {
        Self { layer, position }
    }

    /// The center cell.
    pub const CENTER: Self = Self {
        layer: 0,
        position: 0,
    };

    /// Returns this coordinate with the position reduced modulo the size of its ring.
    pub fn normalized(self) -> Self {
        Self {
            layer: self.layer,
            position: self.position % ring_size(self.layer),
        }
    }

    /// Whether this cell lies on one of the six axes from the center. The center itself
    /// counts as a corner.
    pub fn is_corner(&self) -> bool {
        self.layer == 0 || self.position % self.layer == 0
    }
}

impl CoordinateTrait for Coordinate {}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(layer, position)` pair.
    fn from((layer, position): (usize, usize)) -> Self {
        Self::new(layer, position)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(layer, position)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.layer, coord.position)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.layer, self.position)
    }
}

/// Number of cells in the given ring.
pub fn ring_size(layer: usize) -> usize {
    if layer == 0 {
        1
    } else {
        6 * layer
    }
}

/// Number of cells in the rings before `layer`, which is also the linear index of
/// `(layer, 0)`.
fn ring_start(layer: usize) -> usize {
    if layer == 0 {
        0
    } else {
        1 + 3 * layer * (layer - 1)
    }
}

/// Compute the coordinates adjacent to `coord`, without regard to how many rings the
/// board has. The position of `coord` is taken modulo its ring size. Every position
/// returned is already reduced into its ring.
///
/// The angular position `p` on ring `l` lines up with `(l + 1) * p / l` on the ring
/// outside and `(l - 1) * p / l` on the ring inside. A corner touches three cells of the
/// outer ring and one of the inner ring, while a cell along a side touches two of each.
pub fn ring_neighbors(coord: Coordinate) -> RingNeighbors {
    let coord = coord.normalized();
    let Coordinate { layer, position } = coord;
    let mut found = RingNeighbors::empty();
    if layer == 0 {
        for p in 0..ring_size(1) {
            found.push(1, p);
        }
        return found;
    }

    let r_out = (layer + 1) * position / layer;
    let r_in = (layer - 1) * position / layer;
    let outer = layer + 1;
    let inner = layer - 1;
    let outer_size = ring_size(outer);
    let same_size = ring_size(layer);
    if coord.is_corner() {
        found.push(outer, r_out + outer_size - 1);
        found.push(outer, r_out);
        found.push(outer, r_out + 1);
        found.push(layer, position + same_size - 1);
        found.push(layer, position + 1);
        found.push(inner, r_in);
    } else {
        found.push(outer, r_out);
        found.push(outer, r_out + 1);
        found.push(layer, position + same_size - 1);
        found.push(layer, position + 1);
        found.push(inner, r_in);
        found.push(inner, r_in + 1);
    }
    found
}

/// The cells around a hexagonal cell, held inline. A cell never has more than 6.
#[derive(Debug, Clone)]
pub struct RingNeighbors {
    coords: [Coordinate; 6],
    len: usize,
    next: usize,
}

impl RingNeighbors {
    fn empty() -> Self {
        Self {
            coords: [Coordinate::CENTER; 6],
            len: 0,
            next: 0,
        }
    }

    /// Add `(layer, position)`, reducing the position into its ring. Each neighbor is
    /// reported once.
    fn push(&mut self, layer: usize, position: usize) {
        let neighbor = Coordinate::new(layer, position % ring_size(layer));
        if !self.coords[..self.len].contains(&neighbor) {
            self.coords[self.len] = neighbor;
            self.len += 1;
        }
    }
}

impl Iterator for RingNeighbors {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.next < self.len {
            self.next += 1;
            Some(self.coords[self.next - 1])
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RingNeighbors {}

/// Hexagonal dimensions, measured in rings.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HexDimensions {
    /// Number of rings, including the center. Always at least 1.
    layers: usize,
}

impl HexDimensions {
    /// Create new [`HexDimensions`] with the given number of rings, including the center.
    /// Panics if `layers` is 0 or the board would be too large to index.
    pub fn new(layers: usize) -> Self {
        match Self::try_new(layers) {
            Ok(dim) => dim,
            Err(err) => panic!("invalid HexDimensions with {} layers: {}", layers, err),
        }
    }

    /// Create new [`HexDimensions`] with the given number of rings, including the center.
    /// Fails if `layers` is 0 or the board would be too large to index.
    pub fn try_new(layers: usize) -> Result<Self, BuildError> {
        if layers == 0 {
            return Err(BuildError::NoRows);
        }
        // Total size is 1 + 3 * layers * (layers - 1).
        layers
            .checked_mul(layers - 1)
            .and_then(|n| n.checked_mul(3))
            .and_then(|n| n.checked_add(1))
            .map(|_| Self { layers })
            .ok_or(BuildError::TooLarge)
    }

    /// Number of rings, including the center.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Index of the outermost ring.
    pub fn max_layer(&self) -> usize {
        self.layers - 1
    }
}

impl Dimensions for HexDimensions {
    type Coordinate = Coordinate;

    type NeighborIterState = HexNeighbors;

    fn total_size(&self) -> usize {
        ring_start(self.layers)
    }

    /// Positions wrap around their ring, so only the layer can be out of bounds.
    fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if coord.layer < self.layers {
            let coord = coord.normalized();
            Some(ring_start(coord.layer) + coord.position)
        } else {
            None
        }
    }

    fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(
            idx < self.total_size(),
            "index {} is out of bounds for {:?}",
            idx,
            self
        );
        if idx == 0 {
            return Coordinate::CENTER;
        }
        // ring_start(l) = 1 + 3l(l - 1), so the ring holding idx is the floor of the
        // positive root of 3l^2 - 3l + 1 - idx. Float rounding is fixed up afterwards.
        let estimate = (3.0 + (12.0 * idx as f64 - 3.0).sqrt()) / 6.0;
        let mut layer = (estimate as usize).max(1);
        while ring_start(layer) > idx {
            layer -= 1;
        }
        while ring_start(layer + 1) <= idx {
            layer += 1;
        }
        Coordinate::new(layer, idx - ring_start(layer))
    }
}

impl RowLayout for HexDimensions {
    /// Row `l` is ring `l`, which must have exactly `6 * l` cells, or 1 for the center.
    fn from_row_lengths(lengths: &[usize]) -> Result<Self, BuildError> {
        if lengths.is_empty() {
            return Err(BuildError::NoRows);
        }
        for (ring, &actual) in lengths.iter().enumerate() {
            let expected = ring_size(ring);
            if actual != expected {
                return Err(BuildError::RingLength {
                    ring,
                    expected,
                    actual,
                });
            }
        }
        Self::try_new(lengths.len())
    }

    fn row_lengths(&self) -> Vec<usize> {
        (0..self.layers).map(ring_size).collect()
    }
}

/// State of the neighbors iter for HexDimensions.
pub struct HexNeighbors {
    candidates: RingNeighbors,
}

impl NeighborIterState for HexNeighbors {
    type Dimensions = HexDimensions;

    fn start(dim: &HexDimensions, coord: Coordinate) -> Self {
        let candidates = if coord.layer < dim.layers {
            ring_neighbors(coord)
        } else {
            RingNeighbors::empty()
        };
        Self { candidates }
    }

    fn next(&mut self, dim: &HexDimensions) -> Option<Coordinate> {
        // The board is finite: anything past the last ring is dropped rather than wrapped.
        let layers = dim.layers;
        self.candidates.find(|c| c.layer < layers)
    }
}
