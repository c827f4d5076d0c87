//! Implements a basic rectangular board.
use std::borrow::Borrow;

use enumflags2::BitFlags;

use crate::board::{BuildError, Dimensions, NeighborIterState, RowLayout};

pub use crate::board::common::Coordinate2D as Coordinate;

/// Controls which dimensions the grid wraps around in.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Wrapping {
    /// The grid wraps along the `x` direction.
    Horizontal = 0b01,
    /// The grid wraps along the `y` direction.
    Vertical = 0b10,
}

/// Simple rectangular dimensions. Optionally supports wrapping.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectDimensions {
    /// Width of the board. This cooresponds to the `x` [`Coordinate`].
    width: usize,
    /// Height of the board. This cooresponds to the `y` [`Coordinate`].
    height: usize,

    /// Set of orientations that the grid wraps along.
    wrapping: BitFlags<Wrapping>,
}

impl RectDimensions {
    /// Create new [`RectDimensions`] with the specified width and height. Defaults to no wrapping.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        Self::new_wrapping(width, height, BitFlags::empty())
    }

    /// Create new [`RectDimensions`] with the specified width and height, wrapping on the
    /// specified axes.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or `height` is 0.
    pub fn new_wrapping<B: Into<BitFlags<Wrapping>>>(
        width: usize,
        height: usize,
        wrapping: B,
    ) -> Self {
        match Self::try_new_wrapping(width, height, wrapping) {
            Ok(dim) => dim,
            Err(err) => panic!("invalid RectDimensions {}x{}: {}", width, height, err),
        }
    }

    /// Create new [`RectDimensions`] with the specified width and height. Defaults to no wrapping.
    /// Fails if `width * height` exceeds `usize::max_value()` or if `width` or `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Result<Self, BuildError> {
        Self::try_new_wrapping(width, height, BitFlags::empty())
    }

    /// Create new [`RectDimensions`] with the specified width and height.
    /// Fails if `width * height` exceeds `usize::max_value()` or if `width` or `height`
    /// is 0.
    pub fn try_new_wrapping<B: Into<BitFlags<Wrapping>>>(
        width: usize,
        height: usize,
        wrapping: B,
    ) -> Result<Self, BuildError> {
        if width == 0 || height == 0 {
            Err(BuildError::NoRows)
        } else {
            width
                .checked_mul(height)
                .map(|_| Self {
                    width,
                    height,
                    wrapping: wrapping.into(),
                })
                .ok_or(BuildError::TooLarge)
        }
    }

    /// Get a copy of these dimensions with the wrapping modes replaced.
    pub fn with_wrapping<B: Into<BitFlags<Wrapping>>>(self, wrapping: B) -> Self {
        Self {
            wrapping: wrapping.into(),
            ..self
        }
    }

    /// Get the width of these [`RectDimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`RectDimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the wrapping modes of these [`RectDimensions`].
    pub fn wrapping(&self) -> BitFlags<Wrapping> {
        self.wrapping
    }

    /// Whether the grid wraps along the `x` direciton.
    pub fn wrap_x(&self) -> bool {
        self.wrapping.contains(Wrapping::Horizontal)
    }

    /// Whether the grid wraps along the `y` direciton.
    pub fn wrap_y(&self) -> bool {
        self.wrapping.contains(Wrapping::Vertical)
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`RectDimensions`]. If so, return
    /// it, otherwise return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.x < self.width && c.y < self.height {
            Some(coord)
        } else {
            None
        }
    }
}

impl Dimensions for RectDimensions {
    type Coordinate = Coordinate;

    type NeighborIterState = RectNeighbors;

    /// Compute the linear total size of these [`Dimensions`].
    fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Returns `None` if the coordinate is out of range for the dimension.
    fn try_linearize(&self, coord: &Self::Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.y * self.width + coord.x)
    }

    /// Convert a linear index back into a [`Coordinate`].
    fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(
            idx < self.total_size(),
            "index {} is out of bounds for {:?}",
            idx,
            self
        );
        Coordinate {
            x: idx % self.width,
            y: idx / self.width,
        }
    }
}

impl RowLayout for RectDimensions {
    /// Every row must have the same length as the first. A board with no rows, or with
    /// only empty rows, has no cells.
    fn from_row_lengths(lengths: &[usize]) -> Result<Self, BuildError> {
        let width = match lengths.first() {
            None => return Err(BuildError::NoRows),
            Some(&width) => width,
        };
        if let Some((row, &actual)) = lengths
            .iter()
            .enumerate()
            .find(|&(_, &len)| len != width)
        {
            return Err(BuildError::RowLength {
                row,
                expected: width,
                actual,
            });
        }
        Self::try_new(width, lengths.len())
    }

    fn row_lengths(&self) -> Vec<usize> {
        vec![self.width; self.height]
    }
}

impl Default for RectDimensions {
    /// Construct the default rectangular dimensions, the classic 4x4 board with no wrapping.
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            wrapping: BitFlags::empty(),
        }
    }
}

/// Movement along a single axis.
#[derive(Debug, Copy, Clone)]
enum Step {
    Back,
    Stay,
    Forward,
}

impl Step {
    /// Apply this step to `pos` on an axis of length `len`. Returns `None` if the step
    /// leaves the board and the axis doesn't wrap.
    fn apply(self, pos: usize, len: usize, wrap: bool) -> Option<usize> {
        match self {
            Step::Stay => Some(pos),
            Step::Back => match pos.checked_sub(1) {
                Some(p) => Some(p),
                None if wrap => Some(len - 1),
                None => None,
            },
            Step::Forward => match pos + 1 {
                p if p < len => Some(p),
                _ if wrap => Some(0),
                _ => None,
            },
        }
    }
}

/// The 8 directions of the Moore neighborhood as `(x, y)` steps, clockwise from up.
const DIRECTIONS: [(Step, Step); 8] = [
    (Step::Stay, Step::Back),
    (Step::Forward, Step::Back),
    (Step::Forward, Step::Stay),
    (Step::Forward, Step::Forward),
    (Step::Stay, Step::Forward),
    (Step::Back, Step::Forward),
    (Step::Back, Step::Stay),
    (Step::Back, Step::Back),
];

/// State of the neighbors iter for RectDimensions.
pub struct RectNeighbors {
    coord: Coordinate,
    /// Index of the next entry in `DIRECTIONS` to try.
    next_dir: usize,
    /// Neighbors already produced. Only tracked on wrapping grids, where two directions
    /// can land on the same cell.
    seen: Vec<Coordinate>,
}

impl NeighborIterState for RectNeighbors {
    type Dimensions = RectDimensions;

    fn start(dim: &RectDimensions, coord: Coordinate) -> Self {
        Self {
            coord,
            // If the coordinate is out of bounds, skip directly to the end so we don't
            // have to run dim.check_bounds every iteration.
            next_dir: dim
                .check_bounds(coord)
                .map_or(DIRECTIONS.len(), |_| 0),
            seen: Vec::new(),
        }
    }

    fn next(&mut self, dim: &RectDimensions) -> Option<Coordinate> {
        while let Some(&(dx, dy)) = DIRECTIONS.get(self.next_dir) {
            self.next_dir += 1;
            let x = match dx.apply(self.coord.x, dim.width, dim.wrap_x()) {
                Some(x) => x,
                None => continue,
            };
            let y = match dy.apply(self.coord.y, dim.height, dim.wrap_y()) {
                Some(y) => y,
                None => continue,
            };
            let neighbor = Coordinate::new(x, y);
            if dim.wrapping.is_empty() {
                return Some(neighbor);
            }
            if neighbor != self.coord && !self.seen.contains(&neighbor) {
                self.seen.push(neighbor);
                return Some(neighbor);
            }
        }
        None
    }
}
