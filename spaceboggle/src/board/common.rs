//! Coordinate types shared between board layouts.

pub use self::coordinate2d::Coordinate2D;

mod coordinate2d;
