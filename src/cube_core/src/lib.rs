//! Sticker-level model of an NxNxN twisty puzzle.
//!
//! This models where the stickers are, not where the solid cubies are. Faces
//! and colors have integer indices and one-letter names, and every layer of
//! the cube has two equivalent names: `(F, 1)` and `(B, 1)` are the same
//! layer of a 3x3x3, while `(F, 1)` and `(B, 3)` are the same layer of a
//! 5x5x5. Face grids are indexed x before y.

use thiserror::Error;

pub mod faces;
pub mod state;

pub use faces::{COLOR_COUNT, Color, FACE_COUNT, Face};
pub use state::CubeState;

/// Failures of state construction and sticker access.
///
/// Every variant is a programmer error: inputs are validated up front and
/// nothing is mutated when an error is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("cube size must be at least 1, got {0}")]
    InvalidSize(usize),
    #[error("sticker ({row}, {col}) is out of range for a cube of size {size}")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        size: usize,
    },
    #[error("unrecognized face or color name {0:?}")]
    InvalidFace(String),
}
