//! Layer-turn engine for the sticker cube model.
//!
//! Translates `(face, layer, direction)` moves into sticker permutations on
//! a [`cube_core::CubeState`] and drives random scrambles. A layer turn
//! cycles four edge strips on the faces adjacent to the turned face and, for
//! outermost and innermost layers, spins a whole face grid.

pub mod moves;
mod scramble;

pub use moves::{Move, MoveEngine, MoveError};
