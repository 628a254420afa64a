//! Translation of layer turns into sticker permutations.

mod rings;

use cube_core::{CubeState, Face};
use log::trace;
use thiserror::Error;

use self::rings::Strip;

/// A single layer turn.
///
/// `direction` counts quarter turns of layer `layer` as seen from `face`;
/// only its residue mod 4 is meaningful (0 is a no-op, 2 a half turn, 3 a
/// quarter turn the other way). Layers are indexed from the face, outermost
/// first, so every move has an equivalent name from the opposite face (see
/// [`Move::dual`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub layer: usize,
    pub direction: i32,
}

impl Move {
    #[must_use]
    pub fn new(face: Face, layer: usize, direction: i32) -> Move {
        Move {
            face,
            layer,
            direction,
        }
    }

    /// The turn that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Move {
        Move {
            direction: -self.direction,
            ..self
        }
    }

    /// The same physical turn named from the opposite face: on a cube of
    /// size `size`, `(D, l, d)` and `(U, size - 1 - l, -d)` are the same
    /// move. `layer` must be below `size`.
    #[must_use]
    pub fn dual(self, size: usize) -> Move {
        Move {
            face: self.face.opposite(),
            layer: size - 1 - self.layer,
            direction: -self.direction,
        }
    }
}

/// Failures of move application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("layer index out of range, expected a value below {size} but got {layer}")]
    InvalidLayer { layer: usize, size: usize },
}

/// Applies layer turns to a [`CubeState`].
///
/// Only U, F, and R carry ring tables; turns of D, B, and L are rewritten as
/// turns of the partner face on the dual layer with the direction mirrored,
/// so the six-way dispatch stays exhaustive without duplicated tables.
#[derive(Default)]
pub struct MoveEngine {
    on_move: Option<Box<dyn FnMut(Move)>>,
}

impl MoveEngine {
    #[must_use]
    pub fn new() -> MoveEngine {
        MoveEngine { on_move: None }
    }

    /// An engine that reports every completed move to `observer`.
    ///
    /// The callback fires once per requested move (not once per unit quarter
    /// turn), after the whole move has been applied.
    #[must_use]
    pub fn with_observer(observer: impl FnMut(Move) + 'static) -> MoveEngine {
        MoveEngine {
            on_move: Some(Box::new(observer)),
        }
    }

    /// Apply one move to `cube`.
    ///
    /// The effective turn count is `direction mod 4`, applied as that many
    /// sequential 90-degree turns; `cube` is never left holding a partial
    /// move.
    ///
    /// # Errors
    ///
    /// `InvalidLayer` if `mv.layer` is not below the cube size. The cube is
    /// untouched on error.
    pub fn apply(&mut self, cube: &mut CubeState, mv: Move) -> Result<(), MoveError> {
        let size = cube.size();
        if mv.layer >= size {
            return Err(MoveError::InvalidLayer {
                layer: mv.layer,
                size,
            });
        }
        let (primary, mirrored) = primary_of(mv.face);
        let (layer, direction) = if mirrored {
            (size - 1 - mv.layer, -mv.direction)
        } else {
            (mv.layer, mv.direction)
        };
        let quarter_turns = direction.rem_euclid(4);
        for _ in 0..quarter_turns {
            quarter_turn(cube, primary, layer);
        }
        trace!(
            "turned {} layer {} by {quarter_turns} quarter turns",
            mv.face.name(),
            mv.layer
        );
        if let Some(on_move) = self.on_move.as_mut() {
            on_move(mv);
        }
        Ok(())
    }

    /// Apply a sequence of moves in order.
    ///
    /// # Errors
    ///
    /// `InvalidLayer` on the first invalid move; earlier moves in the
    /// sequence have already been applied.
    pub fn apply_all(&mut self, cube: &mut CubeState, moves: &[Move]) -> Result<(), MoveError> {
        for &mv in moves {
            self.apply(cube, mv)?;
        }
        Ok(())
    }
}

/// Which face's ring tables serve each face, and whether the layer and
/// direction must be mirrored to use them.
fn primary_of(face: Face) -> (Face, bool) {
    match face {
        Face::Up | Face::Front | Face::Right => (face, false),
        Face::Down => (Face::Up, true),
        Face::Back => (Face::Front, true),
        Face::Left => (Face::Right, true),
    }
}

/// One 90-degree turn of `layer` as seen from `primary` (U, F, or R).
///
/// Cycles the four edge strips lying on the layer and, when the layer is
/// outermost, spins the turned face's own grid; when it is innermost, spins
/// the opposite face's grid the other way. On a 1x1x1 both conditions hold.
fn quarter_turn(cube: &mut CubeState, primary: Face, layer: usize) {
    let last = cube.size() - 1;
    let l2 = last - layer;
    let ring = match primary {
        Face::Up => [
            Strip::col(Face::Front, l2),
            Strip::col(Face::Right, l2),
            Strip::col(Face::Back, l2),
            Strip::col(Face::Left, l2),
        ],
        Face::Front => [
            Strip::col(Face::Up, layer),
            Strip::row(Face::Left, l2),
            Strip::col(Face::Down, l2).reversed(),
            Strip::row(Face::Right, layer).reversed(),
        ],
        Face::Right => [
            Strip::row(Face::Up, l2),
            Strip::row(Face::Front, l2),
            Strip::row(Face::Down, l2),
            Strip::row(Face::Back, layer).reversed(),
        ],
        Face::Down | Face::Back | Face::Left => {
            unreachable!("{} does not carry ring tables", primary.name())
        }
    };
    rings::rotate_ring(cube, &ring);
    if layer == 0 {
        rings::rotate_face_cw(cube, primary);
    }
    if layer == last {
        rings::rotate_face_ccw(cube, primary.opposite());
    }
}
