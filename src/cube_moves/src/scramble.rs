//! Random scramble driver over the move engine.

use crate::{Move, MoveEngine};
use cube_core::{CubeState, Face};
use log::debug;

impl MoveEngine {
    /// Scramble `cube` with `count` random moves drawn from `rng`: each move
    /// picks a uniformly random face and a uniformly random layer and always
    /// turns by a single quarter turn. A seeded `rng` makes the scramble
    /// reproducible.
    #[allow(clippy::missing_panics_doc)]
    pub fn scramble_with(&mut self, cube: &mut CubeState, count: usize, rng: &mut fastrand::Rng) {
        for _ in 0..count {
            // Face::ALL is never empty and the layer is drawn below the cube
            // size, so neither the choice nor the move can fail.
            let face = rng.choice(Face::ALL).unwrap();
            let layer = rng.usize(0..cube.size());
            self.apply(cube, Move::new(face, layer, 1))
                .expect("layer is below the cube size");
        }
        debug!("scrambled with {count} random quarter turns");
    }

    /// Scramble with a freshly seeded generator.
    pub fn scramble(&mut self, cube: &mut CubeState, count: usize) {
        self.scramble_with(cube, count, &mut fastrand::Rng::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_scrambles_are_reproducible() {
        let mut engine = MoveEngine::new();
        let mut first = CubeState::new(4).unwrap();
        let mut second = first.clone();
        engine.scramble_with(&mut first, 30, &mut fastrand::Rng::with_seed(7));
        engine.scramble_with(&mut second, 30, &mut fastrand::Rng::with_seed(7));
        assert_eq!(first, second);
    }

    #[test]
    fn scramble_of_zero_moves_changes_nothing() {
        let mut engine = MoveEngine::new();
        let mut cube = CubeState::new(3).unwrap();
        engine.scramble(&mut cube, 0);
        assert!(cube.is_solved());
    }

    #[test]
    fn scramble_preserves_sticker_counts() {
        let mut engine = MoveEngine::new();
        let mut cube = CubeState::new(5).unwrap();
        let solved_counts = cube.color_counts();
        engine.scramble_with(&mut cube, 40, &mut fastrand::Rng::with_seed(99));
        assert_eq!(cube.color_counts(), solved_counts);
    }
}
