//! Sticker grid storage for all six faces.

use crate::{Color, CubeError, Face};
use itertools::Itertools;
use std::collections::HashMap;
use std::iter;

/// The sticker grids of an NxNxN cube.
///
/// Stickers are stored face-major in one flat buffer, each face an x-major
/// N×N grid: grid axis 0 is the `row` argument and comes before axis 1, the
/// `col` argument. The move tables depend on this axis order. Equality is
/// sticker-by-sticker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeState {
    size: usize,
    stickers: Box<[Color]>,
}

impl CubeState {
    /// A solved cube: face `i` covered in color `i`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `size` is less than 1.
    pub fn new(size: usize) -> Result<CubeState, CubeError> {
        if size < 1 {
            return Err(CubeError::InvalidSize(size));
        }
        let stickers = Color::ALL
            .into_iter()
            .flat_map(|color| iter::repeat_n(color, size * size))
            .collect();
        Ok(CubeState { size, stickers })
    }

    /// Edge length of every face grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Color of the sticker at `(row, col)` on `face`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `row` or `col` is not below the cube size.
    pub fn get(&self, face: Face, row: usize, col: usize) -> Result<Color, CubeError> {
        Ok(self.stickers[self.offset(face, row, col)?])
    }

    /// Recolor the sticker at `(row, col)` on `face`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `row` or `col` is not below the cube size.
    pub fn set(
        &mut self,
        face: Face,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<(), CubeError> {
        let offset = self.offset(face, row, col)?;
        self.stickers[offset] = color;
        Ok(())
    }

    fn offset(&self, face: Face, row: usize, col: usize) -> Result<usize, CubeError> {
        if row >= self.size || col >= self.size {
            return Err(CubeError::IndexOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok((face.index() * self.size + row) * self.size + col)
    }

    /// One face's stickers, x-major.
    #[must_use]
    pub fn face_stickers(&self, face: Face) -> &[Color] {
        let area = self.size * self.size;
        let base = face.index() * area;
        &self.stickers[base..base + area]
    }

    /// Mutable view of one face's stickers, x-major.
    pub fn face_stickers_mut(&mut self, face: Face) -> &mut [Color] {
        let area = self.size * self.size;
        let base = face.index() * area;
        &mut self.stickers[base..base + area]
    }

    /// Whether every face is a single color. A cube reoriented as a whole is
    /// still solved, so this does not compare against the constructed state.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let grid = self.face_stickers(face);
            grid.iter().all(|&color| color == grid[0])
        })
    }

    /// How many stickers of each color are on the cube. Layer turns permute
    /// stickers, so the counts of any reachable state match the solved
    /// state's.
    #[must_use]
    pub fn color_counts(&self) -> HashMap<Color, usize> {
        self.stickers.iter().copied().counts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cube_is_solved_face_by_face() {
        let cube = CubeState::new(3).unwrap();
        assert_eq!(cube.size(), 3);
        for (face, color) in Face::ALL.into_iter().zip(Color::ALL) {
            for row in 0..3 {
                for col in 0..3 {
                    assert_eq!(cube.get(face, row, col).unwrap(), color);
                }
            }
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(CubeState::new(0), Err(CubeError::InvalidSize(0)));
    }

    #[test]
    fn out_of_range_access_is_rejected() {
        let mut cube = CubeState::new(2).unwrap();
        let err = CubeError::IndexOutOfRange {
            row: 2,
            col: 0,
            size: 2,
        };
        assert_eq!(cube.get(Face::Up, 2, 0), Err(err.clone()));
        assert_eq!(cube.set(Face::Up, 2, 0, Color::Red), Err(err));
        assert!(cube.get(Face::Up, 0, 2).is_err());
        assert!(cube.is_solved());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut cube = CubeState::new(4).unwrap();
        cube.set(Face::Front, 1, 2, Color::Red).unwrap();
        assert_eq!(cube.get(Face::Front, 1, 2).unwrap(), Color::Red);
        assert!(!cube.is_solved());
    }

    #[test]
    fn solved_color_counts_are_uniform() {
        let cube = CubeState::new(5).unwrap();
        let counts = cube.color_counts();
        assert_eq!(counts.len(), Color::ALL.len());
        assert!(counts.values().all(|&count| count == 25));
    }

    #[test]
    fn one_by_one_cube_is_valid() {
        let cube = CubeState::new(1).unwrap();
        assert_eq!(cube.face_stickers(Face::Left), &[Color::Red][..]);
    }
}
