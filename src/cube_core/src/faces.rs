//! Face and color metadata: index/name bijections, the opposite-face
//! pairing, and the fixed render palette.

use crate::CubeError;
use phf::phf_map;

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;

/// Number of sticker colors; index-matched to the faces.
pub const COLOR_COUNT: usize = 6;

/// The six faces, in canonical index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    Up = 0,
    Down = 1,
    Front = 2,
    Back = 3,
    Right = 4,
    Left = 5,
}

static FACES_BY_NAME: phf::Map<&'static str, Face> = phf_map! {
    "U" => Face::Up,
    "D" => Face::Down,
    "F" => Face::Front,
    "B" => Face::Back,
    "R" => Face::Right,
    "L" => Face::Left,
};

impl Face {
    /// All faces, in index order.
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Face> {
        Face::ALL.get(index).copied()
    }

    /// The one-letter face name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Face::Up => "U",
            Face::Down => "D",
            Face::Front => "F",
            Face::Back => "B",
            Face::Right => "R",
            Face::Left => "L",
        }
    }

    /// Look up a face by its one-letter name.
    ///
    /// # Errors
    ///
    /// `InvalidFace` if `name` is not one of U, D, F, B, R, L.
    pub fn from_name(name: &str) -> Result<Face, CubeError> {
        FACES_BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| CubeError::InvalidFace(name.to_owned()))
    }

    /// The face on the other side of the cube. `(f, l)` and
    /// `(f.opposite(), N - 1 - l)` name the same layer.
    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
        }
    }
}

/// Sticker colors, index-matched to the faces: a solved cube has face `i`
/// covered in color `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Yellow = 1,
    Blue = 2,
    Green = 3,
    Orange = 4,
    Red = 5,
}

static COLORS_BY_NAME: phf::Map<&'static str, Color> = phf_map! {
    "w" => Color::White,
    "y" => Color::Yellow,
    "b" => Color::Blue,
    "g" => Color::Green,
    "o" => Color::Orange,
    "r" => Color::Red,
};

impl Color {
    /// All colors, in index order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::White,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Orange,
        Color::Red,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Color> {
        Color::ALL.get(index).copied()
    }

    /// The one-letter color name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "w",
            Color::Yellow => "y",
            Color::Blue => "b",
            Color::Green => "g",
            Color::Orange => "o",
            Color::Red => "r",
        }
    }

    /// Look up a color by its one-letter name.
    ///
    /// # Errors
    ///
    /// `InvalidFace` if `name` is not one of w, y, b, g, o, r.
    pub fn from_name(name: &str) -> Result<Color, CubeError> {
        COLORS_BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| CubeError::InvalidFace(name.to_owned()))
    }

    /// RGB triple used by renderers, each channel in [0, 1].
    #[must_use]
    pub fn rgb(self) -> [f32; 3] {
        match self {
            Color::White => [1.0, 1.0, 1.0],
            Color::Yellow => [0.75, 0.75, 0.0],
            Color::Blue => [0.0, 0.0, 0.75],
            Color::Green => [0.0, 0.75, 0.0],
            Color::Orange => [1.0, 0.5, 0.0],
            Color::Red => [0.75, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_indices_round_trip() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(Face::from_index(i), Some(*face));
        }
        assert_eq!(Face::from_index(FACE_COUNT), None);
    }

    #[test]
    fn face_names_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_name(face.name()).unwrap(), face);
        }
        assert_eq!(
            Face::from_name("X"),
            Err(CubeError::InvalidFace("X".to_owned()))
        );
    }

    #[test]
    fn opposite_is_an_involution() {
        for face in Face::ALL {
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn color_indices_match_faces() {
        for (face, color) in Face::ALL.iter().zip(Color::ALL) {
            assert_eq!(face.index(), color.index());
        }
    }

    #[test]
    fn color_names_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_name(color.name()).unwrap(), color);
            assert_eq!(Color::from_index(color.index()), Some(color));
        }
        assert!(Color::from_name("x").is_err());
    }
}
