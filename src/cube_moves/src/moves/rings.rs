//! Strip descriptors and the ring/face rotation primitives.

use cube_core::{Color, CubeState, Face};

/// Whether a strip runs along a row (fixed axis 0) or a column (fixed
/// axis 1) of a face grid.
#[derive(Clone, Copy, Debug)]
enum Axis {
    Row,
    Col,
}

/// One edge strip of a layer ring: the N stickers in a single row or column
/// of `face`, optionally traversed in reverse. Which axis is fixed and
/// whether the traversal reverses is data here rather than argument
/// position, so the face-pair tables in the dispatcher stay checkable
/// against each other.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Strip {
    face: Face,
    axis: Axis,
    index: usize,
    reversed: bool,
}

impl Strip {
    /// Row `index`: cells `(index, t)` for `t` in 0..N.
    pub(crate) fn row(face: Face, index: usize) -> Strip {
        Strip {
            face,
            axis: Axis::Row,
            index,
            reversed: false,
        }
    }

    /// Column `index`: cells `(t, index)` for `t` in 0..N.
    pub(crate) fn col(face: Face, index: usize) -> Strip {
        Strip {
            face,
            axis: Axis::Col,
            index,
            reversed: false,
        }
    }

    /// The same strip traversed back to front.
    pub(crate) fn reversed(self) -> Strip {
        Strip {
            reversed: true,
            ..self
        }
    }

    fn offsets(self, size: usize) -> impl Iterator<Item = usize> {
        (0..size).map(move |step| {
            let t = if self.reversed { size - 1 - step } else { step };
            match self.axis {
                Axis::Row => self.index * size + t,
                Axis::Col => t * size + self.index,
            }
        })
    }

    fn read(self, cube: &CubeState) -> Vec<Color> {
        let grid = cube.face_stickers(self.face);
        self.offsets(cube.size()).map(|offset| grid[offset]).collect()
    }

    fn write(self, cube: &mut CubeState, stickers: &[Color]) {
        let size = cube.size();
        let grid = cube.face_stickers_mut(self.face);
        for (offset, &sticker) in self.offsets(size).zip(stickers) {
            grid[offset] = sticker;
        }
    }
}

/// Rotate the contents of the four strips one step around the ring: each
/// strip takes the next strip's stickers and the first strip's stickers
/// wrap around into the last. All strips are read out before anything is
/// written, so a half-shifted ring is never observable.
pub(crate) fn rotate_ring(cube: &mut CubeState, ring: &[Strip; 4]) {
    let lifted: Vec<Vec<Color>> = ring.iter().map(|strip| strip.read(cube)).collect();
    for (i, strip) in ring.iter().enumerate() {
        strip.write(cube, &lifted[(i + 1) % ring.len()]);
    }
}

/// Spin a face's own grid a quarter turn one way in array terms:
/// `new[j][k] = old[N-1-k][j]`.
pub(crate) fn rotate_face_cw(cube: &mut CubeState, face: Face) {
    let size = cube.size();
    let old = cube.face_stickers(face).to_vec();
    let grid = cube.face_stickers_mut(face);
    for j in 0..size {
        for k in 0..size {
            grid[j * size + k] = old[(size - 1 - k) * size + j];
        }
    }
}

/// Spin a face's own grid a quarter turn the other way:
/// `new[j][k] = old[k][N-1-j]`.
pub(crate) fn rotate_face_ccw(cube: &mut CubeState, face: Face) {
    let size = cube.size();
    let old = cube.face_stickers(face).to_vec();
    let grid = cube.face_stickers_mut(face);
    for j in 0..size {
        for k in 0..size {
            grid[j * size + k] = old[k * size + (size - 1 - j)];
        }
    }
}
