use std::fmt;

use crate::{
    Color, CornerPiece, CubeError, Face, Move,
    topology::{self, SideConnection},
};

/// Six packed sides indexed by [`Color::index`].
///
/// The cube does not check that its state is physically reachable. Rotations
/// obey the group laws on whatever state they are given, and the solver relies
/// on callers passing a real cube.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    faces: [Face; 6],
}

impl Cube {
    #[must_use]
    pub const fn new(faces: [Face; 6]) -> Self {
        Cube { faces }
    }

    #[must_use]
    pub fn solved() -> Self {
        Cube {
            faces: Color::ALL.map(Face::solid),
        }
    }

    /// Builds a cube from six raw scans in [`Color::ALL`] order.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidShape`] unless there are exactly 6 sides of 8
    /// facelets, and [`CubeError::InvalidColor`] for any value outside `0..6`.
    pub fn from_facelets<S: AsRef<[u8]>>(sides: &[S]) -> Result<Self, CubeError> {
        if sides.len() != Color::ALL.len() {
            return Err(CubeError::InvalidShape {
                what: "sides",
                expected: Color::ALL.len(),
                actual: sides.len(),
            });
        }

        let mut faces = [Face::solid(Color::White); 6];
        for (face, values) in faces.iter_mut().zip(sides) {
            *face = Face::try_from_values(values.as_ref())?;
        }
        Ok(Cube { faces })
    }

    #[must_use]
    pub const fn faces(&self) -> &[Face; 6] {
        &self.faces
    }

    #[must_use]
    pub const fn face(&self, side: Color) -> Face {
        self.faces[side.index()]
    }

    #[must_use]
    pub const fn facelet(&self, side: Color, index: usize) -> Color {
        self.face(side).get(index)
    }

    /// Turns `side` a quarter turn and carries the twelve bordering facelets
    /// along to the next neighbor in the direction of the turn.
    pub fn rotate(&mut self, side: Color, clockwise: bool) {
        let face = &mut self.faces[side.index()];
        *face = if clockwise {
            face.rotated_clockwise()
        } else {
            face.rotated_counter_clockwise()
        };

        let connections = topology::connections(side);
        // Every strip is captured before anything is written back.
        let strips = connections.map(|SideConnection { side, facelets }| {
            facelets.map(|index| self.facelet(side, index))
        });

        for (k, connection) in connections.iter().enumerate() {
            let source = if clockwise { (k + 3) % 4 } else { (k + 1) % 4 };
            let target = &mut self.faces[connection.side.index()];
            for (&index, &color) in connection.facelets.iter().zip(&strips[source]) {
                *target = target.with(index, color);
            }
        }
    }

    pub fn rotate_clockwise(&mut self, side: Color) {
        self.rotate(side, true);
    }

    pub fn rotate_counter_clockwise(&mut self, side: Color) {
        self.rotate(side, false);
    }

    pub fn apply(&mut self, mv: Move) {
        self.rotate(mv.side, mv.clockwise);
    }

    pub fn apply_all<I: IntoIterator<Item = Move>>(&mut self, moves: I) {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// The color showing on `side` for the edge piece it shares with
    /// `adjacent`.
    ///
    /// # Panics
    ///
    /// If the two sides do not touch.
    #[must_use]
    pub fn edge_color(&self, side: Color, adjacent: Color) -> Color {
        let index = topology::edge_facelet(side, adjacent)
            .unwrap_or_else(|| panic!("{side} and {adjacent} do not share an edge"));
        self.facelet(side, index)
    }

    /// The corner cubie whose facelet sits at `index` on `side`.
    ///
    /// # Panics
    ///
    /// If `index` is not one of the four corner positions.
    #[must_use]
    pub fn corner_piece(&self, side: Color, index: usize) -> CornerPiece {
        let [(a, ai), (b, bi)] = topology::corner_facelets(side, index);
        CornerPiece::new(
            self.facelet(side, index),
            self.facelet(a, ai),
            self.facelet(b, bi),
        )
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        Color::ALL
            .iter()
            .all(|&color| self.face(color).is_solid(color))
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::solved()
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for color in Color::ALL {
            map.entry(&color, &self.face(color));
        }
        map.finish()
    }
}

/// Rows of a side as scanned head-on, with the center filled in.
fn rows(face: Face, center: Color) -> [[char; 3]; 3] {
    let c = |index| face.get(index).letter();
    [
        [c(0), c(1), c(2)],
        [c(7), center.letter(), c(3)],
        [c(6), c(5), c(4)],
    ]
}

/// Prints an unfolded net: YELLOW above GREEN, the ring RED GREEN ORANGE BLUE
/// in the middle, WHITE below GREEN. Each side is drawn in its own scanning
/// frame.
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let block = |side: Color| rows(self.face(side), side);
        let pad = " ".repeat(4);

        for row in block(Color::Yellow) {
            writeln!(f, "{pad}{}", row.iter().collect::<String>())?;
        }
        let ring = [Color::Red, Color::Green, Color::Orange, Color::Blue].map(block);
        for r in 0..3 {
            let line = ring
                .iter()
                .map(|side| side[r].iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        for (r, row) in block(Color::White).iter().enumerate() {
            write!(f, "{pad}{}", row.iter().collect::<String>())?;
            if r < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
