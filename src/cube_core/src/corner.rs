use std::{
    fmt,
    hash::{Hash, Hasher},
};

use itertools::Itertools;

use crate::Color;

/// The identity of a corner cubie: its three colors with orientation thrown
/// away. Two pieces compare equal when they carry the same set of colors in
/// any order.
#[derive(Clone, Copy)]
pub struct CornerPiece([Color; 3]);

impl CornerPiece {
    #[must_use]
    pub const fn new(a: Color, b: Color, c: Color) -> Self {
        CornerPiece([a, b, c])
    }

    #[must_use]
    pub const fn colors(self) -> [Color; 3] {
        self.0
    }

    #[must_use]
    pub fn contains(self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// One bit per color present. Only pieces with three distinct colors are
    /// physically possible, and for those this is a faithful set encoding.
    fn mask(self) -> u8 {
        self.0.iter().fold(0, |mask, color| mask | 1 << color.index())
    }
}

impl PartialEq for CornerPiece {
    fn eq(&self, other: &Self) -> bool {
        let mut ours = self.0;
        let mut theirs = other.0;
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}

impl Eq for CornerPiece {}

impl Hash for CornerPiece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mask().hash(state);
    }
}

impl From<[Color; 3]> for CornerPiece {
    fn from(colors: [Color; 3]) -> Self {
        CornerPiece(colors)
    }
}

impl fmt::Debug for CornerPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CornerPiece({})", self.0.iter().join("/"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use Color::*;

    #[test]
    fn equality_ignores_orientation() {
        let piece = CornerPiece::new(White, Red, Green);
        assert_eq!(piece, CornerPiece::new(Red, Green, White));
        assert_eq!(piece, CornerPiece::new(Green, White, Red));
        assert_eq!(piece, CornerPiece::new(Green, Red, White));
        assert_ne!(piece, CornerPiece::new(White, Orange, Green));
    }

    #[test]
    fn hashing_agrees_with_equality() {
        let set: HashSet<_> = [
            CornerPiece::new(Yellow, Blue, Red),
            CornerPiece::new(Red, Yellow, Blue),
            CornerPiece::new(Blue, Red, Yellow),
            CornerPiece::new(Yellow, Blue, Orange),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn multiset_pieces_are_distinguished() {
        // Not reachable on a real cube, but scans can be wrong.
        assert_ne!(
            CornerPiece::new(White, White, Red),
            CornerPiece::new(White, Red, Red)
        );
    }
}
