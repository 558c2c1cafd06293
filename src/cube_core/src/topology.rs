//! Static description of which sides border which.
//!
//! For every side, [`connections`] lists its four neighbors in the order a
//! clockwise turn carries strips: the strip on entry `k` moves onto entry
//! `k + 1`. Each entry names the three facelets on the neighbor that touch
//! the turning side, ordered so that facelet `j` of entry `k` lands on facelet
//! `j` of entry `k + 1`. The first facelet of each strip is the one shared
//! with the previous entry's corner.
//!
//! With YELLOW up, WHITE down and GREEN in front, the ring sides read RED,
//! GREEN, ORANGE, BLUE going clockwise under WHITE and RED, BLUE, ORANGE,
//! GREEN going clockwise over YELLOW. Looking at any ring side with YELLOW up,
//! the next side in the YELLOW order is on its left.
//!
//! The edge and corner lookups are derived from that single table at compile
//! time.

use crate::Color::{self, Blue, Green, Orange, Red, White, Yellow};

/// A neighbor of some side and the three of its facelets that border it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideConnection {
    pub side: Color,
    pub facelets: [usize; 3],
}

impl SideConnection {
    const fn bottom_of(side: Color) -> Self {
        SideConnection {
            side,
            facelets: [6, 5, 4],
        }
    }

    const fn left_of(side: Color) -> Self {
        SideConnection {
            side,
            facelets: [0, 7, 6],
        }
    }

    const fn top_of(side: Color) -> Self {
        SideConnection {
            side,
            facelets: [2, 1, 0],
        }
    }

    const fn right_of(side: Color) -> Self {
        SideConnection {
            side,
            facelets: [4, 3, 2],
        }
    }

    /// The facelet on [`SideConnection::side`] that belongs to the shared edge
    /// piece.
    #[must_use]
    pub const fn edge_facelet(&self) -> usize {
        self.facelets[1]
    }
}

/// Indexed by [`Color::index`].
const CONNECTIONS: [[SideConnection; 4]; 6] = [
    // white
    [
        SideConnection::bottom_of(Red),
        SideConnection::bottom_of(Green),
        SideConnection::bottom_of(Orange),
        SideConnection::bottom_of(Blue),
    ],
    // red
    [
        SideConnection::left_of(Yellow),
        SideConnection::left_of(Green),
        SideConnection::left_of(White),
        SideConnection::right_of(Blue),
    ],
    // orange
    [
        SideConnection::right_of(Yellow),
        SideConnection::left_of(Blue),
        SideConnection::right_of(White),
        SideConnection::right_of(Green),
    ],
    // yellow
    [
        SideConnection::top_of(Red),
        SideConnection::top_of(Blue),
        SideConnection::top_of(Orange),
        SideConnection::top_of(Green),
    ],
    // green
    [
        SideConnection::bottom_of(Yellow),
        SideConnection::left_of(Orange),
        SideConnection::top_of(White),
        SideConnection::right_of(Red),
    ],
    // blue
    [
        SideConnection::top_of(Yellow),
        SideConnection::left_of(Red),
        SideConnection::bottom_of(White),
        SideConnection::right_of(Orange),
    ],
];

/// The four neighbors of `side`, in clockwise turn order.
#[must_use]
pub const fn connections(side: Color) -> &'static [SideConnection; 4] {
    &CONNECTIONS[side.index()]
}

/// Looks up a neighbor of `side` relative to `neighbor`'s position in the
/// connection list. An offset of one is the next entry in clockwise turn
/// order, minus one the previous.
///
/// # Panics
///
/// If `neighbor` does not touch `side`.
#[must_use]
pub fn neighbor_with_offset(side: Color, neighbor: Color, offset: i32) -> Color {
    let connections = connections(side);
    let position = connections
        .iter()
        .position(|connection| connection.side == neighbor)
        .unwrap_or_else(|| panic!("{neighbor} does not touch {side}"));
    connections[(position as i32 + offset).rem_euclid(4) as usize].side
}

/// The facelets of `of` that border `bordering`, read from `bordering`'s own
/// connection list.
const fn strip(bordering: usize, of: usize) -> [usize; 3] {
    let mut k = 0;
    while k < 4 {
        if CONNECTIONS[bordering][k].side as usize == of {
            return CONNECTIONS[bordering][k].facelets;
        }
        k += 1;
    }
    panic!("sides do not touch");
}

const EDGE_FACELETS: [[Option<usize>; 6]; 6] = {
    let mut table = [[None; 6]; 6];
    let mut side = 0;
    while side < 6 {
        let mut k = 0;
        while k < 4 {
            let connection = CONNECTIONS[side][k];
            table[connection.side as usize][side] = Some(connection.edge_facelet());
            k += 1;
        }
        side += 1;
    }
    table
};

/// The facelet index on `side` holding its half of the edge piece shared with
/// `adjacent`, or `None` when the two sides do not touch.
#[must_use]
pub const fn edge_facelet(side: Color, adjacent: Color) -> Option<usize> {
    EDGE_FACELETS[side.index()][adjacent.index()]
}

/// For every side and corner facelet, the two other facelets of the same
/// corner cubie. Odd (edge) indices hold `None`.
const CORNER_FACELETS: [[Option<[(Color, usize); 2]>; 8]; 6] = {
    let mut table = [[None; 8]; 6];
    let mut side = 0;
    while side < 6 {
        let mut k = 0;
        while k < 4 {
            let previous = CONNECTIONS[side][(k + 3) % 4];
            let current = CONNECTIONS[side][k];

            // The corner facelet on `side` is the one both neighbors' strips
            // share.
            let a = strip(current.side as usize, side);
            let b = strip(previous.side as usize, side);
            let index = if a[0] == b[0] || a[0] == b[2] {
                a[0]
            } else if a[2] == b[0] || a[2] == b[2] {
                a[2]
            } else {
                panic!("neighboring strips do not share a corner");
            };

            table[side][index] = Some([
                (previous.side, previous.facelets[2]),
                (current.side, current.facelets[0]),
            ]);
            k += 1;
        }
        side += 1;
    }
    table
};

/// The two facelets on other sides that belong to the same corner cubie as
/// facelet `index` of `side`.
///
/// # Panics
///
/// If `index` is not a corner index (0, 2, 4 or 6).
#[must_use]
pub fn corner_facelets(side: Color, index: usize) -> [(Color, usize); 2] {
    CORNER_FACELETS[side.index()][index]
        .unwrap_or_else(|| panic!("facelet {index} is not a corner"))
}

/// The corner index on `side` shared with both `first` and `second`.
///
/// # Panics
///
/// If the three sides do not meet at a corner.
#[must_use]
pub fn corner_between(side: Color, first: Color, second: Color) -> usize {
    CORNER_FACELETS[side.index()]
        .iter()
        .position(|others| {
            others.is_some_and(|[(a, _), (b, _)]| {
                (a == first && b == second) || (a == second && b == first)
            })
        })
        .unwrap_or_else(|| panic!("{side}, {first} and {second} do not share a corner"))
}
