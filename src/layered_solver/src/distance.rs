//! Angular offsets between the four ring sides.
//!
//! WHITE carries its ring RED, GREEN, ORANGE, BLUE clockwise. Seen from
//! YELLOW the same ring runs the other way, so a distance around YELLOW is a
//! distance around WHITE with the arguments swapped.

use cube_core::{
    Color::{self, White, Yellow},
    topology,
};

use crate::SolveError;

const fn ring(side: Color) -> [Color; 4] {
    let connections = topology::connections(side);
    [
        connections[0].side,
        connections[1].side,
        connections[2].side,
        connections[3].side,
    ]
}

/// Ring sides in the order a clockwise WHITE turn carries them.
pub const WHITE_RING: [Color; 4] = ring(White);

/// Ring sides in the order a clockwise YELLOW turn carries them.
pub const YELLOW_RING: [Color; 4] = ring(Yellow);

/// `SIDE_DISTANCES[from][to]` is the number of clockwise WHITE quarter turns,
/// in `-1..=2`, that carry whatever sits beside `from` over to `to`.
const SIDE_DISTANCES: [[Option<i32>; 6]; 6] = {
    let mut table = [[None; 6]; 6];
    let mut from = 0;
    while from < 4 {
        let mut to = 0;
        while to < 4 {
            let forward = ((to + 4 - from) % 4) as i32;
            table[WHITE_RING[from].index()][WHITE_RING[to].index()] =
                Some(if forward == 3 { -1 } else { forward });
            to += 1;
        }
        from += 1;
    }
    table
};

/// # Errors
///
/// [`SolveError::InvalidDistance`] when either side is WHITE or YELLOW.
pub fn distance_around_white(from: Color, to: Color) -> Result<i32, SolveError> {
    SIDE_DISTANCES[from.index()][to.index()].ok_or(SolveError::InvalidDistance { from, to })
}

/// # Errors
///
/// [`SolveError::InvalidDistance`] when either side is WHITE or YELLOW.
pub fn distance_around_yellow(from: Color, to: Color) -> Result<i32, SolveError> {
    SIDE_DISTANCES[to.index()][from.index()].ok_or(SolveError::InvalidDistance { from, to })
}

/// The ring side `offset` places after `side` in [`YELLOW_RING`] order.
///
/// # Panics
///
/// If `side` is WHITE or YELLOW.
#[must_use]
pub fn around_yellow(side: Color, offset: i32) -> Color {
    topology::neighbor_with_offset(Yellow, side, offset)
}

/// The side to the left of `side` when looking at it with YELLOW up.
#[must_use]
pub fn left_of(side: Color) -> Color {
    around_yellow(side, 1)
}

/// The side to the right of `side` when looking at it with YELLOW up.
#[must_use]
pub fn right_of(side: Color) -> Color {
    around_yellow(side, -1)
}

/// Majority vote over offsets in `-1..=2`. Ties go to the smallest offset and
/// no votes at all means no turn.
#[must_use]
pub fn best_rotation(distances: impl IntoIterator<Item = i32>) -> i32 {
    let mut votes = [0_u32; 4];
    for distance in distances {
        votes[(distance + 1) as usize] += 1;
    }

    let mut best = 0;
    let mut most_votes = 0;
    for (i, &count) in votes.iter().enumerate() {
        if count > most_votes {
            most_votes = count;
            best = i as i32 - 1;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    #[test]
    fn rings_follow_the_topology() {
        assert_eq!(WHITE_RING, [Red, Green, Orange, Blue]);
        assert_eq!(YELLOW_RING, [Red, Blue, Orange, Green]);
    }

    #[test]
    fn known_distances() {
        assert_eq!(distance_around_white(Red, Orange), Ok(2));
        assert_eq!(distance_around_white(Red, Green), Ok(1));
        assert_eq!(distance_around_white(Red, Blue), Ok(-1));
        assert_eq!(distance_around_white(Orange, Green), Ok(-1));
        assert_eq!(distance_around_white(Blue, Red), Ok(1));
        assert_eq!(distance_around_yellow(Red, Blue), Ok(1));
        assert_eq!(distance_around_yellow(Red, Green), Ok(-1));
    }

    #[test]
    fn distance_laws() {
        for from in Color::RING {
            assert_eq!(distance_around_white(from, from), Ok(0));
            assert_eq!(distance_around_white(from, from.opposite()), Ok(2));
            for to in Color::RING {
                let there = distance_around_white(from, to).unwrap();
                let back = distance_around_white(to, from).unwrap();
                assert_eq!((there + back).rem_euclid(4), 0);
                assert_eq!(distance_around_yellow(from, to), Ok(back));
            }
        }
    }

    #[test]
    fn invalid_pairs_fail() {
        for ring in Color::RING {
            for cap in [White, Yellow] {
                assert_eq!(
                    distance_around_white(ring, cap),
                    Err(SolveError::InvalidDistance {
                        from: ring,
                        to: cap
                    })
                );
                assert!(distance_around_yellow(cap, ring).is_err());
            }
        }
        assert!(distance_around_white(White, Yellow).is_err());
    }

    #[test]
    fn turning_matches_distance() {
        // A clockwise WHITE turn moves the bottom strip of each ring side to
        // the side one step further around WHITE.
        let mut cube = cube_core::Cube::solved();
        cube.rotate_clockwise(White);
        for side in WHITE_RING {
            let arrived = cube.facelet(side, cube_core::face::BOTTOM_MIDDLE);
            assert_eq!(distance_around_white(arrived, side), Ok(1));
        }

        let mut cube = cube_core::Cube::solved();
        cube.rotate_clockwise(Yellow);
        for side in YELLOW_RING {
            let arrived = cube.facelet(side, cube_core::face::TOP_MIDDLE);
            assert_eq!(distance_around_yellow(arrived, side), Ok(1));
        }
    }

    #[test]
    fn left_and_right() {
        assert_eq!(left_of(Green), Red);
        assert_eq!(right_of(Green), Orange);
        assert_eq!(left_of(Red), Blue);
        assert_eq!(right_of(Blue), Red);
    }

    #[test]
    fn vote() {
        assert_eq!(best_rotation([]), 0);
        assert_eq!(best_rotation([2, 2, 1]), 2);
        assert_eq!(best_rotation([-1, 1]), -1);
        assert_eq!(best_rotation([0, 1, 1, 0]), 0);
    }
}
