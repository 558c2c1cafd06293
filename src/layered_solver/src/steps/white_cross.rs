use cube_core::{
    Color::{self, White, Yellow},
    Cube,
    face::{BOTTOM_MIDDLE, MIDDLE_LEFT, MIDDLE_RIGHT, TOP_MIDDLE},
};
use log::debug;

use crate::{
    SolveError, SolveStep, StepContext,
    distance::{
        WHITE_RING, best_rotation, distance_around_white, distance_around_yellow, left_of,
        right_of,
    },
    working,
};

/// Places the four edges touching WHITE, each with its side color matching
/// the center next to it.
pub struct WhiteCross;

/// Whether the WHITE edge beside `side` is in place and oriented.
fn is_placed(cube: &Cube, side: Color) -> bool {
    cube.edge_color(White, side) == White && cube.facelet(side, BOTTOM_MIDDLE) == side
}

fn is_complete(cube: &Cube) -> bool {
    WHITE_RING.iter().all(|&side| is_placed(cube, side))
}

impl SolveStep for WhiteCross {
    fn id(&self) -> &'static str {
        "whiteCross"
    }

    fn solve(&self, ctx: &mut StepContext<'_>) -> Result<(), SolveError> {
        rotate_to_best(ctx)?;
        evict_misplaced(ctx)?;

        for pass in 0..4 {
            if is_complete(ctx.cube()) {
                break;
            }
            debug!(working!("White cross pass {}"), pass + 1);
            for target in WHITE_RING {
                if !is_placed(ctx.cube(), target) {
                    place(ctx, target)?;
                }
            }
        }

        ctx.ensure(is_complete(ctx.cube()), "cross incomplete after four passes")
    }
}

/// Turns WHITE so that as many of its white-facing edges as possible line up
/// with their side centers.
fn rotate_to_best(ctx: &mut StepContext<'_>) -> Result<(), SolveError> {
    let mut distances = vec![];
    for side in WHITE_RING {
        if ctx.edge(White, side) == White {
            distances.push(distance_around_white(side, ctx.facelet(side, BOTTOM_MIDDLE))?);
        }
    }

    let best = best_rotation(distances);
    debug!("Turning WHITE by {best} to line up the cross");
    ctx.rotate(White, best);
    Ok(())
}

/// Lifts every white-facing WHITE edge beside the wrong center up to YELLOW and
/// drops it back down beside its own center.
fn evict_misplaced(ctx: &mut StepContext<'_>) -> Result<(), SolveError> {
    for side in WHITE_RING {
        let belongs = ctx.facelet(side, BOTTOM_MIDDLE);
        if ctx.edge(White, side) == White && belongs != side {
            debug!("Moving the {belongs} cross edge from beside {side}");
            ctx.rotate(side, 2);
            ctx.rotate(Yellow, distance_around_yellow(side, belongs)?);
            ctx.rotate(belongs, 2);
        }
    }
    Ok(())
}

/// Brings an edge sitting on the left or right of `turned` down into the
/// WHITE slot beside `target`. WHITE is turned first so the quarter turn of
/// `turned` does not disturb any placed cross edge, then turned back.
fn insert_from_middle(
    ctx: &mut StepContext<'_>,
    turned: Color,
    clockwise: bool,
    target: Color,
) -> Result<(), SolveError> {
    let offset = distance_around_white(target, turned)?;
    ctx.rotate(White, offset);
    ctx.turn(turned, clockwise);
    ctx.rotate(White, -offset);
    Ok(())
}

/// Finds the WHITE edge belonging beside `target` and moves it there.
fn place(ctx: &mut StepContext<'_>, target: Color) -> Result<(), SolveError> {
    ctx.marker("whiteEdge", &[White, target]);

    for side in WHITE_RING {
        let right = right_of(side);

        if ctx.edge(Yellow, side) == White && ctx.facelet(side, TOP_MIDDLE) == target {
            debug!("{target} cross edge is on YELLOW above {side}");
            ctx.rotate(Yellow, distance_around_yellow(side, target)?);
            ctx.rotate(target, 2);
        } else if ctx.facelet(side, TOP_MIDDLE) == White && ctx.edge(Yellow, side) == target {
            debug!("{target} cross edge is flipped above {side}");
            ctx.clockwise(side);
            insert_from_middle(ctx, right, false, target)?;
            ctx.counter_clockwise(side);
        } else if ctx.edge(White, side) == White && ctx.facelet(side, BOTTOM_MIDDLE) == target {
            debug!("{target} cross edge is in the WHITE slot beside {side}");
            ctx.rotate(side, 2);
            ctx.rotate(Yellow, distance_around_yellow(side, target)?);
            ctx.rotate(target, 2);
        } else if ctx.facelet(side, BOTTOM_MIDDLE) == White && ctx.edge(White, side) == target {
            debug!("{target} cross edge is flipped beside {side}");
            ctx.clockwise(side);
            insert_from_middle(ctx, left_of(side), true, target)?;
        } else if ctx.facelet(side, MIDDLE_RIGHT) == White
            && ctx.facelet(right, MIDDLE_LEFT) == target
        {
            debug!("{target} cross edge is between {side} and {right}, white on {side}");
            insert_from_middle(ctx, right, false, target)?;
        } else if ctx.facelet(right, MIDDLE_LEFT) == White
            && ctx.facelet(side, MIDDLE_RIGHT) == target
        {
            debug!("{target} cross edge is between {side} and {right}, white on {right}");
            insert_from_middle(ctx, side, true, target)?;
        } else {
            continue;
        }
        return Ok(());
    }

    Err(ctx.violated(format!("could not find the WHITE/{target} edge")))
}

#[cfg(test)]
mod tests {
    use cube_core::{Move, parse_moves};

    use super::*;
    use crate::steps::test_util::{run, scrambled};

    #[test]
    fn solves_cross_from_random_scrambles() {
        for seed in 0..300 {
            let mut cube = scrambled(seed, 10 + seed as usize % 60);
            run(&mut cube, &[&WhiteCross]);
            assert!(is_complete(&cube), "seed {seed}");
        }
    }

    #[test]
    fn cross_edges_resting_on_yellow() {
        let mut cube = Cube::solved();
        cube.apply_all(parse_moves("R2 O2 G2 B2 Y").unwrap());
        for side in WHITE_RING {
            assert_eq!(cube.edge_color(Yellow, side), White);
        }

        run(&mut cube, &[&WhiteCross]);
        for side in WHITE_RING {
            assert_eq!(cube.edge_color(White, side), White);
        }
        assert!(is_complete(&cube));
    }

    #[test]
    fn solved_cross_needs_no_moves() {
        let mut cube = Cube::solved();
        cube.apply_all(parse_moves("Y2 Y").unwrap());
        let mut ctx = StepContext::new(&mut cube, "whiteCross", true);
        WhiteCross.solve(&mut ctx).unwrap();
        assert!(ctx.moves().is_empty());
    }

    #[test]
    fn rotated_cross_takes_one_turn() {
        let mut cube = Cube::solved();
        cube.rotate_clockwise(White);
        let mut ctx = StepContext::new(&mut cube, "whiteCross", true);
        WhiteCross.solve(&mut ctx).unwrap();
        assert_eq!(ctx.moves(), [Move::counter_clockwise(White)]);
    }

    #[test]
    fn marks_each_edge_it_places() {
        let mut cube = scrambled(7, 40);
        let mut ctx = StepContext::new(&mut cube, "whiteCross", true);
        WhiteCross.solve(&mut ctx).unwrap();
        let (_, markers) = ctx.into_parts();
        assert!(!markers.is_empty());
        for (_, marker) in &markers {
            assert_eq!(marker.id, "whiteEdge");
            assert_eq!(marker.colors[0], White);
            assert!(marker.colors[1].is_ring());
        }
    }
}
