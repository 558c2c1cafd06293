use cube_core::{
    Color::{self, White, Yellow},
    CornerPiece, Cube,
    face::{BOTTOM_LEFT, BOTTOM_RIGHT, TOP_RIGHT},
    topology,
};
use itertools::Itertools;
use log::debug;

use crate::{
    SolveError, SolveStep, StepContext,
    distance::{WHITE_RING, distance_around_yellow},
};

/// Fills in the four WHITE corners beneath the finished cross.
pub struct WhiteCorners;

/// The WHITE corner slots as (left, right) side pairs, looking at the left
/// side with YELLOW up.
fn slots() -> impl Iterator<Item = (Color, Color)> {
    WHITE_RING.into_iter().circular_tuple_windows()
}

fn is_solved_at(cube: &Cube, left: Color, right: Color) -> bool {
    cube.facelet(left, BOTTOM_RIGHT) == left
        && cube.facelet(right, BOTTOM_LEFT) == right
        && cube.corner_piece(left, BOTTOM_RIGHT) == CornerPiece::new(White, left, right)
        && cube.facelet(White, topology::corner_between(White, left, right)) == White
}

impl SolveStep for WhiteCorners {
    fn id(&self) -> &'static str {
        "whiteCorners"
    }

    fn solve(&self, ctx: &mut StepContext<'_>) -> Result<(), SolveError> {
        for (left, right) in slots() {
            if is_solved_at(ctx.cube(), left, right) {
                continue;
            }
            ctx.marker("whiteCorner", &[White, left, right]);
            move_above(ctx, left, right)?;
            insert(ctx, left, right)?;
        }

        ctx.ensure(
            slots().all(|(left, right)| is_solved_at(ctx.cube(), left, right)),
            "a WHITE corner is out of place",
        )
    }
}

/// Brings the corner for the slot between `left` and `right` onto YELLOW,
/// directly above its slot.
fn move_above(ctx: &mut StepContext<'_>, left: Color, right: Color) -> Result<(), SolveError> {
    let target = CornerPiece::new(White, left, right);

    // Corners stuck in the wrong WHITE slot are popped up first. The cross
    // edge this disturbs is restored by the last turn.
    if let Some(side) = WHITE_RING
        .into_iter()
        .find(|&side| ctx.corner(side, BOTTOM_RIGHT) == target)
    {
        debug!("Lifting the {target:?} corner from beside {side}");
        ctx.counter_clockwise(side);
        ctx.clockwise(Yellow);
        ctx.clockwise(side);
    }

    let Some(side) = WHITE_RING
        .into_iter()
        .find(|&side| ctx.corner(side, TOP_RIGHT) == target)
    else {
        return Err(ctx.violated(format!("could not find the {target:?} corner")));
    };
    debug!("Found the {target:?} corner above {side}");
    ctx.rotate(Yellow, distance_around_yellow(side, left)?);
    Ok(())
}

/// Repeats the insertion trigger on `left` until the corner above drops into
/// place with WHITE facing down.
fn insert(ctx: &mut StepContext<'_>, left: Color, right: Color) -> Result<(), SolveError> {
    for _ in 0..3 {
        ctx.counter_clockwise(left);
        ctx.counter_clockwise(Yellow);
        ctx.clockwise(left);
        if is_solved_at(ctx.cube(), left, right) {
            return Ok(());
        }

        ctx.counter_clockwise(left);
        ctx.counter_clockwise(Yellow);
        ctx.clockwise(left);
        ctx.clockwise(Yellow);
    }

    Err(ctx.violated(format!(
        "corner between {left} and {right} did not orient after three insertions"
    )))
}
