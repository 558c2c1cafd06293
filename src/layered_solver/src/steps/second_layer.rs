use cube_core::{
    Color::{self, Yellow},
    Cube,
    face::{MIDDLE_LEFT, MIDDLE_RIGHT, TOP_MIDDLE},
};
use log::debug;

use crate::{
    SolveError, SolveStep, StepContext,
    distance::{YELLOW_RING, around_yellow, distance_around_yellow, left_of, right_of},
};

/// Fills the four middle layer edge slots from pieces sitting on YELLOW.
pub struct SecondLayer;

/// Whether the middle edge between `side` and the side to its right is in
/// place.
fn is_slot_solved(cube: &Cube, side: Color) -> bool {
    let right = right_of(side);
    cube.facelet(side, MIDDLE_RIGHT) == side && cube.facelet(right, MIDDLE_LEFT) == right
}

impl SolveStep for SecondLayer {
    fn id(&self) -> &'static str {
        "secondLayer"
    }

    fn solve(&self, ctx: &mut StepContext<'_>) -> Result<(), SolveError> {
        for _ in 0..4 {
            if insert_from_yellow(ctx)? {
                continue;
            }

            // Nothing left on YELLOW, so any unsolved slot holds a wrong or
            // flipped edge.
            let Some(wrong) = YELLOW_RING
                .into_iter()
                .find(|&side| !is_slot_solved(ctx.cube(), side))
            else {
                break;
            };
            debug!("Extracting the middle edge right of {wrong}");
            trigger(ctx, wrong, -1);
            if !insert_from_yellow(ctx)? {
                return Err(ctx.violated(format!(
                    "edge extracted from beside {wrong} did not reach YELLOW"
                )));
            }
        }

        ctx.ensure(
            YELLOW_RING
                .iter()
                .all(|&side| is_slot_solved(ctx.cube(), side)),
            "a middle layer edge is out of place",
        )
    }
}

/// Looks for an edge on YELLOW with no yellow facelet, lines it up with the
/// center matching its side facelet and inserts it. Returns whether one was
/// found.
fn insert_from_yellow(ctx: &mut StepContext<'_>) -> Result<bool, SolveError> {
    for side in YELLOW_RING {
        let front = ctx.facelet(side, TOP_MIDDLE);
        let top = ctx.edge(Yellow, side);
        if front == Yellow || top == Yellow {
            continue;
        }

        ctx.marker("middleEdge", &[front, top]);
        ctx.rotate(Yellow, distance_around_yellow(side, front)?);

        let direction = if left_of(front) == top {
            1
        } else if right_of(front) == top {
            -1
        } else {
            return Err(ctx.violated(format!(
                "{front}/{top} edge does not belong in the middle layer"
            )));
        };
        debug!("Inserting the {front}/{top} edge towards {top}");

        ctx.rotate(Yellow, -direction);
        trigger(ctx, front, direction);
        return Ok(true);
    }
    Ok(false)
}

/// Exchanges the edge above `front` with the middle slot between `front` and
/// its neighbor in `direction` (1 for left, -1 for right), keeping the first
/// layer intact.
fn trigger(ctx: &mut StepContext<'_>, front: Color, direction: i32) {
    let other = around_yellow(front, direction);
    ctx.rotate(other, -direction);
    ctx.rotate(Yellow, direction);
    ctx.rotate(other, direction);
    ctx.rotate(Yellow, direction);
    ctx.rotate(front, direction);
    ctx.rotate(Yellow, -direction);
    ctx.rotate(front, -direction);
}
