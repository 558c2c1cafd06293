use cube_core::{Color::Yellow, face::TOP_MIDDLE};
use log::debug;

use crate::{
    SolveError, SolveStep, StepContext,
    distance::{YELLOW_RING, best_rotation, distance_around_yellow},
};

/// Permutes the YELLOW cross edges so each sits above its own center.
pub struct YellowEdges;

/// For each side in [`YELLOW_RING`] order, the YELLOW turns that would carry
/// its top edge to the center it belongs to.
fn offsets(ctx: &StepContext<'_>) -> Result<[i32; 4], SolveError> {
    let mut offsets = [0; 4];
    for (offset, side) in offsets.iter_mut().zip(YELLOW_RING) {
        *offset = distance_around_yellow(side, ctx.facelet(side, TOP_MIDDLE))?;
    }
    Ok(offsets)
}

impl SolveStep for YellowEdges {
    fn id(&self) -> &'static str {
        "yellowEdges"
    }

    fn solve(&self, ctx: &mut StepContext<'_>) -> Result<(), SolveError> {
        rotate_to_best(ctx)?;
        if misplaced_are_opposite(&offsets(ctx)?) {
            debug!("Misplaced YELLOW edges are opposite each other");
            swap(ctx)?;
            rotate_to_best(ctx)?;
        }
        swap(ctx)?;

        let offsets = offsets(ctx)?;
        ctx.ensure(
            offsets.iter().all(|&offset| offset == 0),
            "YELLOW edges are still misplaced",
        )
    }
}

fn rotate_to_best(ctx: &mut StepContext<'_>) -> Result<(), SolveError> {
    let best = best_rotation(offsets(ctx)?);
    debug!("Turning YELLOW by {best} to line up its edges");
    ctx.rotate(Yellow, best);
    Ok(())
}

fn misplaced_are_opposite(offsets: &[i32; 4]) -> bool {
    offsets
        .iter()
        .position(|&offset| offset != 0)
        .is_some_and(|first| offsets[(first + 2) % 4] != 0)
}

/// Swaps the top edges of the first misplaced side that follows a placed one
/// and the side after it. Does nothing when no such pair exists.
fn swap(ctx: &mut StepContext<'_>) -> Result<(), SolveError> {
    let offsets = offsets(ctx)?;
    let Some(at) = (0..4).find(|&i| offsets[i] == 0 && offsets[(i + 1) % 4] != 0) else {
        return Ok(());
    };

    let right = YELLOW_RING[at];
    debug!("Swapping YELLOW edges with {right} on the right");
    ctx.clockwise(right);
    ctx.clockwise(Yellow);
    ctx.counter_clockwise(right);
    ctx.clockwise(Yellow);
    ctx.clockwise(right);
    ctx.rotate(Yellow, 2);
    ctx.counter_clockwise(right);
    ctx.clockwise(Yellow);
    Ok(())
}
