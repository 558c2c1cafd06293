use cube_core::{Color::Yellow, CornerPiece, topology};
use log::debug;

use crate::{SolveError, SolveStep, StepContext, distance::YELLOW_RING};

/// Cycles the YELLOW corners into their slots, ignoring their twist.
pub struct PositionYellowCorners;

/// Whether the YELLOW corner between ring position `k` and the one before it
/// holds the right piece.
fn is_positioned(ctx: &StepContext<'_>, k: usize) -> bool {
    let side = YELLOW_RING[k];
    let previous = YELLOW_RING[(k + 3) % 4];
    let index = topology::corner_between(Yellow, side, previous);
    ctx.corner(Yellow, index) == CornerPiece::new(Yellow, side, previous)
}

fn count_positioned(ctx: &StepContext<'_>) -> usize {
    (0..4).filter(|&k| is_positioned(ctx, k)).count()
}

impl SolveStep for PositionYellowCorners {
    fn id(&self) -> &'static str {
        "positionYellowCorners"
    }

    fn solve(&self, ctx: &mut StepContext<'_>) -> Result<(), SolveError> {
        match count_positioned(ctx) {
            4 => return Ok(()),
            0 => {
                debug!("No YELLOW corner is in place, cycling from the first slot");
                cycle(ctx, 0);
            }
            _ => {}
        }

        let Some(anchor) = (0..4).find(|&k| is_positioned(ctx, k)) else {
            return Err(ctx.violated("no YELLOW corner is in place to anchor on"));
        };
        debug!("Anchoring on the YELLOW corner at {}", YELLOW_RING[anchor]);

        for _ in 0..2 {
            cycle(ctx, anchor);
            if count_positioned(ctx) == 4 {
                return Ok(());
            }
        }

        Err(ctx.violated(format!(
            "{} YELLOW corners still out of place",
            4 - count_positioned(ctx)
        )))
    }
}

/// Cycles the three YELLOW corners other than the one at ring position `k`.
fn cycle(ctx: &mut StepContext<'_>, k: usize) {
    let left = YELLOW_RING[(k + 1) % 4];
    let right = YELLOW_RING[(k + 3) % 4];
    ctx.marker("anchorCorner", &[Yellow, YELLOW_RING[k], right]);

    ctx.clockwise(Yellow);
    ctx.clockwise(right);
    ctx.counter_clockwise(Yellow);
    ctx.counter_clockwise(left);
    ctx.clockwise(Yellow);
    ctx.counter_clockwise(right);
    ctx.counter_clockwise(Yellow);
    ctx.clockwise(left);
}

#[cfg(test)]
mod tests {
    use cube_core::Cube;

    use super::*;
    use crate::steps::{
        SecondLayer, WhiteCorners, WhiteCross, YellowCross, YellowEdges,
        test_util::{run, scrambled},
    };

    #[test]
    fn cycle_keeps_the_anchor() {
        let mut cube = Cube::solved();
        let mut ctx = StepContext::new(&mut cube, "positionYellowCorners", true);
        cycle(&mut ctx, 2);
        assert!(is_positioned(&ctx, 2));
        assert_eq!(count_positioned(&ctx), 1);

        cycle(&mut ctx, 2);
        cycle(&mut ctx, 2);
        assert_eq!(count_positioned(&ctx), 4);
    }

    #[test]
    fn positions_corners_from_random_scrambles() {
        for seed in 0..300 {
            let mut cube = scrambled(seed, 30 + seed as usize % 90);
            run(
                &mut cube,
                &[
                    &WhiteCross,
                    &WhiteCorners,
                    &SecondLayer,
                    &YellowCross,
                    &YellowEdges,
                    &PositionYellowCorners,
                ],
            );
            let ctx = StepContext::new(&mut cube, "check", false);
            assert_eq!(count_positioned(&ctx), 4, "seed {seed}");
        }
    }
}
