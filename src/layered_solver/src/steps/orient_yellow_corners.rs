use cube_core::{
    Color::{self, White, Yellow},
    face::{TOP_LEFT, TOP_MIDDLE, TOP_RIGHT},
};
use log::debug;

use crate::{
    SolveError, SolveStep, StepContext,
    distance::{YELLOW_RING, distance_around_yellow},
};

/// Twists the YELLOW corners in place, then turns YELLOW so the cube ends up
/// solved.
pub struct OrientYellowCorners {
    /// The side the final YELLOW turn lines up with.
    pub reference_side: Color,
}

/// Whether the corner on the top-left of ring side `k` shows the right colors
/// on both of its side facelets.
fn is_oriented(ctx: &StepContext<'_>, k: usize) -> bool {
    let side = YELLOW_RING[k];
    let next = YELLOW_RING[(k + 1) % 4];
    ctx.facelet(side, TOP_LEFT) == ctx.facelet(side, TOP_MIDDLE)
        && ctx.facelet(next, TOP_RIGHT) == ctx.facelet(next, TOP_MIDDLE)
}

/// The first twisted corner whose successor is already oriented, falling back
/// to position 0 when every corner is twisted.
fn leading_twisted(ctx: &StepContext<'_>) -> Option<usize> {
    if (0..4).all(|k| is_oriented(ctx, k)) {
        return None;
    }
    Some(
        (0..4)
            .find(|&k| !is_oriented(ctx, k) && is_oriented(ctx, (k + 1) % 4))
            .unwrap_or(0),
    )
}

impl SolveStep for OrientYellowCorners {
    fn id(&self) -> &'static str {
        "orientYellowCorners"
    }

    fn solve(&self, ctx: &mut StepContext<'_>) -> Result<(), SolveError> {
        if let Some(start) = leading_twisted(ctx) {
            // The trigger leaves WHITE scrambled until every corner is done,
            // so each remaining corner is brought round to the same spot.
            for _ in 0..4 {
                twist(ctx, start)?;
                let Some(next) = leading_twisted(ctx) else {
                    break;
                };
                ctx.rotate(
                    Yellow,
                    distance_around_yellow(YELLOW_RING[next], YELLOW_RING[start])?,
                );
            }
        }

        let reference = self.reference_side;
        let offset = distance_around_yellow(reference, ctx.facelet(reference, TOP_MIDDLE))?;
        debug!("Turning YELLOW by {offset} to line up with {reference}");
        ctx.rotate(Yellow, offset);

        ctx.ensure(ctx.cube().is_solved(), "cube is not solved after the last step")
    }
}

/// Repeats the twisting trigger on the corner at ring position `k` until it
/// is oriented.
fn twist(ctx: &mut StepContext<'_>, k: usize) -> Result<(), SolveError> {
    let side = YELLOW_RING[k];
    ctx.marker("twistCorner", &[Yellow, side, YELLOW_RING[(k + 1) % 4]]);

    for _ in 0..4 {
        ctx.counter_clockwise(side);
        ctx.clockwise(White);
        ctx.clockwise(side);
        ctx.counter_clockwise(White);
        if is_oriented(ctx, k) {
            return Ok(());
        }
    }
    Err(ctx.violated(format!("corner at {side} did not orient")))
}

#[cfg(test)]
mod tests {
    use cube_core::Cube;

    use super::*;
    use crate::{
        LayeredSolver, SolverConfig,
        steps::test_util::{run, scrambled},
    };

    fn solve_with_reference(cube: &mut Cube, reference_side: Color) {
        let solver = LayeredSolver::new(SolverConfig {
            reference_side,
            ..SolverConfig::default()
        })
        .unwrap();
        let steps = solver.steps();
        let steps: Vec<&dyn SolveStep> = steps.iter().map(|step| step.as_ref()).collect();
        run(cube, &steps);
    }

    #[test]
    fn solves_random_scrambles() {
        for seed in 0..300 {
            let mut cube = scrambled(seed, seed as usize % 120);
            solve_with_reference(&mut cube, Color::Red);
            assert!(cube.is_solved(), "seed {seed}");
        }
    }

    #[test]
    fn any_ring_side_can_be_the_reference() {
        for reference_side in Color::RING {
            let mut cube = scrambled(99, 60);
            solve_with_reference(&mut cube, reference_side);
            assert!(cube.is_solved());
        }
    }

    #[test]
    fn turned_top_is_aligned() {
        let mut cube = Cube::solved();
        cube.rotate_counter_clockwise(Yellow);
        let mut ctx = StepContext::new(&mut cube, "orientYellowCorners", true);
        OrientYellowCorners {
            reference_side: Color::Red,
        }
        .solve(&mut ctx)
        .unwrap();
        assert_eq!(ctx.moves().len(), 1);
        assert!(ctx.moves()[0].clockwise);
    }

    /// A solved cube with the YELLOW corners at the given ring positions shown
    /// twisted on their side facelets.
    fn with_twisted(positions: &[usize]) -> Cube {
        let mut faces = *Cube::solved().faces();
        for &k in positions {
            let side = YELLOW_RING[k];
            faces[side.index()] = faces[side.index()].with(TOP_LEFT, Yellow);
        }
        Cube::new(faces)
    }

    fn leading(positions: &[usize]) -> Option<usize> {
        let mut cube = with_twisted(positions);
        let ctx = StepContext::new(&mut cube, "orientYellowCorners", true);
        leading_twisted(&ctx)
    }

    #[test]
    fn leading_corner() {
        assert_eq!(leading(&[]), None);
        assert_eq!(leading(&[2]), Some(2));
        assert_eq!(leading(&[1, 2]), Some(2));
        assert_eq!(leading(&[1, 3]), Some(1));
        // A twisted pair across the end of the ring.
        assert_eq!(leading(&[3, 0]), Some(0));
        assert_eq!(leading(&[0, 1, 2, 3]), Some(0));
    }
}
