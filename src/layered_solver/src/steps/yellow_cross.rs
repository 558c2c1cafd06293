use cube_core::{Color::Yellow, Cube};
use log::debug;

use crate::{SolveError, SolveStep, StepContext, distance::YELLOW_RING};

/// Flips the YELLOW edges until all four show yellow on top.
pub struct YellowCross;

/// Which YELLOW edges show yellow, read around [`YELLOW_RING`] from some
/// starting side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Dot,
    L,
    Line,
    Cross,
}

impl Pattern {
    const ALL: [Self; 4] = [Pattern::Dot, Pattern::L, Pattern::Line, Pattern::Cross];

    const fn mask(self) -> [bool; 4] {
        match self {
            Pattern::Dot => [false; 4],
            Pattern::L => [true, true, false, false],
            Pattern::Line => [true, false, true, false],
            Pattern::Cross => [true; 4],
        }
    }

    /// The first ring position the pattern can be read from, if any.
    fn find(self, cube: &Cube) -> Option<usize> {
        let mask = self.mask();
        (0..4).find(|&start| {
            (0..4).all(|j| {
                let side = YELLOW_RING[(start + j) % 4];
                (cube.edge_color(Yellow, side) == Yellow) == mask[j]
            })
        })
    }

    fn classify(cube: &Cube) -> Option<(Self, usize)> {
        Pattern::ALL
            .into_iter()
            .find_map(|pattern| pattern.find(cube).map(|start| (pattern, start)))
    }
}

impl SolveStep for YellowCross {
    fn id(&self) -> &'static str {
        "yellowCross"
    }

    fn solve(&self, ctx: &mut StepContext<'_>) -> Result<(), SolveError> {
        let pattern = Pattern::classify(ctx.cube());
        debug!("YELLOW edges start as {pattern:?}");
        if matches!(pattern, Some((Pattern::Cross, _))) {
            return Ok(());
        }
        ctx.marker("yellowCrossPattern", &[Yellow]);

        if Pattern::Dot.find(ctx.cube()).is_some() {
            flip(ctx, 0);
        }
        if let Some(start) = Pattern::L.find(ctx.cube()) {
            flip(ctx, start + 2);
        }
        if let Some(start) = Pattern::Line.find(ctx.cube()) {
            flip(ctx, start);
        }

        ctx.ensure(
            Pattern::Cross.find(ctx.cube()).is_some(),
            "YELLOW cross did not form",
        )
    }
}

/// The edge flipping sequence, with the side at ring position `at` on the
/// right and the next side in the ring in front.
fn flip(ctx: &mut StepContext<'_>, at: usize) {
    let front = YELLOW_RING[(at + 1) % 4];
    let right = YELLOW_RING[at % 4];
    ctx.clockwise(front);
    ctx.clockwise(right);
    ctx.clockwise(Yellow);
    ctx.counter_clockwise(right);
    ctx.counter_clockwise(Yellow);
    ctx.counter_clockwise(front);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::{
        SecondLayer, WhiteCorners, WhiteCross,
        test_util::{run, scrambled},
    };

    #[test]
    fn classifies_solved_cube() {
        assert_eq!(
            Pattern::classify(&Cube::solved()),
            Some((Pattern::Cross, 0))
        );
    }

    #[test]
    fn formed_cross_needs_no_moves_or_marker() {
        let mut cube = Cube::solved();
        cube.rotate_clockwise(Yellow);
        let mut ctx = StepContext::new(&mut cube, "yellowCross", true);
        YellowCross.solve(&mut ctx).unwrap();
        let (moves, markers) = ctx.into_parts();
        assert!(moves.is_empty());
        assert!(markers.is_empty());
    }

    #[test]
    fn marker_points_at_the_first_flip() {
        let mut flipped = 0;
        for seed in 0..50 {
            let mut cube = scrambled(seed, 80);
            run(&mut cube, &[&WhiteCross, &WhiteCorners, &SecondLayer]);
            if Pattern::Cross.find(&cube).is_some() {
                continue;
            }
            flipped += 1;

            let mut ctx = StepContext::new(&mut cube, "yellowCross", true);
            YellowCross.solve(&mut ctx).unwrap();
            let (moves, markers) = ctx.into_parts();
            assert!(!moves.is_empty(), "seed {seed}");
            assert_eq!(markers.len(), 1, "seed {seed}");
            assert_eq!(markers[0].0, 0, "seed {seed}");
        }
        assert!(flipped > 0);
    }

    #[test]
    fn forms_cross_from_random_scrambles() {
        let mut seen = vec![];
        for seed in 0..300 {
            let mut cube = scrambled(seed, 30 + seed as usize % 90);
            run(&mut cube, &[&WhiteCross, &WhiteCorners, &SecondLayer]);
            if let Some((pattern, _)) = Pattern::classify(&cube)
                && !seen.contains(&pattern)
            {
                seen.push(pattern);
            }

            run(&mut cube, &[&YellowCross]);
            for side in YELLOW_RING {
                assert_eq!(cube.edge_color(Yellow, side), Yellow, "seed {seed}");
            }
        }
        assert_eq!(seen.len(), 4, "every pattern shows up: {seen:?}");
    }
}
