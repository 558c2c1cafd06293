use cube_core::{Color, CornerPiece, Cube, Move};
use log::trace;

use crate::{MoveMarker, SolveError};

/// One phase of the layered method.
///
/// A phase turns the cube only through its [`StepContext`], may inspect the
/// cube freely between moves, and must confirm its own goal before returning.
pub trait SolveStep {
    /// Stable identifier used for phase boundaries and logs.
    fn id(&self) -> &'static str;

    /// # Errors
    ///
    /// [`SolveError`] when the phase cannot reach its goal, which only
    /// happens for unreachable cubes or solver bugs.
    fn solve(&self, ctx: &mut StepContext<'_>) -> Result<(), SolveError>;
}

/// The cube a phase works on, plus everything it records while turning it.
pub struct StepContext<'a> {
    cube: &'a mut Cube,
    step: &'static str,
    moves: Vec<Move>,
    markers: Vec<(usize, MoveMarker)>,
    record_markers: bool,
}

impl<'a> StepContext<'a> {
    pub fn new(cube: &'a mut Cube, step: &'static str, record_markers: bool) -> Self {
        StepContext {
            cube,
            step,
            moves: Vec::with_capacity(32),
            markers: vec![],
            record_markers,
        }
    }

    #[must_use]
    pub fn cube(&self) -> &Cube {
        self.cube
    }

    #[must_use]
    pub fn facelet(&self, side: Color, index: usize) -> Color {
        self.cube.facelet(side, index)
    }

    /// See [`Cube::edge_color`].
    #[must_use]
    pub fn edge(&self, side: Color, adjacent: Color) -> Color {
        self.cube.edge_color(side, adjacent)
    }

    /// See [`Cube::corner_piece`].
    #[must_use]
    pub fn corner(&self, side: Color, index: usize) -> CornerPiece {
        self.cube.corner_piece(side, index)
    }

    pub fn turn(&mut self, side: Color, clockwise: bool) {
        let mv = Move { side, clockwise };
        trace!("{}: {mv}", self.step);
        self.cube.apply(mv);
        self.moves.push(mv);
    }

    pub fn clockwise(&mut self, side: Color) {
        self.turn(side, true);
    }

    pub fn counter_clockwise(&mut self, side: Color) {
        self.turn(side, false);
    }

    /// Quarter turns `side` `turns.abs()` times, clockwise when positive.
    pub fn rotate(&mut self, side: Color, turns: i32) {
        for _ in 0..turns.unsigned_abs() {
            self.turn(side, turns > 0);
        }
    }

    /// Attaches a marker to the next move this phase records.
    pub fn marker(&mut self, id: &'static str, colors: &[Color]) {
        if self.record_markers {
            self.markers.push((
                self.moves.len(),
                MoveMarker {
                    id,
                    colors: colors.to_vec(),
                },
            ));
        }
    }

    /// Moves recorded so far by this phase.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn violated(&self, reason: impl Into<String>) -> SolveError {
        SolveError::InvariantViolated {
            step: self.step,
            reason: reason.into(),
        }
    }

    /// # Errors
    ///
    /// [`SolveError::InvariantViolated`] carrying `reason` unless `holds`.
    pub fn ensure(&self, holds: bool, reason: &str) -> Result<(), SolveError> {
        if holds {
            Ok(())
        } else {
            Err(self.violated(reason))
        }
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<Move>, Vec<(usize, MoveMarker)>) {
        (self.moves, self.markers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_applies_moves() {
        let mut cube = Cube::solved();
        let mut ctx = StepContext::new(&mut cube, "test", true);
        ctx.rotate(Color::Red, 2);
        ctx.rotate(Color::Blue, -1);
        ctx.rotate(Color::Green, 0);
        assert_eq!(
            ctx.moves(),
            [
                Move::clockwise(Color::Red),
                Move::clockwise(Color::Red),
                Move::counter_clockwise(Color::Blue),
            ]
        );
        ctx.rotate(Color::Blue, 1);
        ctx.rotate(Color::Red, -2);
        assert!(ctx.cube().is_solved());
    }

    #[test]
    fn markers_point_at_the_next_move() {
        let mut cube = Cube::solved();
        let mut ctx = StepContext::new(&mut cube, "test", true);
        ctx.clockwise(Color::White);
        ctx.marker("mark", &[Color::White, Color::Red]);
        ctx.clockwise(Color::Red);
        let (moves, markers) = ctx.into_parts();
        assert_eq!(moves.len(), 2);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].0, 1);
        assert_eq!(markers[0].1.colors, [Color::White, Color::Red]);
    }

    #[test]
    fn markers_can_be_switched_off() {
        let mut cube = Cube::solved();
        let mut ctx = StepContext::new(&mut cube, "test", false);
        ctx.marker("mark", &[Color::White]);
        ctx.clockwise(Color::White);
        assert!(ctx.into_parts().1.is_empty());
    }

    #[test]
    fn violations_name_the_step() {
        let mut cube = Cube::solved();
        let ctx = StepContext::new(&mut cube, "someStep", true);
        assert_eq!(ctx.ensure(true, "fine"), Ok(()));
        assert_eq!(
            ctx.ensure(false, "broken"),
            Err(SolveError::InvariantViolated {
                step: "someStep",
                reason: "broken".to_owned()
            })
        );
    }
}
