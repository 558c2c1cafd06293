use std::time::Instant;

use cube_core::Cube;
use log::{debug, info};

use crate::{
    ConfigError, SolveError, SolveInstructions, SolveStep, SolverConfig, StepContext, start,
    steps::{
        OrientYellowCorners, PositionYellowCorners, SecondLayer, WhiteCorners, WhiteCross,
        YellowCross, YellowEdges,
    },
    success, working,
};

/// Runs the seven phases in order against one cube.
#[derive(Debug, Clone, Default)]
pub struct LayeredSolver {
    config: SolverConfig,
}

impl LayeredSolver {
    /// # Errors
    ///
    /// Whatever [`SolverConfig::validate`] rejects, before any solving starts.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(LayeredSolver { config })
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The phases in the order they run.
    #[must_use]
    pub fn steps(&self) -> [Box<dyn SolveStep>; 7] {
        [
            Box::new(WhiteCross),
            Box::new(WhiteCorners),
            Box::new(SecondLayer),
            Box::new(YellowCross),
            Box::new(YellowEdges),
            Box::new(PositionYellowCorners),
            Box::new(OrientYellowCorners {
                reference_side: self.config.reference_side,
            }),
        ]
    }

    /// Solves `cube` in place and returns the moves that did it.
    ///
    /// `cube` must be reachable from the solved state by quarter turns.
    ///
    /// # Errors
    ///
    /// Any [`SolveError`] from a phase aborts the run. The cube is left in
    /// whatever state the failing phase reached.
    pub fn solve(&self, cube: &mut Cube) -> Result<SolveInstructions, SolveError> {
        info!(start!("Solving cube with the layered method"));
        let start = Instant::now();
        let mut instructions = SolveInstructions::default();

        for step in self.steps() {
            let id = step.id();
            debug!(working!("Running {}..."), id);

            let mut ctx = StepContext::new(cube, id, self.config.record_markers);
            step.solve(&mut ctx)?;
            let (moves, markers) = ctx.into_parts();

            info!(working!("{} finished in {} moves"), id, moves.len());
            instructions.push_phase(id, moves, markers);
        }

        info!(
            success!("Solved in {} moves in {:.3}ms"),
            instructions.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(instructions)
    }

    /// Like [`LayeredSolver::solve`] but leaves `cube` untouched.
    ///
    /// # Errors
    ///
    /// See [`LayeredSolver::solve`].
    pub fn solve_copy(&self, cube: &Cube) -> Result<SolveInstructions, SolveError> {
        let mut scratch = *cube;
        self.solve(&mut scratch)
    }
}
