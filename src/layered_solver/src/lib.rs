#![warn(clippy::pedantic)]
#![allow(
    clippy::similar_names,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

//! A seven phase layer-by-layer solver.
//!
//! Every phase mutates one shared [`cube_core::Cube`] through a
//! [`step::StepContext`] that records each quarter turn. Phases re-derive
//! everything they need from the cube between moves and re-check their own
//! post-condition before returning; a failed check is a bug in the solver and
//! aborts the whole run with [`SolveError::InvariantViolated`].

mod config;
pub mod distance;
mod error;
mod instructions;
mod solver;
pub mod step;
pub mod steps;

pub use config::SolverConfig;
pub use error::{ConfigError, SolveError};
pub use instructions::{MoveMarker, SolveInstructions};
pub use solver::LayeredSolver;
pub use step::{SolveStep, StepContext};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
