#![warn(clippy::pedantic)]
#![allow(
    clippy::similar_names,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

//! State model for a 3x3x3 cube: colors, packed faces, the static side
//! topology, and the cube itself.
//!
//! The cube is always held with YELLOW up, WHITE down and GREEN facing the
//! observer. Every side stores only its 8 outer facelets; the center is
//! implied by the side's own color.

mod builder;
mod color;
mod corner;
mod cube;
mod error;
pub mod face;
mod moves;
pub mod topology;

pub use builder::CubeBuilder;
pub use color::Color;
pub use corner::CornerPiece;
pub use cube::Cube;
pub use error::CubeError;
pub use face::Face;
pub use moves::{Move, parse_moves, random_scramble};
