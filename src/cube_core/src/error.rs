use thiserror::Error;

use crate::Color;

/// Rejections raised while building cube state from external input. Nothing
/// past construction returns these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid color value {0}, expected a value from 0 to 5")]
    InvalidColor(u8),
    #[error("Unknown color name `{0}`")]
    UnknownColorName(String),
    #[error("Expected {expected} {what}, found {actual}")]
    InvalidShape {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("The {0} side has not been scanned")]
    MissingSide(Color),
    #[error("Invalid move `{0}`")]
    InvalidMove(String),
}
