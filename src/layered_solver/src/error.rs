use cube_core::Color;
use thiserror::Error;

/// A solve attempt that cannot continue. Both variants mean the solver itself
/// is wrong or was handed an unreachable cube; no partial solution survives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("The {step} step broke its own invariant: {reason}")]
    InvariantViolated { step: &'static str, reason: String },
    #[error("No distance is defined from {from} to {to}, only ring sides have one")]
    InvalidDistance { from: Color, to: Color },
}

impl SolveError {
    /// Always true. Callers of the whole pipeline can treat any error as the
    /// single non-recoverable outcome.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        match self {
            SolveError::InvariantViolated { .. } | SolveError::InvalidDistance { .. } => true,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("The reference side must touch both WHITE and YELLOW, found {0}")]
    InvalidReferenceSide(Color),
    #[error("Failed to parse the solver configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
