use cube_core::Color;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Knobs that change what a solve reports, never how it solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Keep the instructional markers phases emit.
    pub record_markers: bool,
    /// The side whose top edge the final YELLOW turn lines up with.
    pub reference_side: Color,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            record_markers: true,
            reference_side: Color::Red,
        }
    }
}

impl SolverConfig {
    /// # Errors
    ///
    /// [`ConfigError::InvalidReferenceSide`] when the reference side is WHITE
    /// or YELLOW.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_side.is_ring() {
            Ok(())
        } else {
            Err(ConfigError::InvalidReferenceSide(self.reference_side))
        }
    }

    /// Parses and validates a TOML table holding the fields of this struct.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed input, otherwise whatever
    /// [`SolverConfig::validate`] rejects.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<SolverConfig>(source)?;
        config.validate()?;
        Ok(config)
    }
}
