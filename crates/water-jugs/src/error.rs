//! Error types for state construction, configuration and solution replay.

use thiserror::Error;

use crate::puzzle::{Jug, State};

/// Main error type for the water jugs solver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JugError {
    /// A state was requested with a volume outside `0..=capacity`
    #[error("invalid volume {volume} for the {jug} jug (capacity {capacity})")]
    InvalidVolume { jug: Jug, volume: i64, capacity: u32 },

    /// Non-positive capacity, negative target or initial volume out of range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Solutions hold at least the start state
    #[error("a solution must contain at least one state")]
    EmptySolution,

    /// Two consecutive states of a solution that no operator connects
    #[error("no operator leads from {from} to {to}")]
    IllegalMove { from: State, to: State },
}

/// Result type for water jugs operations
pub type Result<T> = std::result::Result<T, JugError>;
