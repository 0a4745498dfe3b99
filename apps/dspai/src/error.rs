//! # CLI Errors
//!
//! Everything a command can fail with. Component errors pass through
//! unchanged so the caller sees the hook's own message.

use dspai_comp::{CompError, ParseOperationError};
use thiserror::Error;

/// Errors surfaced by the dspai binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The component refused to initialize, or was initialized twice.
    #[error(transparent)]
    Component(#[from] CompError),

    /// The operation script could not be parsed.
    #[error(transparent)]
    Script(#[from] ParseOperationError),

    /// The run plan file is not valid TOML for a `RunPlan`.
    #[error("Invalid run plan: {0}")]
    PlanSyntax(#[from] toml::de::Error),

    /// The run plan parsed but its values are unusable.
    #[error("Invalid run plan: {0}")]
    InvalidPlan(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
