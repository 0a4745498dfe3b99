//! # Core Type Definitions
//!
//! This module contains the state and error types shared by every layer of
//! the component core:
//! - Coarse lifecycle state (`LifecycleState`)
//! - Fine execution state (`ExecutionState`)
//! - Combined visible state (`ComponentState`) and `StateSnapshot`
//! - Error types (`CompError`)
//!
//! ## Masking Rule
//!
//! The execution state a caller observes is a function of both fields:
//!
//! | Lifecycle | Visible execution state |
//! |-----------|-------------------------|
//! | Uninitialized | `Reset` |
//! | Initialized | stored value |
//! | Terminated | `Done` |

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// LIFECYCLE STATE
// =============================================================================

/// Coarse lifecycle state of a component.
///
/// Moves forward only: `Uninitialized -> Initialized -> Terminated`, or
/// straight to `Terminated`. `Terminated` is absorbing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum LifecycleState {
    /// Default state after construction and before initialization.
    #[default]
    Uninitialized,
    /// State after a successful `initialize()`.
    Initialized,
    /// State after `terminate()`; resources released, terminal.
    Terminated,
}

impl LifecycleState {
    /// Get the state name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Initialized => "initialized",
            LifecycleState::Terminated => "terminated",
        }
    }

    /// Check if this state is terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, LifecycleState::Terminated)
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// EXECUTION STATE
// =============================================================================

/// Fine execution state of a component.
///
/// Only meaningful while the lifecycle is `Initialized`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum ExecutionState {
    /// Default state after initialization or reset.
    #[default]
    Reset,
    /// The component is actively processing.
    Running,
    /// Processing is complete.
    Done,
}

impl ExecutionState {
    /// Get the state name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionState::Reset => "reset",
            ExecutionState::Running => "running",
            ExecutionState::Done => "done",
        }
    }

    /// Apply the masking rule: the execution state visible under `lifecycle`.
    #[must_use]
    pub fn visible(self, lifecycle: LifecycleState) -> ExecutionState {
        match lifecycle {
            LifecycleState::Uninitialized => ExecutionState::Reset,
            LifecycleState::Initialized => self,
            LifecycleState::Terminated => ExecutionState::Done,
        }
    }

    /// Check if a component in this state accepts more work.
    #[must_use]
    pub fn accepts_work(&self) -> bool {
        matches!(self, ExecutionState::Reset | ExecutionState::Running)
    }
}

impl std::fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// COMBINED STATE
// =============================================================================

/// The combined visible state of a component.
///
/// Collapses `(LifecycleState, ExecutionState)` into the five states of the
/// orchestrator's transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentState {
    /// Constructed, not yet initialized.
    Uninitialized,
    /// Initialized, waiting for the first unit of work.
    Reset,
    /// Initialized, at least one unit of work done, not complete.
    Running,
    /// Initialized, processing complete.
    Done,
    /// Terminated.
    Terminated,
}

/// All combined states, in transition-table order.
pub const ALL_STATES: [ComponentState; 5] = [
    ComponentState::Uninitialized,
    ComponentState::Reset,
    ComponentState::Running,
    ComponentState::Done,
    ComponentState::Terminated,
];

impl ComponentState {
    /// Derive the combined state from the lifecycle and raw execution state.
    #[must_use]
    pub fn from_parts(lifecycle: LifecycleState, execution: ExecutionState) -> Self {
        match lifecycle {
            LifecycleState::Uninitialized => ComponentState::Uninitialized,
            LifecycleState::Terminated => ComponentState::Terminated,
            LifecycleState::Initialized => match execution {
                ExecutionState::Reset => ComponentState::Reset,
                ExecutionState::Running => ComponentState::Running,
                ExecutionState::Done => ComponentState::Done,
            },
        }
    }

    /// Get the state name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ComponentState::Uninitialized => "uninitialized",
            ComponentState::Reset => "reset",
            ComponentState::Running => "running",
            ComponentState::Done => "done",
            ComponentState::Terminated => "terminated",
        }
    }

    /// The lifecycle part of this state.
    #[must_use]
    pub fn lifecycle(&self) -> LifecycleState {
        match self {
            ComponentState::Uninitialized => LifecycleState::Uninitialized,
            ComponentState::Reset | ComponentState::Running | ComponentState::Done => {
                LifecycleState::Initialized
            }
            ComponentState::Terminated => LifecycleState::Terminated,
        }
    }

    /// The visible execution part of this state.
    #[must_use]
    pub fn execution(&self) -> ExecutionState {
        match self {
            ComponentState::Uninitialized | ComponentState::Reset => ExecutionState::Reset,
            ComponentState::Running => ExecutionState::Running,
            ComponentState::Done | ComponentState::Terminated => ExecutionState::Done,
        }
    }

    /// Check if this state is terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, ComponentState::Terminated)
    }
}

impl std::fmt::Display for ComponentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// STATE SNAPSHOT
// =============================================================================

/// Everything a manager can observe about a component at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Coarse lifecycle state.
    pub lifecycle: LifecycleState,
    /// Visible (masked) execution state.
    pub execution: ExecutionState,
    /// Combined state.
    pub state: ComponentState,
    /// Iteration count (0 unless initialized).
    pub count: u64,
    /// Whether `execute()` would do work.
    pub ready: bool,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced by the component core.
///
/// Only `initialize()` returns errors. Misuse of `execute()`/`reset()` is a
/// silent no-op and never produces a `CompError`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CompError {
    /// `initialize()` was called on a component that is not uninitialized.
    #[error("Operation not permitted: component is {state}")]
    NotPermitted {
        /// Lifecycle state at the time of the call.
        state: LifecycleState,
    },

    /// The initialization hook failed; no partial state remains.
    #[error("Initialization failed: {0}")]
    InitFailed(String),

    /// A resource required by the initialization hook is unavailable.
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),
}

impl CompError {
    /// Check if this error reports a caller sequencing defect.
    #[must_use]
    pub fn is_not_permitted(&self) -> bool {
        matches!(self, CompError::NotPermitted { .. })
    }
}

// =============================================================================
// TESTS
// =============================================================================
