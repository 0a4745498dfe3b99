//! # Execution Capability
//!
//! Fine-grained execution cycle, valid only while the lifecycle is
//! `Initialized`:
//!
//! ```text
//! Reset ──execute()──▶ Running ──execute() == true──▶ Done
//!   ▲                     │                            │
//!   └──────reset()────────┴──────────reset()───────────┘
//! ```
//!
//! Outside `Initialized` every operation has a fixed, exception-free answer:
//! - `is_ready()` returns `false`
//! - `count()` returns 0
//! - `execute()` is a no-op and returns `false`
//! - `reset()` is a no-op
//! - `execution_state()` returns `Reset` when uninitialized, `Done` when
//!   terminated

use crate::{ExecutionState, Lifecycle, LifecycleState};
use serde::{Deserialize, Serialize};

/// Result of driving a component with [`Execution::run_until_done`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Whether the component reported completion.
    pub done: bool,
    /// Number of `execute()` calls made by this run.
    pub steps: u64,
}

/// Execution interface for a component.
pub trait Execution: Lifecycle {
    /// Current visible execution state.
    fn execution_state(&self) -> ExecutionState;

    /// Current iteration count.
    ///
    /// Zero after `initialize()` or `reset()`, and whenever the component is
    /// not initialized.
    fn count(&self) -> u64;

    /// Execute one step of processing.
    ///
    /// - Called from `Reset` or `Running`; moves to `Running` or `Done`.
    /// - Increments the iteration count once per unit of work.
    /// - In `Done`, a no-op returning `true`.
    /// - Not initialized: a no-op returning `false`.
    ///
    /// Returns `true` if processing is complete.
    fn execute(&mut self) -> bool;

    /// Make the component ready for new processing.
    ///
    /// - Resets internal state and the iteration count.
    /// - A no-op when already in `Reset` or when not initialized.
    /// - Must not allocate.
    fn reset(&mut self);

    /// Check if the component is ready for execution.
    ///
    /// True iff `Initialized` and the execution state is `Reset` or `Running`.
    fn is_ready(&self) -> bool {
        self.lifecycle_state() == LifecycleState::Initialized
            && self.execution_state().accepts_work()
    }

    /// Call `execute()` until it reports completion or `max_steps` calls
    /// have been made.
    ///
    /// A component that is not ready makes no calls and reports its current
    /// completion: `done` is true only for a component already in `Done`.
    fn run_until_done(&mut self, max_steps: u64) -> RunOutcome {
        if !self.is_ready() {
            return RunOutcome {
                done: self.lifecycle_state() == LifecycleState::Initialized
                    && self.execution_state() == ExecutionState::Done,
                steps: 0,
            };
        }

        let mut steps = 0;
        while steps < max_steps {
            steps += 1;
            if self.execute() {
                return RunOutcome { done: true, steps };
            }
        }
        RunOutcome { done: false, steps }
    }
}
