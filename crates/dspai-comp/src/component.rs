//! # Component Module
//!
//! The orchestrator: a fixed state machine that implements [`Lifecycle`]
//! and [`Execution`], guards every transition, keeps the iteration count,
//! and dispatches to the [`Behavior`] hooks.
//!
//! The behavior is owned by the component and reachable from outside only
//! through a shared reference, so no hook implementation can bypass the
//! guards or touch the state fields.
//!
//! ## Raw vs. Visible State
//!
//! The raw execution field is left untouched while `Uninitialized` and is
//! masked at read time (see [`ExecutionState::visible`]).

use crate::{
    Behavior, CompError, ComponentState, Execution, ExecutionState, Lifecycle, LifecycleState,
    StateSnapshot,
};

/// Base component: lifecycle + execution state machine around a behavior.
///
/// Not `Clone`: a component owns its resources exclusively.
#[derive(Debug)]
pub struct Component<B: Behavior> {
    /// Label used in log events.
    label: String,
    /// The hooks and the resources they own.
    behavior: B,
    lifecycle: LifecycleState,
    /// Raw execution state; see the masking rule.
    execution: ExecutionState,
    count: u64,
}

impl<B: Behavior> Component<B> {
    /// Create an uninitialized component around `behavior`.
    #[must_use]
    pub fn new(behavior: B) -> Self {
        Self::named("component", behavior)
    }

    /// Create an uninitialized component with a label for log events.
    #[must_use]
    pub fn named(label: impl Into<String>, behavior: B) -> Self {
        Self {
            label: label.into(),
            behavior,
            lifecycle: LifecycleState::Uninitialized,
            execution: ExecutionState::Reset,
            count: 0,
        }
    }

    /// Label used in log events.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Read-only access to the behavior.
    #[must_use]
    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Combined visible state.
    #[must_use]
    pub fn state(&self) -> ComponentState {
        ComponentState::from_parts(self.lifecycle, self.execution)
    }

    /// Everything observable about the component right now.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            lifecycle: self.lifecycle_state(),
            execution: self.execution_state(),
            state: self.state(),
            count: self.count(),
            ready: self.is_ready(),
        }
    }
}

impl<B: Behavior> Lifecycle for Component<B> {
    fn lifecycle_state(&self) -> LifecycleState {
        self.lifecycle
    }

    fn initialize(&mut self) -> Result<(), CompError> {
        if self.lifecycle != LifecycleState::Uninitialized {
            tracing::warn!(
                component = %self.label,
                state = %self.lifecycle,
                "initialize() called on a component that is not uninitialized"
            );
            return Err(CompError::NotPermitted {
                state: self.lifecycle,
            });
        }

        if let Err(e) = self.behavior.do_initialize() {
            tracing::debug!(component = %self.label, error = %e, "initialization failed");
            return Err(e);
        }

        self.lifecycle = LifecycleState::Initialized;
        self.execution = ExecutionState::Reset;
        self.count = 0;
        tracing::debug!(component = %self.label, "initialized");
        Ok(())
    }

    fn terminate(&mut self) {
        if self.lifecycle == LifecycleState::Terminated {
            return;
        }

        self.behavior.do_terminate();
        let from = self.lifecycle;
        self.lifecycle = LifecycleState::Terminated;
        self.execution = ExecutionState::Done;
        self.count = 0;
        tracing::debug!(component = %self.label, from = %from, "terminated");
    }
}

impl<B: Behavior> Execution for Component<B> {
    fn execution_state(&self) -> ExecutionState {
        self.execution.visible(self.lifecycle)
    }

    fn count(&self) -> u64 {
        if self.lifecycle != LifecycleState::Initialized {
            return 0;
        }
        self.count
    }

    fn execute(&mut self) -> bool {
        if self.lifecycle != LifecycleState::Initialized {
            return false;
        }

        if self.execution == ExecutionState::Done {
            return true;
        }

        if self.execution == ExecutionState::Reset {
            self.execution = ExecutionState::Running;
        }

        let done = self.behavior.do_execute();
        self.count = self.count.saturating_add(1);

        if done {
            self.execution = ExecutionState::Done;
            tracing::debug!(component = %self.label, count = self.count, "processing complete");
        } else {
            tracing::trace!(component = %self.label, count = self.count, "executed");
        }

        done
    }

    fn reset(&mut self) {
        if self.lifecycle != LifecycleState::Initialized {
            return;
        }

        if self.execution == ExecutionState::Reset {
            return;
        }

        self.behavior.do_reset();
        self.execution = ExecutionState::Reset;
        self.count = 0;
        tracing::debug!(component = %self.label, "reset");
    }
}

impl<B: Behavior> Drop for Component<B> {
    /// A component dropped while initialized still releases its resources.
    fn drop(&mut self) {
        if self.lifecycle == LifecycleState::Initialized {
            self.terminate();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
