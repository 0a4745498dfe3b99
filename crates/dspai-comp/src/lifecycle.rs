//! # Lifecycle Capability
//!
//! Coarse-grained life of a component: allocate once, release once.
//!
//! ```text
//! Uninitialized ──initialize()──▶ Initialized ──terminate()──▶ Terminated
//!       │                                                          ▲
//!       └───────────────────────terminate()────────────────────────┘
//! ```
//!
//! Thread safety: none. Callers sharing a component across threads must
//! serialize access themselves.

use crate::{CompError, LifecycleState};

/// Interface for managing the lifecycle of an object.
pub trait Lifecycle {
    /// Current lifecycle state. Pure query.
    fn lifecycle_state(&self) -> LifecycleState;

    /// Allocate resources and prepare the component.
    ///
    /// - Only callable when `Uninitialized`; otherwise returns
    ///   `CompError::NotPermitted` and changes nothing.
    /// - On success, transitions to `Initialized`.
    /// - On failure, remains `Uninitialized` (strong guarantee).
    fn initialize(&mut self) -> Result<(), CompError>;

    /// Release resources and clean up.
    ///
    /// - Callable from any state, never fails.
    /// - Idempotent: calls after the first have no effect.
    /// - Transitions to `Terminated`.
    fn terminate(&mut self);
}
