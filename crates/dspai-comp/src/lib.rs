//! # dspai-comp
//!
//! The component lifecycle core for dspai processing graphs.
//!
//! A component allocates resources once, performs repeated incremental work,
//! and releases resources once. This crate governs that life with two nested
//! state machines and delegates all domain work to four hooks.
//!
//! ## Layers
//!
//! - [`Lifecycle`]: `Uninitialized -> Initialized -> Terminated`
//! - [`Execution`]: `Reset -> Running -> Done`, meaningful while initialized
//! - [`Component`]: the orchestrator that guards every transition and calls
//!   the [`Behavior`] hooks
//!
//! ## Architectural Constraints
//!
//! - Single-threaded: no internal locking, external serialization required
//! - `execute()`/`reset()` never fail and never allocate in the core
//! - Misuse of `execute()`/`reset()` is a safe no-op, never an error
//! - `initialize()` outside `Uninitialized` is reported as `NotPermitted`
//!
//! ## Example
//!
//! ```
//! use dspai_comp::{Behavior, CompError, Component, Execution, Lifecycle};
//!
//! struct Twice(u8);
//!
//! impl Behavior for Twice {
//!     fn do_initialize(&mut self) -> Result<(), CompError> { Ok(()) }
//!     fn do_reset(&mut self) { self.0 = 0; }
//!     fn do_execute(&mut self) -> bool { self.0 += 1; self.0 >= 2 }
//!     fn do_terminate(&mut self) {}
//! }
//!
//! let mut component = Component::new(Twice(0));
//! component.initialize().expect("init");
//! assert!(!component.execute());
//! assert!(component.execute());
//! assert_eq!(component.count(), 2);
//! component.terminate();
//! assert_eq!(component.count(), 0);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod behavior;
pub mod component;
pub mod execution;
pub mod lifecycle;
pub mod operation;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    ALL_STATES, CompError, ComponentState, ExecutionState, LifecycleState, StateSnapshot,
};

// =============================================================================
// RE-EXPORTS: Capabilities & Orchestrator
// =============================================================================

pub use behavior::Behavior;
pub use component::Component;
pub use execution::{Execution, RunOutcome};
pub use lifecycle::Lifecycle;

// =============================================================================
// RE-EXPORTS: Operations
// =============================================================================

pub use operation::{ALL_OPERATIONS, OpOutcome, Operation, ParseOperationError, parse_script};
