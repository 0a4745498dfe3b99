//! # Behavior Hooks
//!
//! The four hooks a concrete component supplies. Only [`Component`] calls
//! them, and only when the transition guards allow it.
//!
//! [`Component`]: crate::Component

use crate::CompError;

/// Domain work of a concrete component.
///
/// # Contract
///
/// | Hook | Called on | May allocate | May fail |
/// |------|-----------|--------------|----------|
/// | `do_initialize` | `initialize()` from `Uninitialized` | yes | yes, atomically |
/// | `do_reset` | `reset()` from `Running`/`Done` | no | no |
/// | `do_execute` | `execute()` from `Reset`/`Running` | no | no |
/// | `do_terminate` | first `terminate()` | frees | no |
pub trait Behavior {
    /// Acquire resources and prepare for processing.
    ///
    /// All or nothing: on `Err`, anything acquired so far must already be
    /// released before returning.
    fn do_initialize(&mut self) -> Result<(), CompError>;

    /// Return every internal variable to its post-initialization value and
    /// recompute derived state. No allocations or deallocations.
    fn do_reset(&mut self);

    /// Perform one unit of work.
    ///
    /// No allocations. Internal errors belong in the component's output,
    /// not in the return value.
    ///
    /// Returns `true` if processing is complete.
    fn do_execute(&mut self) -> bool;

    /// Release resources, best effort.
    ///
    /// Failures are absorbed and logged by the implementation.
    fn do_terminate(&mut self);
}

impl<B: Behavior + ?Sized> Behavior for Box<B> {
    fn do_initialize(&mut self) -> Result<(), CompError> {
        (**self).do_initialize()
    }

    fn do_reset(&mut self) {
        (**self).do_reset();
    }

    fn do_execute(&mut self) -> bool {
        (**self).do_execute()
    }

    fn do_terminate(&mut self) {
        (**self).do_terminate();
    }
}
