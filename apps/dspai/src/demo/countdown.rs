//! Countdown: the smallest useful behavior. Completes after a fixed number
//! of units of work.

use dspai_comp::{Behavior, CompError};

/// Completes after `steps` calls to `do_execute`.
#[derive(Debug, Clone)]
pub struct Countdown {
    steps: u64,
    remaining: u64,
    fail_init: bool,
}

impl Countdown {
    /// Create a countdown of `steps` units of work.
    #[must_use]
    pub fn new(steps: u64) -> Self {
        Self {
            steps,
            remaining: steps,
            fail_init: false,
        }
    }

    /// Make `do_initialize` fail.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// Units of work left before completion.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Behavior for Countdown {
    fn do_initialize(&mut self) -> Result<(), CompError> {
        if self.fail_init {
            return Err(CompError::InitFailed(
                "countdown configured to fail".to_string(),
            ));
        }
        self.remaining = self.steps;
        Ok(())
    }

    fn do_reset(&mut self) {
        self.remaining = self.steps;
    }

    fn do_execute(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    fn do_terminate(&mut self) {
        self.remaining = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dspai_comp::{Component, Execution, Lifecycle};

    #[test]
    fn completes_after_steps() {
        let mut component = Component::new(Countdown::new(3));
        component.initialize().expect("init");

        assert!(!component.execute());
        assert!(!component.execute());
        assert!(component.execute());
        assert_eq!(component.behavior().remaining(), 0);
    }

    #[test]
    fn reset_restores_budget() {
        let mut component = Component::new(Countdown::new(2));
        component.initialize().expect("init");
        component.execute();
        component.reset();
        assert_eq!(component.behavior().remaining(), 2);
    }

    #[test]
    fn failing_countdown_stays_uninitialized() {
        let mut component = Component::new(Countdown::new(2).failing());
        assert!(component.initialize().is_err());
        assert!(!component.is_ready());
    }
}
