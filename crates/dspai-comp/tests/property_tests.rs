//! # Property-Based Tests
//!
//! Random operation sequences checked against a reference model of the
//! transition table, using proptest.

use dspai_comp::{
    ALL_OPERATIONS, Behavior, CompError, Component, ComponentState, Execution, ExecutionState,
    Lifecycle, LifecycleState, Operation,
};
use proptest::collection::vec;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// COMPONENT UNDER TEST
// =============================================================================

#[derive(Debug, Default)]
struct HookCalls {
    init: Cell<u64>,
    reset: Cell<u64>,
    execute: Cell<u64>,
    terminate: Cell<u64>,
}

struct Countdown {
    calls: Rc<HookCalls>,
    complete_after: u64,
    fail_init: bool,
    progress: u64,
}

impl Behavior for Countdown {
    fn do_initialize(&mut self) -> Result<(), CompError> {
        self.calls.init.set(self.calls.init.get() + 1);
        if self.fail_init {
            return Err(CompError::ResourceUnavailable("no buffer".into()));
        }
        self.progress = 0;
        Ok(())
    }

    fn do_reset(&mut self) {
        self.calls.reset.set(self.calls.reset.get() + 1);
        self.progress = 0;
    }

    fn do_execute(&mut self) -> bool {
        self.calls.execute.set(self.calls.execute.get() + 1);
        self.progress += 1;
        self.progress >= self.complete_after
    }

    fn do_terminate(&mut self) {
        self.calls.terminate.set(self.calls.terminate.get() + 1);
    }
}

// =============================================================================
// REFERENCE MODEL
// =============================================================================

/// The transition table, written out independently of `Component`.
#[derive(Debug, Clone, Copy)]
struct Model {
    state: ComponentState,
    count: u64,
    complete_after: u64,
    fail_init: bool,
    init_calls: u64,
    reset_calls: u64,
    execute_calls: u64,
    terminate_calls: u64,
}

impl Model {
    fn new(complete_after: u64, fail_init: bool) -> Self {
        Self {
            state: ComponentState::Uninitialized,
            count: 0,
            complete_after,
            fail_init,
            init_calls: 0,
            reset_calls: 0,
            execute_calls: 0,
            terminate_calls: 0,
        }
    }

    /// Apply an operation; returns `execute()`'s flag or `initialize()`'s success.
    fn step(&mut self, op: Operation) -> Option<bool> {
        use ComponentState::{Done, Reset, Running, Terminated, Uninitialized};

        match (op, self.state) {
            (Operation::Initialize, Uninitialized) => {
                self.init_calls += 1;
                if self.fail_init {
                    return Some(false);
                }
                self.state = Reset;
                self.count = 0;
                Some(true)
            }
            (Operation::Initialize, _) => Some(false),
            (Operation::Execute, Uninitialized | Terminated) => Some(false),
            (Operation::Execute, Done) => Some(true),
            (Operation::Execute, Reset | Running) => {
                self.execute_calls += 1;
                self.count += 1;
                let done = self.count >= self.complete_after;
                self.state = if done { Done } else { Running };
                Some(done)
            }
            (Operation::Reset, Running | Done) => {
                self.reset_calls += 1;
                self.state = Reset;
                self.count = 0;
                None
            }
            (Operation::Reset, _) => None,
            (Operation::Terminate, Terminated) => None,
            (Operation::Terminate, _) => {
                self.terminate_calls += 1;
                self.state = Terminated;
                self.count = 0;
                None
            }
        }
    }
}

fn any_operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(ALL_OPERATIONS.to_vec())
}

fn build(complete_after: u64, fail_init: bool) -> (Component<Countdown>, Rc<HookCalls>) {
    let calls = Rc::new(HookCalls::default());
    let component = Component::new(Countdown {
        calls: Rc::clone(&calls),
        complete_after,
        fail_init,
        progress: 0,
    });
    (component, calls)
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Every step agrees with the model and keeps I1-I3.
    #[test]
    fn component_matches_model(
        complete_after in 1u64..6,
        fail_init in prop::bool::weighted(0.2),
        ops in vec(any_operation(), 0..60)
    ) {
        let (mut component, calls) = build(complete_after, fail_init);
        let mut model = Model::new(complete_after, fail_init);

        for op in ops {
            let terminated_before = component.lifecycle_state() == LifecycleState::Terminated;
            let expected = model.step(op);

            let actual = match op {
                Operation::Initialize => Some(component.initialize().is_ok()),
                Operation::Execute => Some(component.execute()),
                Operation::Reset => { component.reset(); None }
                Operation::Terminate => { component.terminate(); None }
            };

            prop_assert_eq!(actual, expected);
            prop_assert_eq!(component.state(), model.state);
            prop_assert_eq!(component.count(), model.count);

            // I1: count is nonzero only while initialized.
            if component.lifecycle_state() != LifecycleState::Initialized {
                prop_assert_eq!(component.count(), 0);
            }

            // I2: the visible pair never leaks an inconsistent combination.
            match component.lifecycle_state() {
                LifecycleState::Uninitialized => {
                    prop_assert_eq!(component.execution_state(), ExecutionState::Reset);
                }
                LifecycleState::Terminated => {
                    prop_assert_eq!(component.execution_state(), ExecutionState::Done);
                }
                LifecycleState::Initialized => {}
            }

            // I3: terminated is absorbing.
            if terminated_before {
                prop_assert_eq!(component.state(), ComponentState::Terminated);
            }

            prop_assert_eq!(
                component.is_ready(),
                matches!(model.state, ComponentState::Reset | ComponentState::Running)
            );
        }

        prop_assert_eq!(calls.init.get(), model.init_calls);
        prop_assert_eq!(calls.reset.get(), model.reset_calls);
        prop_assert_eq!(calls.execute.get(), model.execute_calls);
        prop_assert_eq!(calls.terminate.get(), model.terminate_calls);
    }

    /// Execute outside `Initialized` returns false and never counts.
    #[test]
    fn execute_outside_initialized_is_inert(terminate_first in any::<bool>(), n in 1usize..20) {
        let (mut component, calls) = build(1, false);
        if terminate_first {
            component.terminate();
        }

        for _ in 0..n {
            prop_assert!(!component.execute());
            prop_assert_eq!(component.count(), 0);
        }
        prop_assert_eq!(calls.execute.get(), 0);
    }

    /// N terminates are observably identical to one.
    #[test]
    fn terminate_idempotent(initialize_first in any::<bool>(), n in 1usize..10) {
        let (mut component, calls) = build(3, false);
        if initialize_first {
            component.initialize().expect("init");
        }

        component.terminate();
        let once = component.snapshot();
        for _ in 1..n {
            component.terminate();
        }

        prop_assert_eq!(component.snapshot(), once);
        prop_assert_eq!(calls.terminate.get(), 1);
    }

    /// Done is sticky for execute: true, count unchanged.
    #[test]
    fn done_execute_is_noop(complete_after in 1u64..8, extra in 1usize..10) {
        let (mut component, calls) = build(complete_after, false);
        component.initialize().expect("init");

        let outcome = component.run_until_done(complete_after);
        prop_assert!(outcome.done);
        prop_assert_eq!(outcome.steps, complete_after);

        for _ in 0..extra {
            prop_assert!(component.execute());
            prop_assert_eq!(component.count(), complete_after);
        }
        prop_assert_eq!(calls.execute.get(), complete_after);
    }
}
