//! # Demo Components
//!
//! Concrete behaviors the manager can build from a run plan:
//! - `countdown`: completes after a fixed number of units of work
//! - `moving-sum`: integer moving-window sum over a sample ramp

mod countdown;
mod moving_sum;

pub use countdown::Countdown;
pub use moving_sum::MovingSum;

use crate::config::{ComponentPlan, DemoKind};
use dspai_comp::{Behavior, CompError, Component};
use serde::Serialize;

/// One of the demo behaviors.
#[derive(Debug, Clone)]
pub enum Demo {
    /// See [`Countdown`].
    Countdown(Countdown),
    /// See [`MovingSum`].
    MovingSum(MovingSum),
}

/// Domain-level result of a demo, reported next to the component state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DemoSummary {
    /// Units of work left.
    Countdown {
        /// Remaining units of work.
        remaining: u64,
    },
    /// Latest moving sum.
    MovingSum {
        /// Most recent output.
        output: i64,
        /// Outputs produced in the current pass.
        produced: u64,
    },
}

impl Demo {
    /// Build the behavior described by `plan`.
    #[must_use]
    pub fn from_plan(plan: &ComponentPlan) -> Self {
        match plan.kind {
            DemoKind::Countdown => {
                let countdown = Countdown::new(plan.steps);
                Demo::Countdown(if plan.fail_init {
                    countdown.failing()
                } else {
                    countdown
                })
            }
            DemoKind::MovingSum => {
                let moving_sum = MovingSum::new(plan.window, plan.steps);
                Demo::MovingSum(if plan.fail_init {
                    moving_sum.failing()
                } else {
                    moving_sum
                })
            }
        }
    }

    /// Current domain-level result.
    #[must_use]
    pub fn summary(&self) -> DemoSummary {
        match self {
            Demo::Countdown(c) => DemoSummary::Countdown {
                remaining: c.remaining(),
            },
            Demo::MovingSum(m) => DemoSummary::MovingSum {
                output: m.output(),
                produced: m.produced(),
            },
        }
    }
}

impl Behavior for Demo {
    fn do_initialize(&mut self) -> Result<(), CompError> {
        match self {
            Demo::Countdown(c) => c.do_initialize(),
            Demo::MovingSum(m) => m.do_initialize(),
        }
    }

    fn do_reset(&mut self) {
        match self {
            Demo::Countdown(c) => c.do_reset(),
            Demo::MovingSum(m) => m.do_reset(),
        }
    }

    fn do_execute(&mut self) -> bool {
        match self {
            Demo::Countdown(c) => c.do_execute(),
            Demo::MovingSum(m) => m.do_execute(),
        }
    }

    fn do_terminate(&mut self) {
        match self {
            Demo::Countdown(c) => c.do_terminate(),
            Demo::MovingSum(m) => m.do_terminate(),
        }
    }
}

/// Build an uninitialized component for `plan`.
#[must_use]
pub fn build(plan: &ComponentPlan) -> Component<Demo> {
    Component::named(plan.label.clone(), Demo::from_plan(plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dspai_comp::{Execution, Lifecycle};

    #[test]
    fn build_honors_kind_and_steps() {
        let plan = ComponentPlan {
            kind: DemoKind::MovingSum,
            steps: 2,
            ..ComponentPlan::default()
        };
        let mut component = build(&plan);
        component.initialize().expect("init");
        component.execute();

        assert_eq!(component.label(), "demo");
        assert_eq!(
            component.behavior().summary(),
            DemoSummary::MovingSum {
                output: -8,
                produced: 1
            }
        );
        assert!(component.execute());
    }

    #[test]
    fn build_honors_fail_init() {
        let plan = ComponentPlan {
            fail_init: true,
            ..ComponentPlan::default()
        };
        let mut component = build(&plan);
        assert!(component.initialize().is_err());
    }
}
