//! # Operation Module
//!
//! The four public operations as data, so a manager can drive a component
//! from a script or a generated sequence.
//!
//! - `Operation` parses from short or long names (`init`, `exec`, `term`, ...)
//! - `Component::apply` dispatches one operation and reports what it returned

use crate::{Behavior, CompError, Component, Execution, Lifecycle, StateSnapshot};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A public operation of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `initialize()`
    Initialize,
    /// `execute()`
    Execute,
    /// `reset()`
    Reset,
    /// `terminate()`
    Terminate,
}

/// All operations, in transition-table order.
pub const ALL_OPERATIONS: [Operation; 4] = [
    Operation::Initialize,
    Operation::Execute,
    Operation::Reset,
    Operation::Terminate,
];

impl Operation {
    /// Get the operation name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Initialize => "initialize",
            Operation::Execute => "execute",
            Operation::Reset => "reset",
            Operation::Terminate => "terminate",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an operation name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown operation: '{0}' (expected init, exec, reset or term)")]
pub struct ParseOperationError(pub String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "init" | "initialize" => Ok(Operation::Initialize),
            "exec" | "execute" => Ok(Operation::Execute),
            "reset" => Ok(Operation::Reset),
            "term" | "terminate" => Ok(Operation::Terminate),
            _ => Err(ParseOperationError(s.to_string())),
        }
    }
}

/// Parse a comma- or whitespace-separated list of operations.
pub fn parse_script(script: &str) -> Result<Vec<Operation>, ParseOperationError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<Operation>)
        .collect()
}

/// What an applied operation returned, plus the state it left behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpOutcome {
    /// The operation that was applied.
    pub operation: Operation,
    /// `execute()`'s completion flag; `None` for the other operations.
    pub done: Option<bool>,
    /// `initialize()`'s error, if any.
    pub error: Option<CompError>,
    /// State after the operation.
    pub after: StateSnapshot,
}

impl<B: Behavior> Component<B> {
    /// Apply one public operation.
    pub fn apply(&mut self, operation: Operation) -> OpOutcome {
        let mut done = None;
        let mut error = None;

        match operation {
            Operation::Initialize => error = self.initialize().err(),
            Operation::Execute => done = Some(self.execute()),
            Operation::Reset => self.reset(),
            Operation::Terminate => self.terminate(),
        }

        OpOutcome {
            operation,
            done,
            error,
            after: self.snapshot(),
        }
    }

    /// Apply a sequence of operations, collecting every outcome.
    pub fn apply_all(&mut self, operations: &[Operation]) -> Vec<OpOutcome> {
        operations.iter().map(|&op| self.apply(op)).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComponentState;

    struct Steps {
        remaining: u32,
        total: u32,
    }

    impl Behavior for Steps {
        fn do_initialize(&mut self) -> Result<(), CompError> {
            self.remaining = self.total;
            Ok(())
        }

        fn do_reset(&mut self) {
            self.remaining = self.total;
        }

        fn do_execute(&mut self) -> bool {
            self.remaining = self.remaining.saturating_sub(1);
            self.remaining == 0
        }

        fn do_terminate(&mut self) {}
    }

    fn steps(total: u32) -> Component<Steps> {
        Component::new(Steps {
            remaining: total,
            total,
        })
    }

    #[test]
    fn parse_accepts_short_and_long_names() {
        assert_eq!("init".parse::<Operation>(), Ok(Operation::Initialize));
        assert_eq!("Execute".parse::<Operation>(), Ok(Operation::Execute));
        assert_eq!(" reset ".parse::<Operation>(), Ok(Operation::Reset));
        assert_eq!("term".parse::<Operation>(), Ok(Operation::Terminate));
        assert_eq!(
            "start".parse::<Operation>(),
            Err(ParseOperationError("start".to_string()))
        );
    }

    #[test]
    fn parse_script_splits_on_commas_and_spaces() {
        let ops = parse_script("init, exec exec,reset  term").expect("parse");
        assert_eq!(
            ops,
            vec![
                Operation::Initialize,
                Operation::Execute,
                Operation::Execute,
                Operation::Reset,
                Operation::Terminate,
            ]
        );
        assert!(parse_script("").expect("empty").is_empty());
        assert!(parse_script("init,bogus").is_err());
    }

    #[test]
    fn apply_reports_return_values() {
        let mut component = steps(1);

        let init = component.apply(Operation::Initialize);
        assert_eq!(init.error, None);
        assert_eq!(init.done, None);
        assert_eq!(init.after.state, ComponentState::Reset);

        let exec = component.apply(Operation::Execute);
        assert_eq!(exec.done, Some(true));
        assert_eq!(exec.after.count, 1);

        let again = component.apply(Operation::Initialize);
        assert!(again.error.as_ref().is_some_and(CompError::is_not_permitted));
        assert_eq!(again.after.state, ComponentState::Done);
    }

    #[test]
    fn apply_all_walks_the_lifecycle() {
        let mut component = steps(2);
        let outcomes = component.apply_all(&[
            Operation::Initialize,
            Operation::Execute,
            Operation::Execute,
            Operation::Reset,
            Operation::Terminate,
        ]);

        let states: Vec<_> = outcomes.iter().map(|o| o.after.state).collect();
        assert_eq!(
            states,
            vec![
                ComponentState::Reset,
                ComponentState::Running,
                ComponentState::Done,
                ComponentState::Reset,
                ComponentState::Terminated,
            ]
        );
    }
}
