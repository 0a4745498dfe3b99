//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands. Each
//! command is split into a pure function returning a report (used by the
//! tests) and a `cmd_*` wrapper that prints it.

use crate::config::{ComponentPlan, RunPlan};
use crate::demo::{self, DemoSummary};
use crate::error::CliError;
use dspai_comp::{
    ALL_OPERATIONS, ALL_STATES, Behavior, CompError, Component, ComponentState, Execution,
    Lifecycle, OpOutcome, Operation, StateSnapshot, parse_script,
};
use serde::Serialize;

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Result of one pass over a component.
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    /// Pass number, starting at 1.
    pub pass: u32,
    /// Whether the component completed within the step budget.
    pub done: bool,
    /// `execute()` calls made in this pass.
    pub steps: u64,
    /// Domain result at the end of the pass.
    pub summary: DemoSummary,
}

/// Result of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Component label.
    pub label: String,
    /// Demo kind name.
    pub kind: &'static str,
    /// One entry per pass.
    pub passes: Vec<PassReport>,
    /// State after `terminate()`.
    pub final_state: StateSnapshot,
}

/// Initialize a component, drive it through every pass, then terminate it.
pub fn run_plan(plan: &RunPlan) -> Result<RunReport, CliError> {
    let mut component = demo::build(&plan.component);
    component.initialize()?;

    let mut passes = Vec::with_capacity(plan.run.passes as usize);
    for pass in 1..=plan.run.passes {
        if pass > 1 {
            component.reset();
        }

        let outcome = component.run_until_done(plan.run.max_steps);
        if !outcome.done {
            tracing::warn!(
                "Component '{}' did not complete pass {} within {} steps",
                component.label(),
                pass,
                plan.run.max_steps
            );
        }

        passes.push(PassReport {
            pass,
            done: outcome.done,
            steps: outcome.steps,
            summary: component.behavior().summary(),
        });
    }

    component.terminate();

    Ok(RunReport {
        label: plan.component.label.clone(),
        kind: plan.component.kind.name(),
        passes,
        final_state: component.snapshot(),
    })
}

/// Run a plan and print the report.
pub fn cmd_run(plan: &RunPlan, json_mode: bool) -> Result<(), CliError> {
    tracing::info!(
        "Running '{}' ({}), {} pass(es)",
        plan.component.label,
        plan.component.kind.name(),
        plan.run.passes
    );
    let report = run_plan(plan)?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("dspai Run Report");
    println!("================");
    println!("Component: {}", report.label);
    println!("Kind:      {}", report.kind);
    println!();
    for pass in &report.passes {
        let status = if pass.done { "done" } else { "incomplete" };
        println!(
            "Pass {:>3}: {:<10} steps={:<6} {}",
            pass.pass,
            status,
            pass.steps,
            format_summary(&pass.summary)
        );
    }
    println!();
    println!(
        "Final:     {} (count {})",
        report.final_state.state, report.final_state.count
    );

    Ok(())
}

fn format_summary(summary: &DemoSummary) -> String {
    match summary {
        DemoSummary::Countdown { remaining } => format!("remaining={}", remaining),
        DemoSummary::MovingSum { output, produced } => {
            format!("output={} produced={}", output, produced)
        }
    }
}

// =============================================================================
// SCRIPT COMMAND
// =============================================================================

/// Build a component for `plan` and apply `operations` in order.
///
/// The component is dropped at the end; if the script left it initialized,
/// the drop releases it.
pub fn run_script(plan: &ComponentPlan, operations: &[Operation]) -> Vec<OpOutcome> {
    let mut component = demo::build(plan);
    component.apply_all(operations)
}

/// Parse and apply a script, printing the state after every operation.
pub fn cmd_script(plan: &ComponentPlan, script: &str, json_mode: bool) -> Result<(), CliError> {
    let operations = parse_script(script)?;
    tracing::info!(
        "Applying {} operation(s) to '{}'",
        operations.len(),
        plan.label
    );
    let outcomes = run_script(plan, &operations);

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    println!(
        "{:>3}  {:<10}  {:<24}  {:<13}  {:>5}  {:<5}",
        "#", "operation", "returned", "state", "count", "ready"
    );
    for (i, outcome) in outcomes.iter().enumerate() {
        println!(
            "{:>3}  {:<10}  {:<24}  {:<13}  {:>5}  {:<5}",
            i + 1,
            outcome.operation.name(),
            describe_return(outcome),
            outcome.after.state.name(),
            outcome.after.count,
            outcome.after.ready
        );
    }

    Ok(())
}

/// Human-readable return value of an applied operation.
fn describe_return(outcome: &OpOutcome) -> String {
    match (&outcome.error, outcome.done) {
        (Some(CompError::NotPermitted { .. }), _) => "error: not permitted".to_string(),
        (Some(e), _) => format!("error: {}", e),
        (None, Some(done)) => done.to_string(),
        (None, None) if outcome.operation == Operation::Initialize => "ok".to_string(),
        (None, None) => "-".to_string(),
    }
}

// =============================================================================
// TABLE COMMAND
// =============================================================================

/// Counts hook invocations; completes after two units of work.
#[derive(Debug, Default)]
struct Tally {
    initialize: u32,
    reset: u32,
    execute: u32,
    terminate: u32,
}

impl Tally {
    fn totals(&self) -> [u32; 4] {
        [self.initialize, self.execute, self.reset, self.terminate]
    }
}

impl Behavior for Tally {
    fn do_initialize(&mut self) -> Result<(), CompError> {
        self.initialize += 1;
        Ok(())
    }

    fn do_reset(&mut self) {
        self.reset += 1;
    }

    fn do_execute(&mut self) -> bool {
        self.execute += 1;
        self.execute % 2 == 0
    }

    fn do_terminate(&mut self) {
        self.terminate += 1;
    }
}

/// Operations that take a fresh component to `state`.
fn path_to(state: ComponentState) -> &'static [Operation] {
    match state {
        ComponentState::Uninitialized => &[],
        ComponentState::Reset => &[Operation::Initialize],
        ComponentState::Running => &[Operation::Initialize, Operation::Execute],
        ComponentState::Done => &[
            Operation::Initialize,
            Operation::Execute,
            Operation::Execute,
        ],
        ComponentState::Terminated => &[Operation::Terminate],
    }
}

/// One observed transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// State before the call.
    pub from: ComponentState,
    /// The call.
    pub operation: Operation,
    /// State after the call.
    pub to: ComponentState,
    /// What the call returned.
    pub returned: String,
    /// The hook the call invoked, if any.
    pub hook: Option<&'static str>,
    /// Count after the call.
    pub count: u64,
}

/// Observe every `state x operation` pair on a live component.
pub fn transition_table() -> Vec<TableRow> {
    const HOOKS: [&str; 4] = ["do_initialize", "do_execute", "do_reset", "do_terminate"];

    let mut rows = Vec::with_capacity(ALL_STATES.len() * ALL_OPERATIONS.len());
    for state in ALL_STATES {
        for operation in ALL_OPERATIONS {
            let mut component = Component::named("probe", Tally::default());
            component.apply_all(path_to(state));

            let from = component.state();
            let before = component.behavior().totals();
            let outcome = component.apply(operation);
            let after = component.behavior().totals();

            let hook = HOOKS
                .iter()
                .zip(before.iter().zip(after.iter()))
                .find(|(_, (b, a))| a > b)
                .map(|(name, _)| *name);

            rows.push(TableRow {
                from,
                operation,
                to: outcome.after.state,
                returned: describe_return(&outcome),
                hook,
                count: outcome.after.count,
            });
        }
    }
    rows
}

/// Print the observed transition table.
pub fn cmd_table(json_mode: bool) -> Result<(), CliError> {
    let rows = transition_table();

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("dspai Transition Table");
    println!("======================");
    println!(
        "{:<13}  {:<10}  {:<13}  {:<20}  {:<13}  {:>5}",
        "state", "call", "new state", "returned", "hook", "count"
    );
    for row in &rows {
        println!(
            "{:<13}  {:<10}  {:<13}  {:<20}  {:<13}  {:>5}",
            row.from.name(),
            row.operation.name(),
            row.to.name(),
            row.returned,
            row.hook.unwrap_or("-"),
            row.count
        );
    }

    Ok(())
}
