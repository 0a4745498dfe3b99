//! # dspai CLI Module
//!
//! This module implements the CLI interface for dspai.
//!
//! ## Available Commands
//!
//! - `run` - Build a component from a run plan and drive it to completion
//! - `script` - Apply a list of operations and show the state after each
//! - `table` - Print the transition table observed on a live component

mod commands;

use crate::config::{ComponentPlan, DemoKind, RunPlan};
use crate::error::CliError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// dspai - component lifecycle manager
///
/// Builds processing components, drives them through
/// initialize / execute / reset / terminate, and reports what they did.
#[derive(Parser, Debug)]
#[command(name = "dspai")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Component overrides shared by `run` and `script`.
#[derive(Args, Debug, Clone, Default)]
pub struct ComponentArgs {
    /// Path to a TOML run plan
    #[arg(short, long)]
    pub plan: Option<PathBuf>,

    /// Demo component kind
    #[arg(short, long, value_enum)]
    pub kind: Option<DemoKind>,

    /// Component label used in logs and output
    #[arg(short, long)]
    pub label: Option<String>,

    /// Units of work until the component completes
    #[arg(short, long)]
    pub steps: Option<u64>,

    /// Window length (moving-sum only)
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Make the initialization hook fail
    #[arg(long)]
    pub fail_init: bool,
}

impl ComponentArgs {
    /// Apply the flags that were given on top of `plan`.
    pub fn apply_to(&self, plan: &mut ComponentPlan) {
        if let Some(kind) = self.kind {
            plan.kind = kind;
        }
        if let Some(label) = &self.label {
            plan.label.clone_from(label);
        }
        if let Some(steps) = self.steps {
            plan.steps = steps;
        }
        if let Some(window) = self.window {
            plan.window = window;
        }
        if self.fail_init {
            plan.fail_init = true;
        }
    }

    /// Load the plan file (if any) and apply the flags.
    pub fn resolve(&self) -> Result<RunPlan, CliError> {
        let mut plan = RunPlan::load_or_default(self.plan.as_deref())?;
        self.apply_to(&mut plan.component);
        plan.validate()?;
        Ok(plan)
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drive a component through every pass of a run plan
    Run {
        #[command(flatten)]
        component: ComponentArgs,

        /// Step budget per pass
        #[arg(short, long)]
        max_steps: Option<u64>,

        /// Number of passes (reset between passes)
        #[arg(long)]
        passes: Option<u32>,
    },

    /// Apply operations (init, exec, reset, term) in order
    Script {
        /// Comma- or space-separated operations, e.g. "init,exec,exec,term"
        #[arg(short, long)]
        ops: String,

        #[command(flatten)]
        component: ComponentArgs,
    },

    /// Print the transition table observed on a live component
    Table,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Run {
            component,
            max_steps,
            passes,
        }) => {
            let mut plan = component.resolve()?;
            if let Some(max_steps) = max_steps {
                plan.run.max_steps = max_steps;
            }
            if let Some(passes) = passes {
                plan.run.passes = passes;
            }
            plan.validate()?;
            cmd_run(&plan, json_mode)
        }
        Some(Commands::Script { ops, component }) => {
            let plan = component.resolve()?;
            cmd_script(&plan.component, &ops, json_mode)
        }
        Some(Commands::Table) => cmd_table(json_mode),
        None => {
            // No subcommand - run the default plan
            cmd_run(&RunPlan::default(), json_mode)
        }
    }
}
