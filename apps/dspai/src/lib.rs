//! # dspai
//!
//! The component manager: builds demo components from run plans and drives
//! them through the lifecycle implemented by `dspai-comp`.

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;

pub use config::{ComponentPlan, DemoKind, RunPlan, RunSettings};
pub use error::CliError;
