//! # Run Plan Configuration
//!
//! A run plan describes which demo component to build and how to drive it.
//! Plans are TOML files; every field has a default, so an empty file (or no
//! file at all) is a valid plan.
//!
//! ```toml
//! [component]
//! kind = "moving-sum"
//! label = "smoother"
//! steps = 16
//! window = 4
//! fail_init = false
//!
//! [run]
//! max_steps = 1000
//! passes = 2
//! ```

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum run plan file size (1 MB).
const MAX_PLAN_FILE_SIZE: u64 = 1024 * 1024;

/// Demo component kinds the manager can build.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    /// Completes after `steps` units of work.
    #[default]
    Countdown,
    /// Moving-window sum over a deterministic ramp, `steps` samples long.
    MovingSum,
}

impl DemoKind {
    /// Get the kind name as written in plans.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DemoKind::Countdown => "countdown",
            DemoKind::MovingSum => "moving-sum",
        }
    }
}

/// The `[component]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentPlan {
    /// Which demo to build.
    pub kind: DemoKind,
    /// Label used in logs and output.
    pub label: String,
    /// Units of work until the component reports completion.
    pub steps: u64,
    /// Window length for `moving-sum`.
    pub window: usize,
    /// Make the initialization hook fail.
    pub fail_init: bool,
}

impl Default for ComponentPlan {
    fn default() -> Self {
        Self {
            kind: DemoKind::Countdown,
            label: "demo".to_string(),
            steps: 3,
            window: 4,
            fail_init: false,
        }
    }
}

/// The `[run]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunSettings {
    /// Step budget per pass.
    pub max_steps: u64,
    /// Number of passes; passes after the first start with `reset()`.
    pub passes: u32,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            passes: 1,
        }
    }
}

/// A complete run plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunPlan {
    /// The component to build.
    pub component: ComponentPlan,
    /// How to drive it.
    pub run: RunSettings,
}

impl RunPlan {
    /// Parse a plan from TOML text and validate it.
    pub fn from_toml(text: &str) -> Result<Self, CliError> {
        let plan: RunPlan = toml::from_str(text)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Load a plan from a file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let metadata = std::fs::metadata(path)?;
        if metadata.len() > MAX_PLAN_FILE_SIZE {
            return Err(CliError::InvalidPlan(format!(
                "file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_PLAN_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded run plan from {:?}", path);
        Self::from_toml(&text)
    }

    /// Load a plan from `path` if given, else use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Reject values no component can run with.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.component.label.trim().is_empty() {
            return Err(CliError::InvalidPlan("component.label is empty".into()));
        }
        if self.run.max_steps == 0 {
            return Err(CliError::InvalidPlan("run.max_steps must be at least 1".into()));
        }
        if self.run.passes == 0 {
            return Err(CliError::InvalidPlan("run.passes must be at least 1".into()));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
