//! # dspai - Component Manager
//!
//! The main binary for the dspai component core.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │               apps/dspai (THE BINARY)            │
//! │                                                  │
//! │  ┌────────────┐   ┌────────────┐   ┌──────────┐  │
//! │  │    CLI     │   │  Run plan  │   │  Demo    │  │
//! │  │  (clap)    │   │  (toml)    │   │ behaviors│  │
//! │  └─────┬──────┘   └─────┬──────┘   └────┬─────┘  │
//! │        └────────────────┼───────────────┘        │
//! │                         ▼                        │
//! │                 ┌───────────────┐                │
//! │                 │  dspai-comp   │                │
//! │                 │(STATE MACHINE)│                │
//! │                 └───────────────┘                │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Drive a component described by a run plan
//! dspai run --plan plan.toml
//! dspai run --kind moving-sum --steps 16 --window 4 --passes 2
//!
//! # Apply operations one by one
//! dspai script --ops "init,exec,exec,reset,term"
//!
//! # Print the observed transition table
//! dspai table --json-mode
//! ```

use clap::Parser;
use dspai::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — DSPAI_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("DSPAI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dspai=info,dspai_comp=info".into());

    // Logs go to stderr; stdout carries reports.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the dspai startup banner.
fn print_banner() {
    println!(
        r#"
  dspai component manager v{}

  initialize -> execute* -> reset? -> terminate
"#,
        env!("CARGO_PKG_VERSION")
    );
}
