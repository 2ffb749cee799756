//! Decision admission CLI entry point
//!
//! # Usage
//!
//! ```bash
//! decision-admit check --contract decisions/contracts/DC-2026-001.yaml
//! decision-admit record --contract dc.yaml --non-strict
//! decision-admit snapshot --contract dc.yaml
//! decision-admit debt --format json
//! decision-admit route
//! ```
//!
//! # Exit Codes
//!
//! - 0: change admitted (or the command has no verdict)
//! - 1: change rejected
//! - 3: invalid input or arguments
//! - 4: file not found or inaccessible
//! - 10: internal error

use clap::Parser;
use decision_admission::{run_cli, AdmitCli};

fn main() {
    // Parse CLI arguments first; the verbosity flags feed the subscriber
    let cli = AdmitCli::parse();

    let default_level = if cli.quiet {
        tracing::Level::ERROR
    } else {
        match cli.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    // Run the CLI and exit with appropriate code
    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
