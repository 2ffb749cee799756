//! Decision Admission Engine
//!
//! Gates repository changes on machine-checkable decision contracts. A
//! contract records an engineering decision with falsifiable success
//! criteria and explicit authority boundaries; at commit time the engine
//! evaluates the actual change against the contract and produces a single
//! admissibility verdict.
//!
//! # Features
//!
//! - **Schema validation**: contracts are validated against an embedded
//!   JSON Schema with located, sorted violation messages
//! - **Falsifiability heuristic**: success criteria must contain at least
//!   one measurable token or the contract is flagged
//! - **Boundary evaluation**: changed paths are checked against declared
//!   `cannot_touch` and `can_write_paths` prefixes
//! - **Changed-path discovery**: CI event replay with staged, working-tree,
//!   and last-commit fallbacks
//! - **Evidence artifacts**: markdown decision records and JSON snapshots
//! - **Decision debt**: corpus-wide scoring of documentation completeness
//!
//! # Architecture
//!
//! ```text
//! contracts/   contract model, embedded schema artifact, validation
//! engine/      evaluator, boundary checks, diff collection, debt, routing
//! artifacts/   decision records, snapshots, capture timestamps
//! cli/         command definitions, output rendering, exit codes
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Evaluate a contract against the currently staged changes
//! decision-admit check --contract decisions/contracts/DC-2026-001.yaml
//!
//! # Evaluate leniently and persist evidence artifacts
//! decision-admit record --contract dc.yaml --non-strict
//!
//! # Report documentation debt across the corpus
//! decision-admit debt --format json
//! ```
//!
//! # Example
//!
//! ```no_run
//! use decision_admission::{DecisionContract, Evaluator};
//!
//! # fn main() -> decision_admission::error::Result<()> {
//! let contract = DecisionContract::parse(
//!     "decision_id: DC-1\nsuccess_criteria: [p95 under 10 ms]\nconstraints:\n  bounded_authority: {}\n",
//! )?;
//! let result = Evaluator::new(".").evaluate(&contract)?;
//! println!("admitted: {}", result.admitted);
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod cli;
pub mod engine;
pub mod error;

// Contract model and schema artifact - located at ../contracts relative to src/
#[path = "../contracts/mod.rs"]
pub mod contracts;

pub use cli::{AdmitCli, AdmitCommands, ExitCode, OutputFormat};
pub use contracts::{BoundedAuthority, DecisionContract};
pub use engine::{
    collect_changed_paths, compute_debt_report, evaluate_boundaries, AdmissibilityResult,
    BoundaryEvaluation, CheckResult, CheckStatus, CiContext, DebtReport, Evaluator, RoutePolicy,
};
pub use error::AdmissionError;

/// Engine version (from Cargo.toml)
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI application with the given arguments
///
/// Returns the exit code for the process. Errors that abort before a
/// verdict exists are reported on stderr and mapped onto the exit-code
/// contract.
pub fn run_cli(cli: AdmitCli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from_error(&e)
        }
    }
}
