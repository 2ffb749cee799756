//! CLI command definitions for decision admission

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use super::output::{render_debt_report, render_result, OutputFormat};
use super::ExitCode;
use crate::artifacts::{now_utc_iso, write_decision_record, write_snapshot};
use crate::contracts::DecisionContract;
use crate::engine::debt::compute_debt_report;
use crate::engine::diff::{collect_changed_paths, CiContext};
use crate::engine::routing::RoutePolicy;
use crate::engine::Evaluator;
use crate::error::AdmissionError;

/// Decision admission CLI
#[derive(Parser, Debug)]
#[command(name = "decision-admit")]
#[command(about = "Gate changes on machine-checkable decision contracts", long_about = None)]
#[command(version)]
pub struct AdmitCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: AdmitCommands,
}

/// Available admission commands
#[derive(Subcommand, Debug)]
pub enum AdmitCommands {
    /// Evaluate a contract and print the verdict
    ///
    /// Runs the full admissibility pipeline against the repository's
    /// changed paths. Exits 0 when the change is admitted and 1 when it
    /// is rejected.
    Check {
        /// Path to the decision contract (YAML or JSON)
        #[arg(short, long)]
        contract: PathBuf,

        /// Repository root the changed paths are collected from
        #[arg(long, default_value = ".")]
        repo_root: PathBuf,

        /// Directory evidence artifacts are written to
        #[arg(long, default_value = "./artifacts")]
        artifacts_dir: PathBuf,

        /// Also persist the decision record and snapshot
        #[arg(long)]
        write_artifacts: bool,

        /// Escalate heuristic misses to blocking failures (default)
        #[arg(long, overrides_with = "non_strict")]
        strict: bool,

        /// Record heuristic misses as warnings instead of failures
        #[arg(long)]
        non_strict: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Evaluate a contract and always persist evidence artifacts
    ///
    /// Same pipeline as check, with the decision record and snapshot
    /// written unconditionally; a rejection is recorded as evidence too.
    Record {
        /// Path to the decision contract (YAML or JSON)
        #[arg(short, long)]
        contract: PathBuf,

        /// Repository root the changed paths are collected from
        #[arg(long, default_value = ".")]
        repo_root: PathBuf,

        /// Directory evidence artifacts are written to
        #[arg(long, default_value = "./artifacts")]
        artifacts_dir: PathBuf,

        /// Escalate heuristic misses to blocking failures (default)
        #[arg(long, overrides_with = "non_strict")]
        strict: bool,

        /// Record heuristic misses as warnings instead of failures
        #[arg(long)]
        non_strict: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Capture a lenient snapshot of the current evaluation
    ///
    /// Always evaluates in non-strict mode, writes the snapshot, and
    /// prints its path. Exits 0 regardless of the verdict; the snapshot
    /// records whatever the evaluation found.
    Snapshot {
        /// Path to the decision contract (YAML or JSON)
        #[arg(short, long)]
        contract: PathBuf,

        /// Repository root the changed paths are collected from
        #[arg(long, default_value = ".")]
        repo_root: PathBuf,

        /// Directory evidence artifacts are written to
        #[arg(long, default_value = "./artifacts")]
        artifacts_dir: PathBuf,
    },

    /// Report documentation debt across the contract corpus
    ///
    /// Scores every contract under decisions/contracts for missing
    /// sections and summarizes the portfolio.
    Debt {
        /// Repository root containing decisions/contracts
        #[arg(long, default_value = ".")]
        repo_root: PathBuf,

        /// Directory snapshots are counted from
        #[arg(long, default_value = "./artifacts")]
        artifacts_dir: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Print the contract file that gates the current change
    Route {
        /// Repository root the changed paths are collected from
        #[arg(long, default_value = ".")]
        repo_root: PathBuf,
    },
}

/// Execute the check command
pub fn execute_check(
    contract_path: PathBuf,
    repo_root: PathBuf,
    artifacts_dir: PathBuf,
    write_artifacts: bool,
    strict: bool,
    format: Option<OutputFormat>,
) -> Result<ExitCode, AdmissionError> {
    let contract = DecisionContract::load(&contract_path)?;
    let result = Evaluator::new(&repo_root)
        .with_strict(strict)
        .evaluate(&contract)?;

    render_result(&result, format.unwrap_or_default())?;

    if write_artifacts {
        let timestamp = now_utc_iso();
        let record_path = write_decision_record(&artifacts_dir, &result, &timestamp)?;
        let snapshot_path = write_snapshot(&artifacts_dir, &result, &timestamp)?;
        info!(
            record = %record_path.display(),
            snapshot = %snapshot_path.display(),
            "evidence artifacts written"
        );
    }

    Ok(ExitCode::from_verdict(result.admitted))
}

/// Execute the record command
pub fn execute_record(
    contract_path: PathBuf,
    repo_root: PathBuf,
    artifacts_dir: PathBuf,
    strict: bool,
    format: Option<OutputFormat>,
) -> Result<ExitCode, AdmissionError> {
    execute_check(contract_path, repo_root, artifacts_dir, true, strict, format)
}

/// Execute the snapshot command
pub fn execute_snapshot(
    contract_path: PathBuf,
    repo_root: PathBuf,
    artifacts_dir: PathBuf,
) -> Result<ExitCode, AdmissionError> {
    let contract = DecisionContract::load(&contract_path)?;
    let result = Evaluator::new(&repo_root)
        .with_strict(false)
        .evaluate(&contract)?;
    let path = write_snapshot(&artifacts_dir, &result, &now_utc_iso())?;
    println!("{}", path.display());
    Ok(ExitCode::Success)
}

/// Execute the debt command
pub fn execute_debt(
    repo_root: PathBuf,
    artifacts_dir: PathBuf,
    format: Option<OutputFormat>,
) -> Result<ExitCode, AdmissionError> {
    let contracts_dir = repo_root.join("decisions").join("contracts");
    let report = compute_debt_report(&contracts_dir, &artifacts_dir);
    render_debt_report(&report, format.unwrap_or_default())?;
    Ok(ExitCode::Success)
}

/// Execute the route command
pub fn execute_route(repo_root: PathBuf) -> Result<ExitCode, AdmissionError> {
    let changed_paths = collect_changed_paths(&repo_root, &CiContext::from_env());
    let policy = RoutePolicy::default();
    println!("{}", policy.route(&changed_paths));
    Ok(ExitCode::Success)
}
