//! Decision debt scoring
//!
//! A read-only pass over the contract corpus, independent of any single
//! admission. Debt measures documentation completeness, not correctness:
//! a contract can be admitted while carrying debt, and vice versa.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::contracts::UNKNOWN_DECISION_ID;
use crate::engine::types::RESULT_SCHEMA_VERSION;

/// Penalty for a missing `assumptions` section
const PENALTY_ASSUMPTIONS: f64 = 0.15;
/// Penalty for a missing `signals_considered` section
const PENALTY_SIGNALS: f64 = 0.15;
/// Penalty for a missing `alternatives_rejected` section
const PENALTY_ALTERNATIVES: f64 = 0.25;
/// Penalty for missing or empty `success_criteria`
const PENALTY_SUCCESS_CRITERIA: f64 = 0.45;

/// Debt entry for one contract file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDebt {
    /// Contract identifier, or the file stem when the document has none
    pub decision_id: String,
    /// Path the contract was read from
    pub contract_path: String,
    /// Accumulated penalty, clamped to `[0.0, 1.0]`
    pub debt_score: f64,
    /// Stable tags naming each missing section
    pub reasons: Vec<String>,
}

/// Aggregate summary across the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of contract files scored
    pub contract_count: usize,
    /// Mean debt score, 0.0 for an empty corpus
    pub avg_debt_score: f64,
    /// Snapshot files accumulated under the artifacts directory
    pub snapshot_count: usize,
    /// Drift detection placeholder
    pub drift: DriftStatus,
}

/// Drift detection placeholder
///
/// Historical snapshots are already being collected; comparing them is
/// future work, so the report carries an explicit stub instead of a
/// silently absent field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftStatus {
    pub status: String,
    pub note: String,
}

impl Default for DriftStatus {
    fn default() -> Self {
        Self {
            status: "stub_v0.1".to_string(),
            note: "Drift detection lands in v0.2+ using historical snapshots.".to_string(),
        }
    }
}

/// Full debt report over a contract corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtReport {
    /// Format version of the report
    pub schema_version: String,
    /// Per-contract entries, in sorted file order
    pub contracts: Vec<ContractDebt>,
    /// Aggregate portfolio summary
    pub portfolio: PortfolioSummary,
}

/// Score one parsed contract document
///
/// Returns the clamped score and the reason tags, in fixed section order.
pub fn score_contract(document: &Value) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if is_missing(document.get("assumptions")) {
        score += PENALTY_ASSUMPTIONS;
        reasons.push("missing_assumptions".to_string());
    }
    if is_missing(document.get("signals_considered")) {
        score += PENALTY_SIGNALS;
        reasons.push("missing_signals_considered".to_string());
    }
    if is_missing(document.get("alternatives_rejected")) {
        score += PENALTY_ALTERNATIVES;
        reasons.push("missing_alternatives_rejected".to_string());
    }
    let criteria_missing = match document.get("success_criteria") {
        Some(Value::Array(items)) => items.is_empty(),
        _ => true,
    };
    if criteria_missing {
        score += PENALTY_SUCCESS_CRITERIA;
        reasons.push("missing_success_criteria".to_string());
    }

    (score.clamp(0.0, 1.0), reasons)
}

/// Absent, null, false, zero, and empty collections all count as missing
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
    }
}

/// Build the debt report for a contract corpus
///
/// `contracts_dir` holds the `*.yml`/`*.yaml` contract files and
/// `artifacts_dir` the accumulated evidence. Malformed or non-mapping
/// contract files degrade to an empty document and score as fully missing
/// rather than erroring: debt reporting must not be blockable by one bad
/// file.
pub fn compute_debt_report(contracts_dir: &Path, artifacts_dir: &Path) -> DebtReport {
    let mut entries = Vec::new();

    for path in contract_files(contracts_dir) {
        let document = load_loose_document(&path);
        let (score, reasons) = score_contract(&document);
        let decision_id = match document.get("decision_id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => file_stem(&path),
        };
        entries.push(ContractDebt {
            decision_id,
            contract_path: path.display().to_string(),
            debt_score: round3(score),
            reasons,
        });
    }

    let contract_count = entries.len();
    let avg = if entries.is_empty() {
        0.0
    } else {
        entries.iter().map(|e| e.debt_score).sum::<f64>() / contract_count as f64
    };
    let snapshot_count = count_snapshots(&artifacts_dir.join("snapshots"));

    debug!(
        contracts = contract_count,
        snapshots = snapshot_count,
        "debt report computed"
    );

    DebtReport {
        schema_version: RESULT_SCHEMA_VERSION.to_string(),
        contracts: entries,
        portfolio: PortfolioSummary {
            contract_count,
            avg_debt_score: round3(avg),
            snapshot_count,
            drift: DriftStatus::default(),
        },
    }
}

/// Contract files in the corpus, in sorted order
fn contract_files(contracts_dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(contracts_dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && matches!(
                    path.extension().and_then(|ext| ext.to_str()),
                    Some("yml") | Some("yaml")
                )
        })
        .collect();
    files.sort();
    files
}

/// Parse a contract leniently; any failure degrades to an empty mapping
fn load_loose_document(path: &Path) -> Value {
    let Ok(content) = fs::read_to_string(path) else {
        return Value::Object(serde_json::Map::new());
    };
    match serde_yaml::from_str::<Value>(&content) {
        Ok(value @ Value::Object(_)) => value,
        _ => Value::Object(serde_json::Map::new()),
    }
}

fn count_snapshots(snapshots_dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(snapshots_dir) else {
        return 0;
    };
    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().and_then(|ext| ext.to_str()) == Some("json"))
        .count()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(UNKNOWN_DECISION_ID)
        .to_string()
}
