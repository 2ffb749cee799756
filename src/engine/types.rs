//! Shared result types for admissibility evaluation

use serde::{Deserialize, Serialize};

/// Version tag stamped into every persisted result and artifact
pub const RESULT_SCHEMA_VERSION: &str = "v0.1";

/// Outcome of a single deterministic check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// Check passed
    Pass,
    /// Non-blocking finding
    Warn,
    /// Blocking finding
    Fail,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Warn => write!(f, "WARN"),
            CheckStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// One named check produced during an evaluation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Stable identifier of the rule
    pub name: String,
    /// Outcome
    pub status: CheckStatus,
    /// Human-readable explanation
    pub detail: String,
}

impl CheckResult {
    /// Create a passing check
    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Pass,
            detail: detail.into(),
        }
    }

    /// Create a warning check
    pub fn warn(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warn,
            detail: detail.into(),
        }
    }

    /// Create a failing check
    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Fail,
            detail: detail.into(),
        }
    }
}

/// The engine's sole output: one immutable verdict per invocation
///
/// `admitted` is derived from `failures` at construction and nowhere else;
/// warnings never block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissibilityResult {
    /// Contract identifier the verdict applies to
    pub decision_id: String,
    /// True exactly when `failures` is empty
    pub admitted: bool,
    /// Format version of persisted results
    pub schema_version: String,
    /// Every check, in evaluation order
    pub checks: Vec<CheckResult>,
    /// Changed paths used as evidence
    pub changed_paths: Vec<String>,
    /// Non-blocking messages
    pub warnings: Vec<String>,
    /// Blocking messages
    pub failures: Vec<String>,
}

impl AdmissibilityResult {
    /// Assemble a verdict; `admitted` is derived, never supplied
    pub fn new(
        decision_id: impl Into<String>,
        checks: Vec<CheckResult>,
        changed_paths: Vec<String>,
        warnings: Vec<String>,
        failures: Vec<String>,
    ) -> Self {
        let admitted = failures.is_empty();
        Self {
            decision_id: decision_id.into(),
            admitted,
            schema_version: RESULT_SCHEMA_VERSION.to_string(),
            checks,
            changed_paths,
            warnings,
            failures,
        }
    }
}
