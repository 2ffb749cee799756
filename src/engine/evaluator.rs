//! Admissibility evaluation
//!
//! Orchestrates schema validation, the falsifiability heuristic, the
//! alternatives check, changed-path discovery, and boundary evaluation into
//! one immutable verdict. Deterministic rules either pass or block; the two
//! heuristic rules block only in strict mode.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::contracts::{schema_violations, DecisionContract};
use crate::engine::boundary::{diff_missing, evaluate_boundaries};
use crate::engine::diff::{collect_changed_paths, CiContext};
use crate::engine::types::{AdmissibilityResult, CheckResult};
use crate::error::Result;

/// Tokens that mark a success criterion as measurable
const FALSIFIABLE_TOKENS: [&str; 11] = [
    "%", "p95", "p99", "latency", "blocks", "ci", "fails", "error", "slo", "ms", "seconds",
];

/// Lexical falsifiability test over the declared success criteria
///
/// Coarse by intent: it catches vacuous criteria like "works well", it does
/// not judge whether a threshold is sensible. Missing or non-list criteria
/// are never falsifiable.
pub fn criteria_falsifiable(contract: &DecisionContract) -> bool {
    let Some(criteria) = contract.success_criteria() else {
        return false;
    };
    let joined = criteria
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    FALSIFIABLE_TOKENS.iter().any(|token| joined.contains(token))
}

/// Builder-configured admissibility evaluator
///
/// Holds the policy knobs for one invocation: the repository root the
/// evidence comes from, strict or lenient treatment of heuristic misses,
/// and the CI context (captured from the process environment by default,
/// injectable for tests).
#[derive(Debug, Clone)]
pub struct Evaluator {
    repo_root: PathBuf,
    strict: bool,
    ci: CiContext,
}

impl Evaluator {
    /// Evaluator rooted at the repository under evaluation, strict by default
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            strict: true,
            ci: CiContext::from_env(),
        }
    }

    /// Override strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Override the CI context
    pub fn with_ci_context(mut self, ci: CiContext) -> Self {
        self.ci = ci;
        self
    }

    /// The repository root this evaluator collects evidence from
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Evaluate a contract against the repository's changed paths
    pub fn evaluate(&self, contract: &DecisionContract) -> Result<AdmissibilityResult> {
        let changed_paths = collect_changed_paths(&self.repo_root, &self.ci);
        self.evaluate_with_paths(contract, changed_paths)
    }

    /// Evaluate with a precollected changed-path set
    ///
    /// The only error path is a broken embedded schema artifact; every
    /// contract-level problem lands in the verdict instead.
    pub fn evaluate_with_paths(
        &self,
        contract: &DecisionContract,
        changed_paths: Vec<String>,
    ) -> Result<AdmissibilityResult> {
        let mut checks: Vec<CheckResult> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();
        let mut failures: Vec<String> = Vec::new();

        let violations = schema_violations(&contract.to_value())?;
        if violations.is_empty() {
            checks.push(CheckResult::pass(
                "contract_schema_valid",
                "Contract matches schema.",
            ));
        } else {
            failures.extend(violations.iter().map(|v| format!("schema: {}", v)));
            checks.push(CheckResult::fail(
                "contract_schema_valid",
                "Decision contract schema violations.",
            ));
        }

        if criteria_falsifiable(contract) {
            checks.push(CheckResult::pass(
                "success_criteria_falsifiable",
                "Success criteria appear falsifiable.",
            ));
        } else {
            let message = "Success criteria look non-falsifiable; add measurable thresholds \
                           or explicit CI conditions.";
            if self.strict {
                failures.push(message.to_string());
                checks.push(CheckResult::fail("success_criteria_falsifiable", message));
            } else {
                warnings.push(message.to_string());
                checks.push(CheckResult::warn("success_criteria_falsifiable", message));
            }
        }

        let has_alternatives = contract
            .alternatives_rejected()
            .map(|list| !list.is_empty())
            .unwrap_or(false);
        if has_alternatives {
            checks.push(CheckResult::pass(
                "alternatives_provided",
                "Alternatives are present.",
            ));
        } else {
            let message = "No alternatives rejected captured. Weak audit posture.";
            if self.strict {
                failures.push(message.to_string());
                checks.push(CheckResult::fail("alternatives_provided", message));
            } else {
                warnings.push(message.to_string());
                checks.push(CheckResult::warn("alternatives_provided", message));
            }
        }

        let boundary = evaluate_boundaries(contract, &changed_paths);

        // In strict mode the absence of evidence is itself non-admissible;
        // the escalation lands ahead of the merged boundary failures.
        if self.strict && diff_missing(&boundary) {
            failures.push(
                "Strict mode: no diff detected. Stage changes with git add or \
                 ensure CI diff strategy."
                    .to_string(),
            );
        }

        warnings.extend(boundary.warnings);
        failures.extend(boundary.failures);
        checks.extend(boundary.checks);

        debug!(
            decision_id = %contract.decision_id(),
            failures = failures.len(),
            warnings = warnings.len(),
            "admissibility evaluation complete"
        );

        Ok(AdmissibilityResult::new(
            contract.decision_id(),
            checks,
            changed_paths,
            warnings,
            failures,
        ))
    }
}
