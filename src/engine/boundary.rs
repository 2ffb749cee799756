//! Bounded-authority boundary evaluation
//!
//! Compares the changed-path evidence against the authority boundaries a
//! contract declares. Two hard rules: forbidden prefixes must stay
//! untouched, and every change must land inside the allowed prefixes (the
//! declared ones plus the engine's own output surfaces).

use crate::contracts::DecisionContract;
use crate::engine::types::{CheckResult, CheckStatus};

/// Prefixes that are always writable: the engine's own output and
/// documentation surfaces
pub const IMPLICIT_ALLOW_PREFIXES: [&str; 3] = ["decisions/contracts/", "artifacts/", "docs/"];

/// Check name the strict-mode escalation keys off
pub(crate) const DIFF_DETECTED: &str = "diff_detected";

/// Checks, warnings, and failures produced by one boundary evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryEvaluation {
    /// Boundary checks in evaluation order
    pub checks: Vec<CheckResult>,
    /// Non-blocking messages
    pub warnings: Vec<String>,
    /// Blocking messages
    pub failures: Vec<String>,
}

/// Evaluate the declared authority boundaries against the changed paths
///
/// A malformed `bounded_authority` substructure short-circuits to a single
/// failing shape check; no path comparison runs against boundaries that
/// cannot be trusted. The forbidden and allowed checks are otherwise
/// independent, so one path can fail both.
pub fn evaluate_boundaries(
    contract: &DecisionContract,
    changed_paths: &[String],
) -> BoundaryEvaluation {
    let mut eval = BoundaryEvaluation::default();

    let authority = match contract.bounded_authority() {
        Ok(authority) => authority,
        Err(err) => {
            eval.failures.push(format!(
                "bounded_authority fields must be lists of strings: {}.",
                err.fields.join(", ")
            ));
            eval.checks.push(CheckResult::fail(
                "bounded_authority_shape",
                "Invalid bounded_authority structure.",
            ));
            return eval;
        }
    };

    eval.checks.push(CheckResult::pass(
        "bounded_authority_shape",
        "bounded_authority is well-formed.",
    ));

    let forbidden_hits: Vec<&String> = changed_paths
        .iter()
        .filter(|path| prefix_match(path, &authority.cannot_touch))
        .collect();
    if forbidden_hits.is_empty() {
        eval.checks.push(CheckResult::pass(
            "forbidden_paths_untouched",
            "No forbidden paths touched.",
        ));
    } else {
        eval.failures
            .push(format!("Forbidden paths modified: {:?}", forbidden_hits));
        eval.checks.push(CheckResult::fail(
            "forbidden_paths_untouched",
            "Touched forbidden paths.",
        ));
    }

    let mut allowed: Vec<String> = authority.can_write_paths.clone();
    allowed.extend(IMPLICIT_ALLOW_PREFIXES.iter().map(|p| p.to_string()));
    let out_of_bounds: Vec<&String> = changed_paths
        .iter()
        .filter(|path| !path.is_empty() && !prefix_match(path, &allowed))
        .collect();
    if out_of_bounds.is_empty() {
        eval.checks.push(CheckResult::pass(
            "bounded_authority_respected",
            "Changes respect bounded authority.",
        ));
    } else {
        eval.failures
            .push(format!("Out-of-bounds modifications: {:?}", out_of_bounds));
        eval.checks.push(CheckResult::fail(
            "bounded_authority_respected",
            "Changes exceed bounded authority.",
        ));
    }

    if changed_paths.is_empty() {
        eval.warnings.push(
            "No changed paths detected. Verify CI diff strategy or stage changes locally."
                .to_string(),
        );
        eval.checks
            .push(CheckResult::warn(DIFF_DETECTED, "No diff detected."));
    } else {
        eval.checks.push(CheckResult::pass(
            DIFF_DETECTED,
            format!("{} changed paths detected.", changed_paths.len()),
        ));
    }

    eval
}

/// Prefix match with separator normalization
///
/// Backslashes are treated as path separators, `src` and `src/` name the
/// same prefix, and a prefix matches itself as an exact path.
pub fn prefix_match<S: AsRef<str>>(path: &str, prefixes: &[S]) -> bool {
    let normalized = path.replace('\\', "/");
    prefixes.iter().any(|prefix| {
        let prefix = prefix.as_ref().replace('\\', "/");
        let bare = prefix.trim_end_matches('/');
        normalized == bare || normalized.starts_with(&format!("{}/", bare))
    })
}

/// True when the evaluation recorded a missing diff
pub(crate) fn diff_missing(eval: &BoundaryEvaluation) -> bool {
    eval.checks
        .iter()
        .any(|check| check.name == DIFF_DETECTED && check.status == CheckStatus::Warn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::DecisionContract;
    use serde_json::json;

    fn contract_with_authority(can_write: &[&str], cannot_touch: &[&str]) -> DecisionContract {
        let value = json!({
            "decision_id": "DC-1",
            "success_criteria": ["p95 under 10 ms"],
            "constraints": {
                "bounded_authority": {
                    "can_write_paths": can_write,
                    "cannot_touch": cannot_touch,
                }
            }
        });
        match value {
            serde_json::Value::Object(fields) => DecisionContract::new(fields),
            _ => unreachable!(),
        }
    }

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn check_status(eval: &BoundaryEvaluation, name: &str) -> CheckStatus {
        eval.checks
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.status)
            .unwrap_or_else(|| panic!("missing check {}", name))
    }

    #[test]
    fn test_prefix_match_normalization() {
        assert!(prefix_match("src/main.rs", &["src/"]));
        assert!(prefix_match("src/main.rs", &["src"]));
        assert!(prefix_match("src", &["src/"]));
        assert!(prefix_match("src\\main.rs", &["src/"]));
        assert!(!prefix_match("srcx/main.rs", &["src/"]));
        assert!(!prefix_match("docs/readme.md", &["src/"]));
    }

    #[test]
    fn test_forbidden_path_fails_both_checks() {
        let contract = contract_with_authority(&["src/"], &["secrets/"]);
        let eval = evaluate_boundaries(&contract, &paths(&["secrets/key.pem"]));
        assert_eq!(check_status(&eval, "forbidden_paths_untouched"), CheckStatus::Fail);
        assert_eq!(check_status(&eval, "bounded_authority_respected"), CheckStatus::Fail);
        assert_eq!(eval.failures.len(), 2);
    }

    #[test]
    fn test_implicit_allow_covers_docs() {
        let contract = contract_with_authority(&[], &[]);
        let eval = evaluate_boundaries(&contract, &paths(&["docs/adr/001.md"]));
        assert_eq!(check_status(&eval, "bounded_authority_respected"), CheckStatus::Pass);
        assert!(eval.failures.is_empty());
    }

    #[test]
    fn test_declared_and_implicit_prefixes_combine() {
        let contract = contract_with_authority(&["src/"], &[]);
        let eval = evaluate_boundaries(&contract, &paths(&["src/app.py", "docs/readme.md"]));
        assert_eq!(check_status(&eval, "forbidden_paths_untouched"), CheckStatus::Pass);
        assert_eq!(check_status(&eval, "bounded_authority_respected"), CheckStatus::Pass);
        assert!(eval.failures.is_empty());
    }

    #[test]
    fn test_out_of_bounds_change_fails() {
        let contract = contract_with_authority(&["src/ingest/"], &[]);
        let eval = evaluate_boundaries(&contract, &paths(&["src/api/server.rs"]));
        assert_eq!(check_status(&eval, "forbidden_paths_untouched"), CheckStatus::Pass);
        assert_eq!(check_status(&eval, "bounded_authority_respected"), CheckStatus::Fail);
        assert_eq!(eval.failures.len(), 1);
        assert!(eval.failures[0].contains("src/api/server.rs"));
    }

    #[test]
    fn test_empty_changed_paths_warns() {
        let contract = contract_with_authority(&["src/"], &[]);
        let eval = evaluate_boundaries(&contract, &[]);
        assert_eq!(check_status(&eval, DIFF_DETECTED), CheckStatus::Warn);
        assert!(diff_missing(&eval));
        assert!(eval.failures.is_empty());
        assert_eq!(eval.warnings.len(), 1);
    }

    #[test]
    fn test_diff_detected_reports_count() {
        let contract = contract_with_authority(&["src/"], &[]);
        let eval = evaluate_boundaries(&contract, &paths(&["src/a.rs", "src/b.rs"]));
        let check = eval.checks.iter().find(|c| c.name == DIFF_DETECTED).unwrap();
        assert_eq!(check.status, CheckStatus::Pass);
        assert!(check.detail.contains("2 changed paths"));
    }

    #[test]
    fn test_malformed_authority_short_circuits() {
        let value = json!({
            "decision_id": "DC-1",
            "constraints": {
                "bounded_authority": { "can_write_paths": "src/" }
            }
        });
        let contract = match value {
            serde_json::Value::Object(fields) => DecisionContract::new(fields),
            _ => unreachable!(),
        };
        let eval = evaluate_boundaries(&contract, &paths(&["src/a.rs"]));
        assert_eq!(eval.checks.len(), 1);
        assert_eq!(check_status(&eval, "bounded_authority_shape"), CheckStatus::Fail);
        assert_eq!(eval.failures.len(), 1);
        assert!(eval.failures[0].contains("can_write_paths"));
    }
}
