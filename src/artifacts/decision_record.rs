//! Decision record rendering
//!
//! The decision record is the human-readable half of the evidence pair. It
//! is a pure function of the evaluation result plus the capture timestamp,
//! so re-rendering the same result always yields the same document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::types::AdmissibilityResult;
use crate::error::Result;

/// Closing note stamped into every record
const RECORD_NOTE: &str = "This record preserves commit-time admissibility rationale. \
Logs explain execution; this document explains why the transition was allowed.";

/// Render the markdown record for one evaluation
pub fn render_decision_record(result: &AdmissibilityResult, timestamp: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# Decision Record: {}", result.decision_id));
    let status = if result.admitted {
        "ADMITTED (commit-time)"
    } else {
        "REJECTED (commit-time)"
    };
    lines.push(format!("Status: {}", status));
    lines.push(format!("Timestamp: {}", timestamp));
    lines.push(String::new());

    lines.push("## Deterministic evaluation".to_string());
    for check in &result.checks {
        lines.push(format!("- {}: {} - {}", check.name, check.status, check.detail));
    }
    lines.push(String::new());

    lines.push("## Changed paths (evidence)".to_string());
    if result.changed_paths.is_empty() {
        lines.push("- <none detected>".to_string());
    } else {
        for path in &result.changed_paths {
            lines.push(format!("- {}", path));
        }
    }

    if !result.failures.is_empty() {
        lines.push(String::new());
        lines.push("## Failures (non-admissible)".to_string());
        for failure in &result.failures {
            lines.push(format!("- {}", failure));
        }
    }

    if !result.warnings.is_empty() {
        lines.push(String::new());
        lines.push("## Warnings".to_string());
        for warning in &result.warnings {
            lines.push(format!("- {}", warning));
        }
    }

    lines.push(String::new());
    lines.push("## Notes".to_string());
    lines.push(RECORD_NOTE.to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Write the record under `<artifacts_dir>/decision_records/`
///
/// Rejected evaluations are recorded too; evidence of a refusal is as
/// durable as evidence of an admission.
pub fn write_decision_record(
    artifacts_dir: &Path,
    result: &AdmissibilityResult,
    timestamp: &str,
) -> Result<PathBuf> {
    let dir = artifacts_dir.join("decision_records");
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.decision_record.md", result.decision_id));
    fs::write(&path, render_decision_record(result, timestamp))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::CheckResult;
    use tempfile::TempDir;

    fn admitted_result() -> AdmissibilityResult {
        AdmissibilityResult::new(
            "DC-2026-001",
            vec![
                CheckResult::pass("contract_schema_valid", "Contract matches schema."),
                CheckResult::pass("diff_detected", "1 changed paths detected."),
            ],
            vec!["src/a.rs".to_string()],
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_record_layout() {
        let record = render_decision_record(&admitted_result(), "2026-02-11T09:30:00Z");
        assert!(record.starts_with("# Decision Record: DC-2026-001\n"));
        assert!(record.contains("Status: ADMITTED (commit-time)"));
        assert!(record.contains("Timestamp: 2026-02-11T09:30:00Z"));
        assert!(record.contains("## Deterministic evaluation"));
        assert!(record.contains("- contract_schema_valid: PASS - Contract matches schema."));
        assert!(record.contains("## Changed paths (evidence)"));
        assert!(record.contains("- src/a.rs"));
        assert!(record.contains("## Notes"));
        assert!(record.ends_with("\n"));
        // Empty sections are omitted entirely.
        assert!(!record.contains("## Failures"));
        assert!(!record.contains("## Warnings"));
    }

    #[test]
    fn test_rejected_record_lists_failures() {
        let result = AdmissibilityResult::new(
            "DC-2026-002",
            vec![CheckResult::fail("forbidden_paths_untouched", "Touched forbidden paths.")],
            vec![],
            vec!["heads up".to_string()],
            vec!["Forbidden paths modified: [\"secrets/key.pem\"]".to_string()],
        );
        let record = render_decision_record(&result, "2026-02-11T09:30:00Z");
        assert!(record.contains("Status: REJECTED (commit-time)"));
        assert!(record.contains("## Failures (non-admissible)"));
        assert!(record.contains("- Forbidden paths modified"));
        assert!(record.contains("## Warnings"));
        assert!(record.contains("- <none detected>"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let result = admitted_result();
        let first = render_decision_record(&result, "2026-02-11T09:30:00Z");
        let second = render_decision_record(&result, "2026-02-11T09:30:00Z");
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_uses_decision_id_filename() {
        let dir = TempDir::new().unwrap();
        let path = write_decision_record(dir.path(), &admitted_result(), "2026-02-11T09:30:00Z")
            .unwrap();
        assert_eq!(
            path,
            dir.path().join("decision_records/DC-2026-001.decision_record.md")
        );
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# Decision Record: DC-2026-001"));
    }
}
