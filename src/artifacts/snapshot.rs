//! Point-in-time evaluation snapshots
//!
//! Snapshots are the machine-readable half of the evidence pair: the full
//! result frozen with its capture time, accumulated for future drift
//! analysis.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::types::AdmissibilityResult;
use crate::error::{AdmissionError, Result};

/// One evaluation result frozen with its capture time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Capture time, UTC
    pub timestamp: String,
    /// The full result, flattened alongside the timestamp
    #[serde(flatten)]
    pub result: AdmissibilityResult,
}

impl Snapshot {
    /// Freeze a result at the given capture time
    pub fn new(result: AdmissibilityResult, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            result,
        }
    }
}

/// Write the snapshot under `<artifacts_dir>/snapshots/`
pub fn write_snapshot(
    artifacts_dir: &Path,
    result: &AdmissibilityResult,
    timestamp: &str,
) -> Result<PathBuf> {
    let dir = artifacts_dir.join("snapshots");
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.snapshot.json", result.decision_id));
    let snapshot = Snapshot::new(result.clone(), timestamp);
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| AdmissionError::SerializationError(e.to_string()))?;
    fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::CheckResult;
    use tempfile::TempDir;

    fn rejected_result() -> AdmissibilityResult {
        AdmissibilityResult::new(
            "DC-2026-003",
            vec![CheckResult::fail("alternatives_provided", "No alternatives rejected captured.")],
            vec!["src/a.rs".to_string()],
            vec![],
            vec!["No alternatives rejected captured.".to_string()],
        )
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = Snapshot::new(rejected_result(), "2026-02-11T09:30:00Z");
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
        assert!(!parsed.result.admitted);
    }

    #[test]
    fn test_write_snapshot_file() {
        let dir = TempDir::new().unwrap();
        let path = write_snapshot(dir.path(), &rejected_result(), "2026-02-11T09:30:00Z").unwrap();
        assert_eq!(path, dir.path().join("snapshots/DC-2026-003.snapshot.json"));

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["timestamp"], "2026-02-11T09:30:00Z");
        assert_eq!(value["decision_id"], "DC-2026-003");
        assert_eq!(value["admitted"], false);
        assert_eq!(value["schema_version"], "v0.1");
    }
}
