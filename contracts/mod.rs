//! Decision contract model
//!
//! A decision contract is a YAML (or JSON) mapping that records an
//! engineering decision together with its falsifiable success criteria and
//! the authority boundaries the resulting change must respect.
//!
//! # Design Principles
//!
//! - **Loose model**: contracts carry free-form narrative fields alongside
//!   the machine-checked ones, so the model keeps the raw mapping instead of
//!   forcing a closed struct
//! - **Located diagnostics**: shape problems are reported with document
//!   locations by the schema validator, not by ad-hoc field checks
//! - **Total accessors**: accessors never panic; absent or differently
//!   shaped fields degrade to `None` or a typed error

pub mod schemas;

pub use schemas::{schema_violations, DECISION_CONTRACT_SCHEMA};

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::AdmissionError;

/// Fallback identifier for contracts without a usable `decision_id`
pub const UNKNOWN_DECISION_ID: &str = "UNKNOWN";

/// A parsed decision contract document
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionContract {
    fields: Map<String, Value>,
}

impl DecisionContract {
    /// Wrap an already-parsed mapping
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Parse a contract from YAML or JSON text
    ///
    /// YAML is a superset of JSON here, so one parser covers both. Anything
    /// other than a top-level mapping is rejected.
    pub fn parse(content: &str) -> Result<Self, AdmissionError> {
        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| AdmissionError::ParseError(format!("Invalid contract YAML: {}", e)))?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(AdmissionError::InvalidInput(format!(
                "Contract must be a mapping, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Load a contract from disk
    pub fn load(path: &Path) -> Result<Self, AdmissionError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AdmissionError::FileError(format!(
                "Failed to read contract '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// Identifier used in reports and artifact filenames
    ///
    /// Scalars are accepted and stringified; anything else falls back to
    /// [`UNKNOWN_DECISION_ID`].
    pub fn decision_id(&self) -> String {
        match self.fields.get("decision_id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => UNKNOWN_DECISION_ID.to_string(),
        }
    }

    /// Raw field access
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The document as a JSON value, for schema validation
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Declared success criteria, when present and list-shaped
    pub fn success_criteria(&self) -> Option<&Vec<Value>> {
        self.fields.get("success_criteria").and_then(Value::as_array)
    }

    /// Declared rejected alternatives, when present and list-shaped
    pub fn alternatives_rejected(&self) -> Option<&Vec<Value>> {
        self.fields
            .get("alternatives_rejected")
            .and_then(Value::as_array)
    }

    /// Typed authority boundaries from `constraints.bounded_authority`
    ///
    /// An absent substructure (or absent fields) defaults to empty lists. A
    /// field that is present but not a list of strings is a shape violation
    /// and fails the whole extraction.
    pub fn bounded_authority(&self) -> Result<BoundedAuthority, BoundedAuthorityError> {
        let raw = self
            .fields
            .get("constraints")
            .and_then(Value::as_object)
            .and_then(|constraints| constraints.get("bounded_authority"))
            .and_then(Value::as_object);

        let mut malformed = Vec::new();
        let can_write_paths = string_list(raw, "can_write_paths", &mut malformed);
        let cannot_touch = string_list(raw, "cannot_touch", &mut malformed);

        if malformed.is_empty() {
            Ok(BoundedAuthority {
                can_write_paths,
                cannot_touch,
            })
        } else {
            Err(BoundedAuthorityError { fields: malformed })
        }
    }
}

/// Authority boundaries declared by a contract
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedAuthority {
    /// Path prefixes the change is allowed to modify
    pub can_write_paths: Vec<String>,
    /// Path prefixes the change must never modify
    pub cannot_touch: Vec<String>,
}

/// Shape violation in the `bounded_authority` substructure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedAuthorityError {
    /// Fields that are not lists of strings
    pub fields: Vec<String>,
}

fn string_list(
    raw: Option<&Map<String, Value>>,
    key: &str,
    malformed: &mut Vec<String>,
) -> Vec<String> {
    match raw.and_then(|mapping| mapping.get(key)) {
        None => Vec::new(),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    _ => {
                        malformed.push(key.to_string());
                        return Vec::new();
                    }
                }
            }
            out
        }
        Some(_) => {
            malformed.push(key.to_string());
            Vec::new()
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdmissionError;

    const CONTRACT_YAML: &str = r#"
decision_id: DC-2026-001
title: Route ingest through the queue
alternatives_rejected:
  - Direct writes from the collector
success_criteria:
  - p95 ingest latency under 200 ms
constraints:
  bounded_authority:
    can_write_paths:
      - src/ingest/
    cannot_touch:
      - secrets/
"#;

    #[test]
    fn test_parse_mapping() {
        let contract = DecisionContract::parse(CONTRACT_YAML).unwrap();
        assert_eq!(contract.decision_id(), "DC-2026-001");
        assert_eq!(contract.success_criteria().unwrap().len(), 1);
        assert_eq!(contract.alternatives_rejected().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        let err = DecisionContract::parse("- a\n- b\n").unwrap_err();
        assert!(matches!(err, AdmissionError::InvalidInput(_)));
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let err = DecisionContract::parse("a: [unclosed").unwrap_err();
        assert!(matches!(err, AdmissionError::ParseError(_)));
    }

    #[test]
    fn test_decision_id_fallbacks() {
        let missing = DecisionContract::parse("title: no id").unwrap();
        assert_eq!(missing.decision_id(), UNKNOWN_DECISION_ID);

        let numeric = DecisionContract::parse("decision_id: 42").unwrap();
        assert_eq!(numeric.decision_id(), "42");

        let listed = DecisionContract::parse("decision_id: [a]").unwrap();
        assert_eq!(listed.decision_id(), UNKNOWN_DECISION_ID);
    }

    #[test]
    fn test_bounded_authority_extraction() {
        let contract = DecisionContract::parse(CONTRACT_YAML).unwrap();
        let authority = contract.bounded_authority().unwrap();
        assert_eq!(authority.can_write_paths, vec!["src/ingest/"]);
        assert_eq!(authority.cannot_touch, vec!["secrets/"]);
    }

    #[test]
    fn test_bounded_authority_defaults_when_absent() {
        let contract = DecisionContract::parse("decision_id: DC-1").unwrap();
        let authority = contract.bounded_authority().unwrap();
        assert!(authority.can_write_paths.is_empty());
        assert!(authority.cannot_touch.is_empty());
    }

    #[test]
    fn test_bounded_authority_rejects_non_list() {
        let contract = DecisionContract::parse(
            "constraints:\n  bounded_authority:\n    can_write_paths: src/\n",
        )
        .unwrap();
        let err = contract.bounded_authority().unwrap_err();
        assert_eq!(err.fields, vec!["can_write_paths"]);
    }

    #[test]
    fn test_bounded_authority_rejects_non_string_items() {
        let contract = DecisionContract::parse(
            "constraints:\n  bounded_authority:\n    cannot_touch:\n      - secrets/\n      - 7\n",
        )
        .unwrap();
        let err = contract.bounded_authority().unwrap_err();
        assert_eq!(err.fields, vec!["cannot_touch"]);
    }

    #[test]
    fn test_bounded_authority_rejects_null_field() {
        let contract = DecisionContract::parse(
            "constraints:\n  bounded_authority:\n    can_write_paths: null\n",
        )
        .unwrap();
        let err = contract.bounded_authority().unwrap_err();
        assert_eq!(err.fields, vec!["can_write_paths"]);
    }
}
