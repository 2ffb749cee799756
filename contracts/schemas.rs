//! Contract schema artifact and validation
//!
//! The JSON Schema ships as a standalone artifact so contract authors can
//! validate documents with external tooling; it is embedded here at compile
//! time and versioned with the engine.

use serde_json::Value;

use crate::error::AdmissionError;

/// JSON Schema every decision contract is validated against
pub const DECISION_CONTRACT_SCHEMA: &str = include_str!("decision_contract.schema.json");

/// Compile the embedded contract schema
pub(crate) fn contract_validator() -> Result<jsonschema::Validator, AdmissionError> {
    let schema: Value = serde_json::from_str(DECISION_CONTRACT_SCHEMA).map_err(|e| {
        AdmissionError::SchemaError(format!("Embedded schema is not valid JSON: {}", e))
    })?;
    jsonschema::options().build(&schema).map_err(|e| {
        AdmissionError::SchemaError(format!("Embedded schema failed to compile: {}", e))
    })
}

/// Validate a contract document against the embedded schema
///
/// Returns one message per violation, sorted by document location, in the
/// form `<location>: <message>` with `<root>` standing in for the document
/// root. An empty list means the document conforms.
pub fn schema_violations(document: &Value) -> Result<Vec<String>, AdmissionError> {
    let validator = contract_validator()?;
    let mut located: Vec<(String, String)> = validator
        .iter_errors(document)
        .map(|error| {
            (
                dotted_location(&error.instance_path.to_string()),
                error.to_string(),
            )
        })
        .collect();
    located.sort();
    Ok(located
        .into_iter()
        .map(|(location, message)| format!("{}: {}", location, message))
        .collect())
}

/// Convert a JSON pointer (`/constraints/bounded_authority`) into the dotted
/// form used in failure messages
fn dotted_location(pointer: &str) -> String {
    let trimmed = pointer.trim_start_matches('/');
    if trimmed.is_empty() {
        "<root>".to_string()
    } else {
        trimmed.replace('/', ".")
    }
}
