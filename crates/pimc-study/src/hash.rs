//! Stable content hashing for run results.

use std::collections::BTreeMap;

use pimc_core::{ErrorInfo, PimcError};
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes the payload into canonical JSON (object keys sorted at every
/// depth) and returns the lowercase hex SHA-256 of those bytes.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, PimcError> {
    let value = serde_json::to_value(value)
        .map_err(|err| PimcError::Artifact(ErrorInfo::new("results-serialize", err.to_string())))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical)
        .map_err(|err| PimcError::Artifact(ErrorInfo::new("results-write", err.to_string())))?;
    Ok(format!("{:x}", Sha256::digest(bytes)))
}
