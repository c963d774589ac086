//! Validating decoder for open-data responses.
//!
//! The body must be a JSON array. Elements are validated one at a time: records
//! that do not match the schema are dropped and counted, so a single bad row
//! does not cost the whole collection.

use crate::data::model::Keyed;
use crate::error::{Dataset, Result, SchoolsError};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Records accepted from one response, plus how many elements were rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    pub rejected: usize,
}

/// Decode a response body into validated records of type `T`.
pub fn decode_records<T>(dataset: Dataset, body: &[u8]) -> Result<Decoded<T>>
where
    T: DeserializeOwned + Keyed,
{
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| SchoolsError::fetch(dataset, format!("response is not JSON: {e}")))?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(SchoolsError::fetch(
                dataset,
                format!("expected a JSON array, found {}", kind_of(&other)),
            ))
        }
    };

    let mut records = Vec::with_capacity(elements.len());
    let mut rejected = 0;

    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<T>(element) {
            Ok(record) if record.dbn().trim().is_empty() => {
                log::warn!("{dataset}: record {index} has an empty dbn, skipping");
                rejected += 1;
            }
            Ok(record) => records.push(record),
            Err(e) => {
                log::warn!("{dataset}: record {index} rejected: {e}");
                rejected += 1;
            }
        }
    }

    Ok(Decoded { records, rejected })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
