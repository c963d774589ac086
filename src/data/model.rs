//! Record types for the two open-data collections.
//!
//! Deserialization doubles as schema validation: a record missing a required field,
//! or carrying one of the wrong type, fails to deserialize and is rejected by the
//! decoder instead of being displayed half-filled.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Records that can be joined by District Borough Number.
pub trait Keyed {
    fn dbn(&self) -> &str;
}

/// One entry of the high school directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct School {
    pub dbn: String,
    pub school_name: String,
    #[serde(default)]
    pub overview_paragraph: String,
}

impl Keyed for School {
    fn dbn(&self) -> &str {
        &self.dbn
    }
}

/// Average SAT section scores for one school, kept exactly as published.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SatScore {
    pub dbn: String,
    #[serde(
        rename = "sat_critical_reading_avg_score",
        deserialize_with = "score_text"
    )]
    pub reading: String,
    #[serde(rename = "sat_writing_avg_score", deserialize_with = "score_text")]
    pub writing: String,
    #[serde(rename = "sat_math_avg_score", deserialize_with = "score_text")]
    pub math: String,
}

impl Keyed for SatScore {
    fn dbn(&self) -> &str {
        &self.dbn
    }
}

/// Scores are published as text ("391", or "s" when suppressed); accept bare
/// numbers too and keep their textual form.
fn score_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(de::Error::custom(format!(
            "expected score text or number, found {other}"
        ))),
    }
}
