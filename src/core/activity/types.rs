//! Event data structures
//!
//! This module defines the loosely-typed event record as it arrives from the
//! API and the counted summary the aggregator produces from it.

use serde::Serialize;
use serde_json::Value;

/// Value used for any field missing from an event record
pub const UNKNOWN: &str = "Unknown";

/// One event record as decoded from the API
///
/// Every field is optional. Absent fields (including absent nested
/// objects) stay `None` here and are only normalized when the grouping key
/// is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEvent {
    /// Event kind (e.g., "PushEvent", "IssuesEvent")
    pub kind: Option<String>,
    /// `repo.name`
    pub repo_name: Option<String>,
    /// `payload.action`
    pub action: Option<String>,
}

impl RawEvent {
    /// Extract the fields of interest from a decoded JSON value
    ///
    /// Non-object values and fields of the wrong JSON type are treated as absent.
    pub fn from_value(value: &Value) -> Self {
        let string_at = |pointer: &str| {
            value
                .pointer(pointer)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            kind: string_at("/type"),
            repo_name: string_at("/repo/name"),
            action: string_at("/payload/action"),
        }
    }

    /// Grouping key with absent fields defaulted to [`UNKNOWN`]
    pub fn key(&self) -> AggregationKey {
        let or_unknown = |field: &Option<String>| {
            field.clone().unwrap_or_else(|| UNKNOWN.to_string())
        };

        AggregationKey {
            kind: or_unknown(&self.kind),
            repo_name: or_unknown(&self.repo_name),
            action: or_unknown(&self.action),
        }
    }
}

/// The (event kind, repository name, action) triple events are grouped by
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregationKey {
    pub kind: String,
    pub repo_name: String,
    pub action: String,
}

/// One group of identical events with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "repo-name")]
    pub repo_name: String,
    pub action: String,
    pub count: usize,
}

impl SummaryRecord {
    pub fn new(key: AggregationKey, count: usize) -> Self {
        Self {
            kind: key.kind,
            repo_name: key.repo_name,
            action: key.action,
            count,
        }
    }
}

/// Human-readable name of a JSON value's kind
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
