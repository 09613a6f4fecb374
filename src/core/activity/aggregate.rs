//! Event aggregation
//!
//! Groups events by (kind, repository, action) and counts each group.
//! Groups are emitted in the order their first event appears in the input.

use super::types::{json_kind, AggregationKey, RawEvent, SummaryRecord};
use crate::error::ActivityError;
use serde_json::Value;
use std::collections::HashMap;

/// Aggregate a decoded API response
///
/// The response must be a JSON array; any other JSON kind fails with
/// [`ActivityError::InvalidInputKind`]. Elements are read leniently, see
/// [`RawEvent::from_value`].
pub fn aggregate(events: &Value) -> Result<Vec<SummaryRecord>, ActivityError> {
    let list = events.as_array().ok_or(ActivityError::InvalidInputKind {
        found: json_kind(events),
    })?;

    let raw: Vec<RawEvent> = list.iter().map(RawEvent::from_value).collect();
    Ok(aggregate_events(&raw))
}

/// Aggregate already-extracted events
pub fn aggregate_events(events: &[RawEvent]) -> Vec<SummaryRecord> {
    // Index into `groups` per key, so output keeps first-seen order
    let mut index: HashMap<AggregationKey, usize> = HashMap::new();
    let mut groups: Vec<(AggregationKey, usize)> = Vec::new();

    for event in events {
        let key = event.key();
        match index.get(&key) {
            Some(&i) => groups[i].1 += 1,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, 1));
            }
        }
    }

    tracing::debug!(
        events = events.len(),
        groups = groups.len(),
        "aggregated events"
    );

    groups
        .into_iter()
        .map(|(key, count)| SummaryRecord::new(key, count))
        .collect()
}
