//! Fetch, aggregate, render
//!
//! Each stage fails fast. Nothing is written until every stage has
//! succeeded, so a failed run never leaves a partial report behind.

use super::activity::{aggregate, write_report, SummaryRecord};
use super::github::{fetch_user_events, EventSource};
use crate::error::ActivityError;
use std::io::Write;

/// Fetch and aggregate the activity of `user`
pub fn collect_activity<S: EventSource>(
    source: &S,
    user: Option<&str>,
) -> Result<Vec<SummaryRecord>, ActivityError> {
    let events = fetch_user_events(source, user)?;
    aggregate(&events)
}

/// Run the whole pipeline and write the report to `out`
pub fn run_report<S: EventSource, W: Write>(
    source: &S,
    user: Option<&str>,
    out: &mut W,
) -> Result<(), ActivityError> {
    let records = collect_activity(source, user)?;
    write_report(out, &records)?;
    Ok(())
}
