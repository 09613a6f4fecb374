//! User activity summarizing
//!
//! This module provides functionality for:
//! - Extracting the fields of interest from loosely-typed event records
//! - Grouping identical events and counting them
//! - Rendering counted groups as human-readable sentences

pub mod aggregate;
pub mod present;
pub mod types;

// Re-export commonly used items
pub use aggregate::{aggregate, aggregate_events};
pub use present::{present, render_record, template_for, write_report, MessageTemplate, NO_EVENTS};
pub use types::{AggregationKey, RawEvent, SummaryRecord, UNKNOWN};
