//! Report rendering
//!
//! Turns summary records into one sentence each. Which sentence is used is
//! decided by two lookup tables:
//!
//! - [`FIXED_TEMPLATES`]: kinds whose sentence ignores the action, written
//!   with `{count}` and `{repo-name}` placeholders
//! - [`ACTION_NOUNS`]: kinds whose sentence leads with the action, e.g.
//!   `Opened 2 issues in octo/repo.`
//!
//! Anything in neither table is reported as unhandled.

use super::types::SummaryRecord;
use std::io::{self, Write};

/// Line printed instead of a report when there is nothing to show
pub const NO_EVENTS: &str = "No events to display.";

/// Action shown for unhandled events that carry none
pub const NOT_APPLICABLE: &str = "N/A";

/// Kinds rendered from a fixed sentence
pub const FIXED_TEMPLATES: &[(&str, &str)] = &[
    (
        "CommitCommentEvent",
        "Commented on commits {count} times in {repo-name}.",
    ),
    ("PushEvent", "Pushed {count} commits to {repo-name}."),
    ("CreateEvent", "Created {repo-name}."),
    ("ForkEvent", "Forked {repo-name}."),
    (
        "GollumEvent",
        "Created/updated wiki pages {count} times in {repo-name}.",
    ),
    ("PublicEvent", "Made {repo-name} public."),
    ("WatchEvent", "Started watching {repo-name}."),
    ("DeleteEvent", "Deleted {repo-name}."),
    ("MemberEvent", "Accepted invitation to {repo-name}."),
];

/// Kinds rendered as `{Action} {count} {noun} in {repo-name}.`
pub const ACTION_NOUNS: &[(&str, &str)] = &[
    ("PullRequestEvent", "pull requests"),
    ("IssueCommentEvent", "issue comments"),
    ("IssuesEvent", "issues"),
    ("PullRequestReviewEvent", "pull request reviews"),
    (
        "PullRequestReviewCommentEvent",
        "pull request review comments",
    ),
    (
        "PullRequestReviewThreadEvent",
        "pull request comment threads",
    ),
    ("ReleaseEvent", "releases"),
    ("SponsorshipEvent", "sponsorship listings"),
];

/// How a given event kind is described
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTemplate {
    /// Sentence with `{count}`/`{repo-name}` placeholders
    Fixed(&'static str),
    /// Noun phrase used in the action sentence
    Action { noun: &'static str },
}

/// Look up the template for an event kind
pub fn template_for(kind: &str) -> Option<MessageTemplate> {
    let lookup = |table: &[(&'static str, &'static str)]| {
        table
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, value)| *value)
    };

    lookup(FIXED_TEMPLATES)
        .map(MessageTemplate::Fixed)
        .or_else(|| lookup(ACTION_NOUNS).map(|noun| MessageTemplate::Action { noun }))
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Render one summary record
pub fn render_record(record: &SummaryRecord) -> String {
    match template_for(&record.kind) {
        Some(MessageTemplate::Fixed(template)) => template
            .replace("{count}", &record.count.to_string())
            .replace("{repo-name}", &record.repo_name),
        Some(MessageTemplate::Action { noun }) => format!(
            "{} {} {} in {}.",
            capitalize(&record.action),
            record.count,
            noun,
            record.repo_name
        ),
        None => {
            let action = if record.action.is_empty() {
                NOT_APPLICABLE
            } else {
                record.action.as_str()
            };
            format!("Unhandled Event: {} - {}", record.kind, action)
        }
    }
}

/// Render all records, one line each, in input order
///
/// An empty input yields the single [`NO_EVENTS`] line.
pub fn present(records: &[SummaryRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec![NO_EVENTS.to_string()];
    }

    records.iter().map(render_record).collect()
}

/// Write the report, framed by a blank line before and after
pub fn write_report<W: Write>(out: &mut W, records: &[SummaryRecord]) -> io::Result<()> {
    writeln!(out)?;
    for line in present(records) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    Ok(())
}
