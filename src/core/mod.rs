pub mod activity;
pub mod github;
pub mod report;

pub use github::{fetch_user_events, EventSource, GitHubClient};
pub use report::{collect_activity, run_report};
