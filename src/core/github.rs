//! GitHub events API client
//!
//! Performs the one outbound call of an invocation: fetch the public events
//! of a user and hand back the decoded JSON untouched. Interpreting the
//! response shape is left to the aggregator.

use crate::config::Config;
use crate::error::ActivityError;
use serde_json::Value;
use std::time::Duration;

/// Source of a user's raw event list
pub trait EventSource {
    fn fetch(&self, user: &str) -> Result<Value, ActivityError>;
}

pub struct GitHubClient {
    agent: ureq::Agent,
    api_url: String,
    user_agent: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();

        Self {
            agent,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            token: config.token.clone(),
        }
    }

    /// URL of the public events endpoint for `user`
    pub fn events_url(&self, user: &str) -> String {
        format!("{}/users/{}/events", self.api_url, user)
    }
}

impl EventSource for GitHubClient {
    fn fetch(&self, user: &str) -> Result<Value, ActivityError> {
        let user = validate_username(user)?;

        let url = self.events_url(user);
        tracing::debug!(%url, "fetching user events");

        let mut request = self
            .agent
            .get(&url)
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", &self.user_agent);
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                tracing::debug!(status, "events request rejected");
                return Err(ActivityError::Remote { status });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(ActivityError::Transport {
                    reason: transport.to_string(),
                });
            }
        };

        tracing::debug!(status = response.status(), "events request succeeded");

        response
            .into_json::<Value>()
            .map_err(|e| ActivityError::MalformedResponse {
                reason: e.to_string(),
            })
    }
}

/// Trim `user` and make sure it is safe to place in a URL path
///
/// GitHub logins are limited to ASCII letters, digits and `-` (`_` appears
/// in managed enterprise accounts). Anything else, `/`, `?`, `#`, `%` and
/// `.` included, is rejected before a request is built.
pub fn validate_username(user: &str) -> Result<&str, ActivityError> {
    let user = user.trim();
    if user.is_empty() {
        return Err(ActivityError::MissingIdentifier);
    }

    let valid = user
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ActivityError::InvalidIdentifier {
            user: user.to_string(),
        });
    }

    Ok(user)
}

/// Fetch events for an optional user, failing early when none is given
pub fn fetch_user_events<S: EventSource>(
    source: &S,
    user: Option<&str>,
) -> Result<Value, ActivityError> {
    match user {
        Some(user) => source.fetch(user),
        None => Err(ActivityError::MissingIdentifier),
    }
}
