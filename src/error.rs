use std::any::Any;
use thiserror::Error;

/// Failures that end a single invocation
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("Username is a required argument.")]
    MissingIdentifier,

    #[error("Invalid username: {user:?}. Usernames may only contain letters, digits, '-' and '_'.")]
    InvalidIdentifier { user: String },

    #[error("GitHub API error: {status}{}", status_hint(.status))]
    Remote { status: u16 },

    #[error("Network error: {reason}")]
    Transport { reason: String },

    #[error("GitHub API returned an unreadable response: {reason}")]
    MalformedResponse { reason: String },

    #[error("expected a list of events, but got {found}")]
    InvalidInputKind { found: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ActivityError {
    /// The requested user (or endpoint) does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ActivityError::Remote { status: 404 })
    }

    /// GitHub refused the request because of rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ActivityError::Remote { status: 403 | 429 })
    }
}

/// One-line message for a failure nothing else anticipated (a panic payload)
pub fn unexpected_message(payload: &(dyn Any + Send)) -> String {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "internal failure".to_string()
    };
    format!("Unexpected error: {}", detail)
}

fn status_hint(status: &u16) -> &'static str {
    match status {
        404 => ". Resource not found.",
        403 | 429 => ". Please wait a few minutes, and try your request again.",
        _ => "",
    }
}

impl From<toml::de::Error> for ActivityError {
    fn from(err: toml::de::Error) -> Self {
        ActivityError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ActivityError {
    fn from(err: toml::ser::Error) -> Self {
        ActivityError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identifier_message() {
        assert_eq!(
            ActivityError::MissingIdentifier.to_string(),
            "Username is a required argument."
        );
    }

    #[test]
    fn test_remote_messages_distinguish_status() {
        let not_found = ActivityError::Remote { status: 404 };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_rate_limited());
        assert_eq!(
            not_found.to_string(),
            "GitHub API error: 404. Resource not found."
        );

        let limited = ActivityError::Remote { status: 429 };
        assert!(limited.is_rate_limited());
        assert!(limited.to_string().contains("try your request again"));

        let forbidden = ActivityError::Remote { status: 403 };
        assert!(forbidden.is_rate_limited());

        let server = ActivityError::Remote { status: 500 };
        assert_eq!(server.to_string(), "GitHub API error: 500");
    }

    #[test]
    fn test_unexpected_message_from_panic() {
        let payload = std::panic::catch_unwind(|| panic!("index out of range")).unwrap_err();
        assert_eq!(
            unexpected_message(payload.as_ref()),
            "Unexpected error: index out of range"
        );

        let payload = std::panic::catch_unwind(|| panic!("bad count {}", 3)).unwrap_err();
        assert_eq!(unexpected_message(payload.as_ref()), "Unexpected error: bad count 3");

        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(
            unexpected_message(payload.as_ref()),
            "Unexpected error: internal failure"
        );
    }

    #[test]
    fn test_invalid_identifier_message() {
        let err = ActivityError::InvalidIdentifier {
            user: "a/b".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid username: \"a/b\""));
    }

    #[test]
    fn test_transport_message() {
        let err = ActivityError::Transport {
            reason: "Network unreachable".to_string(),
        };
        assert_eq!(err.to_string(), "Network error: Network unreachable");
    }
}
