use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::FeedError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub joined_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session for `username`. Blank names are rejected; the name is
    /// otherwise kept exactly as typed.
    pub fn new(username: impl Into<String>) -> Result<Self, FeedError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(FeedError::Validation("username must not be empty".into()));
        }

        Ok(Self {
            username,
            joined_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_username_is_rejected() {
        assert!(matches!(Session::new(""), Err(FeedError::Validation(_))));
        assert!(matches!(Session::new("   \t"), Err(FeedError::Validation(_))));
    }

    #[test]
    fn username_is_kept_as_typed() {
        let session = Session::new(" alice ").unwrap();
        assert_eq!(session.username, " alice ");
    }

    #[test]
    fn serializes_join_time_as_epoch_millis() {
        let session = Session::new("alice").unwrap();
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["username"], "alice");
        assert_eq!(
            json["joinedAt"].as_i64().unwrap(),
            session.joined_at.timestamp_millis()
        );
    }
}
