use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Random id for posts and comments. Only needs to be unique within one
/// client's feed.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub likes: usize,
    #[serde(default)]
    pub liked_by: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Post {
    pub fn new(author: String, text: String, image: Option<String>) -> Self {
        Self {
            id: generate_id(),
            author,
            text,
            image,
            timestamp: Utc::now(),
            likes: 0,
            liked_by: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn is_liked_by(&self, username: &str) -> bool {
        self.liked_by.iter().any(|u| u == username)
    }

    /// Flips `username`'s like and returns whether the post is now liked by them.
    pub fn toggle_like(&mut self, username: &str) -> bool {
        let liked = if self.is_liked_by(username) {
            self.liked_by.retain(|u| u != username);
            false
        } else {
            self.liked_by.push(username.to_string());
            true
        };
        self.sync_likes();
        liked
    }

    /// `likes` always mirrors the size of `liked_by`.
    pub fn sync_likes(&mut self) {
        self.likes = self.liked_by.len();
    }

    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// "Liked by a, b and 3 others", naming the two most recent likers.
    pub fn liked_by_summary(&self) -> Option<String> {
        let total = self.liked_by.len();
        if total == 0 {
            return None;
        }

        let recent = self.liked_by[total.saturating_sub(2)..].join(", ");
        if total > 2 {
            Some(format!("Liked by {} and {} others", recent, total - 2))
        } else {
            Some(format!("Liked by {}", recent))
        }
    }
}

impl Comment {
    pub fn new(author: String, text: String) -> Self {
        Self {
            id: generate_id(),
            author,
            text,
            timestamp: Utc::now(),
        }
    }
}

pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - timestamp).num_milliseconds();
    if elapsed < 60_000 {
        "Just now".to_string()
    } else if elapsed < 3_600_000 {
        format!("{}m ago", elapsed / 60_000)
    } else {
        format!("{}h ago", elapsed / 3_600_000)
    }
}
