use std::collections::HashSet;

use crate::domain::post::Post;

/// Souls that are always present in the universe, whatever the feed holds.
pub const ROSTER: [&str; 7] = [
    "The_Founder",
    "Midas_King",
    "Noble_Soul",
    "Golden_AI",
    "Zara_Universe",
    "Oracle_Alpha",
    "Stellar_Nexus",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub posts: usize,
    pub likes: usize,
}

impl UserStats {
    /// "2 Likes • 1 Posts", or "Satellite Found" for someone with no activity.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.likes > 0 {
            parts.push(format!("{} Likes", self.likes));
        }
        if self.posts > 0 {
            parts.push(format!("{} Posts", self.posts));
        }
        if parts.is_empty() {
            return "Satellite Found".to_string();
        }
        parts.join(" • ")
    }
}

/// Derived view over the feed used by the search overlay.
#[derive(Debug, Clone)]
pub struct Universe<'a> {
    users: Vec<String>,
    posts: &'a [Post],
}

impl<'a> Universe<'a> {
    pub fn new(current_user: &str, posts: &'a [Post]) -> Self {
        let mut seen = HashSet::new();
        let mut users = Vec::new();
        let mut add = |name: &str| {
            if seen.insert(name.to_string()) {
                users.push(name.to_string());
            }
        };

        add(current_user);
        for post in posts {
            add(post.author.as_str());
            for liker in &post.liked_by {
                add(liker.as_str());
            }
            for comment in &post.comments {
                add(comment.author.as_str());
            }
        }
        for name in ROSTER {
            add(name);
        }

        Self { users, posts }
    }

    /// Everyone known, in discovery order.
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Case-insensitive substring match. An empty query finds nobody.
    pub fn search(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.users
            .iter()
            .filter(|u| u.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn stats(&self, username: &str) -> UserStats {
        UserStats {
            posts: self.posts.iter().filter(|p| p.author == username).count(),
            likes: self.posts.iter().filter(|p| p.is_liked_by(username)).count(),
        }
    }
}
