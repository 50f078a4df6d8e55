use std::fmt::Write;

use chrono::{DateTime, Utc};
use golden_core::{Post, UserStats, format_relative};

pub fn render_post(post: &Post, viewer: Option<&str>, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let heart = match viewer {
        Some(user) if post.is_liked_by(user) => "♥",
        _ => "♡",
    };

    let _ = writeln!(
        out,
        "[{}] @{} · {}",
        post.id,
        post.author,
        format_relative(post.timestamp, now)
    );
    if !post.text.is_empty() {
        let _ = writeln!(out, "  {}", post.text);
    }
    if let Some(image) = &post.image {
        let _ = writeln!(out, "  [image, {} bytes encoded]", image.len());
    }
    if let Some(summary) = post.liked_by_summary() {
        let _ = writeln!(out, "  {}", summary);
    }
    let _ = writeln!(out, "  {} {}   💬 {}", heart, post.likes, post.comments.len());
    for comment in &post.comments {
        let _ = writeln!(
            out,
            "    @{} ({}): {}",
            comment.author,
            format_relative(comment.timestamp, now),
            comment.text
        );
    }
    out
}

pub fn render_user(username: &str, stats: UserStats) -> String {
    format!("@{}  {}", username, stats.describe())
}
