use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::FeedError;
use crate::domain::post::{Comment, Post};

/// The ordered post list, newest first. Mutations only touch memory; the
/// caller decides when to persist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feed {
    posts: Vec<Post>,
}

impl Feed {
    pub fn new(mut posts: Vec<Post>) -> Self {
        for post in &mut posts {
            post.sync_likes();
        }
        Self { posts }
    }

    /// The demo posts a fresh client starts with.
    pub fn seed() -> Self {
        let now = Utc::now();
        Self::new(vec![
            Post {
                id: "1".into(),
                author: "Founder".into(),
                text: "Welcome to the Golden Universe. Here, every thought is worth its weight in gold."
                    .into(),
                image: None,
                timestamp: now,
                likes: 0,
                liked_by: vec!["AI_Guide".into(), "Zara_Universe".into()],
                comments: Vec::new(),
            },
            Post {
                id: "2".into(),
                author: "AI_Guide".into(),
                text: "Use the Universe Search in the top right to explore souls across the globe."
                    .into(),
                image: None,
                timestamp: now - Duration::seconds(10),
                likes: 0,
                liked_by: vec!["Founder".into()],
                comments: Vec::new(),
            },
        ])
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    fn get_mut(&mut self, post_id: &str) -> Result<&mut Post, FeedError> {
        self.posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| FeedError::PostNotFound(post_id.to_string()))
    }

    /// Prepends a post. Rejected when there is neither text nor an image.
    pub fn create_post(
        &mut self,
        author: &str,
        text: String,
        image: Option<String>,
    ) -> Result<&Post, FeedError> {
        let image = image.filter(|i| !i.is_empty());
        if text.trim().is_empty() && image.is_none() {
            return Err(FeedError::Validation("post needs text or an image".into()));
        }

        self.posts
            .insert(0, Post::new(author.to_string(), text, image));
        Ok(&self.posts[0])
    }

    pub fn toggle_like(&mut self, post_id: &str, username: &str) -> Result<bool, FeedError> {
        Ok(self.get_mut(post_id)?.toggle_like(username))
    }

    pub fn add_comment(
        &mut self,
        post_id: &str,
        author: &str,
        text: String,
    ) -> Result<&Comment, FeedError> {
        if text.trim().is_empty() {
            return Err(FeedError::Validation("comment must not be empty".into()));
        }

        let post = self.get_mut(post_id)?;
        post.push_comment(Comment::new(author.to_string(), text));
        // just pushed
        Ok(&post.comments[post.comments.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_posts_are_consistent() {
        let feed = Feed::seed();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.posts()[0].id, "1");
        assert!(feed.posts()[0].timestamp > feed.posts()[1].timestamp);
        for post in feed.posts() {
            assert_eq!(post.likes, post.liked_by.len());
        }
    }

    #[test]
    fn loading_repairs_like_counts() {
        let mut post = Post::new("a".into(), "t".into(), None);
        post.liked_by = vec!["x".into(), "y".into()];
        post.likes = 7;

        let feed = Feed::new(vec![post]);
        assert_eq!(feed.posts()[0].likes, 2);
    }

    #[test]
    fn empty_post_is_rejected() {
        let mut feed = Feed::seed();
        let before = feed.clone();

        assert!(feed.create_post("alice", String::new(), None).is_err());
        assert!(feed.create_post("alice", "  \n".into(), Some(String::new())).is_err());
        assert_eq!(feed, before);
    }

    #[test]
    fn image_only_post_is_accepted() {
        let mut feed = Feed::default();
        let post = feed
            .create_post("alice", String::new(), Some("data:image/png;base64,AA==".into()))
            .unwrap();
        assert_eq!(post.text, "");
        assert!(post.image.is_some());
    }

    #[test]
    fn new_post_goes_first() {
        let mut feed = Feed::seed();
        feed.create_post("alice", "hello".into(), None).unwrap();

        let first = &feed.posts()[0];
        assert_eq!(first.author, "alice");
        assert_eq!(first.text, "hello");
        assert_eq!(feed.len(), 3);
    }

    #[test]
    fn like_on_unknown_post_is_not_found() {
        let mut feed = Feed::seed();
        let err = feed.toggle_like("nope", "alice").unwrap_err();
        assert!(matches!(err, FeedError::PostNotFound(id) if id == "nope"));
    }

    #[test]
    fn blank_comment_is_rejected() {
        let mut feed = Feed::seed();
        assert!(matches!(
            feed.add_comment("1", "bob", "   ".into()),
            Err(FeedError::Validation(_))
        ));
        assert!(feed.posts()[0].comments.is_empty());
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_value(Feed::seed()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
    }
}
