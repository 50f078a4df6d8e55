use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::data::state_repository::StateRepository;
use crate::domain::error::FeedError;
use crate::domain::feed::Feed;
use crate::domain::post::{Comment, Post};
use crate::domain::session::Session;

pub struct FeedService<R: StateRepository + 'static> {
    repo: Arc<R>,
    feed: Feed,
}

impl<R> FeedService<R>
where
    R: StateRepository + 'static,
{
    /// Loads the stored feed, or seeds and immediately persists the demo posts.
    pub fn load_or_seed(repo: Arc<R>) -> Result<Self, FeedError> {
        let feed = match repo.load_posts()? {
            Some(feed) => feed,
            None => {
                let feed = Feed::seed();
                repo.save_posts(&feed)?;
                info!(posts = feed.len(), "seeded demo feed");
                feed
            }
        };
        Ok(Self { repo, feed })
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    #[instrument(skip(self, session, image), fields(has_image = image.is_some()))]
    pub fn create_post(
        &mut self,
        session: Option<&Session>,
        text: String,
        image: Option<String>,
    ) -> Result<Option<Post>, FeedError> {
        let Some(post) = self.commit("create_post", session, |feed, s| {
            feed.create_post(&s.username, text, image).cloned()
        })?
        else {
            return Ok(None);
        };

        info!(post_id = %post.id, author = %post.author, "post created");
        Ok(Some(post))
    }

    /// Returns the new like state, or `None` when nothing changed.
    #[instrument(skip(self, session))]
    pub fn toggle_like(
        &mut self,
        session: Option<&Session>,
        post_id: &str,
    ) -> Result<Option<bool>, FeedError> {
        let Some(liked) = self.commit("toggle_like", session, |feed, s| {
            feed.toggle_like(post_id, &s.username)
        })?
        else {
            return Ok(None);
        };

        info!(post_id, liked, "like toggled");
        Ok(Some(liked))
    }

    #[instrument(skip(self, session, text))]
    pub fn add_comment(
        &mut self,
        session: Option<&Session>,
        post_id: &str,
        text: String,
    ) -> Result<Option<Comment>, FeedError> {
        let Some(comment) = self.commit("add_comment", session, |feed, s| {
            feed.add_comment(post_id, &s.username, text).cloned()
        })?
        else {
            return Ok(None);
        };

        info!(post_id, comment_id = %comment.id, "comment added");
        Ok(Some(comment))
    }

    /// Applies `change` to a copy of the feed and swaps it in once the copy
    /// is saved, so a failed write leaves memory matching storage.
    fn commit<T>(
        &mut self,
        action: &str,
        session: Option<&Session>,
        change: impl FnOnce(&mut Feed, &Session) -> Result<T, FeedError>,
    ) -> Result<Option<T>, FeedError> {
        let mut next = self.feed.clone();
        let result = authenticated(session).and_then(|s| change(&mut next, s));
        let Some(value) = declined(result, action)? else {
            return Ok(None);
        };

        self.repo.save_posts(&next)?;
        self.feed = next;
        Ok(Some(value))
    }
}

fn authenticated(session: Option<&Session>) -> Result<&Session, FeedError> {
    session.ok_or(FeedError::Unauthenticated)
}

/// Turns a declined action into `Ok(None)`; real failures still propagate.
fn declined<T>(result: Result<T, FeedError>, action: &str) -> Result<Option<T>, FeedError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_declined() => {
            debug!(action, reason = %err, "action declined");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
