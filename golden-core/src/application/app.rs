use std::sync::Arc;

use crate::application::feed_service::FeedService;
use crate::application::session_service::{Confirm, SessionService};
use crate::application::universe::Universe;
use crate::data::state_repository::StateRepository;
use crate::domain::error::FeedError;
use crate::domain::feed::Feed;
use crate::domain::post::{Comment, Post};
use crate::domain::session::Session;

/// The single state container both front ends drive: the current session plus
/// the feed, each mirrored to the repository after every change.
pub struct Golden<R: StateRepository + 'static> {
    sessions: SessionService<R>,
    feed: FeedService<R>,
}

impl<R> Golden<R>
where
    R: StateRepository + 'static,
{
    pub fn open(repo: R) -> Result<Self, FeedError> {
        let repo = Arc::new(repo);
        Ok(Self {
            sessions: SessionService::restore(Arc::clone(&repo))?,
            feed: FeedService::load_or_seed(repo)?,
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.sessions.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn feed(&self) -> &Feed {
        self.feed.feed()
    }

    pub fn posts(&self) -> &[Post] {
        self.feed().posts()
    }

    pub fn login(&mut self, username: &str) -> Result<&Session, FeedError> {
        self.sessions.login(username)
    }

    pub fn logout(&mut self, confirm: &impl Confirm) -> Result<bool, FeedError> {
        self.sessions.logout(confirm)
    }

    pub fn create_post(
        &mut self,
        text: impl Into<String>,
        image: Option<String>,
    ) -> Result<Option<Post>, FeedError> {
        self.feed
            .create_post(self.sessions.current(), text.into(), image)
    }

    pub fn toggle_like(&mut self, post_id: &str) -> Result<Option<bool>, FeedError> {
        self.feed.toggle_like(self.sessions.current(), post_id)
    }

    pub fn add_comment(
        &mut self,
        post_id: &str,
        text: impl Into<String>,
    ) -> Result<Option<Comment>, FeedError> {
        self.feed
            .add_comment(self.sessions.current(), post_id, text.into())
    }

    /// Search view for the logged-in user; `None` while logged out.
    pub fn universe(&self) -> Option<Universe<'_>> {
        let session = self.session()?;
        Some(Universe::new(&session.username, self.posts()))
    }
}
