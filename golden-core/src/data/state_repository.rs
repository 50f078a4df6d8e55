use tracing::{error, info};

use crate::data::storage::KeyValueStore;
use crate::domain::error::FeedError;
use crate::domain::feed::Feed;
use crate::domain::session::Session;

pub const SESSION_KEY: &str = "golden_user";
pub const POSTS_KEY: &str = "golden_posts";

pub trait StateRepository: Send + Sync {
    fn load_session(&self) -> Result<Option<Session>, FeedError>;
    fn save_session(&self, session: &Session) -> Result<(), FeedError>;
    fn clear_session(&self) -> Result<(), FeedError>;
    fn load_posts(&self) -> Result<Option<Feed>, FeedError>;
    /// Rewrites the whole sequence.
    fn save_posts(&self, feed: &Feed) -> Result<(), FeedError>;
}

#[derive(Debug, Clone)]
pub struct KvStateRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvStateRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> StateRepository for KvStateRepository<S> {
    fn load_session(&self) -> Result<Option<Session>, FeedError> {
        let Some(raw) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            error!("failed to parse stored session: {}", e);
            FeedError::from(e)
        })
    }

    fn save_session(&self, session: &Session) -> Result<(), FeedError> {
        let raw = serde_json::to_string(session)?;
        self.store.set(SESSION_KEY, &raw)?;
        info!(username = %session.username, "session saved");
        Ok(())
    }

    fn clear_session(&self) -> Result<(), FeedError> {
        self.store.remove(SESSION_KEY)?;
        info!("session cleared");
        Ok(())
    }

    fn load_posts(&self) -> Result<Option<Feed>, FeedError> {
        let Some(raw) = self.store.get(POSTS_KEY)? else {
            return Ok(None);
        };
        let posts = serde_json::from_str(&raw).map_err(|e| {
            error!("failed to parse stored posts: {}", e);
            FeedError::from(e)
        })?;
        Ok(Some(Feed::new(posts)))
    }

    fn save_posts(&self, feed: &Feed) -> Result<(), FeedError> {
        let raw = serde_json::to_string(feed)?;
        self.store.set(POSTS_KEY, &raw).map_err(|e| {
            error!("failed to store posts: {}", e);
            FeedError::from(e)
        })
    }
}
