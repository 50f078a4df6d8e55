use std::sync::Arc;

use tracing::{debug, instrument};

use crate::data::state_repository::StateRepository;
use crate::domain::{error::FeedError, session::Session};

pub const LOGOUT_PROMPT: &str = "Exit the Golden Universe?";

/// Blocking yes/no prompt shown before logging out.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub struct SessionService<R: StateRepository + 'static> {
    repo: Arc<R>,
    current: Option<Session>,
}

impl<R> SessionService<R>
where
    R: StateRepository + 'static,
{
    /// Picks up a session persisted by an earlier run.
    pub fn restore(repo: Arc<R>) -> Result<Self, FeedError> {
        let current = repo.load_session()?;
        debug!(authenticated = current.is_some(), "session restored");
        Ok(Self { repo, current })
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    #[instrument(skip(self))]
    pub fn login(&mut self, username: &str) -> Result<&Session, FeedError> {
        let session = Session::new(username)?;
        self.repo.save_session(&session)?;
        Ok(self.current.insert(session))
    }

    /// Returns `false` when the user backs out of the prompt.
    #[instrument(skip(self, confirm))]
    pub fn logout(&mut self, confirm: &impl Confirm) -> Result<bool, FeedError> {
        if !confirm.confirm(LOGOUT_PROMPT) {
            debug!("logout cancelled");
            return Ok(false);
        }

        self.repo.clear_session()?;
        self.current = None;
        Ok(true)
    }
}
