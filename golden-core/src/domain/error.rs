use thiserror::Error;

use crate::data::storage::StorageError;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("post not found: {0}")]
    PostNotFound(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FeedError {
    /// Errors the front ends swallow: the action is simply not taken.
    pub fn is_declined(&self) -> bool {
        matches!(
            self,
            FeedError::Validation(_) | FeedError::Unauthenticated | FeedError::PostNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declines_are_distinguished_from_faults() {
        assert!(FeedError::Validation("empty".into()).is_declined());
        assert!(FeedError::Unauthenticated.is_declined());
        assert!(FeedError::PostNotFound("x".into()).is_declined());
        assert!(!FeedError::Storage(StorageError::Backend("disk full".into())).is_declined());
    }
}
