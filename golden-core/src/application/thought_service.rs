use async_trait::async_trait;
use tracing::{error, warn};

pub const GOLDEN_PROMPT: &str = "Generate a single, short, profound, and luxurious social media post (max 20 words) about gold, brilliance, or excellence. No hashtags.";

/// Used when the service answers with nothing.
pub const EMPTY_FALLBACK: &str =
    "Silence is golden, but brilliance is the true currency of the universe.";
/// Used when the call fails.
pub const ERROR_FALLBACK: &str = "True brilliance cannot be forced; it radiates from within.";

#[derive(Debug, Clone, PartialEq)]
pub struct ThoughtRequest {
    pub prompt: String,
    pub temperature: f32,
    pub top_p: f32,
}

impl ThoughtRequest {
    pub fn golden() -> Self {
        Self {
            prompt: GOLDEN_PROMPT.to_string(),
            temperature: 0.9,
            top_p: 0.95,
        }
    }
}

#[async_trait(?Send)]
pub trait ThoughtGenerator {
    type Error: std::fmt::Display;

    async fn generate(&self, request: &ThoughtRequest) -> Result<String, Self::Error>;
}

/// Asks `generator` for a golden thought. Never fails: errors are logged and
/// replaced with a fixed sentence.
pub async fn generate_thought<G>(generator: &G) -> String
where
    G: ThoughtGenerator + ?Sized,
{
    match generator.generate(&ThoughtRequest::golden()).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            warn!("thought generator returned an empty reply");
            EMPTY_FALLBACK.to_string()
        }
        Err(e) => {
            error!("thought generation failed: {}", e);
            ERROR_FALLBACK.to_string()
        }
    }
}
