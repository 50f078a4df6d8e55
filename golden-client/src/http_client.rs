use std::sync::Arc;

use async_trait::async_trait;
use golden_core::infrastructure::gemini::{
    API_KEY_HEADER, GenerateContentRequest, GenerateContentResponse,
};
use golden_core::{GeminiSettings, ThoughtGenerator, ThoughtRequest};
use reqwest::Client;
use tracing::debug;

use crate::error::ThoughtClientError;

#[derive(Clone)]
pub struct GeminiClient {
    client: Arc<Client>,
    settings: GeminiSettings,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Result<Self, ThoughtClientError> {
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            settings,
        })
    }

    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }
}

#[async_trait(?Send)]
impl ThoughtGenerator for GeminiClient {
    type Error = ThoughtClientError;

    async fn generate(&self, request: &ThoughtRequest) -> Result<String, ThoughtClientError> {
        let api_key = self
            .settings
            .api_key()
            .ok_or(ThoughtClientError::MissingApiKey)?;
        let url = self.settings.generate_url();
        debug!(%url, model = %self.settings.model, "requesting thought");

        let resp = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::from(request))
            .send()
            .await?;

        if resp.status().is_success() {
            let body: GenerateContentResponse = resp.json().await?;
            body.text().ok_or(ThoughtClientError::EmptyResponse)
        } else {
            Err(ThoughtClientError::from_http_response(resp).await)
        }
    }
}
