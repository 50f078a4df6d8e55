use crate::error::WebError;
use async_trait::async_trait;
use gloo_net::http::Request;
use golden_core::infrastructure::gemini::{
    API_KEY_HEADER, DEFAULT_ENDPOINT, DEFAULT_MODEL, GenerateContentRequest,
    GenerateContentResponse,
};
use golden_core::{GeminiSettings, ThoughtGenerator, ThoughtRequest};

/// Settings baked in at build time; the browser has no environment.
pub fn settings() -> GeminiSettings {
    GeminiSettings {
        endpoint: option_env!("GEMINI_ENDPOINT")
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string(),
        model: option_env!("GEMINI_MODEL").unwrap_or(DEFAULT_MODEL).to_string(),
        api_key: option_env!("GEMINI_API_KEY").map(str::to_string),
    }
}

#[derive(Clone)]
pub struct GeminiClientWeb {
    pub settings: GeminiSettings,
}

#[async_trait(?Send)]
impl ThoughtGenerator for GeminiClientWeb {
    type Error = WebError;

    async fn generate(&self, request: &ThoughtRequest) -> Result<String, WebError> {
        let api_key = self.settings.api_key().ok_or(WebError::MissingApiKey)?;
        let url = self.settings.generate_url();

        let http_request = Request::post(&url)
            .header(API_KEY_HEADER, api_key)
            .header("Content-Type", "application/json")
            .json(&GenerateContentRequest::from(request))?;
        let response = http_request.send().await?;

        if response.ok() {
            let body: GenerateContentResponse = response.json().await?;
            body.text().ok_or(WebError::EmptyResponse)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(WebError::Http {
                status,
                message: text,
            })
        }
    }
}
