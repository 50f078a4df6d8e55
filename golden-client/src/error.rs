use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThoughtClientError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("no API key configured")]
    MissingApiKey,
    #[error("response carried no candidates")]
    EmptyResponse,
}

impl ThoughtClientError {
    pub async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        ThoughtClientError::Http { status, message }
    }
}
