use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error(transparent)]
    RequestError(#[from] gloo_net::Error),
    #[error("no API key configured")]
    MissingApiKey,
    #[error("response carried no candidates")]
    EmptyResponse,
}
