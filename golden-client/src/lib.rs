mod error;
mod http_client;

pub use error::ThoughtClientError;
pub use http_client::GeminiClient;
