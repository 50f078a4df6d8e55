use std::path::PathBuf;

use golden_core::GeminiSettings;
use golden_core::infrastructure::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

pub const DEFAULT_DATA_DIR: &str = ".golden";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub gemini: GeminiSettings,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let data_dir: PathBuf = lookup("GOLDEN_DATA_DIR")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.into())
            .into();
        let endpoint = lookup("GEMINI_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            anyhow::bail!("invalid GEMINI_ENDPOINT: {}", endpoint);
        }

        Ok(Self {
            data_dir,
            gemini: GeminiSettings {
                endpoint,
                model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
                api_key: lookup("GEMINI_API_KEY").or_else(|| lookup("API_KEY")),
            },
        })
    }
}
