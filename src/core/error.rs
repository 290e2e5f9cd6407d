use serde_json::{Value, json};
use thiserror::Error;

use crate::provider::SearchProvider;

#[derive(Error, Debug)]
pub enum WebSearchError {
    #[error("web_search needs a {provider} API key. Set {env_var} in the environment or configure apiKey.")]
    MissingApiKey {
        provider: SearchProvider,
        env_var: &'static str,
    },

    #[error("Unknown search provider: {0}")]
    UnknownProvider(String),

    #[error("Unknown API key source: {0}")]
    UnknownKeySource(String),

    #[error("freshness must be one of pd, pw, pm, py, or a range like YYYY-MM-DDtoYYYY-MM-DD (received {0}).")]
    InvalidFreshness(String),

    #[error("freshness is only supported by the Brave web_search provider (current provider: {provider}).")]
    UnsupportedFreshness { provider: SearchProvider },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl WebSearchError {
    /// Stable machine-readable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            WebSearchError::MissingApiKey { provider, .. } => match provider {
                SearchProvider::Brave => "missing_brave_api_key",
                SearchProvider::Perplexity => "missing_perplexity_api_key",
                SearchProvider::SerpApi => "missing_serpapi_api_key",
            },
            WebSearchError::UnknownProvider(_) => "unknown_provider",
            WebSearchError::UnknownKeySource(_) => "unknown_key_source",
            WebSearchError::InvalidFreshness(_) => "invalid_freshness",
            WebSearchError::UnsupportedFreshness { .. } => "unsupported_freshness",
            WebSearchError::Config { .. } => "invalid_config",
        }
    }

    /// JSON payload handed back to the tool caller instead of a search result.
    pub fn to_payload(&self) -> Value {
        let mut payload = json!({
            "error": self.code(),
            "message": self.to_string(),
        });

        if let WebSearchError::MissingApiKey { provider, .. } = self {
            payload["docs"] = json!(provider.docs_url());
        }

        payload
    }
}
