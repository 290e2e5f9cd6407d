pub(crate) mod brave;
pub(crate) mod constants;
pub(crate) mod perplexity;
pub(crate) mod serpapi;

pub use brave::resolve_brave_api_key;
pub use perplexity::{
    KeyShape, KeySource, ResolvedKey, classify_api_key, request_model, resolve_base_url,
    resolve_perplexity_api_key, resolve_perplexity_model,
};
pub use serpapi::{resolve_api_key, resolve_engine};

use std::str::FromStr;

use crate::core::error::WebSearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchProvider {
    #[default]
    Brave,
    Perplexity,
    SerpApi,
}

impl std::fmt::Display for SearchProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchProvider::Brave => write!(f, "Brave"),
            SearchProvider::Perplexity => write!(f, "Perplexity"),
            SearchProvider::SerpApi => write!(f, "SerpAPI"),
        }
    }
}

impl FromStr for SearchProvider {
    type Err = WebSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brave" => Ok(SearchProvider::Brave),
            "perplexity" => Ok(SearchProvider::Perplexity),
            "serpapi" => Ok(SearchProvider::SerpApi),
            _ => Err(WebSearchError::UnknownProvider(s.to_string())),
        }
    }
}

impl SearchProvider {
    /// Get the default environment variable name for this provider's API key
    pub fn default_api_key_env_var(&self) -> &'static str {
        match self {
            SearchProvider::Brave => constants::brave::API_KEY_ENV_VAR,
            SearchProvider::Perplexity => constants::perplexity::API_KEY_ENV_VAR,
            SearchProvider::SerpApi => constants::serpapi::API_KEY_ENV_VAR,
        }
    }

    pub fn docs_url(&self) -> &'static str {
        match self {
            SearchProvider::Brave => constants::brave::DOCS_URL,
            SearchProvider::Perplexity => constants::perplexity::DOCS_URL,
            SearchProvider::SerpApi => constants::serpapi::DOCS_URL,
        }
    }

    pub fn supports_freshness(&self) -> bool {
        matches!(self, SearchProvider::Brave)
    }

    /// Lenient selection from configuration: blank or unrecognized names fall
    /// back to Brave.
    pub fn from_config(raw: Option<&str>) -> Self {
        let Some(raw) = crate::core::config::non_blank(raw) else {
            return SearchProvider::default();
        };

        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(provider = raw, "Unknown web search provider, using Brave");
            SearchProvider::default()
        })
    }
}
