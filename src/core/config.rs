//! Configuration records for the web-search tool.
//!
//! Every field is optional. A missing record, a missing field and an empty
//! string all mean "not configured" to the resolvers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::WebSearchError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebSearchConfig {
    /// Whether the tool is registered at all (default: true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// One of `brave`, `perplexity`, `serpapi` (default: brave)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Brave Search API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Default number of results (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    /// 0 disables caching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl_minutes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perplexity: Option<PerplexityConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serpapi: Option<SerpApiConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerplexityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Overrides endpoint detection when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SerpApiConfig {
    /// SerpAPI engine name, e.g. `google`, `bing`, `yahoo`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl WebSearchConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, WebSearchError> {
        serde_json::from_str(raw).map_err(|e| WebSearchError::Config {
            message: "Failed to parse web search config".to_string(),
            source: e,
        })
    }

    pub fn from_value(value: Value) -> Result<Self, WebSearchError> {
        serde_json::from_value(value).map_err(|e| WebSearchError::Config {
            message: "Failed to parse web search config".to_string(),
            source: e,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Trimmed value of an optional string field, `None` when blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
