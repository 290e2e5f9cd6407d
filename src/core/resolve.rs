//! Whole-route resolution for one web-search call.

use std::time::Duration;

use tracing::{debug, info};

use super::config::{WebSearchConfig, non_blank};
use super::env::EnvLookup;
use super::error::WebSearchError;
use super::freshness::normalize_freshness;
use crate::provider::constants::limits;
use crate::provider::{
    KeySource, SearchProvider, request_model, resolve_api_key, resolve_base_url,
    resolve_brave_api_key, resolve_engine, resolve_perplexity_api_key, resolve_perplexity_model,
};

/// Provider-specific settings for an outbound search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRoute {
    Brave,
    Perplexity {
        base_url: String,
        /// Model name as it should be sent to `base_url`
        model: String,
        source: KeySource,
    },
    SerpApi {
        engine: String,
    },
}

/// Everything the HTTP layer needs to issue a search, minus the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSearch {
    pub provider: SearchProvider,
    pub api_key: String,
    pub route: ProviderRoute,
    pub count: u32,
    pub timeout: Duration,
    /// `Duration::ZERO` disables caching
    pub cache_ttl: Duration,
}

/// Resolves provider, credential and limits from configuration and the
/// environment. Fails only when the selected provider has no API key.
pub fn resolve_search(
    config: Option<&WebSearchConfig>,
    env: &impl EnvLookup,
) -> Result<ResolvedSearch, WebSearchError> {
    let provider = SearchProvider::from_config(config.and_then(|config| config.provider.as_deref()));
    let missing_key = || WebSearchError::MissingApiKey {
        provider,
        env_var: provider.default_api_key_env_var(),
    };

    let (api_key, route) = match provider {
        SearchProvider::Brave => {
            let api_key = resolve_brave_api_key(config, env).ok_or_else(missing_key)?;
            (api_key, ProviderRoute::Brave)
        }
        SearchProvider::Perplexity => {
            let perplexity = config.and_then(|config| config.perplexity.as_ref());
            let key = resolve_perplexity_api_key(perplexity, env).ok_or_else(missing_key)?;
            let base_url = resolve_base_url(perplexity, key.source, Some(key.api_key.as_str()));
            let model = request_model(&base_url, &resolve_perplexity_model(perplexity));
            (
                key.api_key,
                ProviderRoute::Perplexity {
                    base_url,
                    model,
                    source: key.source,
                },
            )
        }
        SearchProvider::SerpApi => {
            let serpapi = config.and_then(|config| config.serpapi.as_ref());
            let api_key = resolve_api_key(serpapi, env).ok_or_else(missing_key)?;
            let engine = resolve_engine(serpapi);
            (api_key, ProviderRoute::SerpApi { engine })
        }
    };

    let resolved = ResolvedSearch {
        provider,
        api_key,
        route,
        count: resolve_search_count(None, config),
        timeout: resolve_timeout(config),
        cache_ttl: resolve_cache_ttl(config),
    };

    info!(
        provider = %resolved.provider,
        count = resolved.count,
        timeout_secs = resolved.timeout.as_secs(),
        "Resolved web search route"
    );

    Ok(resolved)
}

/// Like [`resolve_search`], but `Ok(None)` when the tool is disabled.
pub fn resolve_search_if_enabled(
    config: Option<&WebSearchConfig>,
    env: &impl EnvLookup,
) -> Result<Option<ResolvedSearch>, WebSearchError> {
    if config.is_some_and(|config| !config.is_enabled()) {
        debug!("web_search disabled by configuration");
        return Ok(None);
    }
    resolve_search(config, env).map(Some)
}

/// Requested count, else configured `maxResults`, else the default; always
/// within `1..=10`.
pub fn resolve_search_count(requested: Option<u32>, config: Option<&WebSearchConfig>) -> u32 {
    requested
        .or_else(|| config.and_then(|config| config.max_results))
        .unwrap_or(limits::DEFAULT_SEARCH_COUNT)
        .clamp(1, limits::MAX_SEARCH_COUNT)
}

pub fn resolve_timeout(config: Option<&WebSearchConfig>) -> Duration {
    let seconds = config
        .and_then(|config| config.timeout_seconds)
        .unwrap_or(limits::DEFAULT_TIMEOUT_SECONDS)
        .max(1);
    Duration::from_secs(seconds)
}

pub fn resolve_cache_ttl(config: Option<&WebSearchConfig>) -> Duration {
    let minutes = config
        .and_then(|config| config.cache_ttl_minutes)
        .unwrap_or(limits::DEFAULT_CACHE_TTL_MINUTES);
    Duration::from_secs(minutes.saturating_mul(60))
}

/// Validates a freshness filter for `provider`.
///
/// Blank input means "no filter". Only Brave accepts freshness at all.
pub fn freshness_for(
    provider: SearchProvider,
    value: Option<&str>,
) -> Result<Option<String>, WebSearchError> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };

    if !provider.supports_freshness() {
        return Err(WebSearchError::UnsupportedFreshness { provider });
    }

    normalize_freshness(Some(raw))
        .map(Some)
        .ok_or_else(|| WebSearchError::InvalidFreshness(raw.to_string()))
}
