//! Perplexity routing: which credential to present and which endpoint to call.
//!
//! The same Perplexity-compatible request can go to the direct Perplexity API
//! or through OpenRouter. The endpoint is decided by an ordered chain of
//! strategies; the first one with an opinion wins:
//!
//! 1. an explicit `baseUrl` in configuration
//! 2. the environment variable the key came from
//! 3. the shape of a key supplied through configuration
//! 4. OpenRouter, which accepts the widest range of credentials

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::core::config::{PerplexityConfig, non_blank};
use crate::core::env::EnvLookup;
use crate::core::error::WebSearchError;
use crate::provider::constants::{openrouter, perplexity};

/// Issuer guessed from a key's literal prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    Direct,
    OpenRouter,
}

/// How the Perplexity key was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    PerplexityEnv,
    OpenRouterEnv,
    Config,
}

impl KeySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeySource::PerplexityEnv => "perplexity_env",
            KeySource::OpenRouterEnv => "openrouter_env",
            KeySource::Config => "config",
        }
    }
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeySource {
    type Err = WebSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perplexity_env" => Ok(KeySource::PerplexityEnv),
            "openrouter_env" => Ok(KeySource::OpenRouterEnv),
            "config" => Ok(KeySource::Config),
            _ => Err(WebSearchError::UnknownKeySource(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub api_key: String,
    pub source: KeySource,
}

/// Guesses the issuing provider from the key prefix. Case-sensitive.
pub fn classify_api_key(api_key: Option<&str>) -> Option<KeyShape> {
    let api_key = api_key?;
    if api_key.starts_with(perplexity::DIRECT_KEY_PREFIX) {
        Some(KeyShape::Direct)
    } else if api_key.starts_with(openrouter::KEY_PREFIX) {
        Some(KeyShape::OpenRouter)
    } else {
        None
    }
}

struct RouteInputs<'a> {
    config: Option<&'a PerplexityConfig>,
    source: KeySource,
    api_key: Option<&'a str>,
}

type BaseUrlStrategy = fn(&RouteInputs<'_>) -> Option<String>;

const BASE_URL_STRATEGIES: [(&str, BaseUrlStrategy); 4] = [
    ("explicit", explicit_base_url),
    ("key_source", base_url_from_source),
    ("key_shape", base_url_from_key_shape),
    ("fallback", fallback_base_url),
];

fn explicit_base_url(inputs: &RouteInputs<'_>) -> Option<String> {
    inputs
        .config
        .and_then(|config| config.base_url.as_deref())
        .filter(|base_url| !base_url.is_empty())
        .map(str::to_string)
}

fn base_url_from_source(inputs: &RouteInputs<'_>) -> Option<String> {
    match inputs.source {
        KeySource::PerplexityEnv => Some(perplexity::DIRECT_API_BASE.to_string()),
        KeySource::OpenRouterEnv => Some(openrouter::API_BASE.to_string()),
        KeySource::Config => None,
    }
}

fn base_url_from_key_shape(inputs: &RouteInputs<'_>) -> Option<String> {
    match classify_api_key(inputs.api_key) {
        Some(KeyShape::Direct) => Some(perplexity::DIRECT_API_BASE.to_string()),
        Some(KeyShape::OpenRouter) => Some(openrouter::API_BASE.to_string()),
        None => None,
    }
}

fn fallback_base_url(_inputs: &RouteInputs<'_>) -> Option<String> {
    Some(openrouter::API_BASE.to_string())
}

/// Picks the base URL for a Perplexity-compatible client.
pub fn resolve_base_url(
    config: Option<&PerplexityConfig>,
    source: KeySource,
    api_key: Option<&str>,
) -> String {
    let inputs = RouteInputs {
        config,
        source,
        api_key,
    };

    for (strategy, resolve) in BASE_URL_STRATEGIES {
        if let Some(base_url) = resolve(&inputs) {
            debug!(strategy, %source, %base_url, "Resolved Perplexity base URL");
            return base_url;
        }
    }

    openrouter::API_BASE.to_string()
}

/// Config key first, then `PERPLEXITY_API_KEY`, then `OPENROUTER_API_KEY`.
pub fn resolve_perplexity_api_key(
    config: Option<&PerplexityConfig>,
    env: &impl EnvLookup,
) -> Option<ResolvedKey> {
    let from_config = non_blank(config.and_then(|config| config.api_key.as_deref()))
        .map(|api_key| (api_key.to_string(), KeySource::Config));

    let resolved = from_config
        .or_else(|| {
            env.non_blank(perplexity::API_KEY_ENV_VAR)
                .map(|api_key| (api_key, KeySource::PerplexityEnv))
        })
        .or_else(|| {
            env.non_blank(openrouter::API_KEY_ENV_VAR)
                .map(|api_key| (api_key, KeySource::OpenRouterEnv))
        })
        .map(|(api_key, source)| ResolvedKey { api_key, source });

    match &resolved {
        Some(key) => debug!(source = %key.source, "Resolved Perplexity API key"),
        None => debug!("No Perplexity API key configured"),
    }

    resolved
}

pub fn resolve_perplexity_model(config: Option<&PerplexityConfig>) -> String {
    non_blank(config.and_then(|config| config.model.as_deref()))
        .unwrap_or(perplexity::DEFAULT_MODEL)
        .to_string()
}

/// Model name to send to `base_url`. The direct API does not accept
/// OpenRouter-style `perplexity/` vendor prefixes.
pub fn request_model(base_url: &str, model: &str) -> String {
    if is_direct_endpoint(base_url) {
        model
            .strip_prefix(perplexity::VENDOR_MODEL_PREFIX)
            .unwrap_or(model)
            .to_string()
    } else {
        model.to_string()
    }
}

fn is_direct_endpoint(base_url: &str) -> bool {
    base_url.trim().trim_end_matches('/') == perplexity::DIRECT_API_BASE
}
