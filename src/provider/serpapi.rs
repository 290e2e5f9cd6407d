use tracing::debug;

use crate::core::config::{SerpApiConfig, non_blank};
use crate::core::env::EnvLookup;
use crate::provider::constants::serpapi;

/// Trimmed engine from configuration, or `google`. Case is preserved.
pub fn resolve_engine(config: Option<&SerpApiConfig>) -> String {
    let engine = non_blank(config.and_then(|config| config.engine.as_deref()))
        .unwrap_or(serpapi::DEFAULT_ENGINE);
    debug!(engine, "Resolved SerpAPI engine");
    engine.to_string()
}

/// Config key wins over `SERPAPI_API_KEY`. The environment is read on every
/// call.
pub fn resolve_api_key(config: Option<&SerpApiConfig>, env: &impl EnvLookup) -> Option<String> {
    if let Some(api_key) = non_blank(config.and_then(|config| config.api_key.as_deref())) {
        debug!(source = "config", "Resolved SerpAPI API key");
        return Some(api_key.to_string());
    }

    let from_env = env.non_blank(serpapi::API_KEY_ENV_VAR);
    if from_env.is_some() {
        debug!(source = serpapi::API_KEY_ENV_VAR, "Resolved SerpAPI API key");
    }
    from_env
}
