use tracing::debug;

use crate::core::config::{WebSearchConfig, non_blank};
use crate::core::env::EnvLookup;
use crate::provider::constants::brave;

/// Top-level `apiKey` wins over `BRAVE_API_KEY`.
pub fn resolve_brave_api_key(
    config: Option<&WebSearchConfig>,
    env: &impl EnvLookup,
) -> Option<String> {
    if let Some(api_key) = non_blank(config.and_then(|config| config.api_key.as_deref())) {
        debug!(source = "config", "Resolved Brave API key");
        return Some(api_key.to_string());
    }

    env.non_blank(brave::API_KEY_ENV_VAR)
}
