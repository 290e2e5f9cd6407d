//! # web-search-config
//!
//! Runtime configuration resolution for a web-search tool that can route
//! through Brave, Perplexity (directly or via OpenRouter) or SerpAPI.
//!
//! Every resolver is a total function of its arguments and an [`EnvLookup`]
//! snapshot: nothing is cached, and invalid input degrades to a default or to
//! `None` instead of an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use web_search_config::{
//!     KeySource, ProcessEnv, WebSearchConfig, normalize_freshness, resolve_base_url,
//! };
//!
//! let base_url = resolve_base_url(None, KeySource::Config, Some("pplx-123"));
//! assert_eq!(base_url, "https://api.perplexity.ai");
//!
//! assert_eq!(normalize_freshness(Some("PW")).as_deref(), Some("pw"));
//! assert_eq!(normalize_freshness(Some("2024-02-30to2024-03-01")), None);
//!
//! let config = WebSearchConfig::from_json_str(r#"{ "provider": "serpapi" }"#).unwrap();
//! match web_search_config::resolve_search(Some(&config), &ProcessEnv) {
//!     Ok(search) => println!("searching with {}", search.provider),
//!     Err(e) => println!("{}", e.to_payload()),
//! }
//! ```

pub mod core;
pub mod provider;

pub use crate::core::{
    CalendarDate, EnvLookup, FreshnessToken, PerplexityConfig, ProcessEnv, ProviderRoute,
    ResolvedSearch, SerpApiConfig, Shortcut, WebSearchConfig, WebSearchError,
    normalize_freshness, resolve::freshness_for, resolve::resolve_cache_ttl,
    resolve::resolve_search_count, resolve::resolve_timeout, resolve_search,
    resolve_search_if_enabled,
};
pub use provider::{
    KeyShape, KeySource, ResolvedKey, SearchProvider, classify_api_key, request_model,
    resolve_api_key, resolve_base_url, resolve_brave_api_key, resolve_engine,
    resolve_perplexity_api_key, resolve_perplexity_model,
};
