pub mod config;
pub mod env;
pub mod error;
pub mod freshness;
pub mod resolve;

pub use config::{PerplexityConfig, SerpApiConfig, WebSearchConfig};
pub use env::{EnvLookup, ProcessEnv};
pub use error::WebSearchError;
pub use freshness::{CalendarDate, FreshnessToken, Shortcut, normalize_freshness};
pub use resolve::{ProviderRoute, ResolvedSearch, resolve_search, resolve_search_if_enabled};
