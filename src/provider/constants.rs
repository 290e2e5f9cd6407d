pub mod brave {
    pub const API_KEY_ENV_VAR: &str = "BRAVE_API_KEY";
    pub const DOCS_URL: &str = "https://brave.com/search/api/";
    pub const FRESHNESS_SHORTCUTS: [&str; 4] = ["pd", "pw", "pm", "py"];
}

pub mod perplexity {
    pub const DIRECT_API_BASE: &str = "https://api.perplexity.ai";
    pub const API_KEY_ENV_VAR: &str = "PERPLEXITY_API_KEY";
    pub const DIRECT_KEY_PREFIX: &str = "pplx-";
    pub const DEFAULT_MODEL: &str = "perplexity/sonar-pro";
    pub const VENDOR_MODEL_PREFIX: &str = "perplexity/";
    pub const DOCS_URL: &str = "https://docs.perplexity.ai/";
}

pub mod openrouter {
    pub const API_BASE: &str = "https://openrouter.ai/api/v1";
    pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";
    pub const KEY_PREFIX: &str = "sk-or-v1-";
}

pub mod serpapi {
    pub const API_KEY_ENV_VAR: &str = "SERPAPI_API_KEY";
    pub const DEFAULT_ENGINE: &str = "google";
    pub const DOCS_URL: &str = "https://serpapi.com/manage-api-key";
}

pub mod limits {
    pub const DEFAULT_SEARCH_COUNT: u32 = 5;
    pub const MAX_SEARCH_COUNT: u32 = 10;
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    pub const DEFAULT_CACHE_TTL_MINUTES: u64 = 15;
}
