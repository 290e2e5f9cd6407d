//! Environment variable access.
//!
//! Resolvers never call `std::env` directly. They receive an [`EnvLookup`] so
//! that tests can describe the environment as a plain map, and so a resolver's
//! output depends only on its arguments.

use std::collections::HashMap;

/// Read-only view of environment variables.
///
/// Implementations must treat blank values as unset: a variable that is
/// exported as an empty or whitespace-only string carries no key material.
pub trait EnvLookup {
    /// Raw lookup. Callers should prefer [`EnvLookup::non_blank`].
    fn var(&self, name: &str) -> Option<String>;

    /// Trimmed value of `name`, or `None` when unset or blank.
    fn non_blank(&self, name: &str) -> Option<String> {
        self.var(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

/// The real process environment, read at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvLookup for HashMap<&str, &str> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.to_string())
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}
