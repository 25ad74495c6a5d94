//! Auth backend configuration.
//!
//! The Supabase URL and anon key are public values that ship inside the wasm
//! bundle, so they are read at build time with `option_env!`. The server renders
//! with the same values, which keeps hydration consistent.

use crate::core::auth::AuthError;

/// Connection settings for the hosted auth service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Project URL
    /// Example: https://abcdefgh.supabase.co
    pub supabase_url: Option<String>,

    /// Public anon key sent as `apikey` on every auth request
    pub supabase_anon_key: Option<String>,
}

impl Config {
    /// Load the values baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// Build a config from raw values. Empty or whitespace-only values count as unset.
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Self {
        let clean = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Self {
            supabase_url: clean(url).map(|u| u.trim_end_matches('/').to_string()),
            supabase_anon_key: clean(anon_key),
        }
    }

    /// Check if both auth settings are present
    pub fn has_supabase(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_anon_key.is_some()
    }

    /// Get `(url, anon_key)` or the error every auth request reports when unset.
    pub fn require_supabase(&self) -> Result<(&str, &str), AuthError> {
        match (&self.supabase_url, &self.supabase_anon_key) {
            (Some(url), Some(key)) => Ok((url, key)),
            _ => Err(AuthError::NotConfigured),
        }
    }
}
