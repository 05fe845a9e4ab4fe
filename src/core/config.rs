//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Upstream auth calls are abandoned after this many seconds unless overridden
pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted auth project
    /// Example: https://abcd.supabase.co
    pub supabase_url: Option<String>,

    /// Public (anon) API key of the hosted auth project
    pub supabase_anon_key: Option<String>,

    /// Public URL of this site, used to build email confirmation links
    pub site_url: String,

    /// Bound on every upstream auth call
    pub auth_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (tests pass a map)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let auth_timeout = lookup("AUTH_TIMEOUT_SECS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_AUTH_TIMEOUT_SECS);

        Self {
            supabase_url: lookup("SUPABASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            supabase_anon_key: lookup("SUPABASE_ANON_KEY").filter(|key| !key.is_empty()),
            site_url: lookup("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| "http://127.0.0.1:3000".to_string()),
            auth_timeout: Duration::from_secs(auth_timeout),
        }
    }

    /// Check if the hosted auth project is configured
    pub fn has_auth_backend(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_anon_key.is_some()
    }

    /// Where the confirmation email sends the user back to
    pub fn callback_url(&self) -> String {
        format!("{}/api/auth/callback", self.site_url)
    }

    /// Session cookies carry `Secure` when the site is served over HTTPS
    pub fn secure_cookies(&self) -> bool {
        self.site_url.starts_with("https://")
    }
}
