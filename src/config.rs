//! Runtime configuration
//!
//! The shift API endpoint is taken from the environment so the same binary
//! can point at a local development server or the real deployment.

use std::env;

/// Endpoint used when SHIFT_API_URL is not set
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Application configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the shift API (e.g. "https://rota.example.com/api")
    pub api_base_url: String,
}

impl Config {
    /// Read configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let api_base_url = env::var("SHIFT_API_URL")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Config { api_base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_override() {
        // Exercise both paths in one test; env vars are process-global
        env::remove_var("SHIFT_API_URL");
        assert_eq!(Config::from_env().api_base_url, DEFAULT_API_BASE_URL);

        env::set_var("SHIFT_API_URL", "http://rota.test/api");
        assert_eq!(Config::from_env().api_base_url, "http://rota.test/api");

        // An empty value counts as unset
        env::set_var("SHIFT_API_URL", "");
        assert_eq!(Config::from_env().api_base_url, DEFAULT_API_BASE_URL);

        env::remove_var("SHIFT_API_URL");
    }
}
