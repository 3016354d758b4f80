//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_FLAVOR_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_FLAVOR_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_FLAVOR_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration for a game run.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Directory for the save store and log file (None = platform config dir)
    pub save_dir: Option<PathBuf>,

    /// Credential for the remote flavor-text service (None = template names)
    pub flavor_api_key: Option<String>,

    /// Model name passed to the flavor-text service
    pub flavor_model: String,

    /// Base URL of the flavor-text service
    pub flavor_endpoint: String,

    /// Upper bound on a single flavor-text request
    pub flavor_timeout: Duration,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_dir: None,
            flavor_api_key: None,
            flavor_model: DEFAULT_FLAVOR_MODEL.to_string(),
            flavor_endpoint: DEFAULT_FLAVOR_ENDPOINT.to_string(),
            flavor_timeout: Duration::from_secs(DEFAULT_FLAVOR_TIMEOUT_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset. An unparseable timeout falls back to
    /// the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let flavor_timeout = get("AURA_FLAVOR_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.flavor_timeout);

        Self {
            save_dir: get("AURA_SAVE_DIR").map(PathBuf::from),
            flavor_api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            flavor_model: get("AURA_FLAVOR_MODEL").unwrap_or(defaults.flavor_model),
            flavor_endpoint: get("AURA_FLAVOR_ENDPOINT").unwrap_or(defaults.flavor_endpoint),
            flavor_timeout,
            log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }

    /// True when a remote flavor-text credential is configured.
    pub fn has_flavor_credential(&self) -> bool {
        self.flavor_api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = GameConfig::from_lookup(|_| None);
        assert_eq!(config, GameConfig::default());
        assert!(!config.has_flavor_credential());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("AURA_SAVE_DIR", "/tmp/auras"),
            ("GEMINI_API_KEY", "secret"),
            ("AURA_FLAVOR_MODEL", "tiny"),
            ("AURA_FLAVOR_ENDPOINT", "http://localhost:9999"),
            ("AURA_FLAVOR_TIMEOUT_SECS", "2"),
            ("RUST_LOG", "debug"),
        ]));
        assert_eq!(config.save_dir, Some(PathBuf::from("/tmp/auras")));
        assert_eq!(config.flavor_api_key.as_deref(), Some("secret"));
        assert_eq!(config.flavor_model, "tiny");
        assert_eq!(config.flavor_endpoint, "http://localhost:9999");
        assert_eq!(config.flavor_timeout, Duration::from_secs(2));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_api_key_fallback_and_blank_values() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "   "),
            ("API_KEY", "legacy"),
            ("AURA_FLAVOR_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.flavor_api_key.as_deref(), Some("legacy"));
        assert_eq!(
            config.flavor_timeout,
            Duration::from_secs(DEFAULT_FLAVOR_TIMEOUT_SECS)
        );
    }
}
